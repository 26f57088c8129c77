use common::catalog::{ProductDetail, format_price};
use dioxus::prelude::*;

use crate::api::catalog_api::get_product;
use crate::components::{error_boundary::ComponentErrorDisplay, suspend_boundary::SuspendWrapper};
use crate::routes::Route;


#[component]
pub fn ProductPage(slug: ReadSignal<String>) -> Element {
    rsx! {
        SuspendWrapper {
            ProductDetailView { slug }
        }
    }
}

#[component]
fn ProductDetailView(slug: ReadSignal<String>) -> Element {
    let product = use_resource(move || get_product(slug.read().clone())).suspend()?.cloned();
    let product = match product {
        Err(e) => return rsx! {
            Title { "TileHouse - Not found" }
            ComponentErrorDisplay { error_txt: format!("{:#}", e) }
        },
        Ok(p) => p,
    };
    rsx! {
        Title { "TileHouse - {product.summary.name}" }
        ProductDetailBody { product }
    }
}

#[component]
fn ProductDetailBody(product: ProductDetail) -> Element {
    let summary = &product.summary;
    let price = format_price(summary.price);
    let attributes = [
        ("Dimensions", summary.dimensions.clone()),
        ("Finish", product.finish.clone()),
        ("Material", product.material.clone()),
        ("Color", product.color.as_ref().map(|c| c.name.clone())),
        ("In stock", product.stock.map(|s| s.to_string())),
    ];

    rsx! {
        div {
            class: "x-product-detail",
            div {
                class: "x-product-image x-product-image-large",
                if let Some(image_url) = summary.image_url.clone() {
                    img { src: "{image_url}", alt: "{summary.name}" }
                }
            }
            div {
                style: "display: flex; flex-direction: column; gap: 12px; flex: 1;",
                if let Some(category) = summary.category.clone() {
                    Link {
                        class: "x-breadcrumb",
                        to: Route::CategoryPage { slug: category.slug.clone() },
                        "{category.name}"
                    }
                }
                h1 { style: "font-size: 32px; font-weight: 500;", "{summary.name}" }
                span { class: "x-product-price", style: "font-size: 24px;", "{price}" }
                if let Some(description) = product.description.clone() {
                    p { style: "color: #374151; line-height: 1.6;", "{description}" }
                }
                dl {
                    class: "x-attribute-list",
                    for (name, value) in attributes.into_iter().filter_map(|(n, v)| Some((n, v?))) {
                        div {
                            key: "{name}",
                            dt { "{name}" }
                            dd { "{value}" }
                        }
                    }
                }
            }
        }
    }
}
