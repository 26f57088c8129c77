use common::catalog::ProductSummary;
use dioxus::prelude::*;

use crate::routes::Route;

#[component]
pub fn ProductCard(product: ProductSummary) -> Element {
    let price = product.price_label();
    rsx! {
        Link {
            class: "x-product-card",
            to: Route::ProductPage { slug: product.slug.clone() },
            div {
                class: "x-product-image",
                if let Some(image_url) = product.image_url.clone() {
                    img { src: "{image_url}", alt: "{product.name}", loading: "lazy" }
                }
            }
            div {
                class: "x-product-info",
                span { class: "x-product-name", "{product.name}" }
                if let Some(dimensions) = product.dimensions.clone() {
                    span { class: "x-product-dimensions", "{dimensions}" }
                }
                span { class: "x-product-price", "{price}" }
            }
        }
    }
}
