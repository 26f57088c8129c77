//! Dropdown listing the products and categories matching the search term.

use common::catalog::{CategorySummary, ProductSummary};
use common::search_result::SearchSelection;
use dioxus::prelude::*;

use crate::components::{search_components::search_box::SearchBoxState, suspend_boundary::LoadingIndicator};

#[component]
pub fn SearchResultsPanel() -> Element {
    let state = use_context::<SearchBoxState>();
    let search = state.search.read();
    let results = search.results().clone();
    let loading = search.is_loading();
    drop(search);

    rsx! {
        // click outside closes the panel but keeps the term
        div {
            style: "position: fixed; inset: 0; z-index: 998;",
            onclick: move |_| state.on_close.call(()),
        }
        div {
            id: "x-search-results-panel",
            style: "
                position: absolute;
                top: 48px;
                left: 0px;
                right: 0px;
                background: white;
                border: 1px solid rgba(0,0,0,0.2);
                border-radius: 10px;
                box-shadow: 0 8px 24px rgba(0,0,0,0.12);
                padding: 8px;
                max-height: calc(100vh - 120px);
                overflow-y: auto;
                z-index: 999;
            ",
            if loading {
                LoadingIndicator {}
            } else if results.is_empty() {
                div { class: "x-search-empty", "No matching tiles or categories." }
            } else {
                if !results.categories.is_empty() {
                    h3 { class: "x-search-section-title", "Categories" }
                    ul {
                        for category in results.categories.iter().cloned() {
                            li {
                                key: "category-{category.id.0}",
                                CategoryResultRow { category }
                            }
                        }
                    }
                }
                if !results.products.is_empty() {
                    h3 { class: "x-search-section-title", "Products" }
                    ul {
                        for product in results.products.iter().cloned() {
                            li {
                                key: "product-{product.id.0}",
                                ProductResultRow { product }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn CategoryResultRow(category: CategorySummary) -> Element {
    let state = use_context::<SearchBoxState>();
    let selection = SearchSelection::from(&category);
    rsx! {
        button {
            class: "x-search-result-row",
            onclick: move |_| state.on_select.call(selection.clone()),
            "{category.name}"
        }
    }
}

#[component]
fn ProductResultRow(product: ProductSummary) -> Element {
    let state = use_context::<SearchBoxState>();
    let selection = SearchSelection::from(&product);
    let subtitle = [product.category.as_ref().map(|c| c.name.clone()), product.dimensions.clone()]
        .into_iter()
        .flatten()
        .collect::<Vec<_>>()
        .join(" · ");
    rsx! {
        button {
            class: "x-search-result-row",
            onclick: move |_| state.on_select.call(selection.clone()),
            if let Some(image_url) = product.image_url.clone() {
                img { src: "{image_url}", alt: "", style: "width: 40px; height: 40px; object-fit: cover; border-radius: 4px;" }
            }
            div {
                style: "display: flex; flex-direction: column; flex: 1; min-width: 0; text-align: left;",
                span { style: "font-weight: 500; overflow: hidden; text-overflow: ellipsis; white-space: nowrap;", "{product.name}" }
                if !subtitle.is_empty() {
                    span { style: "font-size: 13px; color: #6B7280;", "{subtitle}" }
                }
            }
            span { style: "font-weight: 500; color: #111827;", "{product.price_label()}" }
        }
    }
}
