use common::catalog::ProductSummary;
use dioxus::prelude::*;

use crate::components::{error_boundary::ComponentErrorDisplay, product_components::product_card::ProductCard, suspend_boundary::LoadingIndicator};

/// Grid over the latest committed listing. `None` while the first response
/// is outstanding.
#[component]
pub fn ProductGrid(products: ReadSignal<Option<Result<Vec<ProductSummary>, ServerFnError>>>, on_retry: Callback<()>) -> Element {
    match &*products.read() {
        None => rsx! { LoadingIndicator {} },
        Some(Err(e)) => rsx! {
            ComponentErrorDisplay {
                error_txt: "{e}",
                button {
                    class: "x-button-secondary",
                    onclick: move |_| on_retry.call(()),
                    "Try again"
                }
            }
        },
        Some(Ok(products)) if products.is_empty() => rsx! {
            div {
                class: "x-empty-message",
                "No tiles match these filters."
            }
        },
        Some(Ok(products)) => rsx! {
            div {
                class: "x-product-grid",
                for product in products.iter().cloned() {
                    ProductCard { key: "{product.id.0}", product }
                }
            }
        },
    }
}
