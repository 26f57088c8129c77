use common::price_input::{parse_price_input, price_input_text, resync_price_text};
use dioxus::prelude::*;
use dioxus_free_icons::{Icon, icons::md_navigation_icons::MdClose};

use crate::data_definitions::filter_context::FilterContext;

#[component]
pub fn PriceRangeInputs() -> Element {
    let filter = use_context::<FilterContext>();
    let mut session = filter.session;
    let price_min = use_memo(move || session.read().draft().price_min);
    let price_max = use_memo(move || session.read().draft().price_max);
    let validation_message = use_memo(move || session.read().validation_message());

    rsx! {
        fieldset {
            class: "x-filter-group",
            legend { "Price" }
            div {
                style: "display: flex; flex-direction: row; gap: 8px; align-items: center;",
                PriceInput {
                    label: "Minimum price",
                    price: price_min(),
                    on_change: move |price| session.write().set_price_min(price),
                }
                span { "–" }
                PriceInput {
                    label: "Maximum price",
                    price: price_max(),
                    on_change: move |price| session.write().set_price_max(price),
                }
            }
            if let Some(message) = validation_message() {
                div {
                    class: "x-validation-message",
                    role: "alert",
                    span { style: "flex: 1;", "{message}" }
                    button {
                        class: "x-icon-button",
                        aria_label: "Dismiss",
                        onclick: move |_| session.write().dismiss_validation_message(),
                        Icon { icon: MdClose, style: "width: 16px; height: 16px;" }
                    }
                }
            }
        }
    }
}

/// Owns the typed text; the draft only ever sees the parsed price.
#[component]
fn PriceInput(label: &'static str, price: ReadSignal<f64>, on_change: Callback<f64>) -> Element {
    let mut text = use_signal(|| price_input_text(*price.peek()));

    // follow cancel and clear all without erasing a half-typed entry
    use_effect(move || {
        let price = price();
        let resynced = resync_price_text(&text.peek(), price);
        if let Some(resynced) = resynced {
            text.set(resynced);
        }
    });

    rsx! {
        input {
            r#type: "text",
            inputmode: "decimal",
            autocomplete: "off",
            aria_label: label,
            class: "x-price-input",
            value: "{text}",
            oninput: move |event: Event<FormData>| {
                let typed = event.value();
                on_change.call(parse_price_input(&typed));
                text.set(typed);
            },
        }
    }
}
