//! Filter panel for a category listing, rendered inline as a sidebar on wide
//! screens and as a full-screen overlay on narrow ones.

use common::filter_criteria::{CriterionValue, Facet};
use common::filter_session::FilterState;
use dioxus::prelude::*;
use dioxus_free_icons::{Icon, icons::md_navigation_icons::MdClose};

use crate::components::filter_components::multi_select::{MultiSelect, SelectOption};
use crate::components::filter_components::price_range_inputs::PriceRangeInputs;
use crate::data_definitions::filter_context::{FilterContext, FilterPanelMode};


#[component]
pub fn FilterPanelBody(mode: FilterPanelMode) -> Element {
    let filter = use_context::<FilterContext>();
    let session = filter.session;

    let color_options = use_memo(move || {
        let s = session.read();
        s.defaults().colors.iter().map(|c| {
            let value = CriterionValue::Color(c.id);
            SelectOption { label: s.defaults().label_for(&value), value, swatch: Some(c.hex.clone()) }
        }).collect::<Vec<_>>()
    });
    let facet_options = use_memo(move || {
        let s = session.read();
        Facet::ALL.iter().filter_map(|facet| {
            let values = s.defaults().facet_values.get(facet)?;
            if values.is_empty() {
                return None;
            }
            let options = values.iter().map(|v| {
                let value = CriterionValue::Facet(*facet, v.clone());
                SelectOption { label: s.defaults().label_for(&value), value, swatch: None }
            }).collect::<Vec<_>>();
            Some((*facet, options))
        }).collect::<Vec<_>>()
    });

    rsx! {
        div {
            class: "x-filter-panel-body",
            PriceRangeInputs {}
            if !color_options.read().is_empty() {
                MultiSelect { label: "Color", options: color_options() }
            }
            for (facet, options) in facet_options() {
                MultiSelect { key: "{facet.column()}", label: "{facet.display_name()}", options }
            }
            FilterPanelActions { mode }
        }
    }
}

#[component]
fn FilterPanelActions(mode: FilterPanelMode) -> Element {
    let filter = use_context::<FilterContext>();
    let session = filter.session;
    let state = session.read().state();
    let can_apply = session.read().can_apply();
    let apply_class = if state == FilterState::Clean { "x-button" } else { "x-button x-button-primary" };

    rsx! {
        div {
            class: "x-filter-actions",
            button {
                class: apply_class,
                disabled: !can_apply,
                onclick: move |_| filter.on_apply.call(()),
                "Apply"
            }
            match mode {
                FilterPanelMode::Overlay => rsx! {
                    button {
                        class: "x-button",
                        onclick: move |_| filter.on_cancel.call(()),
                        "Cancel"
                    }
                },
                FilterPanelMode::Inline if state != FilterState::Clean => rsx! {
                    button {
                        class: "x-button",
                        onclick: move |_| filter.on_cancel.call(()),
                        "Discard changes"
                    }
                },
                FilterPanelMode::Inline => rsx! {},
            }
            button {
                class: "x-button x-button-link",
                onclick: move |_| filter.on_clear_all.call(()),
                "Clear all"
            }
        }
    }
}

#[component]
pub fn FilterSidebar() -> Element {
    rsx! {
        aside {
            class: "x-filter-sidebar",
            h3 { "Filters" }
            FilterPanelBody { mode: FilterPanelMode::Inline }
        }
    }
}

#[component]
pub fn FilterOverlay() -> Element {
    let filter = use_context::<FilterContext>();
    rsx! {
        div {
            class: "x-filter-overlay",
            role: "dialog",
            aria_modal: "true",
            onkeydown: move |event: Event<KeyboardData>| {
                if event.key() == Key::Escape {
                    filter.on_cancel.call(());
                }
            },
            div {
                class: "x-filter-overlay-header",
                h3 { style: "flex: 1;", "Filters" }
                button {
                    class: "x-icon-button",
                    aria_label: "Close filters",
                    onclick: move |_| {
                        filter.on_cancel.call(());
                    },
                    Icon { icon: MdClose, style: "width: 24px; height: 24px;" }
                }
            }
            FilterPanelBody { mode: FilterPanelMode::Overlay }
        }
    }
}
