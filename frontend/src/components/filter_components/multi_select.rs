//! Multi-select control rendering its selected values as removable chips.
//!
//! Chips sit inside the toggle that opens the option list, so a click on a
//! chip's delete icon would bubble into the toggle and reopen the list. The
//! delete handler stops propagation before that happens; the routing rules
//! live in `common::chip_events`.

use common::chip_events::{ClickTarget, DropdownState, MultiSelectClick, handle_chip_delete};
use common::filter_criteria::CriterionValue;
use dioxus::prelude::*;
use dioxus_free_icons::{Icon, icons::md_navigation_icons::{MdArrowDropDown, MdCancel}};

use crate::data_definitions::filter_context::FilterContext;


/// One option in the list: the value, its label and an optional swatch.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectOption {
    pub value: CriterionValue,
    pub label: String,
    pub swatch: Option<String>,
}

#[component]
pub fn MultiSelect(label: String, options: Vec<SelectOption>) -> Element {
    let filter = use_context::<FilterContext>();
    let session = filter.session;
    let mut dropdown = use_signal(DropdownState::default);

    let selected = options.iter().filter(|o| session.read().draft().contains(&o.value)).cloned().collect::<Vec<_>>();
    let is_open = dropdown.read().open;

    rsx! {
        fieldset {
            class: "x-filter-group",
            legend { "{label}" }
            div {
                class: "x-multi-select-toggle",
                role: "button",
                aria_expanded: "{is_open}",
                onclick: move |_| dropdown.write().toggle(),
                if selected.is_empty() {
                    span { style: "color: #6B7280;", "Any" }
                }
                for option in selected.iter().cloned() {
                    Chip { key: "{option.label}", option }
                }
                div { style: "flex: 1;" }
                Icon { icon: MdArrowDropDown, style: "width: 20px; height: 20px; flex-shrink: 0;" }
            }
            if is_open {
                ul {
                    class: "x-multi-select-options",
                    for option in options.iter().cloned() {
                        li {
                            key: "{option.label}",
                            OptionRow { option }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn OptionRow(option: SelectOption) -> Element {
    let filter = use_context::<FilterContext>();
    let mut session = filter.session;
    let value = option.value.clone();
    let checked = session.read().draft().contains(&option.value);
    rsx! {
        label {
            class: "x-multi-select-option",
            input {
                r#type: "checkbox",
                checked,
                onchange: move |_| session.write().toggle_value(value.clone()),
            }
            if let Some(swatch) = option.swatch.clone() {
                span { class: "x-swatch", style: "background-color: {swatch};" }
            }
            "{option.label}"
        }
    }
}

#[component]
fn Chip(option: SelectOption) -> Element {
    let filter = use_context::<FilterContext>();
    let mut session = filter.session;
    let value = option.value.clone();
    rsx! {
        span {
            class: "x-chip",
            if let Some(swatch) = option.swatch.clone() {
                span { class: "x-swatch", style: "background-color: {swatch};" }
            }
            "{option.label}"
            button {
                class: "x-chip-delete",
                aria_label: "Remove {option.label}",
                onclick: move |event: Event<MouseData>| {
                    let mut click = MultiSelectClick::on(ClickTarget::ChipDelete(value.clone()));
                    handle_chip_delete(&mut click, &mut session.write());
                    // the toggle around this chip must never see the click
                    if click.is_propagation_stopped() {
                        event.stop_propagation();
                    }
                    if click.is_default_prevented() {
                        event.prevent_default();
                    }
                },
                Icon { icon: MdCancel, style: "width: 16px; height: 16px;" }
            }
        }
    }
}
