//! Filter session shared between a category page and its filter panels.

use common::filter_session::FilterSession;
use dioxus::prelude::*;

/// Owned by one category listing; panels read the session and report edits
/// back through the callbacks that change what the grid shows.
#[derive(Clone, Copy)]
pub struct FilterContext {
    pub session: Signal<FilterSession>,
    pub on_apply: Callback<()>,
    pub on_cancel: Callback<()>,
    pub on_clear_all: Callback<()>,
}

/// Where a filter panel is rendered; only the controls differ.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterPanelMode {
    Inline,
    Overlay,
}
