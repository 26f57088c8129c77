pub(crate) mod search_box;
pub(crate) mod search_results_panel;
