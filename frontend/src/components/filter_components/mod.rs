pub(crate) mod filter_panel;
pub(crate) mod price_range_inputs;
pub(crate) mod multi_select;
