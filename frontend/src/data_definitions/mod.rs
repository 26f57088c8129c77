pub(crate) mod filter_context;
