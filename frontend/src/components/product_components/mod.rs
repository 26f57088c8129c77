pub(crate) mod product_card;
pub(crate) mod product_grid;
