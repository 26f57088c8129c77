//! Tunables for search-as-you-type.

/// Quiet period after the last keystroke before a lookup is dispatched.
pub const SEARCH_DEBOUNCE_WINDOW_MS: u64 = 300;

/// Shorter terms (in characters, after trimming) never reach the backend.
pub const SEARCH_MIN_TERM_LENGTH: usize = 2;

pub const SEARCH_PRODUCT_LIMIT: usize = 8;
pub const SEARCH_CATEGORY_LIMIT: usize = 3;
