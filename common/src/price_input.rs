//! Text shown in the price boxes versus the price held by the filter draft.
//!
//! The box keeps whatever the user typed; only the parsed value reaches the
//! draft. Intermediate entries such as `1.` or `-` therefore survive re-renders.

/// Empty or unparsable input becomes NaN, which validation rejects.
pub fn parse_price_input(text: &str) -> f64 {
    text.trim().replace(',', ".").parse::<f64>().unwrap_or(f64::NAN)
}

pub fn price_input_text(price: f64) -> String {
    if price.is_finite() { format!("{price}") } else { String::new() }
}

/// Text the box should switch to when the draft price changed from outside
/// (cancel, clear all). `None` while the typed text already reads as `price`.
pub fn resync_price_text(current: &str, price: f64) -> Option<String> {
    let typed = parse_price_input(current);
    if typed == price || (typed.is_nan() && price.is_nan()) {
        None
    } else {
        Some(price_input_text(price))
    }
}
