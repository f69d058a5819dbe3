//! Rounding helpers shared by the calculators
//!
//! Halves always round toward positive infinity (2.5 -> 3, -2.5 -> -2), the
//! convention the calculator pages display with. Non-finite values pass
//! through unchanged.

/// Round to the nearest whole currency unit
pub fn round_currency(value: f64) -> f64 {
    // f64::round takes halves away from zero; only negative halves differ
    let rounded = value.round();
    if value - rounded == 0.5 {
        rounded + 1.0
    } else {
        rounded
    }
}

/// Round to cents (2 decimals)
pub fn round_cents(value: f64) -> f64 {
    round_to(value, 2)
}

/// Round to a fixed number of decimal places
pub fn round_to(value: f64, decimals: u32) -> f64 {
    let scale = 10f64.powi(decimals as i32);
    round_currency(value * scale) / scale
}
