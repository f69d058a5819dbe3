//! Display formatting in the Indian numbering system
//!
//! Digits group as 12,34,56,789: the last three together, then pairs. Large
//! amounts are shown in lakhs (1e5, `L`) and crores (1e7, `cr`). Non-finite
//! values render as an empty string.

use crate::projection::rounding::round_currency;

const LAKH: f64 = 1e5;
const CRORE: f64 = 1e7;

/// Group the digits of a non-negative integer string Indian-style
fn group_digits(digits: &str) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
    }

    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups: Vec<&str> = Vec::new();
    let mut end = head.len();
    while end > 0 {
        let start = end.saturating_sub(2);
        groups.push(&head[start..end]);
        end = start;
    }
    groups.reverse();

    format!("{},{}", groups.join(","), tail)
}

/// Group a number with up to three fraction digits, trailing zeros dropped
pub fn group_indian(value: f64) -> String {
    if !value.is_finite() {
        return String::new();
    }

    let sign = if value < 0.0 { "-" } else { "" };
    let text = format!("{:.3}", value.abs());
    let (int_part, frac_part) = text.split_once('.').unwrap_or((text.as_str(), ""));
    let frac = frac_part.trim_end_matches('0');

    if frac.is_empty() {
        format!("{}{}", sign, group_digits(int_part))
    } else {
        format!("{}{}.{}", sign, group_digits(int_part), frac)
    }
}

/// Whole rupees, e.g. `₹12,34,567`
pub fn format_inr(value: f64) -> String {
    if !value.is_finite() {
        return String::new();
    }
    format!("₹{}", group_indian(round_currency(value)))
}

/// Rupees, switching to lakhs from 1,00,000: `₹15.53L`, `₹25L`
pub fn format_lakhs(value: f64) -> String {
    if !value.is_finite() {
        return String::new();
    }
    if value.abs() >= LAKH {
        return format!("₹{}L", scaled(value / LAKH));
    }
    format_inr(value)
}

/// Compact chart-axis label: `2.5cr`, `15L`, `40k`, or the grouped value
pub fn format_axis(value: f64) -> String {
    if !value.is_finite() {
        return String::new();
    }
    let abs = value.abs();
    if abs >= CRORE {
        format!("{}cr", scaled(value / CRORE))
    } else if abs >= LAKH {
        format!("{}L", scaled(value / LAKH))
    } else if abs >= 1e3 {
        format!("{}k", scaled(value / 1e3))
    } else {
        group_indian(value)
    }
}

/// Percentage to one decimal, e.g. `40.0%`
pub fn format_percent(value: f64) -> String {
    if !value.is_finite() {
        return String::new();
    }
    format!("{:.1}%", value)
}

/// Whole multiples are grouped, fractional ones keep 2 decimals
fn scaled(n: f64) -> String {
    if n.fract() == 0.0 {
        group_indian(n)
    } else {
        format!("{:.2}", n)
    }
}
