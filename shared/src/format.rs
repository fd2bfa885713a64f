//! Display formatting helpers
//!
//! Locale formatting shared by table rendering and CSV export, so exported
//! values always match what the dashboard displays.

use crate::types::Timestamp;

/// Format a dollar amount as a currency string
///
/// # Examples
///
/// ```
/// use shared::format::format_currency;
///
/// assert_eq!(format_currency(1234.5), "$1,234.50");
/// assert_eq!(format_currency(-12.0), "-$12.00");
/// ```
pub fn format_currency(amount: f64) -> String {
    let sign = if amount < 0.0 { "-" } else { "" };
    let cents = (amount.abs() * 100.0).round() as u64;
    let whole = cents / 100;
    let frac = cents % 100;
    format!("{}${}.{:02}", sign, group_thousands(whole), frac)
}

/// Format an integer count with thousands separators
///
/// # Examples
///
/// ```
/// use shared::format::format_number;
///
/// assert_eq!(format_number(1234567), "1,234,567");
/// assert_eq!(format_number(999), "999");
/// ```
pub fn format_number(value: u64) -> String {
    group_thousands(value)
}

/// Format a ratio as a percentage with one decimal place
///
/// # Examples
///
/// ```
/// use shared::format::format_percent;
///
/// assert_eq!(format_percent(42.25), "42.3%");
/// assert_eq!(format_percent(0.0), "0.0%");
/// ```
pub fn format_percent(value: f64) -> String {
    format!("{:.1}%", value)
}

/// Format a Unix-millisecond timestamp as a display date
///
/// # Examples
///
/// ```
/// use shared::format::format_date;
///
/// // 2024-03-15 00:00:00 UTC
/// assert_eq!(format_date(1_710_460_800_000), "Mar 15, 2024");
/// ```
pub fn format_date(ts: Timestamp) -> String {
    use chrono::{DateTime, Utc};
    match DateTime::<Utc>::from_timestamp_millis(ts) {
        Some(dt) => dt.format("%b %-d, %Y").to_string(),
        None => String::new(),
    }
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    let offset = digits.len() % 3;
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (i + 3 - offset) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}
