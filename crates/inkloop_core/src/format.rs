//! Display formatting for currency and percentages.
//!
//! Amounts use the en-IN digit grouping (last three digits, then pairs) with a
//! rupee prefix and no decimals.

use crate::error::MetricResult;

/// Shown wherever a derived value cannot be computed
pub const NOT_AVAILABLE: &str = "N/A";

pub const CURRENCY_GLYPH: &str = "₹";

/// Input to [`format_currency`]: either an amount or raw text from malformed data
#[derive(Debug, Clone, PartialEq)]
pub enum CurrencyValue {
    Amount(f64),
    Text(String),
}

impl From<f64> for CurrencyValue {
    fn from(value: f64) -> Self {
        CurrencyValue::Amount(value)
    }
}

impl From<u32> for CurrencyValue {
    fn from(value: u32) -> Self {
        CurrencyValue::Amount(f64::from(value))
    }
}

impl From<i64> for CurrencyValue {
    fn from(value: i64) -> Self {
        CurrencyValue::Amount(value as f64)
    }
}

impl From<&str> for CurrencyValue {
    fn from(value: &str) -> Self {
        CurrencyValue::Text(value.to_string())
    }
}

impl From<String> for CurrencyValue {
    fn from(value: String) -> Self {
        CurrencyValue::Text(value)
    }
}

/// Format a currency value, e.g. `331000.0` -> `₹3,31,000`.
///
/// Text input is returned unchanged. Non-finite amounts render as [`NOT_AVAILABLE`].
pub fn format_currency(value: impl Into<CurrencyValue>) -> String {
    match value.into() {
        CurrencyValue::Text(text) => text,
        CurrencyValue::Amount(amount) if !amount.is_finite() => NOT_AVAILABLE.to_string(),
        CurrencyValue::Amount(amount) => {
            let rounded = amount.round();
            let grouped = group_indian(rounded.abs() as u64);
            if rounded < 0.0 {
                format!("-{CURRENCY_GLYPH}{grouped}")
            } else {
                format!("{CURRENCY_GLYPH}{grouped}")
            }
        }
    }
}

/// en-IN grouping: `1234567` -> `12,34,567`
fn group_indian(value: u64) -> String {
    let digits = value.to_string();
    if digits.len() <= 3 {
        return digits;
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

/// Format a 0-100 percentage with at most one decimal: `44.7` -> `44.7%`, `85.0` -> `85%`
pub fn format_percent(value: f64) -> String {
    if !value.is_finite() {
        return NOT_AVAILABLE.to_string();
    }
    format!("{}%", trim_one_decimal(value))
}

/// Trend badge text: `12.3` -> `+12.3%`, `-4.0` -> `-4%`
pub fn format_signed_percent(value: f64) -> String {
    if !value.is_finite() {
        return NOT_AVAILABLE.to_string();
    }
    let sign = if value > 0.0 { "+" } else { "" };
    format!("{sign}{}%", trim_one_decimal(value))
}

/// Compact axis label: `45000` -> `45k`, `67500` -> `67.5k`
pub fn format_thousands(value: f64) -> String {
    format!("{}k", trim_one_decimal(value / 1000.0))
}

/// Render a derived currency value, or the sentinel when it is not computable
pub fn currency_or_na(value: &MetricResult) -> String {
    match value {
        Ok(amount) => format_currency(*amount),
        Err(_) => NOT_AVAILABLE.to_string(),
    }
}

/// Render a derived percentage, or the sentinel when it is not computable
pub fn percent_or_na(value: &MetricResult) -> String {
    match value {
        Ok(pct) => format_percent(*pct),
        Err(_) => NOT_AVAILABLE.to_string(),
    }
}

fn trim_one_decimal(value: f64) -> String {
    let rounded = (value * 10.0).round() / 10.0;
    // -0.0 would print as "-0"
    let rounded = if rounded == 0.0 { 0.0 } else { rounded };
    if rounded.fract() == 0.0 {
        format!("{rounded:.0}")
    } else {
        format!("{rounded:.1}")
    }
}
