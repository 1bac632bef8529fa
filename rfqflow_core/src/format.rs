//! Display values for milestone info: dates and rand amounts.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use tracing::debug;

const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateStyle {
    /// `2024/03/15`
    Numeric,
    /// `15 Mar 2024`
    Long,
}

/// Calendar date of a backend timestamp. Offset timestamps keep the date as
/// seen in their own offset.
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.date_naive());
    }

    if let Some(dt) = DATETIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
    {
        return Some(dt.date());
    }

    NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()
}

pub fn format_date(raw: &str, style: DateStyle) -> Option<String> {
    let Some(date) = parse_date(raw) else {
        debug!(value = raw, "unparseable date, leaving it blank");
        return None;
    };

    let pattern = match style {
        DateStyle::Numeric => "%Y/%m/%d",
        DateStyle::Long => "%d %b %Y",
    };

    Some(date.format(pattern).to_string())
}

/// `R 12,500.00`. Non-finite amounts have no display.
pub fn format_rand(amount: f64) -> Option<String> {
    if !amount.is_finite() {
        return None;
    }

    let cents = (amount.abs() * 100.0).round() as u64;
    let whole = group_thousands(cents / 100);
    let sign = if amount < 0.0 && cents > 0 { "-" } else { "" };

    Some(format!("R {}{}.{:02}", sign, whole, cents % 100))
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    grouped
}
