//! Date helpers

use std::fmt::Write;

use chrono::{Local, NaiveDate};

/// Used when a configured format cannot be rendered
const FALLBACK_FORMAT: &str = "%Y-%m-%d";

/// Today's date on the local clock
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Long, human-readable form of a date using a strftime `format`
/// (e.g. "March 9, 2024" for `"%B %-d, %Y"`).
///
/// A malformed format falls back to ISO `YYYY-MM-DD`.
pub fn to_long_string(date: NaiveDate, format: &str) -> String {
    let mut label = String::new();
    if write!(label, "{}", date.format(format)).is_err() {
        return date.format(FALLBACK_FORMAT).to_string();
    }
    label
}
