//! Wall-clock dates used in revision entries

use chrono::{Datelike, Local, NaiveDate};

/// Format a date the way revision entries carry it: `YYYY/MM/DD`
pub fn format_date(date: NaiveDate) -> String {
    date.format("%Y/%m/%d").to_string()
}

/// Today's local date as `YYYY/MM/DD`
pub fn today() -> String {
    format_date(Local::now().date_naive())
}

/// The current local year
pub fn this_year() -> i32 {
    Local::now().year()
}

/// Everything a template needs besides the revision number.
///
/// Signature and message are taken verbatim; empty strings end up in the
/// rendered block as-is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stamp {
    pub date: NaiveDate,
    pub signature: String,
    pub message: String,
}

impl Stamp {
    pub fn new(date: NaiveDate, signature: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            date,
            signature: signature.into(),
            message: message.into(),
        }
    }

    /// Stamp dated with the local wall clock
    pub fn today(signature: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(Local::now().date_naive(), signature, message)
    }

    /// Entry date as `YYYY/MM/DD`
    pub fn date_text(&self) -> String {
        format_date(self.date)
    }

    pub fn year(&self) -> i32 {
        self.date.year()
    }
}
