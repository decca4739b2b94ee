//! Inclusive, optionally open-ended date bounds.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Clone, PartialEq, Error)]
pub enum RangeError {
    #[error("invalid date '{input}': expected YYYY-MM-DD")]
    InvalidDate { input: String },
}

/// `[start, end]` with either side optional (absent = unbounded).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
}

impl DateRange {
    pub fn new(start: Option<NaiveDate>, end: Option<NaiveDate>) -> Self {
        Self { start, end }
    }

    pub fn unbounded() -> Self {
        Self::default()
    }

    /// Parse optional `YYYY-MM-DD` bounds. Blank input means unbounded.
    pub fn parse(start: Option<&str>, end: Option<&str>) -> Result<Self, RangeError> {
        Ok(Self {
            start: parse_bound(start)?,
            end: parse_bound(end)?,
        })
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start.map_or(true, |s| date >= s) && self.end.map_or(true, |e| date <= e)
    }

    pub fn is_unbounded(&self) -> bool {
        self.start.is_none() && self.end.is_none()
    }
}

fn parse_bound(input: Option<&str>) -> Result<Option<NaiveDate>, RangeError> {
    match input.map(str::trim) {
        None | Some("") => Ok(None),
        Some(s) => NaiveDate::parse_from_str(s, DATE_FORMAT)
            .map(Some)
            .map_err(|_| RangeError::InvalidDate {
                input: s.to_string(),
            }),
    }
}

impl std::fmt::Display for DateRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let start = self.start.map_or_else(|| "..".to_string(), |d| d.to_string());
        let end = self.end.map_or_else(|| "..".to_string(), |d| d.to_string());
        write!(f, "[{start}, {end}]")
    }
}
