//! PriceRecord and PriceSeries: the validated daily input.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::range::DateRange;

/// One trading day for a single instrument.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceRecord {
    pub date: NaiveDate,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: f64,
    pub adjusted_close: Option<f64>,
}

impl PriceRecord {
    /// Returns true if any OHLC field (or a present adjusted close) is not finite.
    pub fn is_void(&self) -> bool {
        !self.open.is_finite()
            || !self.high.is_finite()
            || !self.low.is_finite()
            || !self.close.is_finite()
            || !self.volume.is_finite()
            || self.adjusted_close.is_some_and(|v| !v.is_finite())
    }

    /// Basic OHLCV sanity check: high >= low, high >= open/close, non-negative volume.
    pub fn is_sane(&self) -> bool {
        if self.is_void() {
            return false;
        }
        self.high >= self.low
            && self.high >= self.open
            && self.high >= self.close
            && self.low <= self.open
            && self.low <= self.close
            && self.volume >= 0.0
    }

    /// Adjusted close when the source provides one, otherwise the raw close.
    pub fn adjusted_or_close(&self) -> f64 {
        self.adjusted_close.unwrap_or(self.close)
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SeriesError {
    #[error("dates must be strictly increasing: {previous} is followed by {next}")]
    NotStrictlyIncreasing { previous: NaiveDate, next: NaiveDate },
}

/// Date-ordered sequence of [`PriceRecord`]s with strictly increasing dates.
///
/// Empty is valid and means "no data for this range".
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PriceSeries {
    records: Vec<PriceRecord>,
}

impl PriceSeries {
    /// Build a series, rejecting duplicate or out-of-order dates.
    pub fn new(records: Vec<PriceRecord>) -> Result<Self, SeriesError> {
        for pair in records.windows(2) {
            if pair[1].date <= pair[0].date {
                return Err(SeriesError::NotStrictlyIncreasing {
                    previous: pair[0].date,
                    next: pair[1].date,
                });
            }
        }
        Ok(Self { records })
    }

    /// Sort by date and drop repeated dates, keeping the first occurrence.
    pub fn from_unsorted(mut records: Vec<PriceRecord>) -> Self {
        records.sort_by_key(|r| r.date);
        records.dedup_by_key(|r| r.date);
        Self { records }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[PriceRecord] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PriceRecord> {
        self.records.iter()
    }

    pub fn first(&self) -> Option<&PriceRecord> {
        self.records.first()
    }

    pub fn last(&self) -> Option<&PriceRecord> {
        self.records.last()
    }

    pub fn closes(&self) -> Vec<f64> {
        self.records.iter().map(|r| r.close).collect()
    }

    /// Records whose date falls inside the inclusive range, order preserved.
    pub fn filter(&self, range: &DateRange) -> PriceSeries {
        Self {
            records: self
                .records
                .iter()
                .filter(|r| range.contains(r.date))
                .cloned()
                .collect(),
        }
    }

    /// BLAKE3 digest over dates and OHLCV values, hex encoded.
    ///
    /// Two series with the same fingerprint produce identical indicator output.
    pub fn fingerprint(&self) -> String {
        fingerprint_records(&self.records)
    }

    pub fn into_records(self) -> Vec<PriceRecord> {
        self.records
    }
}

pub(crate) fn fingerprint_records<'a>(records: impl IntoIterator<Item = &'a PriceRecord>) -> String {
    let mut hasher = blake3::Hasher::new();
    for r in records {
        hasher.update(r.date.to_string().as_bytes());
        hasher.update(&r.open.to_le_bytes());
        hasher.update(&r.high.to_le_bytes());
        hasher.update(&r.low.to_le_bytes());
        hasher.update(&r.close.to_le_bytes());
        hasher.update(&r.volume.to_le_bytes());
        match r.adjusted_close {
            Some(v) => hasher.update(&v.to_le_bytes()),
            None => hasher.update(b"-"),
        };
    }
    hasher.finalize().to_hex().to_string()
}

impl<'a> IntoIterator for &'a PriceSeries {
    type Item = &'a PriceRecord;
    type IntoIter = std::slice::Iter<'a, PriceRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
