//! SummaryRecord: the per-query aggregate handed to downstream consumers.
//!
//! The serialized key names are a wire contract: consumers format and score
//! from them verbatim.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Keys of a populated [`SummaryRecord`], in serialization order.
pub const SUMMARY_KEYS: [&str; 10] = [
    "first_date",
    "last_date",
    "start_price",
    "end_price",
    "min_price",
    "max_price",
    "mean_price",
    "volatility_30d_mean",
    "technical_text",
    "technical_score",
];

/// Scalar aggregates over an indicator series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceStats {
    pub first_date: NaiveDate,
    pub last_date: NaiveDate,
    /// Close of the first record (not the minimum).
    pub start_price: f64,
    /// Close of the last record (not the maximum).
    pub end_price: f64,
    pub min_price: f64,
    pub max_price: f64,
    pub mean_price: f64,
    /// Mean of the non-null 30-day volatility values; `None` if there are none.
    pub volatility_30d_mean: Option<f64>,
}

/// Price aggregates merged with the technical interpretation and score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StockSummary {
    #[serde(flatten)]
    pub stats: PriceStats,
    pub technical_text: String,
    pub technical_score: i8,
}

impl StockSummary {
    pub fn new(stats: PriceStats, technical_text: String, technical_score: i8) -> Self {
        Self {
            stats,
            technical_text,
            technical_score,
        }
    }

    /// Percentage change from start to end close; `None` when the start close is zero.
    pub fn performance_pct(&self) -> Option<f64> {
        let start = self.stats.start_price;
        if start == 0.0 {
            return None;
        }
        Some((self.stats.end_price - start) / start * 100.0)
    }
}

/// Either the explicit empty sentinel (`{}` on the wire) or a full summary.
///
/// `Empty` is distinct from a populated summary whose nullable fields are null.
/// It is a braced variant so that it serializes as an empty map, not `null`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SummaryRecord {
    Populated(StockSummary),
    Empty {},
}

impl Default for SummaryRecord {
    fn default() -> Self {
        Self::empty()
    }
}

impl SummaryRecord {
    pub fn empty() -> Self {
        SummaryRecord::Empty {}
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, SummaryRecord::Empty {})
    }

    pub fn as_summary(&self) -> Option<&StockSummary> {
        match self {
            SummaryRecord::Populated(s) => Some(s),
            SummaryRecord::Empty {} => None,
        }
    }

    pub fn into_summary(self) -> Option<StockSummary> {
        match self {
            SummaryRecord::Populated(s) => Some(s),
            SummaryRecord::Empty {} => None,
        }
    }
}

impl From<StockSummary> for SummaryRecord {
    fn from(summary: StockSummary) -> Self {
        SummaryRecord::Populated(summary)
    }
}
