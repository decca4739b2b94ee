//! Indicator trait.
//!
//! Indicators are pure functions: price history in, nullable numeric series out.
//! They are computed once over the whole series, trailing-window style.

use crate::domain::PriceRecord;

/// Trait for indicators.
///
/// Indicators take a full price series and produce an output series of the
/// same length. The first `lookback()` values are `None` (warmup), and any
/// later value may also be `None` when the computation is undefined.
///
/// # Look-ahead contamination guard
/// No indicator value at index t may depend on price data from index t+1 or
/// later. Every indicator must pass the truncated-vs-full series test.
pub trait Indicator: Send + Sync {
    /// Human-readable name (e.g., "sma_20", "rsi_14").
    fn name(&self) -> &str;

    /// Number of records needed before the indicator can produce a value.
    fn lookback(&self) -> usize;

    /// Compute the indicator for the entire price series.
    fn compute(&self, prices: &[PriceRecord]) -> Vec<Option<f64>>;
}
