//! Single-symbol analysis entry points.
//!
//! `compute` is the one operation downstream consumers call: load, filter to
//! the date range, run the indicator pipeline, then summarize, interpret and
//! score the result. An empty filtered range is not an error; it yields an
//! empty series and an empty summary record.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::data::{LoadError, PriceLoader};
use crate::domain::{DateRange, IndicatorSeries, PriceSeries, StockSummary, SummaryRecord};
use crate::narrative::generate_text_summary;
use crate::pipeline::IndicatorPipeline;
use crate::signals::{interpret_technical_signals, technical_score};
use crate::summary::summarize;

pub const NO_DATA_FOR_PERIOD_TEXT: &str = "No data available for this period.";

/// Indicators and summary for an already-filtered price series.
pub fn analyze_series(prices: &PriceSeries) -> (IndicatorSeries, SummaryRecord) {
    analyze_with(&IndicatorPipeline::standard(), prices)
}

/// Same as [`analyze_series`] with a caller-supplied pipeline.
pub fn analyze_with(
    pipeline: &IndicatorPipeline,
    prices: &PriceSeries,
) -> (IndicatorSeries, SummaryRecord) {
    if prices.is_empty() {
        return (IndicatorSeries::empty(), SummaryRecord::empty());
    }

    let series = pipeline.run(prices);
    let Some(stats) = summarize(&series) else {
        return (series, SummaryRecord::empty());
    };
    let text = interpret_technical_signals(&series);
    let score = technical_score(&series);
    (series, StockSummary::new(stats, text, score).into())
}

/// Load `symbol`, restrict it to `range` and analyze it.
///
/// Loader errors (including `NotFound`) propagate unchanged.
pub fn compute<L: PriceLoader + ?Sized>(
    loader: &L,
    symbol: &str,
    range: &DateRange,
) -> Result<(IndicatorSeries, SummaryRecord), LoadError> {
    let history = loader.load(symbol)?;
    let prices = history.filter(range);
    if prices.is_empty() {
        debug!(symbol, %range, available = history.len(), "no prices in range");
        return Ok((IndicatorSeries::empty(), SummaryRecord::empty()));
    }

    debug!(symbol, %range, records = prices.len(), "computing indicators");
    Ok(analyze_series(&prices))
}

/// Series plus its narrative paragraph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BaseSummary {
    pub series: IndicatorSeries,
    pub text: String,
    pub summary: SummaryRecord,
}

pub fn base_summary<L: PriceLoader + ?Sized>(
    loader: &L,
    symbol: &str,
    range: &DateRange,
) -> Result<BaseSummary, LoadError> {
    let (series, summary) = compute(loader, symbol, range)?;
    let text = if summary.is_empty() {
        NO_DATA_FOR_PERIOD_TEXT.to_string()
    } else {
        generate_text_summary(symbol, &summary)
    };
    Ok(BaseSummary {
        series,
        text,
        summary,
    })
}
