//! StockLens Core: price data model, technical indicators, summaries and scores.
//!
//! This crate turns a daily price history into:
//! - an indicator series (returns, moving averages, volatility, RSI) aligned 1:1 with the prices
//! - a summary record of price aggregates
//! - a short technical interpretation and a bounded score in `{-2..=2}`
//!
//! It performs no I/O. Prices come from a caller-supplied [`data::PriceLoader`],
//! optionally wrapped in a caller-owned [`data::CachedLoader`].

pub mod analysis;
pub mod components;
pub mod data;
pub mod domain;
pub mod indicators;
pub mod narrative;
pub mod pipeline;
pub mod signals;
pub mod summary;

pub use analysis::{analyze_series, base_summary, compute, BaseSummary};
pub use data::{CachedLoader, LoadError, MemoryLoader, PriceLoader};
pub use domain::{
    DateRange, IndicatorRecord, IndicatorSeries, PriceRecord, PriceSeries, PriceStats,
    StockSummary, SummaryRecord,
};
pub use narrative::generate_text_summary;
pub use pipeline::{add_indicators, IndicatorPipeline};
pub use signals::{interpret_technical_signals, technical_score, ScoreLabel};
pub use summary::summarize;
