//! Price loader trait and structured error types.
//!
//! The PriceLoader trait abstracts over data sources (CSV directory,
//! in-memory fixtures, synthetic series) so the analysis never performs
//! I/O itself and tests can swap implementations.

use std::collections::HashMap;

use thiserror::Error;

use crate::domain::{PriceSeries, SeriesError};

/// Structured error types for loading a price series.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LoadError {
    #[error("no price data for symbol '{symbol}'")]
    NotFound { symbol: String },

    #[error("malformed price data for '{symbol}': {reason}")]
    Malformed { symbol: String, reason: String },

    #[error("I/O error reading '{symbol}': {reason}")]
    Io { symbol: String, reason: String },

    #[error("invalid series: {0}")]
    InvalidSeries(#[from] SeriesError),
}

impl LoadError {
    pub fn not_found(symbol: impl Into<String>) -> Self {
        LoadError::NotFound {
            symbol: symbol.into(),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, LoadError::NotFound { .. })
    }
}

/// Source of full daily price histories.
///
/// Implementations must return series sorted ascending by date with
/// duplicate dates removed.
pub trait PriceLoader: Send + Sync {
    /// Human-readable name of this loader.
    fn name(&self) -> &str;

    /// Full history for `symbol`, or `LoadError::NotFound`.
    fn load(&self, symbol: &str) -> Result<PriceSeries, LoadError>;
}

impl<L: PriceLoader + ?Sized> PriceLoader for &L {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn load(&self, symbol: &str) -> Result<PriceSeries, LoadError> {
        (**self).load(symbol)
    }
}

impl<L: PriceLoader + ?Sized> PriceLoader for Box<L> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn load(&self, symbol: &str) -> Result<PriceSeries, LoadError> {
        (**self).load(symbol)
    }
}

/// Loader backed by series held in memory.
#[derive(Debug, Clone, Default)]
pub struct MemoryLoader {
    series: HashMap<String, PriceSeries>,
}

impl MemoryLoader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, symbol: impl Into<String>, series: PriceSeries) {
        self.series.insert(symbol.into(), series);
    }

    pub fn with(mut self, symbol: impl Into<String>, series: PriceSeries) -> Self {
        self.insert(symbol, series);
        self
    }

    /// Known symbols, sorted.
    pub fn symbols(&self) -> Vec<&str> {
        let mut symbols: Vec<&str> = self.series.keys().map(String::as_str).collect();
        symbols.sort_unstable();
        symbols
    }
}

impl PriceLoader for MemoryLoader {
    fn name(&self) -> &str {
        "memory"
    }

    fn load(&self, symbol: &str) -> Result<PriceSeries, LoadError> {
        self.series
            .get(symbol)
            .cloned()
            .ok_or_else(|| LoadError::not_found(symbol))
    }
}
