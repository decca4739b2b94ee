//! Rolling volatility: sample standard deviation of daily returns.
//!
//! Returns are undefined at index 0, so a window of N returns first fills at
//! index N (N + 1 prices).

use super::returns::pct_change;
use super::stats::{rolling, sample_std};
use crate::components::indicator::Indicator;
use crate::domain::PriceRecord;

#[derive(Debug, Clone)]
pub struct Volatility {
    window: usize,
    name: String,
}

impl Volatility {
    pub fn new(window: usize) -> Self {
        assert!(window >= 1, "volatility window must be >= 1");
        Self {
            window,
            name: format!("volatility_{window}d"),
        }
    }

    /// Rolling sample std over an already-derived return column.
    pub fn from_returns(&self, returns: &[Option<f64>]) -> Vec<Option<f64>> {
        rolling(returns, self.window, sample_std)
    }
}

impl Indicator for Volatility {
    fn name(&self) -> &str {
        &self.name
    }

    fn lookback(&self) -> usize {
        self.window
    }

    fn compute(&self, prices: &[PriceRecord]) -> Vec<Option<f64>> {
        self.from_returns(&pct_change(prices))
    }
}
