//! Relative Strength Index (RSI) with simple (non-exponential) averaging.
//!
//! delta[t] = close[t] - close[t-1]; gain = max(delta, 0); loss = max(-delta, 0).
//! avg_gain / avg_loss are trailing simple means over `period` deltas.
//! RSI = 100 - 100 / (1 + avg_gain / avg_loss)
//! Lookback: period (delta is undefined at index 0).
//! Edge cases: avg_loss == 0 with gains → 100; no movement at all → None.

use super::stats::{finite, mean, rolling};
use crate::components::indicator::Indicator;
use crate::domain::PriceRecord;

#[derive(Debug, Clone)]
pub struct Rsi {
    period: usize,
    name: String,
}

impl Rsi {
    pub fn new(period: usize) -> Self {
        assert!(period >= 1, "RSI period must be >= 1");
        Self {
            period,
            name: format!("rsi_{period}"),
        }
    }

    /// Trailing average gain and loss per index.
    pub fn averages(&self, prices: &[PriceRecord]) -> (Vec<Option<f64>>, Vec<Option<f64>>) {
        let n = prices.len();
        let mut gains = vec![None; n];
        let mut losses = vec![None; n];
        for i in 1..n {
            let Some(delta) = finite(prices[i].close - prices[i - 1].close) else {
                continue;
            };
            gains[i] = Some(delta.max(0.0));
            losses[i] = Some((-delta).max(0.0));
        }
        (
            rolling(&gains, self.period, mean),
            rolling(&losses, self.period, mean),
        )
    }
}

impl Indicator for Rsi {
    fn name(&self) -> &str {
        &self.name
    }

    fn lookback(&self) -> usize {
        self.period
    }

    fn compute(&self, prices: &[PriceRecord]) -> Vec<Option<f64>> {
        let (avg_gain, avg_loss) = self.averages(prices);
        avg_gain
            .into_iter()
            .zip(avg_loss)
            .map(|(g, l)| match (g, l) {
                (Some(g), Some(l)) => compute_rsi(g, l),
                _ => None,
            })
            .collect()
    }
}

/// RSI from averaged gain/loss. The zero-loss cases are explicit branches:
/// x/0 saturates to 100, 0/0 is indeterminate.
pub fn compute_rsi(avg_gain: f64, avg_loss: f64) -> Option<f64> {
    if avg_loss == 0.0 {
        if avg_gain == 0.0 {
            None
        } else {
            Some(100.0)
        }
    } else {
        finite(100.0 - 100.0 / (1.0 + avg_gain / avg_loss))
    }
}
