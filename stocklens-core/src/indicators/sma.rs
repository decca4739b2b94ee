//! Simple Moving Average (SMA).
//!
//! Trailing mean of close prices over a fixed window.
//! Lookback: period - 1 (first value at index period-1). Windows are never
//! evaluated partially.

use super::stats::{finite, mean, rolling};
use crate::components::indicator::Indicator;
use crate::domain::PriceRecord;

#[derive(Debug, Clone)]
pub struct Sma {
    period: usize,
    name: String,
}

impl Sma {
    pub fn new(period: usize) -> Self {
        assert!(period >= 1, "SMA period must be >= 1");
        Self {
            period,
            name: format!("sma_{period}"),
        }
    }

    pub fn period(&self) -> usize {
        self.period
    }
}

impl Indicator for Sma {
    fn name(&self) -> &str {
        &self.name
    }

    fn lookback(&self) -> usize {
        self.period.saturating_sub(1)
    }

    fn compute(&self, prices: &[PriceRecord]) -> Vec<Option<f64>> {
        let closes: Vec<Option<f64>> = prices.iter().map(|p| finite(p.close)).collect();
        rolling(&closes, self.period, mean)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::indicators::{assert_approx, make_records, DEFAULT_EPSILON};

    #[test]
    fn sma_5_basic() {
        let prices = make_records(&[10.0, 11.0, 12.0, 13.0, 14.0, 15.0, 16.0]);
        let result = Sma::new(5).compute(&prices);

        assert_eq!(result.len(), 7);
        for (i, v) in result.iter().enumerate().take(4) {
            assert!(v.is_none(), "expected None at index {i}");
        }
        // SMA[4] = mean(10,11,12,13,14) = 12.0
        assert_approx(result[4].unwrap(), 12.0, DEFAULT_EPSILON);
        assert_approx(result[5].unwrap(), 13.0, DEFAULT_EPSILON);
        assert_approx(result[6].unwrap(), 14.0, DEFAULT_EPSILON);
    }

    #[test]
    fn sma_1_is_close() {
        let prices = make_records(&[100.0, 200.0, 300.0]);
        let result = Sma::new(1).compute(&prices);
        assert_eq!(result, vec![Some(100.0), Some(200.0), Some(300.0)]);
    }

    #[test]
    fn sma_nan_close_poisons_its_windows() {
        let mut prices = make_records(&[10.0, 11.0, 12.0, 13.0, 14.0, 15.0]);
        prices[2].close = f64::NAN;
        let result = Sma::new(3).compute(&prices);
        assert!(result[2].is_none());
        assert!(result[3].is_none());
        assert!(result[4].is_none());
        assert_approx(result[5].unwrap(), 14.0, DEFAULT_EPSILON);
    }

    #[test]
    fn sma_lookback() {
        assert_eq!(Sma::new(20).lookback(), 19);
        assert_eq!(Sma::new(1).lookback(), 0);
    }

    #[test]
    fn sma_too_few_records() {
        let prices = make_records(&[10.0, 11.0]);
        assert!(Sma::new(5).compute(&prices).iter().all(Option::is_none));
    }
}
