//! Simple daily return: close[t] / close[t-1] - 1.
//!
//! Undefined at index 0 and wherever the previous close is zero.

use super::stats::finite;
use crate::components::indicator::Indicator;
use crate::domain::PriceRecord;

#[derive(Debug, Clone, Default)]
pub struct Returns;

impl Returns {
    pub fn new() -> Self {
        Self
    }
}

/// Percentage change of consecutive closes, as a fraction.
pub fn pct_change(prices: &[PriceRecord]) -> Vec<Option<f64>> {
    let mut result = vec![None; prices.len()];
    for i in 1..prices.len() {
        let prev = prices[i - 1].close;
        if prev == 0.0 {
            continue;
        }
        result[i] = finite(prices[i].close / prev - 1.0);
    }
    result
}

impl Indicator for Returns {
    fn name(&self) -> &str {
        "return"
    }

    fn lookback(&self) -> usize {
        1
    }

    fn compute(&self, prices: &[PriceRecord]) -> Vec<Option<f64>> {
        pct_change(prices)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::indicators::{assert_approx, make_records, DEFAULT_EPSILON};

    #[test]
    fn first_return_is_null() {
        let r = Returns::new().compute(&make_records(&[10.0, 11.0, 9.9]));
        assert!(r[0].is_none());
        assert_approx(r[1].unwrap(), 0.1, DEFAULT_EPSILON);
        assert_approx(r[2].unwrap(), -0.1, DEFAULT_EPSILON);
    }

    #[test]
    fn constant_series_has_zero_returns() {
        let r = pct_change(&make_records(&[42.5; 5]));
        assert_eq!(r[0], None);
        assert!(r[1..].iter().all(|v| *v == Some(0.0)));
    }

    #[test]
    fn zero_previous_close_is_undefined() {
        let r = pct_change(&make_records(&[0.0, 5.0, 6.0]));
        assert!(r[1].is_none());
        assert_approx(r[2].unwrap(), 0.2, DEFAULT_EPSILON);
    }

    #[test]
    fn empty_and_single() {
        assert!(pct_change(&[]).is_empty());
        assert_eq!(pct_change(&make_records(&[1.0])), vec![None]);
    }
}
