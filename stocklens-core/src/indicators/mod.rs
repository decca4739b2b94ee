//! Concrete indicator implementations.
//!
//! All indicators implement the `Indicator` trait from `components::indicator`
//! and return one nullable value per input record. Pipeline stages in
//! `crate::pipeline` write their output into `IndicatorRecord` fields.

pub mod returns;
pub mod rsi;
pub mod sma;
pub mod stats;
pub mod volatility;

pub use returns::Returns;
pub use rsi::Rsi;
pub use sma::Sma;
pub use volatility::Volatility;

/// Short window of the basic moving average (`ma_short`).
pub const BASIC_SHORT_WINDOW: usize = 7;
/// Long window of the basic moving average (`ma_long`).
pub const BASIC_LONG_WINDOW: usize = 30;
/// Window of the crossover short average (`ma_short_20`).
pub const CROSSOVER_SHORT_WINDOW: usize = 20;
/// Window of the crossover long average (`ma_long_50`).
pub const CROSSOVER_LONG_WINDOW: usize = 50;
pub const RSI_PERIOD: usize = 14;
pub const VOLATILITY_WINDOW: usize = 30;

/// Create synthetic price records from close prices for testing.
///
/// open = prev_close (or close for the first record),
/// high = max(open,close) + 1.0, low = min(open,close) - 1.0, volume = 1000.
#[cfg(test)]
pub fn make_records(closes: &[f64]) -> Vec<crate::domain::PriceRecord> {
    use crate::domain::PriceRecord;
    let base_date = chrono::NaiveDate::from_ymd_opt(2024, 1, 2).unwrap();
    closes
        .iter()
        .enumerate()
        .map(|(i, &close)| {
            let open = if i == 0 { close } else { closes[i - 1] };
            PriceRecord {
                date: base_date + chrono::Duration::days(i as i64),
                open,
                high: open.max(close) + 1.0,
                low: open.min(close) - 1.0,
                close,
                volume: 1000.0,
                adjusted_close: Some(close),
            }
        })
        .collect()
}

/// Build a validated series from close prices for testing.
#[cfg(test)]
pub fn make_series(closes: &[f64]) -> crate::domain::PriceSeries {
    crate::domain::PriceSeries::new(make_records(closes)).unwrap()
}

/// Assert two f64 values are approximately equal (within epsilon).
#[cfg(test)]
pub fn assert_approx(actual: f64, expected: f64, epsilon: f64) {
    assert!(
        (actual - expected).abs() < epsilon,
        "assert_approx failed: actual={actual}, expected={expected}, diff={}, epsilon={epsilon}",
        (actual - expected).abs()
    );
}

/// Default epsilon for indicator tests.
#[cfg(test)]
pub const DEFAULT_EPSILON: f64 = 1e-10;
