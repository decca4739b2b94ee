//! The four windowed transforms of the standard pipeline.

use super::IndicatorStage;
use crate::components::indicator::Indicator;
use crate::domain::{IndicatorRecord, PriceRecord};
use crate::indicators::{
    Returns, Rsi, Sma, Volatility, BASIC_LONG_WINDOW, BASIC_SHORT_WINDOW, CROSSOVER_LONG_WINDOW,
    CROSSOVER_SHORT_WINDOW, RSI_PERIOD, VOLATILITY_WINDOW,
};

/// Write a computed column into one field of every record.
fn write_column(
    records: &mut [IndicatorRecord],
    values: Vec<Option<f64>>,
    field: fn(&mut IndicatorRecord) -> &mut Option<f64>,
) {
    debug_assert_eq!(records.len(), values.len());
    for (record, value) in records.iter_mut().zip(values) {
        *field(record) = value;
    }
}

/// Return, 7/30 moving averages and a first-pass 30-day volatility.
///
/// Volatility here is derived from the `return` field this stage just wrote.
#[derive(Debug, Clone)]
pub struct BasicIndicators {
    returns: Returns,
    ma_short: Sma,
    ma_long: Sma,
    volatility: Volatility,
}

impl BasicIndicators {
    pub fn new(window_short: usize, window_long: usize) -> Self {
        Self {
            returns: Returns::new(),
            ma_short: Sma::new(window_short),
            ma_long: Sma::new(window_long),
            volatility: Volatility::new(VOLATILITY_WINDOW),
        }
    }
}

impl Default for BasicIndicators {
    fn default() -> Self {
        Self::new(BASIC_SHORT_WINDOW, BASIC_LONG_WINDOW)
    }
}

impl IndicatorStage for BasicIndicators {
    fn name(&self) -> &str {
        "basic_indicators"
    }

    fn apply(&self, prices: &[PriceRecord], records: &mut [IndicatorRecord]) {
        write_column(records, self.returns.compute(prices), |r| &mut r.ret);
        write_column(records, self.ma_short.compute(prices), |r| &mut r.ma_short);
        write_column(records, self.ma_long.compute(prices), |r| &mut r.ma_long);

        let returns: Vec<Option<f64>> = records.iter().map(|r| r.ret).collect();
        write_column(records, self.volatility.from_returns(&returns), |r| {
            &mut r.volatility_30d
        });
    }
}

/// The 20/50 crossover pair read by the signal interpreter.
#[derive(Debug, Clone)]
pub struct MovingAverages {
    short: Sma,
    long: Sma,
}

impl MovingAverages {
    pub fn new(short_window: usize, long_window: usize) -> Self {
        Self {
            short: Sma::new(short_window),
            long: Sma::new(long_window),
        }
    }
}

impl Default for MovingAverages {
    fn default() -> Self {
        Self::new(CROSSOVER_SHORT_WINDOW, CROSSOVER_LONG_WINDOW)
    }
}

impl IndicatorStage for MovingAverages {
    fn name(&self) -> &str {
        "moving_averages"
    }

    fn apply(&self, prices: &[PriceRecord], records: &mut [IndicatorRecord]) {
        write_column(records, self.short.compute(prices), |r| &mut r.ma_short_20);
        write_column(records, self.long.compute(prices), |r| &mut r.ma_long_50);
    }
}

#[derive(Debug, Clone)]
pub struct RsiStage {
    rsi: Rsi,
}

impl RsiStage {
    pub fn new(period: usize) -> Self {
        Self { rsi: Rsi::new(period) }
    }
}

impl Default for RsiStage {
    fn default() -> Self {
        Self::new(RSI_PERIOD)
    }
}

impl IndicatorStage for RsiStage {
    fn name(&self) -> &str {
        "rsi"
    }

    fn apply(&self, prices: &[PriceRecord], records: &mut [IndicatorRecord]) {
        write_column(records, self.rsi.compute(prices), |r| &mut r.rsi_14);
    }
}

/// Second volatility pass, recomputed from closes.
///
/// Overwrites `volatility_30d` (last writer wins). With the default window the
/// value is identical to the first pass.
#[derive(Debug, Clone)]
pub struct VolatilityStage {
    volatility: Volatility,
}

impl VolatilityStage {
    pub fn new(window: usize) -> Self {
        Self {
            volatility: Volatility::new(window),
        }
    }
}

impl Default for VolatilityStage {
    fn default() -> Self {
        Self::new(VOLATILITY_WINDOW)
    }
}

impl IndicatorStage for VolatilityStage {
    fn name(&self) -> &str {
        "volatility"
    }

    fn apply(&self, prices: &[PriceRecord], records: &mut [IndicatorRecord]) {
        write_column(records, self.volatility.compute(prices), |r| {
            &mut r.volatility_30d
        });
    }
}
