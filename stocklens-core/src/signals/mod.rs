//! Point-in-time technical signals read from the last record of a series.
//!
//! Both the interpretation text and the score are derived from the same
//! classification, so they can never disagree about which zone applies.

pub mod interpret;
pub mod score;

pub use interpret::{interpret_technical_signals, NO_SIGNAL_TEXT};
pub use score::{score_sentence, technical_score, ScoreLabel};

use crate::domain::{IndicatorRecord, IndicatorSeries};
use serde::{Deserialize, Serialize};

pub const RSI_OVERBOUGHT: f64 = 70.0;
pub const RSI_OVERSOLD: f64 = 30.0;

/// Momentum zone of RSI(14). The thresholds themselves are neutral.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum RsiZone {
    Overbought(f64),
    Oversold(f64),
    Neutral(f64),
    Unavailable,
}

impl RsiZone {
    pub fn classify(rsi: Option<f64>) -> Self {
        match rsi {
            Some(v) if v > RSI_OVERBOUGHT => RsiZone::Overbought(v),
            Some(v) if v < RSI_OVERSOLD => RsiZone::Oversold(v),
            Some(v) if !v.is_nan() => RsiZone::Neutral(v),
            _ => RsiZone::Unavailable,
        }
    }

    /// Oversold reads as a reversal (+1), overbought as correction risk (-1).
    pub fn contribution(&self) -> i8 {
        match self {
            RsiZone::Oversold(_) => 1,
            RsiZone::Overbought(_) => -1,
            RsiZone::Neutral(_) | RsiZone::Unavailable => 0,
        }
    }
}

/// Ordering of the 20-day vs 50-day moving average.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TrendSignal {
    Bullish,
    Bearish,
    Flat,
    Unavailable,
}

impl TrendSignal {
    pub fn classify(ma_short: Option<f64>, ma_long: Option<f64>) -> Self {
        match (ma_short, ma_long) {
            (Some(s), Some(l)) if s > l => TrendSignal::Bullish,
            (Some(s), Some(l)) if s < l => TrendSignal::Bearish,
            (Some(s), Some(l)) if s == l => TrendSignal::Flat,
            _ => TrendSignal::Unavailable,
        }
    }

    pub fn contribution(&self) -> i8 {
        match self {
            TrendSignal::Bullish => 1,
            TrendSignal::Bearish => -1,
            TrendSignal::Flat | TrendSignal::Unavailable => 0,
        }
    }
}

/// RSI zone and MA crossover of a single record.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TechnicalSignals {
    pub rsi: RsiZone,
    pub trend: TrendSignal,
}

impl TechnicalSignals {
    pub fn from_record(record: &IndicatorRecord) -> Self {
        Self {
            rsi: RsiZone::classify(record.rsi_14),
            trend: TrendSignal::classify(record.ma_short_20, record.ma_long_50),
        }
    }

    /// Signals of the last record; `None` for an empty series.
    pub fn latest(series: &IndicatorSeries) -> Option<Self> {
        series.last().map(Self::from_record)
    }

    /// Trend contribution plus momentum contribution, in `-2..=2`.
    pub fn score(&self) -> i8 {
        self.trend.contribution() + self.rsi.contribution()
    }
}
