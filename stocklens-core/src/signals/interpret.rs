//! Human-readable interpretation of the current technical posture.
//!
//! Output format: RSI sentence, a single space, MA sentence. Consumers may
//! display it verbatim.

use super::{RsiZone, TechnicalSignals, TrendSignal};
use crate::domain::IndicatorSeries;

pub const NO_SIGNAL_TEXT: &str = "No technical signal available (no data).";

pub const RSI_UNAVAILABLE_TEXT: &str = "RSI(14) could not be computed over the selected period.";

pub const MA_UNAVAILABLE_TEXT: &str =
    "The 20/50-day moving averages are not available on this sample.";

impl RsiZone {
    pub fn sentence(&self) -> String {
        match self {
            RsiZone::Overbought(v) => format!(
                "RSI(14) is at {v:.1}, in overbought territory (>70), \
                 which suggests a risk of short-term correction."
            ),
            RsiZone::Oversold(v) => format!(
                "RSI(14) is at {v:.1}, in oversold territory (<30), \
                 which may indicate rebound potential."
            ),
            RsiZone::Neutral(v) => format!(
                "RSI(14) is at {v:.1}, indicating neutral momentum \
                 without major buying or selling excess."
            ),
            RsiZone::Unavailable => RSI_UNAVAILABLE_TEXT.to_string(),
        }
    }
}

impl TrendSignal {
    pub fn sentence(&self) -> &'static str {
        match self {
            TrendSignal::Bullish => {
                "The short moving average (20 days) is above the long moving average (50 days), \
                 a signal consistent with an uptrend (bullish crossover)."
            }
            TrendSignal::Bearish => {
                "The short moving average (20 days) is below the long moving average (50 days), \
                 which corresponds to a rather bearish trend signal."
            }
            TrendSignal::Flat => {
                "The 20- and 50-day moving averages are level, \
                 which reflects the absence of a clear trend."
            }
            TrendSignal::Unavailable => MA_UNAVAILABLE_TEXT,
        }
    }
}

impl std::fmt::Display for TechnicalSignals {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.rsi.sentence(), self.trend.sentence())
    }
}

/// Interpret the last record of the series.
pub fn interpret_technical_signals(series: &IndicatorSeries) -> String {
    match TechnicalSignals::latest(series) {
        Some(signals) => signals.to_string(),
        None => NO_SIGNAL_TEXT.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{IndicatorRecord, IndicatorSeries};
    use crate::indicators::make_series;
    use crate::pipeline::add_indicators;

    fn signals(rsi: Option<f64>, short: Option<f64>, long: Option<f64>) -> String {
        let prices = make_series(&[1.0]);
        let mut record = IndicatorRecord::bare(prices.records()[0].clone());
        record.rsi_14 = rsi;
        record.ma_short_20 = short;
        record.ma_long_50 = long;
        TechnicalSignals::from_record(&record).to_string()
    }

    #[test]
    fn empty_series_has_fixed_sentence() {
        assert_eq!(
            interpret_technical_signals(&IndicatorSeries::empty()),
            NO_SIGNAL_TEXT
        );
    }

    #[test]
    fn overbought_names_value_to_one_decimal() {
        let text = signals(Some(75.26), Some(2.0), Some(1.0));
        assert!(text.starts_with("RSI(14) is at 75.3, in overbought territory"));
        assert!(text.contains("bullish crossover"));
    }

    #[test]
    fn oversold_and_bearish() {
        let text = signals(Some(12.0), Some(1.0), Some(2.0));
        assert!(text.starts_with("RSI(14) is at 12.0, in oversold territory"));
        assert!(text.ends_with("rather bearish trend signal."));
    }

    #[test]
    fn thresholds_are_neutral() {
        assert!(signals(Some(70.0), None, None).contains("neutral momentum"));
        assert!(signals(Some(30.0), None, None).contains("neutral momentum"));
    }

    #[test]
    fn unavailable_sentences() {
        let text = signals(None, None, Some(1.0));
        assert_eq!(text, format!("{RSI_UNAVAILABLE_TEXT} {MA_UNAVAILABLE_TEXT}"));
    }

    #[test]
    fn equal_averages_have_no_clear_trend() {
        assert!(signals(Some(50.0), Some(3.0), Some(3.0)).contains("absence of a clear trend"));
    }

    #[test]
    fn rsi_sentence_comes_first_separated_by_one_space() {
        let text = signals(Some(50.0), Some(2.0), Some(1.0));
        let rsi = RsiZone::Neutral(50.0).sentence();
        assert_eq!(text, format!("{rsi} {}", TrendSignal::Bullish.sentence()));
    }

    #[test]
    fn reads_only_the_last_record() {
        // Early RSI would be 100, but only the final record matters.
        let mut closes: Vec<f64> = (0..20).map(|i| 100.0 + i as f64).collect();
        closes.extend((0..20).map(|i| 119.0 - i as f64));
        let series = add_indicators(&make_series(&closes));
        let text = interpret_technical_signals(&series);
        assert!(text.starts_with("RSI(14) is at 0.0, in oversold territory"));
        assert!(text.ends_with(MA_UNAVAILABLE_TEXT));
    }
}
