//! Bounded directional score in `{-2, -1, 0, 1, 2}`.

use serde::{Deserialize, Serialize};

use super::TechnicalSignals;
use crate::domain::IndicatorSeries;

/// Trend (+1/-1 for MA20 above/below MA50) plus momentum (+1 oversold,
/// -1 overbought). An empty series scores 0.
pub fn technical_score(series: &IndicatorSeries) -> i8 {
    TechnicalSignals::latest(series).map_or(0, |s| s.score())
}

/// Coarse reading of a score for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScoreLabel {
    Bullish,
    Neutral,
    Bearish,
}

impl ScoreLabel {
    pub fn from_score(score: i8) -> Self {
        if score >= 2 {
            ScoreLabel::Bullish
        } else if score <= -2 {
            ScoreLabel::Bearish
        } else {
            ScoreLabel::Neutral
        }
    }
}

impl std::fmt::Display for ScoreLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            ScoreLabel::Bullish => "leaning bullish",
            ScoreLabel::Neutral => "neutral",
            ScoreLabel::Bearish => "leaning bearish",
        };
        f.write_str(s)
    }
}

pub fn score_sentence(score: i8) -> String {
    format!(
        "Overall technical score: {score} ({}). Based on moving-average crossovers and RSI.",
        ScoreLabel::from_score(score)
    )
}
