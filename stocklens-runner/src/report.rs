//! Single-symbol analysis report with JSON and Markdown renderings.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use stocklens_core::analysis::base_summary;
use stocklens_core::data::{LoadError, PriceLoader};
use stocklens_core::domain::{DateRange, IndicatorSeries, SummaryRecord};
use stocklens_core::signals::{score_sentence, ScoreLabel};

use crate::comparison::Comparison;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub symbol: String,
    pub range: DateRange,
    /// BLAKE3 fingerprint of the analyzed price rows.
    pub dataset_hash: String,
    pub record_count: usize,
    pub summary: SummaryRecord,
    pub narrative: String,
    /// `None` when the range held no data.
    pub score_label: Option<ScoreLabel>,
}

impl AnalysisReport {
    /// Load, analyze and describe `symbol` over `range`.
    ///
    /// Returns the report together with the indicator series it summarizes.
    pub fn build<L: PriceLoader + ?Sized>(
        loader: &L,
        symbol: &str,
        range: &DateRange,
    ) -> Result<(Self, IndicatorSeries), LoadError> {
        let base = base_summary(loader, symbol, range)?;
        let report = Self {
            symbol: symbol.to_string(),
            range: *range,
            dataset_hash: base.series.fingerprint(),
            record_count: base.series.len(),
            score_label: base
                .summary
                .as_summary()
                .map(|s| ScoreLabel::from_score(s.technical_score)),
            summary: base.summary,
            narrative: base.text,
        };
        Ok((report, base.series))
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("failed to serialize AnalysisReport to JSON")
    }

    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("failed to deserialize AnalysisReport from JSON")
    }

    /// Human-readable Markdown rendering.
    pub fn to_markdown(&self) -> String {
        let mut md = String::with_capacity(1024);

        md.push_str(&format!("# Analysis Report: {}\n\n", self.symbol));

        md.push_str("## Metadata\n\n");
        md.push_str("| Field | Value |\n");
        md.push_str("| --- | --- |\n");
        md.push_str(&format!("| Symbol | {} |\n", self.symbol));
        md.push_str(&format!("| Requested Range | {} |\n", self.range));
        md.push_str(&format!("| Records | {} |\n", self.record_count));
        md.push_str(&format!("| Dataset Hash | {} |\n", self.dataset_hash));
        md.push('\n');

        md.push_str("## Summary\n\n");
        md.push_str(&self.narrative);
        md.push_str("\n\n");

        let Some(summary) = self.summary.as_summary() else {
            return md;
        };
        let s = &summary.stats;

        md.push_str("| Metric | Value |\n");
        md.push_str("| --- | --- |\n");
        md.push_str(&format!("| Period | {} to {} |\n", s.first_date, s.last_date));
        md.push_str(&format!("| Start Price | {:.2} |\n", s.start_price));
        md.push_str(&format!("| End Price | {:.2} |\n", s.end_price));
        if let Some(pct) = summary.performance_pct() {
            md.push_str(&format!("| Performance | {pct:+.2}% |\n"));
        }
        md.push_str(&format!("| Min / Max | {:.2} / {:.2} |\n", s.min_price, s.max_price));
        md.push_str(&format!("| Mean Price | {:.2} |\n", s.mean_price));
        match s.volatility_30d_mean {
            Some(v) => md.push_str(&format!("| Mean 30d Volatility | {v:.4} |\n")),
            None => md.push_str("| Mean 30d Volatility | n/a |\n"),
        }
        md.push('\n');

        md.push_str("## Technical Signals\n\n");
        md.push_str(&summary.technical_text);
        md.push_str("\n\n");
        md.push_str(&score_sentence(summary.technical_score));
        md.push('\n');

        md
    }
}

/// Markdown table comparing several symbols side by side.
pub fn comparison_markdown(comparison: &Comparison) -> String {
    let mut md = String::with_capacity(1024);

    md.push_str("# Comparison\n\n");
    md.push_str("| Symbol | Period | Start | End | Performance | Mean 30d Vol | Score |\n");
    md.push_str("| --- | --- | --- | --- | --- | --- | --- |\n");
    for entry in &comparison.entries {
        let s = &entry.summary.stats;
        let perf = entry
            .summary
            .performance_pct()
            .map_or_else(|| "n/a".to_string(), |p| format!("{p:+.2}%"));
        let vol = s
            .volatility_30d_mean
            .map_or_else(|| "n/a".to_string(), |v| format!("{v:.4}"));
        md.push_str(&format!(
            "| {} | {} to {} | {:.2} | {:.2} | {} | {} | {} ({}) |\n",
            entry.symbol,
            s.first_date,
            s.last_date,
            s.start_price,
            s.end_price,
            perf,
            vol,
            entry.summary.technical_score,
            ScoreLabel::from_score(entry.summary.technical_score),
        ));
    }

    if !comparison.skipped.is_empty() {
        md.push_str("\n## Skipped\n\n");
        for (symbol, reason) in &comparison.skipped {
            md.push_str(&format!("- {symbol}: {reason}\n"));
        }
    }

    md
}
