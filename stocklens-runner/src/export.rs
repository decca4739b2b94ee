//! CSV and JSON export of indicator series and comparisons.
//!
//! CSV columns follow the indicator record field names; null values are
//! written as empty cells. The comparison export concatenates every symbol's
//! rows with a leading `ticker` column.
//!
//! Numbers are written with Rust's shortest round-trip formatting.

use std::path::Path;

use anyhow::{Context, Result};
use stocklens_core::domain::{IndicatorRecord, IndicatorSeries};

use crate::comparison::Comparison;

pub const INDICATOR_COLUMNS: [&str; 14] = [
    "date",
    "open",
    "high",
    "low",
    "close",
    "adjusted_close",
    "volume",
    "return",
    "ma_short",
    "ma_long",
    "volatility_30d",
    "ma_short_20",
    "ma_long_50",
    "rsi_14",
];

fn cell(value: Option<f64>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

fn row(record: &IndicatorRecord) -> Vec<String> {
    let p = &record.price;
    vec![
        p.date.to_string(),
        p.open.to_string(),
        p.high.to_string(),
        p.low.to_string(),
        p.close.to_string(),
        cell(p.adjusted_close),
        p.volume.to_string(),
        cell(record.ret),
        cell(record.ma_short),
        cell(record.ma_long),
        cell(record.volatility_30d),
        cell(record.ma_short_20),
        cell(record.ma_long_50),
        cell(record.rsi_14),
    ]
}

// ─── CSV export ─────────────────────────────────────────────────────

/// Export one symbol's indicator series as CSV.
pub fn export_indicators_csv(symbol: &str, series: &IndicatorSeries) -> Result<String> {
    let mut wtr = csv::Writer::from_writer(vec![]);
    wtr.write_record(INDICATOR_COLUMNS)?;
    for record in series {
        wtr.write_record(row(record))
            .with_context(|| format!("failed to write CSV row for {symbol}"))?;
    }
    let data = wtr.into_inner().context("failed to flush CSV writer")?;
    String::from_utf8(data).context("CSV output is not valid UTF-8")
}

/// Export every symbol of a comparison as one CSV table.
pub fn export_comparison_csv(comparison: &Comparison) -> Result<String> {
    let mut wtr = csv::Writer::from_writer(vec![]);
    let header: Vec<&str> = std::iter::once("ticker")
        .chain(INDICATOR_COLUMNS.iter().copied())
        .collect();
    wtr.write_record(&header)?;
    for entry in &comparison.entries {
        for record in &entry.series {
            let mut fields = vec![entry.symbol.clone()];
            fields.extend(row(record));
            wtr.write_record(&fields)?;
        }
    }
    let data = wtr.into_inner().context("failed to flush CSV writer")?;
    String::from_utf8(data).context("CSV output is not valid UTF-8")
}

// ─── JSON export ────────────────────────────────────────────────────

/// Serialize an indicator series to pretty JSON (nulls kept as `null`).
pub fn export_indicators_json(series: &IndicatorSeries) -> Result<String> {
    serde_json::to_string_pretty(series).context("failed to serialize indicator series to JSON")
}

/// Write `contents` to `path`, creating parent directories.
pub fn write_file(path: &Path, contents: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create directory: {}", parent.display()))?;
    }
    std::fs::write(path, contents)
        .with_context(|| format!("failed to write {}", path.display()))
}
