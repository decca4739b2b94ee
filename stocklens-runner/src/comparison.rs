//! Multi-symbol comparison.
//!
//! Runs the single-symbol analysis for each requested symbol in parallel and
//! collects the non-empty results in input order. Symbols that fail to load
//! or have no prices in the range are skipped with a warning, never fatal.

use chrono::NaiveDate;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use stocklens_core::analysis::compute;
use stocklens_core::data::PriceLoader;
use stocklens_core::domain::{DateRange, IndicatorSeries, StockSummary};

/// Analysis of one symbol inside a comparison.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonEntry {
    pub symbol: String,
    pub series: IndicatorSeries,
    pub summary: StockSummary,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Comparison {
    pub entries: Vec<ComparisonEntry>,
    /// `(symbol, reason)` for every symbol left out.
    pub skipped: Vec<(String, String)>,
}

/// One point of a per-symbol line.
pub type Point = (NaiveDate, f64);

impl Comparison {
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn symbols(&self) -> Vec<&str> {
        self.entries.iter().map(|e| e.symbol.as_str()).collect()
    }

    pub fn get(&self, symbol: &str) -> Option<&ComparisonEntry> {
        self.entries.iter().find(|e| e.symbol == symbol)
    }

    /// Close rebased to the first close of the range, in percent.
    ///
    /// Symbols whose first close is zero cannot be rebased and are omitted.
    pub fn normalized_performance(&self) -> Vec<(String, Vec<Point>)> {
        self.entries
            .iter()
            .filter_map(|entry| {
                let base = entry.series.first()?.close();
                if base == 0.0 {
                    return None;
                }
                let line = entry
                    .series
                    .iter()
                    .map(|r| (r.price.date, (r.close() / base - 1.0) * 100.0))
                    .collect();
                Some((entry.symbol.clone(), line))
            })
            .collect()
    }

    /// Daily traded volume per symbol.
    pub fn volumes(&self) -> Vec<(String, Vec<Point>)> {
        self.entries
            .iter()
            .map(|entry| {
                let line = entry
                    .series
                    .iter()
                    .map(|r| (r.price.date, r.price.volume))
                    .collect();
                (entry.symbol.clone(), line)
            })
            .collect()
    }

    /// Last normalized performance value per symbol.
    pub fn final_performance(&self) -> Vec<(String, f64)> {
        self.normalized_performance()
            .into_iter()
            .filter_map(|(symbol, line)| line.last().map(|&(_, pct)| (symbol, pct)))
            .collect()
    }
}

enum Outcome {
    Analyzed(ComparisonEntry),
    Skipped(String, String),
}

/// Analyze every symbol over `range`, in parallel, keeping input order.
pub fn compare_symbols<L, S>(loader: &L, symbols: &[S], range: &DateRange) -> Comparison
where
    L: PriceLoader + ?Sized,
    S: AsRef<str> + Sync,
{
    let outcomes: Vec<Outcome> = symbols
        .par_iter()
        .map(|symbol| {
            let symbol = symbol.as_ref();
            match compute(loader, symbol, range) {
                Ok((series, summary)) => match summary.into_summary() {
                    Some(summary) => Outcome::Analyzed(ComparisonEntry {
                        symbol: symbol.to_string(),
                        series,
                        summary,
                    }),
                    None => {
                        warn!(symbol, %range, "no data in range, skipping");
                        Outcome::Skipped(symbol.to_string(), "no data in range".to_string())
                    }
                },
                Err(e) => {
                    warn!(symbol, error = %e, "failed to load, skipping");
                    Outcome::Skipped(symbol.to_string(), e.to_string())
                }
            }
        })
        .collect();

    let mut comparison = Comparison::default();
    for outcome in outcomes {
        match outcome {
            Outcome::Analyzed(entry) => comparison.entries.push(entry),
            Outcome::Skipped(symbol, reason) => comparison.skipped.push((symbol, reason)),
        }
    }
    info!(
        analyzed = comparison.entries.len(),
        skipped = comparison.skipped.len(),
        "comparison complete"
    );
    comparison
}
