//! CSV directory loader.
//!
//! Each symbol lives in `{data_dir}/{SYMBOL}.csv` with the header
//! `Date,Open,High,Low,Close,Adj Close,Volume` (`Adj Close` may be absent).
//! Rows are sorted by date and duplicate dates dropped before the series is
//! handed to the analysis.

use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use serde::Deserialize;
use tracing::{debug, info};

use stocklens_core::data::{LoadError, PriceLoader};
use stocklens_core::domain::{PriceRecord, PriceSeries, DATE_FORMAT};

/// One CSV row as written by common market data exports.
#[derive(Debug, Deserialize)]
struct CsvRow {
    #[serde(rename = "Date")]
    date: String,
    #[serde(rename = "Open")]
    open: f64,
    #[serde(rename = "High")]
    high: f64,
    #[serde(rename = "Low")]
    low: f64,
    #[serde(rename = "Close")]
    close: f64,
    #[serde(rename = "Adj Close", default)]
    adj_close: Option<f64>,
    #[serde(rename = "Volume")]
    volume: f64,
}

impl CsvRow {
    fn into_record(self, symbol: &str) -> Result<PriceRecord, LoadError> {
        // Tolerate timestamps such as "2024-01-02 00:00:00".
        let day = self.date.split_whitespace().next().unwrap_or("");
        let date = NaiveDate::parse_from_str(day, DATE_FORMAT).map_err(|e| {
            LoadError::Malformed {
                symbol: symbol.to_string(),
                reason: format!("bad date '{}': {e}", self.date),
            }
        })?;
        Ok(PriceRecord {
            date,
            open: self.open,
            high: self.high,
            low: self.low,
            close: self.close,
            volume: self.volume,
            adjusted_close: self.adj_close,
        })
    }
}

/// Loads `{SYMBOL}.csv` files from a directory.
#[derive(Debug, Clone)]
pub struct CsvDirectoryLoader {
    data_dir: PathBuf,
}

impl CsvDirectoryLoader {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn path_for(&self, symbol: &str) -> PathBuf {
        self.data_dir.join(format!("{symbol}.csv"))
    }

    /// File stems of every `*.csv` in the data directory, sorted.
    /// A missing directory has no symbols.
    pub fn list_symbols(&self) -> Result<Vec<String>, LoadError> {
        let entries = match std::fs::read_dir(&self.data_dir) {
            Ok(entries) => entries,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => {
                return Err(LoadError::Io {
                    symbol: String::new(),
                    reason: format!("{}: {e}", self.data_dir.display()),
                })
            }
        };

        let mut symbols: Vec<String> = entries
            .filter_map(Result::ok)
            .map(|entry| entry.path())
            .filter(|path| path.extension().is_some_and(|ext| ext == "csv"))
            .filter_map(|path| path.file_stem().map(|s| s.to_string_lossy().into_owned()))
            .collect();
        symbols.sort();
        Ok(symbols)
    }

    fn read_records(&self, symbol: &str, path: &Path) -> Result<Vec<PriceRecord>, LoadError> {
        let mut reader = csv::Reader::from_path(path).map_err(|e| LoadError::Io {
            symbol: symbol.to_string(),
            reason: e.to_string(),
        })?;

        reader
            .deserialize::<CsvRow>()
            .enumerate()
            .map(|(i, row)| {
                let row = row.map_err(|e| LoadError::Malformed {
                    symbol: symbol.to_string(),
                    reason: format!("row {}: {e}", i + 1),
                })?;
                row.into_record(symbol)
            })
            .collect()
    }
}

impl PriceLoader for CsvDirectoryLoader {
    fn name(&self) -> &str {
        "csv"
    }

    fn load(&self, symbol: &str) -> Result<PriceSeries, LoadError> {
        let path = self.path_for(symbol);
        if !path.is_file() {
            debug!(symbol, path = %path.display(), "no CSV file for symbol");
            return Err(LoadError::not_found(symbol));
        }

        let records = self.read_records(symbol, &path)?;
        let rows = records.len();
        let series = PriceSeries::from_unsorted(records);
        info!(
            symbol,
            rows,
            records = series.len(),
            path = %path.display(),
            "loaded price CSV"
        );
        Ok(series)
    }
}
