//! StockLens Runner: data loading, configuration, comparison and reporting.
//!
//! This crate builds on `stocklens-core` to provide:
//! - A CSV directory loader and a deterministic synthetic loader
//! - TOML application configuration
//! - Parallel multi-symbol comparison
//! - CSV/JSON export and Markdown reports

pub mod comparison;
pub mod config;
pub mod data_loader;
pub mod export;
pub mod report;
pub mod synthetic;

pub use comparison::{compare_symbols, Comparison, ComparisonEntry};
pub use config::{AppConfig, ConfigError};
pub use data_loader::CsvDirectoryLoader;
pub use export::{export_comparison_csv, export_indicators_csv, export_indicators_json};
pub use report::{comparison_markdown, AnalysisReport};
pub use synthetic::SyntheticLoader;
