//! StockLens CLI: list, analyze and compare commands.
//!
//! Commands:
//! - `list`: symbols available in the data directory
//! - `analyze`: indicators, summary, interpretation and score for one symbol
//! - `compare`: side-by-side summaries and normalized performance
//!
//! Logs go to stderr; stdout carries only command output.

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use chrono::Local;
use clap::{ArgAction, Args, Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

use stocklens_core::data::{CachedLoader, PriceLoader};
use stocklens_core::domain::DateRange;
use stocklens_core::signals::score_sentence;
use stocklens_runner::config::{AppConfig, DEFAULT_CONFIG_FILE};
use stocklens_runner::export::{export_comparison_csv, export_indicators_csv, write_file};
use stocklens_runner::report::{comparison_markdown, AnalysisReport};
use stocklens_runner::synthetic::years_before;
use stocklens_runner::{compare_symbols, CsvDirectoryLoader, SyntheticLoader};

/// Years of history generated by `--synthetic` when no start date is given.
const SYNTHETIC_YEARS: u32 = 3;

#[derive(Parser)]
#[command(
    name = "stocklens",
    about = "StockLens CLI: technical indicators, summaries and scores for daily prices"
)]
struct Cli {
    /// Path to the TOML config file.
    #[arg(long, global = true, default_value = DEFAULT_CONFIG_FILE)]
    config: PathBuf,

    /// Increase log verbosity (-v info, -vv debug).
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List symbols with a CSV file in the data directory.
    List {
        /// Data directory. Defaults to the configured `data_dir`.
        #[arg(long)]
        data_dir: Option<PathBuf>,
    },
    /// Analyze one symbol over an optional date range.
    Analyze {
        /// Symbol to analyze (e.g., AAPL).
        symbol: String,

        #[command(flatten)]
        source: SourceArgs,

        /// Print the full report as JSON.
        #[arg(long, default_value_t = false)]
        json: bool,

        /// Write the indicator series to this CSV file.
        #[arg(long)]
        export_csv: Option<PathBuf>,

        /// Save the Markdown and JSON report under the configured `output_dir`.
        #[arg(long, default_value_t = false)]
        save: bool,
    },
    /// Compare several symbols over the same date range.
    Compare {
        /// Symbols to compare. Defaults to the configured list.
        symbols: Vec<String>,

        #[command(flatten)]
        source: SourceArgs,

        /// Write every symbol's indicator rows to this CSV file.
        #[arg(long)]
        export_csv: Option<PathBuf>,
    },
}

#[derive(Args)]
struct SourceArgs {
    /// Start date (YYYY-MM-DD), inclusive.
    #[arg(long)]
    start: Option<String>,

    /// End date (YYYY-MM-DD), inclusive.
    #[arg(long)]
    end: Option<String>,

    /// Data directory. Defaults to the configured `data_dir`.
    #[arg(long)]
    data_dir: Option<PathBuf>,

    /// Use generated prices instead of CSV files.
    #[arg(long, default_value_t = false)]
    synthetic: bool,
}

impl SourceArgs {
    fn range(&self) -> Result<DateRange> {
        DateRange::parse(self.start.as_deref(), self.end.as_deref())
            .context("invalid --start/--end")
    }

    fn loader(&self, config: &AppConfig) -> Result<CachedLoader<Box<dyn PriceLoader>>> {
        let inner: Box<dyn PriceLoader> = if self.synthetic {
            let range = self.range()?;
            let end = range.end.unwrap_or_else(|| Local::now().date_naive());
            let start = range.start.unwrap_or_else(|| years_before(end, SYNTHETIC_YEARS));
            info!(%start, %end, "using synthetic prices");
            Box::new(SyntheticLoader::new(start, end))
        } else {
            let dir = self.data_dir.clone().unwrap_or_else(|| config.data_dir.clone());
            info!(data_dir = %dir.display(), "using CSV directory");
            Box::new(CsvDirectoryLoader::new(dir))
        };
        Ok(CachedLoader::with_capacity(inner, config.cache.max_entries))
    }
}

fn init_logging(verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        _ => EnvFilter::new("debug"),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = AppConfig::load(&cli.config)
        .with_context(|| format!("failed to load config {}", cli.config.display()))?;

    match cli.command {
        Commands::List { data_dir } => run_list(&config, data_dir),
        Commands::Analyze {
            symbol,
            source,
            json,
            export_csv,
            save,
        } => run_analyze(&config, &symbol, &source, json, export_csv, save),
        Commands::Compare {
            symbols,
            source,
            export_csv,
        } => run_compare(&config, symbols, &source, export_csv),
    }
}

fn run_list(config: &AppConfig, data_dir: Option<PathBuf>) -> Result<()> {
    let dir = data_dir.unwrap_or_else(|| config.data_dir.clone());
    let symbols = CsvDirectoryLoader::new(&dir).list_symbols()?;
    if symbols.is_empty() {
        println!("No CSV files found in {}", dir.display());
        return Ok(());
    }
    for symbol in symbols {
        println!("{symbol}");
    }
    Ok(())
}

fn run_analyze(
    config: &AppConfig,
    symbol: &str,
    source: &SourceArgs,
    json: bool,
    export_csv: Option<PathBuf>,
    save: bool,
) -> Result<()> {
    let range = source.range()?;
    let loader = source.loader(config)?;
    let (report, series) = AnalysisReport::build(&loader, symbol, &range)
        .with_context(|| format!("failed to analyze {symbol}"))?;

    if let Some(path) = export_csv {
        write_file(&path, &export_indicators_csv(symbol, &series)?)?;
        info!(path = %path.display(), rows = series.len(), "exported indicators");
    }

    if save {
        let md_path = config.output_dir.join(format!("{symbol}_report.md"));
        let json_path = config.output_dir.join(format!("{symbol}_report.json"));
        write_file(&md_path, &report.to_markdown())?;
        write_file(&json_path, &report.to_json()?)?;
        eprintln!("Report saved to: {}", md_path.display());
    }

    if json {
        println!("{}", report.to_json()?);
        return Ok(());
    }

    println!("{}", report.narrative);
    if let Some(summary) = report.summary.as_summary() {
        println!();
        println!("{}", summary.technical_text);
        println!("{}", score_sentence(summary.technical_score));
        if let Some(pct) = summary.performance_pct() {
            println!("Performance over the period: {pct:+.2}%");
        }
    }
    Ok(())
}

fn run_compare(
    config: &AppConfig,
    symbols: Vec<String>,
    source: &SourceArgs,
    export_csv: Option<PathBuf>,
) -> Result<()> {
    let symbols = if symbols.is_empty() {
        config.compare.default_symbols.clone()
    } else {
        symbols
    };
    if symbols.is_empty() {
        bail!("no symbols to compare");
    }

    let range = source.range()?;
    let loader = source.loader(config)?;
    let comparison = compare_symbols(&loader, &symbols, &range);
    if comparison.is_empty() {
        bail!("no data for any of: {}", symbols.join(", "));
    }

    if let Some(path) = export_csv {
        write_file(&path, &export_comparison_csv(&comparison)?)?;
        info!(path = %path.display(), "exported comparison");
    }

    print!("{}", comparison_markdown(&comparison));
    println!();
    println!("Final normalized performance:");
    for (symbol, pct) in comparison.final_performance() {
        println!("  {symbol:<8} {pct:+.2}%");
    }
    Ok(())
}
