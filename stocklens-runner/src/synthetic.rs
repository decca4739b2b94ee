//! Synthetic price loader for demos and tests.
//!
//! Produces a random walk from a starting price of 100.0, seeded from the
//! BLAKE3 hash of the symbol so the same symbol always yields the same
//! series. These prices are clearly fake.

use chrono::{Datelike, NaiveDate, Weekday};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use stocklens_core::data::{LoadError, PriceLoader};
use stocklens_core::domain::{PriceRecord, PriceSeries};

#[derive(Debug, Clone)]
pub struct SyntheticLoader {
    start: NaiveDate,
    end: NaiveDate,
}

impl SyntheticLoader {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    /// `years` of weekdays ending at `end`.
    pub fn trailing_years(end: NaiveDate, years: u32) -> Self {
        Self::new(years_before(end, years), end)
    }
}

/// Same calendar day `years` earlier (Feb 29 falls back to 365-day years).
pub fn years_before(date: NaiveDate, years: u32) -> NaiveDate {
    date.with_year(date.year() - years as i32)
        .unwrap_or(date - chrono::Duration::days(365 * years as i64))
}

impl PriceLoader for SyntheticLoader {
    fn name(&self) -> &str {
        "synthetic"
    }

    fn load(&self, symbol: &str) -> Result<PriceSeries, LoadError> {
        Ok(generate_synthetic_series(symbol, self.start, self.end))
    }
}

/// Weekday-only random walk between `start` and `end` inclusive.
pub fn generate_synthetic_series(symbol: &str, start: NaiveDate, end: NaiveDate) -> PriceSeries {
    let seed: [u8; 32] = *blake3::hash(symbol.as_bytes()).as_bytes();
    let mut rng = StdRng::from_seed(seed);

    let mut records = Vec::new();
    let mut price = 100.0_f64;

    for date in start.iter_days().take_while(|d| *d <= end) {
        if matches!(date.weekday(), Weekday::Sat | Weekday::Sun) {
            continue;
        }

        let daily_return: f64 = rng.gen_range(-0.03..0.03);
        let open = price;
        let close = price * (1.0 + daily_return);
        let high = open.max(close) * (1.0 + rng.gen_range(0.0..0.01));
        let low = open.min(close) * (1.0 - rng.gen_range(0.0..0.01));
        let volume = rng.gen_range(500_000..5_000_000u64) as f64;

        records.push(PriceRecord {
            date,
            open,
            high,
            low,
            close,
            volume,
            adjusted_close: Some(close),
        });
        price = close;
    }

    PriceSeries::from_unsorted(records)
}
