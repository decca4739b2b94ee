//! Property tests for the indicator pipeline and the score.
//!
//! Uses proptest to verify:
//! 1. RSI is null everywhere on short series
//! 2. Monotonic rises saturate RSI at 100
//! 3. Constant prices give zero returns, equal averages and a zero score
//! 4. The pipeline is idempotent and keeps alignment
//! 5. The score stays in {-2..=2}
//! 6. Summary extrema bracket the mean

use chrono::NaiveDate;
use proptest::prelude::*;
use stocklens_core::domain::{PriceRecord, PriceSeries};
use stocklens_core::pipeline::add_indicators;
use stocklens_core::signals::technical_score;
use stocklens_core::summary::summarize;

fn series_from_closes(closes: &[f64]) -> PriceSeries {
    let base = NaiveDate::from_ymd_opt(2023, 1, 2).unwrap();
    let records = closes
        .iter()
        .enumerate()
        .map(|(i, &close)| PriceRecord {
            date: base + chrono::Duration::days(i as i64),
            open: close,
            high: close,
            low: close,
            close,
            volume: 1_000.0,
            adjusted_close: None,
        })
        .collect();
    PriceSeries::new(records).unwrap()
}

// ── Strategies (proptest) ────────────────────────────────────────────

fn arb_price() -> impl Strategy<Value = f64> {
    (1.0..1000.0_f64).prop_map(|p| (p * 100.0).round() / 100.0)
}

fn arb_closes(max_len: usize) -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec(arb_price(), 1..max_len)
}

// ── 1. Short series ──────────────────────────────────────────────────

proptest! {
    #[test]
    fn rsi_null_below_fourteen_records(closes in prop::collection::vec(arb_price(), 1..14)) {
        let series = add_indicators(&series_from_closes(&closes));
        prop_assert!(series.iter().all(|r| r.rsi_14.is_none()));
    }
}

// ── 2. Monotonic rise ────────────────────────────────────────────────

proptest! {
    #[test]
    fn strictly_rising_rsi_is_100(
        start in arb_price(),
        steps in prop::collection::vec(0.01..5.0_f64, 14..80),
    ) {
        let mut closes = vec![start];
        for step in &steps {
            let next = closes[closes.len() - 1] + step;
            closes.push(next);
        }
        let series = add_indicators(&series_from_closes(&closes));
        for (i, record) in series.iter().enumerate() {
            if i >= 14 {
                prop_assert_eq!(record.rsi_14, Some(100.0));
            } else {
                prop_assert_eq!(record.rsi_14, None);
            }
        }
    }
}

// ── 3. Constant prices ───────────────────────────────────────────────

proptest! {
    #[test]
    fn constant_prices(price in arb_price(), len in 1usize..120) {
        let series = add_indicators(&series_from_closes(&vec![price; len]));

        prop_assert_eq!(series.records()[0].ret, None);
        for record in series.iter().skip(1) {
            prop_assert_eq!(record.ret, Some(0.0));
        }
        for record in series.iter().skip(49) {
            prop_assert_eq!(record.ma_short_20, Some(price));
            prop_assert_eq!(record.ma_long_50, Some(price));
        }
        // No movement at all: RSI is indeterminate.
        prop_assert!(series.iter().all(|r| r.rsi_14.is_none()));
        prop_assert_eq!(technical_score(&series), 0);
    }
}

// ── 4. Idempotence and alignment ─────────────────────────────────────

proptest! {
    #[test]
    fn pipeline_is_idempotent(closes in arb_closes(150)) {
        let prices = series_from_closes(&closes);
        let first = add_indicators(&prices);
        let second = add_indicators(&prices);
        prop_assert_eq!(&first, &second);

        prop_assert_eq!(first.len(), prices.len());
        for (record, price) in first.iter().zip(prices.iter()) {
            prop_assert_eq!(&record.price, price);
        }
    }
}

// ── 5. Score bounds ──────────────────────────────────────────────────

proptest! {
    #[test]
    fn score_is_bounded(closes in arb_closes(150)) {
        let score = technical_score(&add_indicators(&series_from_closes(&closes)));
        prop_assert!((-2..=2).contains(&score));
    }

    #[test]
    fn rsi_is_within_bounds(closes in arb_closes(150)) {
        let series = add_indicators(&series_from_closes(&closes));
        for rsi in series.iter().filter_map(|r| r.rsi_14) {
            prop_assert!((0.0..=100.0).contains(&rsi));
        }
    }
}

// ── 6. Summary ───────────────────────────────────────────────────────

proptest! {
    #[test]
    fn summary_extrema_bracket_mean(closes in arb_closes(150)) {
        let series = add_indicators(&series_from_closes(&closes));
        let stats = summarize(&series).unwrap();
        prop_assert!(stats.min_price <= stats.mean_price + 1e-9);
        prop_assert!(stats.mean_price <= stats.max_price + 1e-9);
        prop_assert_eq!(stats.start_price, closes[0]);
        prop_assert_eq!(stats.end_price, closes[closes.len() - 1]);
        if closes.len() <= 30 {
            prop_assert_eq!(stats.volatility_30d_mean, None);
        }
    }
}
