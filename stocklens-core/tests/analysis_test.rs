//! End-to-end tests of `compute` against an in-memory loader.
//!
//! Covers the reference close series, the summary wire contract, cache
//! transparency and running many analyses in parallel.

use chrono::NaiveDate;
use rayon::prelude::*;
use stocklens_core::analysis::{base_summary, compute};
use stocklens_core::data::{CachedLoader, LoadError, MemoryLoader, PriceLoader};
use stocklens_core::domain::{DateRange, PriceRecord, PriceSeries, SUMMARY_KEYS};
use stocklens_core::narrative::generate_text_summary;

const REFERENCE_CLOSES: [f64; 15] = [
    10.0, 11.0, 9.0, 12.0, 13.0, 11.0, 10.0, 9.0, 8.0, 7.0, 6.0, 5.0, 15.0, 20.0, 21.0,
];

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn series_from_closes(closes: &[f64]) -> PriceSeries {
    let base = date(2024, 1, 2);
    let records = closes
        .iter()
        .enumerate()
        .map(|(i, &close)| PriceRecord {
            date: base + chrono::Duration::days(i as i64),
            open: close,
            high: close + 1.0,
            low: close - 1.0,
            close,
            volume: 10_000.0,
            adjusted_close: Some(close),
        })
        .collect();
    PriceSeries::new(records).unwrap()
}

fn wave(n: usize, phase: f64) -> Vec<f64> {
    (0..n)
        .map(|i| 100.0 + 10.0 * ((i as f64) / 9.0 + phase).sin() + i as f64 * 0.1)
        .collect()
}

fn universe() -> MemoryLoader {
    MemoryLoader::new()
        .with("REF", series_from_closes(&REFERENCE_CLOSES))
        .with("WAVE", series_from_closes(&wave(120, 0.0)))
        .with("SHIFT", series_from_closes(&wave(90, 1.5)))
        .with("FLAT", series_from_closes(&[42.0; 60]))
}

#[test]
fn reference_series_values() {
    let (series, summary) = compute(&universe(), "REF", &DateRange::unbounded()).unwrap();
    assert_eq!(series.len(), 15);

    let records = series.records();
    assert_eq!(records[0].ret, None);
    assert!((records[1].ret.unwrap() - 0.1).abs() < 1e-12);

    // Fourteen closes give only thirteen deltas.
    assert_eq!(records[13].rsi_14, None);
    // Gains 1,3,1,10,5,1 = 21; losses 2,2,1,1,1,1,1,1 = 10.
    let expected = 100.0 - 100.0 / (1.0 + 21.0 / 10.0);
    assert!((records[14].rsi_14.unwrap() - expected).abs() < 1e-10);

    assert!(records.iter().all(|r| r.ma_short_20.is_none()));
    assert!(records.iter().all(|r| r.volatility_30d.is_none()));

    let summary = summary.as_summary().unwrap();
    assert_eq!(summary.stats.first_date, date(2024, 1, 2));
    assert_eq!(summary.stats.last_date, date(2024, 1, 16));
    assert_eq!(summary.stats.start_price, 10.0);
    assert_eq!(summary.stats.end_price, 21.0);
    assert_eq!(summary.stats.min_price, 5.0);
    assert_eq!(summary.stats.max_price, 21.0);
    assert_eq!(summary.stats.volatility_30d_mean, None);
    // RSI ~67.7 is neutral and the averages are unavailable.
    assert_eq!(summary.technical_score, 0);
    assert!(summary.technical_text.contains("neutral momentum"));
}

#[test]
fn populated_summary_has_exactly_the_contract_keys() {
    let (_, summary) = compute(&universe(), "WAVE", &DateRange::unbounded()).unwrap();
    let value = serde_json::to_value(&summary).unwrap();
    let object = value.as_object().unwrap();

    let mut keys: Vec<&str> = object.keys().map(String::as_str).collect();
    keys.sort_unstable();
    let mut expected = SUMMARY_KEYS.to_vec();
    expected.sort_unstable();
    assert_eq!(keys, expected);
    assert!(object["technical_score"].is_i64());
    assert!(object["volatility_30d_mean"].is_f64());
}

#[test]
fn empty_range_serializes_as_empty_pair() {
    let range = DateRange::new(Some(date(1990, 1, 1)), Some(date(1990, 12, 31)));
    let (series, summary) = compute(&universe(), "WAVE", &range).unwrap();
    assert_eq!(serde_json::to_string(&series).unwrap(), "[]");
    assert_eq!(serde_json::to_string(&summary).unwrap(), "{}");
    assert_eq!(
        generate_text_summary("WAVE", &summary),
        "No data available for WAVE over the selected period."
    );
}

#[test]
fn not_found_is_propagated() {
    let err = compute(&universe(), "MISSING", &DateRange::unbounded()).unwrap_err();
    assert!(matches!(err, LoadError::NotFound { ref symbol } if symbol == "MISSING"));
    assert!(base_summary(&universe(), "MISSING", &DateRange::unbounded()).is_err());
}

#[test]
fn constant_prices_score_zero() {
    let (series, summary) = compute(&universe(), "FLAT", &DateRange::unbounded()).unwrap();
    let last = series.last().unwrap();
    assert_eq!(last.ma_short_20, Some(42.0));
    assert_eq!(last.ma_long_50, Some(42.0));
    assert_eq!(last.rsi_14, None);
    let summary = summary.as_summary().unwrap();
    assert_eq!(summary.technical_score, 0);
    assert_eq!(summary.stats.volatility_30d_mean, Some(0.0));
}

#[test]
fn cached_results_equal_uncached() {
    let loader = universe();
    let cached = CachedLoader::new(loader.clone());
    let range = DateRange::new(Some(date(2024, 2, 1)), None);

    for symbol in ["REF", "WAVE", "SHIFT", "FLAT"] {
        let direct = compute(&loader, symbol, &range).unwrap();
        let first = compute(&cached, symbol, &range).unwrap();
        let second = compute(&cached, symbol, &range).unwrap();
        assert_eq!(direct, first, "{symbol}");
        assert_eq!(first, second, "{symbol}");
    }

    let stats = cached.stats();
    assert_eq!(stats.misses, 4);
    assert_eq!(stats.hits, 4);
    assert_eq!(
        cached.load("WAVE").unwrap().fingerprint(),
        loader.load("WAVE").unwrap().fingerprint()
    );
}

#[test]
fn parallel_runs_match_sequential() {
    let loader = CachedLoader::new(universe());
    let symbols = ["REF", "WAVE", "SHIFT", "FLAT"];
    let range = DateRange::unbounded();

    let sequential: Vec<_> = symbols
        .iter()
        .map(|s| compute(&loader, s, &range).unwrap())
        .collect();

    let (loader_ref, range_ref) = (&loader, &range);
    let threaded: Vec<_> = std::thread::scope(|scope| {
        let handles: Vec<_> = symbols
            .iter()
            .map(|s| scope.spawn(move || compute(loader_ref, s, range_ref).unwrap()))
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    let pooled: Vec<_> = (0..32)
        .into_par_iter()
        .map(|i| compute(&loader, symbols[i % symbols.len()], &range).unwrap())
        .collect();

    assert_eq!(sequential, threaded);
    for (i, result) in pooled.iter().enumerate() {
        assert_eq!(result, &sequential[i % symbols.len()]);
    }
}
