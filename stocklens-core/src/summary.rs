//! Scalar aggregates over an indicator series.

use crate::domain::{IndicatorSeries, PriceStats};
use crate::indicators::stats::mean;

/// Reduce a series to its price aggregates. `None` for an empty series.
///
/// `start_price`/`end_price` are the first and last closes; the extrema and
/// mean span the whole series. `volatility_30d_mean` averages the non-null
/// volatility values only and stays `None` when there are none.
pub fn summarize(series: &IndicatorSeries) -> Option<PriceStats> {
    let first = series.first()?;
    let last = series.last()?;
    let closes = series.closes();

    let min_price = closes.iter().copied().fold(f64::INFINITY, f64::min);
    let max_price = closes.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let mean_price = mean(&closes)?;

    let vols: Vec<f64> = series.iter().filter_map(|r| r.volatility_30d).collect();

    Some(PriceStats {
        first_date: first.price.date,
        last_date: last.price.date,
        start_price: first.close(),
        end_price: last.close(),
        min_price,
        max_price,
        mean_price,
        volatility_30d_mean: mean(&vols),
    })
}
