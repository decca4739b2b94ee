//! Window statistics shared by the indicators.

/// Arithmetic mean, or `None` for an empty slice.
///
/// Accumulates deviations from the first value, so a constant window yields
/// that constant exactly.
pub fn mean(values: &[f64]) -> Option<f64> {
    let (&first, _) = values.split_first()?;
    let shifted: f64 = values.iter().map(|v| v - first).sum();
    Some(first + shifted / values.len() as f64)
}

/// Sample standard deviation (n - 1 denominator). `None` below two values.
pub fn sample_std(values: &[f64]) -> Option<f64> {
    if values.len() < 2 {
        return None;
    }
    let m = mean(values)?;
    let ss: f64 = values.iter().map(|v| (v - m) * (v - m)).sum();
    Some((ss / (values.len() - 1) as f64).sqrt())
}

/// Apply `f` to each trailing window of exactly `window` values.
///
/// A window yields `None` unless all of its entries are present; there is no
/// partial-window evaluation.
pub fn rolling<F>(values: &[Option<f64>], window: usize, f: F) -> Vec<Option<f64>>
where
    F: Fn(&[f64]) -> Option<f64>,
{
    let mut result = vec![None; values.len()];
    if window == 0 {
        return result;
    }
    let mut buf = Vec::with_capacity(window);
    for i in (window - 1)..values.len() {
        buf.clear();
        buf.extend(values[i + 1 - window..=i].iter().map_while(|v| *v));
        if buf.len() == window {
            result[i] = f(&buf);
        }
    }
    result
}

/// Keep a value only if it is finite.
pub(crate) fn finite(v: f64) -> Option<f64> {
    v.is_finite().then_some(v)
}
