//! Mean aggregation over possibly-empty data.

/// Arithmetic mean, or `None` for empty input.
///
/// Aggregates over an empty cohort are "unavailable", never 0 or NaN.
#[must_use]
pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

/// Mean of the present values, or `None` if none are present.
///
/// Used for optional fields like market cap, where some cohort members may
/// lack a value without being excluded.
#[must_use]
pub fn mean_present(values: impl IntoIterator<Item = Option<f64>>) -> Option<f64> {
    let (sum, count) = values
        .into_iter()
        .flatten()
        .fold((0.0, 0usize), |(sum, count), v| (sum + v, count + 1));

    (count > 0).then(|| sum / count as f64)
}
