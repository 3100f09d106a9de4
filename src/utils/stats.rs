/*
 * Small numeric helpers shared by the metrics and the selector. Empty
 * inputs yield 0.0.
 */

/// Arithmetic mean, 0.0 for an empty input
pub fn mean<I>(values: I) -> f64
where
    I: IntoIterator<Item = f64>,
{
    let (sum, count) = values
        .into_iter()
        .fold((0.0, 0usize), |(sum, count), v| (sum + v, count + 1));
    if count == 0 { 0.0 } else { sum / count as f64 }
}

/// Population variance (divides by n), 0.0 for an empty input
pub fn population_variance(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let m = mean(values.iter().copied());
    mean(values.iter().map(|v| (v - m) * (v - m)))
}

/// `part / whole * 100`, 0.0 when `whole` is zero
pub fn percent(part: f64, whole: f64) -> f64 {
    if whole == 0.0 { 0.0 } else { part / whole * 100.0 }
}
