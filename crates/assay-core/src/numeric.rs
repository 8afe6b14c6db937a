//! Numeric primitives shared by every scoring stage.
//!
//! All functions are total: empty inputs, zero denominators and non-finite
//! values resolve to 0.0 (or the supplied default) rather than NaN.

/// Clamp to [0, 1]. NaN and infinities collapse to 0.0.
pub fn clamp01(value: f64) -> f64 {
    if value.is_finite() {
        value.clamp(0.0, 1.0)
    } else {
        0.0
    }
}

/// `numerator / denominator`, or `default` when the quotient is undefined.
pub fn safe_div(numerator: f64, denominator: f64, default: f64) -> f64 {
    if denominator == 0.0 || !denominator.is_finite() || !numerator.is_finite() {
        return default;
    }
    let quotient = numerator / denominator;
    if quotient.is_finite() {
        quotient
    } else {
        default
    }
}

/// Arithmetic mean; 0.0 for an empty slice.
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    safe_div(values.iter().sum::<f64>(), values.len() as f64, 0.0)
}

/// Weighted mean. Negative and non-finite weights count as zero; 0.0 when
/// the total weight is zero or the slices differ in length.
///
/// Weights are scaled by their maximum before accumulating, so the result
/// depends only on their ratios and any finite weights sum without overflow.
pub fn weighted_mean(values: &[f64], weights: &[f64]) -> f64 {
    if values.len() != weights.len() {
        return 0.0;
    }
    let usable = |w: f64| if w.is_finite() { w.max(0.0) } else { 0.0 };
    let scale = weights.iter().map(|&w| usable(w)).fold(0.0, f64::max);
    if scale <= 0.0 {
        return 0.0;
    }
    let mut total = 0.0;
    let mut weight_sum = 0.0;
    for (value, &weight) in values.iter().zip(weights) {
        let w = usable(weight) / scale;
        total += value * w;
        weight_sum += w;
    }
    safe_div(total, weight_sum, 0.0)
}

/// Percentile `q` (0–100) of an ascending slice, linearly interpolated
/// between the two nearest ranks. 0.0 for an empty slice.
pub fn percentile(sorted: &[f64], q: f64) -> f64 {
    match sorted.len() {
        0 => 0.0,
        1 => sorted[0],
        n => {
            let rank = (q.clamp(0.0, 100.0) / 100.0) * (n - 1) as f64;
            let lower = rank.floor() as usize;
            let upper = rank.ceil() as usize;
            let frac = rank - lower as f64;
            sorted[lower] + (sorted[upper] - sorted[lower]) * frac
        }
    }
}

/// Standard logistic `1 / (1 + e^{-x})`.
pub fn logistic(x: f64) -> f64 {
    1.0 / (1.0 + (-x).exp())
}
