//! Diminishing-returns combinators.
//!
//! Both functions model repeated independent evidence: each additional
//! signal adds less than the one before, and the total never leaves [0, 1].

use assay_core::numeric::clamp01;

/// Probabilistic OR: `1 − Π(1 − wᵢ)`.
///
/// Weights are clamped to [0, 1]. Empty input yields 0.0. Non-decreasing in
/// every weight, so piling up weak items cannot pass what one strong item
/// would reach on its own plus the independent chance of the rest.
///
/// ```
/// use assay_scoring::noisy_or;
///
/// assert_eq!(noisy_or([0.0; 0]), 0.0);
/// assert_eq!(noisy_or([1.0]), 1.0);
/// assert!((noisy_or([0.7, 0.7]) - 0.91).abs() < 1e-12);
/// ```
pub fn noisy_or(weights: impl IntoIterator<Item = f64>) -> f64 {
    let miss: f64 = weights.into_iter().map(|w| 1.0 - clamp01(w)).product();
    clamp01(1.0 - miss)
}

/// Bounded exponential saturation: `(1 − e^{−kx}) / (1 − e^{−k})`.
///
/// `x` is clamped to [0, 1]. For `k > 0` the curve is strictly increasing and
/// concave with `f(0) = 0` and `f(1) = 1`. A non-positive or non-finite `k`
/// falls back to the linear limit `f(x) = x`.
///
/// ```
/// use assay_scoring::exp_saturation;
///
/// assert_eq!(exp_saturation(0.0, 1.4), 0.0);
/// assert!((exp_saturation(1.0, 1.4) - 1.0).abs() < 1e-12);
/// assert!(exp_saturation(0.5, 1.4) > 0.5);
/// ```
pub fn exp_saturation(x: f64, k: f64) -> f64 {
    let x = clamp01(x);
    if !k.is_finite() || k <= 0.0 {
        return x;
    }
    // 1 − e^{−kx} written as −expm1(−kx) to keep precision for small kx.
    let numerator = -(-k * x).exp_m1();
    let denominator = -(-k).exp_m1();
    clamp01(numerator / denominator)
}
