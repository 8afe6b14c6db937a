use assay_core::numeric::{clamp01, mean, percentile, weighted_mean};
use proptest::prelude::*;

fn bounds(values: &[f64]) -> (f64, f64) {
    values
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| (lo.min(v), hi.max(v)))
}

proptest! {
    #[test]
    fn clamp01_always_lands_in_unit_interval(x in any::<f64>()) {
        let c = clamp01(x);
        prop_assert!((0.0..=1.0).contains(&c));
    }

    #[test]
    fn mean_stays_within_input_range(values in prop::collection::vec(0.0..=100.0f64, 1..20)) {
        let (lo, hi) = bounds(&values);
        let m = mean(&values);
        prop_assert!(m >= lo - 1e-9 && m <= hi + 1e-9);
    }

    #[test]
    fn weighted_mean_stays_within_input_range(
        pairs in prop::collection::vec((0.0..=100.0f64, 0.0..=1e308f64), 1..20),
    ) {
        let (values, weights): (Vec<f64>, Vec<f64>) = pairs.into_iter().unzip();
        let m = weighted_mean(&values, &weights);
        prop_assert!(m.is_finite());
        if weights.iter().any(|&w| w > 0.0) {
            let (lo, hi) = bounds(&values);
            prop_assert!(m >= lo - 1e-9 && m <= hi + 1e-9, "{} not in [{}, {}]", m, lo, hi);
        } else {
            prop_assert_eq!(m, 0.0);
        }
    }

    #[test]
    fn weighted_mean_ignores_weight_scale(
        pairs in prop::collection::vec((0.0..=100.0f64, 0.01..=10.0f64), 1..20),
        scale in 1e-3..1e300f64,
    ) {
        let (values, weights): (Vec<f64>, Vec<f64>) = pairs.into_iter().unzip();
        let scaled: Vec<f64> = weights.iter().map(|w| w * scale).collect();
        let a = weighted_mean(&values, &weights);
        let b = weighted_mean(&values, &scaled);
        prop_assert!((a - b).abs() < 1e-6, "{} vs {}", a, b);
    }

    #[test]
    fn percentile_is_monotone_in_q(
        mut values in prop::collection::vec(-1e6..1e6f64, 1..50),
        q1 in 0.0..=100.0f64,
        q2 in 0.0..=100.0f64,
    ) {
        values.sort_by(f64::total_cmp);
        let (lo_q, hi_q) = if q1 <= q2 { (q1, q2) } else { (q2, q1) };
        let lo = percentile(&values, lo_q);
        let hi = percentile(&values, hi_q);
        prop_assert!(lo <= hi + 1e-6);
        prop_assert!(lo >= values[0] - 1e-6 && hi <= values[values.len() - 1] + 1e-6);
    }
}
