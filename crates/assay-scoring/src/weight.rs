//! Per-item probative weight and the feature products the base metrics use.
//!
//! All products are multiplicative: a single near-zero feature collapses the
//! product. An authentic but procedurally untested item is not strong
//! evidence.

use assay_core::models::EvidenceFeatures;
use assay_core::numeric::clamp01;

/// Probative weight `I·A·M·P·T`, in [0, 1].
pub fn weight(f: &EvidenceFeatures) -> f64 {
    clamp01(f.importance)
        * clamp01(f.authenticity)
        * clamp01(f.methodology)
        * clamp01(f.procedural_testing)
        * clamp01(f.time_proximity)
}

/// An item is eligible when every feature is non-zero.
pub fn is_eligible(f: &EvidenceFeatures) -> bool {
    weight(f) > 0.0
}

/// Custody signal `A·T`: authentic and close in time.
pub fn custody_signal(f: &EvidenceFeatures) -> f64 {
    clamp01(f.authenticity) * clamp01(f.time_proximity)
}

/// Custody process signal `M·P`.
pub fn process_signal(f: &EvidenceFeatures) -> f64 {
    clamp01(f.methodology) * clamp01(f.procedural_testing)
}

/// Credibility signal `I·M·P`.
pub fn credibility_signal(f: &EvidenceFeatures) -> f64 {
    clamp01(f.importance) * clamp01(f.methodology) * clamp01(f.procedural_testing)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn any_zero_feature_zeroes_the_weight() {
        let mut f = EvidenceFeatures::uniform(0.9);
        assert!(weight(&f) > 0.5);
        f.procedural_testing = 0.0;
        assert_eq!(weight(&f), 0.0);
        assert!(!is_eligible(&f));
    }

    #[test]
    fn full_features_weigh_one() {
        let f = EvidenceFeatures::uniform(1.0);
        assert_eq!(weight(&f), 1.0);
        assert_eq!(custody_signal(&f), 1.0);
        assert_eq!(process_signal(&f), 1.0);
        assert_eq!(credibility_signal(&f), 1.0);
    }

    #[test]
    fn out_of_range_features_are_clamped() {
        let f = EvidenceFeatures::uniform(1.5);
        assert_eq!(weight(&f), 1.0);
        let g = EvidenceFeatures::uniform(f64::NAN);
        assert_eq!(weight(&g), 0.0);
    }
}
