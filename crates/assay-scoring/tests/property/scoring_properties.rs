use proptest::prelude::*;

use assay_core::models::{
    Axis, Claim, ClaimFeatures, EvidenceFeatures, EvidenceItem, ScoreReadyDocument,
};
use assay_scoring::belief::belief;
use assay_scoring::weight::weight;
use assay_scoring::{exp_saturation, noisy_or, ScoringEngine};

const MODALITIES: [&str; 4] = ["document", "image", "log", "testimony"];

fn features() -> impl Strategy<Value = EvidenceFeatures> {
    (0.0..=1.0f64, 0.0..=1.0f64, 0.0..=1.0f64, 0.0..=1.0f64, 0.0..=1.0f64).prop_map(
        |(i, a, m, p, t)| EvidenceFeatures {
            importance: i,
            authenticity: a,
            methodology: m,
            procedural_testing: p,
            time_proximity: t,
        },
    )
}

fn evidence_item(index: usize) -> impl Strategy<Value = EvidenceItem> {
    (features(), 0usize..3, 0usize..MODALITIES.len()).prop_map(move |(f, origin, modality)| {
        EvidenceItem::new(
            format!("e{index}"),
            format!("o{origin}"),
            [MODALITIES[modality]],
            f,
        )
    })
}

fn claim(index: usize, evidence_count: usize) -> impl Strategy<Value = Claim> {
    (
        prop::collection::vec(0..evidence_count.max(1), 0..4),
        0.0..5.0f64,
        0.0..=1.0f64,
        (0.0..=1.0f64, 0.0..=1.0f64, 0.0..=1.0f64),
    )
        .prop_map(move |(refs, gravity, threshold, (coh, conf, comp))| {
            Claim::new(format!("c{index}"))
                .with_evidence(refs.into_iter().map(|r| format!("e{r}")))
                .with_gravity(gravity)
                .with_threshold(threshold)
                .with_features(ClaimFeatures {
                    coherence: coh,
                    confidence_discipline: conf,
                    compliance_mapping: comp,
                })
        })
}

fn document() -> impl Strategy<Value = ScoreReadyDocument> {
    (1usize..6, 0usize..5).prop_flat_map(|(evidence_count, claim_count)| {
        let evidence: Vec<_> = (0..evidence_count).map(evidence_item).collect();
        let claims: Vec<_> = (0..claim_count).map(|i| claim(i, evidence_count)).collect();
        (evidence, claims).prop_map(|(evidence_items, claims)| ScoreReadyDocument {
            doc_id: "prop".to_string(),
            evidence_items,
            claims,
            warnings: vec![],
        })
    })
}

proptest! {
    #[test]
    fn weight_stays_in_unit_interval(f in features()) {
        let w = weight(&f);
        prop_assert!((0.0..=1.0).contains(&w));
        prop_assert!(w <= f.importance.min(f.authenticity).min(f.methodology) + 1e-12);
    }

    #[test]
    fn noisy_or_never_decreases_when_an_item_is_added(
        ws in prop::collection::vec(0.0..=1.0f64, 0..8),
        extra in 0.0..=1.0f64,
    ) {
        let before = noisy_or(ws.iter().copied());
        let after = noisy_or(ws.iter().copied().chain(std::iter::once(extra)));
        prop_assert!(after >= before);
        prop_assert!(after >= ws.iter().copied().fold(0.0, f64::max) - 1e-12);
        prop_assert!((0.0..=1.0).contains(&after));
    }

    #[test]
    fn saturation_is_monotone_and_bounded(a in 0.0..=1.0f64, b in 0.0..=1.0f64, k in 0.1..5.0f64) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        let f_lo = exp_saturation(lo, k);
        let f_hi = exp_saturation(hi, k);
        prop_assert!(f_lo <= f_hi + 1e-12);
        prop_assert!((0.0..=1.0).contains(&f_lo) && (0.0..=1.0).contains(&f_hi));
        // Concave with f(0) = 0 and f(1) = 1, so never below the diagonal.
        prop_assert!(f_lo >= lo - 1e-12);
    }

    #[test]
    fn belief_is_non_decreasing_in_support(
        a in 0.0..=1.0f64,
        b in 0.0..=1.0f64,
        threshold in 0.0..=1.0f64,
    ) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(belief(lo, threshold, 12.0) <= belief(hi, threshold, 12.0));
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    #[test]
    fn every_reported_score_is_bounded(doc in document()) {
        let scoring = ScoringEngine::new().score_document(&doc);

        for outcome in &scoring.claims {
            for axis in Axis::ALL {
                let v = outcome.scores.axis_0_100(axis);
                prop_assert!((0.0..=100.0).contains(&v), "{} = {}", axis, v);
                prop_assert!((0.0..=1.0).contains(&outcome.calibration.shrinkage_lambda[axis]));
            }
            prop_assert!((0.0..=100.0).contains(&outcome.scores.belief_0_100));
            prop_assert!((0.0..=1.0).contains(&outcome.scores.evidence_support_0_1));
            prop_assert!(outcome.base.custody.score <= outcome.base.custody.blended + 1e-12);
            prop_assert!(outcome.base.custody.bin_0_5 <= 5);
            prop_assert!(outcome.calibration.reliability_factor >= 0.20 - 1e-12);
        }

        for (name, ci) in scoring.bootstrap_95ci.iter() {
            prop_assert!(ci.is_ordered(), "{}: {:?}", name, ci);
            prop_assert!(ci.ci95_low >= -1e-9 && ci.ci95_high <= 100.0 + 1e-9, "{}: {:?}", name, ci);
        }
    }

    #[test]
    fn scoring_is_reproducible(doc in document()) {
        let engine = ScoringEngine::new();
        let a = engine.score_document(&doc);
        let b = engine.score_document(&doc);
        prop_assert_eq!(a, b);
    }
}
