use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, info, info_span, warn};

use assay_core::config::CalibrationConfig;
use assay_core::errors::{AssayResult, CoercionWarning};
use assay_core::models::{PerAxis, ScoreReadyDocument};
use assay_core::reader::read_document;

use crate::aggregate::{self, BootstrapReport, DocumentScores};
use crate::base::{BaseMetrics, BaseMetricsEngine};
use crate::belief;
use crate::calibration::{CalibrationRecord, ClaimCalibration};
use crate::prior::estimate_priors;
use crate::report::{self, ClaimScores};
use crate::signals::{raw_axes, ClaimSignals};

/// Everything computed for one claim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClaimOutcome {
    pub claim_id: String,
    pub base: BaseMetrics,
    pub raw_scores: ClaimScores,
    pub calibration: CalibrationRecord,
    pub scores: ClaimScores,
}

/// Everything computed for one document, claims in input order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentScoring {
    pub doc_id: String,
    pub report_version: String,
    pub priors: PerAxis<f64>,
    pub claims: Vec<ClaimOutcome>,
    pub document_scores: DocumentScores,
    pub bootstrap_95ci: BootstrapReport,
    pub warnings: Vec<CoercionWarning>,
}

/// Scoring pipeline bound to one calibration table.
///
/// Stateless between calls: scoring is a pure function of the document and
/// the table, so one engine can score many documents concurrently.
pub struct ScoringEngine {
    config: CalibrationConfig,
}

impl ScoringEngine {
    /// Engine on the contract calibration table.
    pub fn new() -> Self {
        Self {
            config: CalibrationConfig::default(),
        }
    }

    /// Engine on a custom table. The table is validated first.
    pub fn with_config(config: CalibrationConfig) -> AssayResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &CalibrationConfig {
        &self.config
    }

    /// Score an already-read document.
    pub fn score_document(&self, doc: &ScoreReadyDocument) -> DocumentScoring {
        let span = info_span!("assay.document", doc_id = %doc.doc_id, claims = doc.claims.len());
        let _enter = span.enter();

        for warning in &doc.warnings {
            warn!(%warning, "coerced input field");
        }

        let base_engine = BaseMetricsEngine::new(&self.config.evidence, doc.evidence_index());
        let bases: Vec<BaseMetrics> = doc.claims.iter().map(|c| base_engine.compute(c)).collect();
        let signals: Vec<ClaimSignals> = doc
            .claims
            .iter()
            .zip(&bases)
            .map(|(c, b)| ClaimSignals::resolve(c, b))
            .collect();
        let raw: Vec<PerAxis<f64>> = doc
            .claims
            .iter()
            .zip(&bases)
            .map(|(c, b)| raw_axes(c, b))
            .collect();
        let gravity: Vec<f64> = doc.claims.iter().map(|c| c.gravity_weight).collect();

        let priors = estimate_priors(&raw, &gravity);
        debug!(?priors, "document priors");

        let claims: Vec<ClaimOutcome> = doc
            .claims
            .iter()
            .zip(&bases)
            .zip(signals.into_iter().zip(raw))
            .map(|((claim, base), (signals, raw))| {
                let raw_composition = belief::compose(
                    &raw,
                    signals.belief_grounding(),
                    claim.required_threshold_0_1,
                    &self.config.belief,
                );
                let calibration =
                    ClaimCalibration::calibrate(claim, base, signals, raw, &priors, &self.config);
                let scores = ClaimScores::new(&calibration.calibrated, &calibration.composition);
                debug!(
                    claim_id = %claim.claim_id,
                    reliability = calibration.reliability,
                    effective_n = calibration.effective_n,
                    belief = scores.belief_0_100,
                    degenerate = calibration.degenerate,
                    "calibrated claim"
                );
                ClaimOutcome {
                    claim_id: claim.claim_id.clone(),
                    base: base.clone(),
                    raw_scores: ClaimScores::new(&raw, &raw_composition),
                    calibration: calibration.record(&priors),
                    scores,
                }
            })
            .collect();

        let scores: Vec<ClaimScores> = claims.iter().map(|c| c.scores).collect();
        let document_scores = aggregate::document_scores(&scores, &gravity);
        let bootstrap_95ci = aggregate::bootstrap_report(&scores, &gravity, &self.config.bootstrap);

        info!(
            belief_avg = document_scores.belief_avg_0_100,
            credibility_composite = document_scores.credibility_composite_avg_0_100,
            warnings = doc.warnings.len(),
            "scored document"
        );

        DocumentScoring {
            doc_id: doc.doc_id.clone(),
            report_version: self.config.report_version.clone(),
            priors,
            claims,
            document_scores,
            bootstrap_95ci,
            warnings: doc.warnings.clone(),
        }
    }

    /// Read, score and render one score-ready JSON document.
    pub fn score_value(&self, input: &Value) -> AssayResult<Value> {
        let doc = read_document(input)?;
        let scoring = self.score_document(&doc);
        report::render(input, &scoring)
    }

    /// Score independent documents in parallel. Results keep input order.
    pub fn score_batch(&self, inputs: &[Value]) -> Vec<AssayResult<Value>> {
        inputs.par_iter().map(|input| self.score_value(input)).collect()
    }
}

impl Default for ScoringEngine {
    fn default() -> Self {
        Self::new()
    }
}
