// Single source of truth for all calibration constants.

// --- Base metrics: custody blend ---
pub const CUSTODY_QUANTITY_WEIGHT: f64 = 0.45;
pub const CUSTODY_QUALITY_WEIGHT: f64 = 0.35;
pub const CUSTODY_PROCESS_WEIGHT: f64 = 0.20;

// --- Base metrics: balance penalty ---
pub const BALANCE_FLOOR: f64 = 0.55;
pub const BALANCE_WEIGHT: f64 = 0.45;

// --- Base metrics: corroboration ---
pub const MODALITY_CAP: f64 = 3.0;
pub const SOURCE_QUANTITY_CAP: f64 = 5.0;

// --- Reliability ---
pub const RELIABILITY_FLOOR: f64 = 0.20;
pub const RELIABILITY_GROUNDING_WEIGHT: f64 = 0.35;
pub const RELIABILITY_CUSTODY_QUALITY_WEIGHT: f64 = 0.25;
pub const RELIABILITY_ELIGIBILITY_WEIGHT: f64 = 0.20;
pub const RELIABILITY_ANCHOR_COVERAGE_WEIGHT: f64 = 0.20;

// --- Effective evidence count ---
pub const EFFECTIVE_N_ANCHOR_WEIGHT: f64 = 0.50;
pub const EFFECTIVE_N_ELIGIBLE_WEIGHT: f64 = 0.35;
pub const EFFECTIVE_N_CORROBORATION_WEIGHT: f64 = 0.15;

// --- Shrinkage strength (tau) per axis ---
pub const TAU_CUSTODY: f64 = 2.2;
pub const TAU_CREDIBILITY: f64 = 2.8;
pub const TAU_CORROBORATION: f64 = 3.2;
pub const TAU_CLARITY: f64 = 1.8;
pub const TAU_CONFIDENCE: f64 = 1.8;

// --- Reliability weighting base per axis ---
pub const RELIABILITY_BASE_CUSTODY: f64 = 0.55;
pub const RELIABILITY_BASE_CREDIBILITY: f64 = 0.60;
pub const RELIABILITY_BASE_CORROBORATION: f64 = 0.60;
pub const RELIABILITY_BASE_CLARITY: f64 = 0.65;
pub const RELIABILITY_BASE_CONFIDENCE: f64 = 0.65;

// --- Saturation gates ---
pub const CUSTODY_GATE_FLOOR: f64 = 0.72;
pub const CUSTODY_GATE_K: f64 = 1.4;
pub const CUSTODY_ARTIFACT_WEIGHT: f64 = 0.60;
pub const CUSTODY_ANCHOR_WEIGHT: f64 = 0.40;
pub const CORROBORATION_GATE_FLOOR: f64 = 0.70;
pub const CORROBORATION_GATE_K: f64 = 1.6;

// --- Credibility quality gate ---
pub const CREDIBILITY_GATE_FLOOR: f64 = 0.75;
pub const CREDIBILITY_QUALITY_WEIGHT: f64 = 0.70;
pub const CREDIBILITY_DIVERSITY_WEIGHT: f64 = 0.30;

// --- Belief composition ---
pub const BELIEF_CUSTODY_WEIGHT: f64 = 0.30;
pub const BELIEF_CREDIBILITY_WEIGHT: f64 = 0.25;
pub const BELIEF_CORROBORATION_WEIGHT: f64 = 0.25;
pub const BELIEF_GROUNDING_WEIGHT: f64 = 0.20;
pub const BELIEF_STEEPNESS: f64 = 12.0;

// --- Bootstrap ---
pub const BOOTSTRAP_ITERATIONS: u32 = 2_500;
pub const BOOTSTRAP_LOWER_PERCENTILE: f64 = 2.5;
pub const BOOTSTRAP_UPPER_PERCENTILE: f64 = 97.5;
pub const BOOTSTRAP_SEED_CUSTODY: u64 = 0x5EED_0001;
pub const BOOTSTRAP_SEED_CREDIBILITY: u64 = 0x5EED_0002;
pub const BOOTSTRAP_SEED_CORROBORATION: u64 = 0x5EED_0003;
pub const BOOTSTRAP_SEED_CLARITY: u64 = 0x5EED_0004;
pub const BOOTSTRAP_SEED_CONFIDENCE: u64 = 0x5EED_0005;
pub const BOOTSTRAP_SEED_BELIEF: u64 = 0x5EED_0006;
