use serde::{Deserialize, Serialize};

use super::defaults;

/// Base-layer constants: custody blend, balance penalty, and corroboration caps.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EvidenceConfig {
    /// Weight of `noisy_or(A·T)` in the custody blend.
    pub custody_quantity_weight: f64,
    /// Weight of `mean(A·T)` in the custody blend.
    pub custody_quality_weight: f64,
    /// Weight of `mean(M·P)` in the custody blend.
    pub custody_process_weight: f64,
    /// Custody keeps at least this share when broader support is absent.
    pub balance_floor: f64,
    pub balance_weight: f64,
    /// Distinct modalities needed for full modality diversity.
    pub modality_cap: f64,
    /// Independent eligible origins needed for full source quantity.
    pub source_quantity_cap: f64,
}

impl Default for EvidenceConfig {
    fn default() -> Self {
        Self {
            custody_quantity_weight: defaults::CUSTODY_QUANTITY_WEIGHT,
            custody_quality_weight: defaults::CUSTODY_QUALITY_WEIGHT,
            custody_process_weight: defaults::CUSTODY_PROCESS_WEIGHT,
            balance_floor: defaults::BALANCE_FLOOR,
            balance_weight: defaults::BALANCE_WEIGHT,
            modality_cap: defaults::MODALITY_CAP,
            source_quantity_cap: defaults::SOURCE_QUANTITY_CAP,
        }
    }
}
