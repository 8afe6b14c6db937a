//! The calibration table: every constant the scoring laws use, keyed by axis
//! where the law is per-axis.

mod axis_config;
mod belief_config;
mod bootstrap_config;
pub mod defaults;
mod evidence_config;
mod reliability_config;

pub use axis_config::{AxisLaw, CustodyQuantityMix, GateLaw};
pub use belief_config::BeliefConfig;
pub use bootstrap_config::BootstrapConfig;
pub use evidence_config::EvidenceConfig;
pub use reliability_config::{EffectiveNConfig, ReliabilityConfig};

use serde::{Deserialize, Serialize};

use crate::constants::REPORT_VERSION;
use crate::errors::ConfigError;
use crate::models::{Axis, PerAxis};

/// Complete calibration table.
///
/// `Default` is the contract table stamped as [`REPORT_VERSION`]. A table
/// loaded from TOML that changes any constant must carry a different
/// `report_version`; [`CalibrationConfig::validate`] enforces this.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalibrationConfig {
    pub report_version: String,
    pub axes: PerAxis<AxisLaw>,
    pub custody_quantity: CustodyQuantityMix,
    pub evidence: EvidenceConfig,
    pub reliability: ReliabilityConfig,
    pub effective_n: EffectiveNConfig,
    pub belief: BeliefConfig,
    pub bootstrap: BootstrapConfig,
}

impl Default for CalibrationConfig {
    fn default() -> Self {
        Self {
            report_version: REPORT_VERSION.to_string(),
            axes: PerAxis::default(),
            custody_quantity: CustodyQuantityMix::default(),
            evidence: EvidenceConfig::default(),
            reliability: ReliabilityConfig::default(),
            effective_n: EffectiveNConfig::default(),
            belief: BeliefConfig::default(),
            bootstrap: BootstrapConfig::default(),
        }
    }
}

impl CalibrationConfig {
    /// Parse a table from TOML. Omitted sections keep their contract values.
    pub fn from_toml(source: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(source).map_err(|e| ConfigError::Parse {
            reason: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize the table to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string(self).map_err(|e| ConfigError::Parse {
            reason: e.to_string(),
        })
    }

    /// The law for one axis.
    pub fn law(&self, axis: Axis) -> &AxisLaw {
        &self.axes[axis]
    }

    /// True when every constant matches the contract table.
    pub fn is_contract(&self) -> bool {
        let mut contract = Self::default();
        contract.report_version.clone_from(&self.report_version);
        *self == contract
    }

    /// Check ranges, then reject tuned tables that reuse the contract version.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (axis, law) in self.axes.iter() {
            let field = |name: &str| format!("axes.{axis}.{name}");
            check(&field("tau"), law.tau.is_finite() && law.tau > 0.0, "must be > 0")?;
            check(
                &field("reliability_base"),
                in_unit(law.reliability_base),
                "must be in [0, 1]",
            )?;
            match law.gate {
                GateLaw::Open => {}
                GateLaw::Saturation { floor, k } => {
                    check(&field("gate.floor"), in_unit(floor), "must be in [0, 1]")?;
                    check(&field("gate.k"), k.is_finite() && k > 0.0, "must be > 0")?;
                }
                GateLaw::Quality {
                    floor,
                    quality_weight,
                    diversity_weight,
                } => {
                    check(&field("gate.floor"), in_unit(floor), "must be in [0, 1]")?;
                    check(
                        &field("gate.quality_weight"),
                        in_unit(quality_weight) && in_unit(diversity_weight),
                        "gate weights must be in [0, 1]",
                    )?;
                }
            }
        }

        check(
            "reliability.floor",
            self.reliability.floor > 0.0 && self.reliability.floor <= 1.0,
            "must be in (0, 1]",
        )?;
        check(
            "evidence.balance_floor",
            in_unit(self.evidence.balance_floor),
            "must be in [0, 1]",
        )?;
        check(
            "evidence.modality_cap",
            self.evidence.modality_cap >= 1.0,
            "must be >= 1",
        )?;
        check(
            "evidence.source_quantity_cap",
            self.evidence.source_quantity_cap >= 1.0,
            "must be >= 1",
        )?;
        check(
            "belief.steepness",
            self.belief.steepness.is_finite() && self.belief.steepness > 0.0,
            "must be > 0",
        )?;
        check(
            "bootstrap.iterations",
            self.bootstrap.iterations > 0,
            "must be > 0",
        )?;
        check(
            "bootstrap.lower_percentile",
            (0.0..self.bootstrap.upper_percentile).contains(&self.bootstrap.lower_percentile)
                && self.bootstrap.upper_percentile <= 100.0,
            "percentiles must satisfy 0 <= lower < upper <= 100",
        )?;

        if self.report_version == REPORT_VERSION && !self.is_contract() {
            return Err(ConfigError::UnversionedTuning {
                version: REPORT_VERSION.to_string(),
            });
        }
        Ok(())
    }
}

fn in_unit(value: f64) -> bool {
    (0.0..=1.0).contains(&value)
}

fn check(field: &str, ok: bool, reason: &str) -> Result<(), ConfigError> {
    if ok {
        Ok(())
    } else {
        Err(ConfigError::InvalidValue {
            field: field.to_string(),
            reason: reason.to_string(),
        })
    }
}
