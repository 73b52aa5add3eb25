// config.rs - Simulation parameters
//
// Deserialized from JSON at the wasm boundary; every field has a default so
// partial documents like `{"rainfall": 0.5}` are accepted.

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, Result};

/// When rainfall is added to the water field.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RainPolicy {
    /// Every `advance()` rains, relaxes, then drains.
    #[default]
    EveryTick,
    /// `advance()` only rains once per preceding `fill()` call.
    OnFill,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// Water depth added to every column per rainfall (r).
    pub rainfall: f64,
    /// Depth an edge column may keep before the excess runs off.
    pub spill_threshold: f64,
    /// Surface difference below which a neighbour pair counts as level.
    pub tolerance: f64,
    /// Upper bound on relaxation sweeps within one tick.
    pub max_passes: u32,
    pub rain_policy: RainPolicy,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            rainfall: 1.0,
            spill_threshold: 1.0,
            tolerance: 1e-9,
            max_passes: 512,
            rain_policy: RainPolicy::default(),
        }
    }
}

impl SimConfig {
    pub fn from_json(text: &str) -> Result<Self> {
        let config: SimConfig = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if !self.rainfall.is_finite() || self.rainfall <= 0.0 {
            return Err(EngineError::InvalidConfig(format!(
                "rainfall must be finite and > 0, got {}",
                self.rainfall
            )));
        }
        if !self.spill_threshold.is_finite() || self.spill_threshold < 0.0 {
            return Err(EngineError::InvalidConfig(format!(
                "spill_threshold must be finite and >= 0, got {}",
                self.spill_threshold
            )));
        }
        if !self.tolerance.is_finite() || self.tolerance <= 0.0 {
            return Err(EngineError::InvalidConfig(format!(
                "tolerance must be finite and > 0, got {}",
                self.tolerance
            )));
        }
        if self.max_passes == 0 {
            return Err(EngineError::InvalidConfig("max_passes must be at least 1".into()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert!(SimConfig::default().validate().is_ok());
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let config =
            SimConfig::from_json(r#"{"rainfall": 0.25, "rain_policy": "on_fill"}"#).unwrap();
        assert_eq!(config.rainfall, 0.25);
        assert_eq!(config.rain_policy, RainPolicy::OnFill);
        assert_eq!(config.spill_threshold, SimConfig::default().spill_threshold);
        assert_eq!(config.max_passes, 512);
    }

    #[test]
    fn rejects_non_positive_rainfall() {
        let err = SimConfig::from_json(r#"{"rainfall": 0}"#).unwrap_err();
        assert!(matches!(err, EngineError::InvalidConfig(_)));
    }

    #[test]
    fn rejects_zero_passes() {
        let config = SimConfig { max_passes: 0, ..SimConfig::default() };
        assert!(matches!(config.validate(), Err(EngineError::InvalidConfig(_))));
    }

    #[test]
    fn malformed_json_is_a_format_error() {
        let err = SimConfig::from_json("{rainfall:").unwrap_err();
        assert!(matches!(err, EngineError::ConfigFormat(_)));
    }
}
