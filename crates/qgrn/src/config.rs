//! Simulation configuration.
//!
//! A [`SimulationConfig`] gathers every knob of a run. Every field has a
//! default, so configuration text only needs the values it changes:
//!
//! ```yaml
//! encoding:
//!   steps: 3
//!   angle: { gain: 1.5 }
//! run:
//!   shots: 2000
//!   seed: 42
//! decode:
//!   drop_all_off: true
//! ```

use qgrn_decode::DecodeOptions;
use qgrn_encode::EncodingConfig;
use qgrn_hal::{BackendConfig, RunConfig};
use serde::{Deserialize, Serialize};

use crate::error::{GrnError, GrnResult};

/// Name of the backend built when the configuration names none.
pub const DEFAULT_BACKEND: &str = "simulator";

/// Complete configuration of one simulation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Network → circuit settings.
    pub encoding: EncodingConfig,
    /// Shots, noise and seed.
    pub run: RunConfig,
    /// Decoder settings.
    pub decode: DecodeOptions,
    /// Backend name and backend-specific settings.
    pub backend: BackendConfig,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            encoding: EncodingConfig::default(),
            run: RunConfig::default(),
            decode: DecodeOptions::default(),
            backend: BackendConfig::new(DEFAULT_BACKEND),
        }
    }
}

impl SimulationConfig {
    /// Parse from JSON text.
    pub fn from_json(text: &str) -> GrnResult<Self> {
        serde_json::from_str(text).map_err(|e| GrnError::Config(format!("invalid JSON: {e}")))
    }

    /// Parse from YAML text.
    pub fn from_yaml(text: &str) -> GrnResult<Self> {
        serde_yaml_ng::from_str(text).map_err(|e| GrnError::Config(format!("invalid YAML: {e}")))
    }

    /// Serialize to YAML text.
    pub fn to_yaml(&self) -> GrnResult<String> {
        serde_yaml_ng::to_string(self).map_err(|e| GrnError::Config(e.to_string()))
    }

    /// Set the number of shots.
    #[must_use]
    pub fn with_shots(mut self, shots: u32) -> Self {
        self.run.shots = shots;
        self
    }

    /// Fix the random seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.run.seed = Some(seed);
        self
    }

    /// Replace the encoding settings.
    #[must_use]
    pub fn with_encoding(mut self, encoding: EncodingConfig) -> Self {
        self.encoding = encoding;
        self
    }

    /// Replace the decoder settings.
    #[must_use]
    pub fn with_decode(mut self, decode: DecodeOptions) -> Self {
        self.decode = decode;
        self
    }

    /// Check the settings that can be checked without a network.
    pub fn validate(&self) -> GrnResult<()> {
        self.encoding.validate()?;
        if let Some(noise) = &self.run.noise {
            noise.validate()?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use qgrn_encode::EdgeEncoding;

    #[test]
    fn test_defaults() {
        let config = SimulationConfig::default();
        assert_eq!(config.run.shots, qgrn_hal::DEFAULT_SHOTS);
        assert_eq!(config.backend.name, DEFAULT_BACKEND);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_yaml_partial() {
        let yaml = r"
encoding:
  encoding: rotation
  steps: 2
run:
  shots: 100
  seed: 5
backend:
  name: local
  max_qubits: 8
";
        let config = SimulationConfig::from_yaml(yaml).unwrap();
        assert_eq!(config.encoding.encoding, EdgeEncoding::Rotation);
        assert_eq!(config.encoding.steps, 2);
        assert_eq!(config.run.shots, 100);
        assert_eq!(config.run.seed, Some(5));
        assert!(!config.decode.drop_all_off);
        assert_eq!(config.backend.name, "local");
        assert_eq!(config.backend.extra_u32("max_qubits").unwrap(), Some(8));
    }

    #[test]
    fn test_json_noise() {
        let json = r#"{
            "run": {
                "shots": 10,
                "noise": {
                    "channels": [{"kind": "bit_flip", "p": 0.1}],
                    "readout_error": 0.02
                }
            }
        }"#;
        let config = SimulationConfig::from_json(json).unwrap();
        let noise = config.run.noise.as_ref().unwrap();
        assert_eq!(noise.channels.len(), 1);
        assert_eq!(noise.readout_error, Some(0.02));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_invalid_text() {
        assert!(matches!(
            SimulationConfig::from_json("{"),
            Err(GrnError::Config(_))
        ));
        assert!(matches!(
            SimulationConfig::from_yaml("run: [1, 2"),
            Err(GrnError::Config(_))
        ));
    }

    #[test]
    fn test_validate_rejects_bad_steps() {
        let mut config = SimulationConfig::default();
        config.encoding.steps = 0;
        assert!(matches!(config.validate(), Err(GrnError::Encoding(_))));
    }

    #[test]
    fn test_yaml_round_trip() {
        let config = SimulationConfig::default().with_shots(64).with_seed(3);
        let text = config.to_yaml().unwrap();
        assert_eq!(SimulationConfig::from_yaml(&text).unwrap(), config);
    }
}
