//! Backend trait and configuration.
//!
//! A [`Backend`] executes a [`Circuit`] synchronously:
//!
//! ```text
//!   capabilities() ──→ validate() ──→ run()
//!                                  └─→ probabilities()   (exact, optional)
//! ```
//!
//! Backends are `Send + Sync` and hold no per-run state, so one instance can
//! serve concurrent callers.

use qgrn_ir::Circuit;
use serde::{Deserialize, Serialize};

use crate::capability::Capabilities;
use crate::error::{HalError, HalResult};
use crate::noise::NoiseProfile;
use crate::result::{Distribution, ExecutionResult};

/// Default number of shots.
pub const DEFAULT_SHOTS: u32 = 1024;

/// Configuration for a backend instance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BackendConfig {
    /// Name of the backend.
    pub name: String,
    /// Additional configuration.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl BackendConfig {
    /// Create a new backend configuration.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            extra: serde_json::Map::new(),
        }
    }

    /// Add extra configuration.
    #[must_use]
    pub fn with_extra(mut self, key: impl Into<String>, value: serde_json::Value) -> Self {
        self.extra.insert(key.into(), value);
        self
    }

    /// Read an unsigned integer setting that fits in `u32`.
    ///
    /// Missing keys give `Ok(None)`; present keys of the wrong type or range
    /// are a configuration error.
    pub fn extra_u32(&self, key: &str) -> HalResult<Option<u32>> {
        let Some(value) = self.extra.get(key) else {
            return Ok(None);
        };
        value
            .as_u64()
            .and_then(|v| u32::try_from(v).ok())
            .map(Some)
            .ok_or_else(|| {
                HalError::Configuration(format!("'{key}' must be an unsigned 32-bit integer, got {value}"))
            })
    }
}

/// Per-run settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunConfig {
    /// Number of shots, `> 0`.
    pub shots: u32,
    /// Noise to inject, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub noise: Option<NoiseProfile>,
    /// RNG seed; a fresh one is drawn and reported when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            shots: DEFAULT_SHOTS,
            noise: None,
            seed: None,
        }
    }
}

impl RunConfig {
    /// Run `shots` shots, noiseless and unseeded.
    pub fn new(shots: u32) -> Self {
        Self {
            shots,
            ..Self::default()
        }
    }

    /// Fix the RNG seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Inject noise.
    #[must_use]
    pub fn with_noise(mut self, noise: NoiseProfile) -> Self {
        self.noise = Some(noise);
        self
    }
}

/// Trait for circuit execution backends.
///
/// # Contract
///
/// - `capabilities()` is synchronous and infallible; implementations cache
///   it at construction time.
/// - `validate()` rejects anything the backend cannot run, before any
///   simulation work happens.
/// - `run()` calls `validate()` first. Given the same circuit, shots, noise
///   and seed it returns the same counts.
pub trait Backend: Send + Sync {
    /// Get the name of this backend.
    fn name(&self) -> &str;

    /// Get the capabilities of this backend.
    fn capabilities(&self) -> &Capabilities;

    /// Check a circuit and run configuration against backend constraints.
    fn validate(&self, circuit: &Circuit, config: &RunConfig) -> HalResult<()>;

    /// Execute a circuit and return measurement counts.
    fn run(&self, circuit: &Circuit, config: &RunConfig) -> HalResult<ExecutionResult>;

    /// Exact outcome distribution, without shot noise.
    ///
    /// Backends that cannot compute it return [`HalError::Unsupported`].
    fn probabilities(
        &self,
        circuit: &Circuit,
        noise: Option<&NoiseProfile>,
    ) -> HalResult<Distribution> {
        let _ = (circuit, noise);
        Err(HalError::Unsupported(format!(
            "{} does not compute exact distributions",
            self.name()
        )))
    }
}

/// Trait for creating backends from configuration.
pub trait BackendFactory: Backend + Sized {
    /// Create a backend from configuration.
    fn from_config(config: BackendConfig) -> HalResult<Self>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::result::Counts;

    struct Fixed {
        caps: Capabilities,
    }

    impl Backend for Fixed {
        fn name(&self) -> &str {
            "fixed"
        }

        fn capabilities(&self) -> &Capabilities {
            &self.caps
        }

        fn validate(&self, _circuit: &Circuit, _config: &RunConfig) -> HalResult<()> {
            Ok(())
        }

        fn run(&self, _circuit: &Circuit, config: &RunConfig) -> HalResult<ExecutionResult> {
            let counts: Counts = [("0", u64::from(config.shots))].into_iter().collect();
            Ok(ExecutionResult::new(counts, config.shots))
        }
    }

    #[test]
    fn test_backend_config() {
        let config = BackendConfig::new("test")
            .with_extra("max_qubits", serde_json::json!(12))
            .with_extra("label", serde_json::json!("x"));

        assert_eq!(config.name, "test");
        assert_eq!(config.extra_u32("max_qubits").unwrap(), Some(12));
        assert_eq!(config.extra_u32("max_shots").unwrap(), None);
        assert!(matches!(
            config.extra_u32("label"),
            Err(HalError::Configuration(_))
        ));
    }

    #[test]
    fn test_backend_config_flattened() {
        let config: BackendConfig =
            serde_json::from_str(r#"{"name":"sim","max_shots":500}"#).unwrap();
        assert_eq!(config.extra_u32("max_shots").unwrap(), Some(500));
    }

    #[test]
    fn test_run_config_defaults() {
        let config: RunConfig = serde_json::from_str(r#"{"seed":7}"#).unwrap();
        assert_eq!(config.shots, DEFAULT_SHOTS);
        assert_eq!(config.seed, Some(7));
        assert!(config.noise.is_none());
        assert_eq!(RunConfig::new(10).with_seed(7).seed, Some(7));
    }

    #[test]
    fn test_default_probabilities_unsupported() {
        let backend = Fixed {
            caps: Capabilities::simulator(1),
        };
        let circuit = Circuit::with_size("c", 1, 1);
        assert!(matches!(
            backend.probabilities(&circuit, None),
            Err(HalError::Unsupported(_))
        ));
        assert_eq!(backend.run(&circuit, &RunConfig::new(3)).unwrap().counts.get("0"), 3);
    }
}
