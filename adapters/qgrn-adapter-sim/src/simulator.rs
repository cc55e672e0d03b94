//! Simulator backend implementation.

use std::time::Instant;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info, instrument};

use qgrn_hal::{
    Backend, BackendConfig, BackendFactory, Capabilities, Counts, Distribution, ExecutionResult,
    HalError, HalResult, NoiseProfile, RunConfig,
};
use qgrn_ir::{Circuit, KrausSet};

use crate::density::DensityMatrix;
use crate::plan::{ExecutionPlan, OpKind, to_bitstring};
use crate::statevector::Statevector;

/// Default qubit capacity.
pub const DEFAULT_MAX_QUBITS: u32 = 20;

/// Largest circuit [`SimulatorBackend::probabilities`] will evolve exactly.
pub const MAX_DENSITY_QUBITS: u32 = 10;

/// Local simulator backend.
///
/// Unitary, noiseless circuits are simulated once and every shot is sampled
/// from the final state. Circuits with regulatory channels, decay, or gate
/// noise are simulated one quantum trajectory per shot. All randomness comes
/// from a single `StdRng` seeded per run.
#[derive(Debug, Clone)]
pub struct SimulatorBackend {
    /// Backend configuration.
    config: BackendConfig,
    /// Cached capabilities.
    capabilities: Capabilities,
}

impl SimulatorBackend {
    /// Create a new simulator backend with default settings.
    pub fn new() -> Self {
        Self::with_max_qubits(DEFAULT_MAX_QUBITS)
    }

    /// Create a simulator with custom max qubits.
    pub fn with_max_qubits(max_qubits: u32) -> Self {
        let config = BackendConfig::new("simulator");
        let capabilities = Capabilities::simulator(max_qubits).with_name(&config.name);
        Self {
            config,
            capabilities,
        }
    }

    /// Set the per-run shot limit.
    #[must_use]
    pub fn with_max_shots(mut self, max_shots: u32) -> Self {
        self.capabilities = self.capabilities.with_max_shots(max_shots);
        self
    }

    fn check_size(&self, circuit: &Circuit, limit: u32) -> HalResult<()> {
        if circuit.num_qubits() > limit as usize {
            return Err(HalError::CircuitTooLarge(format!(
                "Circuit has {} qubits but simulator only supports {}",
                circuit.num_qubits(),
                limit
            )));
        }
        Ok(())
    }

    fn plan(&self, circuit: &Circuit, config: &RunConfig) -> HalResult<ExecutionPlan> {
        self.check_size(circuit, self.capabilities.num_qubits)?;

        if config.shots == 0 {
            return Err(HalError::InvalidShots("shots must be greater than 0".into()));
        }
        if config.shots > self.capabilities.max_shots {
            return Err(HalError::InvalidShots(format!(
                "{} shots requested but the limit is {}",
                config.shots, self.capabilities.max_shots
            )));
        }
        if let Some(noise) = &config.noise {
            noise.validate()?;
        }

        ExecutionPlan::from_circuit(circuit)
    }

    /// Evolve one state through the plan, drawing Kraus branches from `rng`.
    fn evolve_trajectory(
        plan: &ExecutionPlan,
        noise_channels: &[Vec<KrausSet>],
        rng: &mut StdRng,
    ) -> HalResult<Statevector> {
        let mut sv = Statevector::new(plan.num_qubits);
        for (op, channels) in plan.ops.iter().zip(noise_channels) {
            match &op.kind {
                OpKind::Unitary(gate) => sv.apply_gate(gate, &op.qubits),
                OpKind::Channel(kraus) => {
                    sv.apply_kraus(kraus, &op.qubits, rng)?;
                }
            }
            for &q in &op.qubits {
                for channel in channels {
                    sv.apply_kraus(channel, &[q], rng)?;
                }
            }
        }
        sv.check_valid()?;
        Ok(sv)
    }

    /// Record one shot, applying readout error.
    fn record(
        plan: &ExecutionPlan,
        outcome: usize,
        noise: Option<&NoiseProfile>,
        rng: &mut StdRng,
        counts: &mut Counts,
    ) {
        let mut bits = plan.clbits_of(outcome);
        if let Some(noise) = noise {
            plan.apply_readout(&mut bits, noise, rng);
        }
        counts.insert(to_bitstring(&bits), 1);
    }

    fn run_trajectories(
        plan: &ExecutionPlan,
        config: &RunConfig,
        rng: &mut StdRng,
    ) -> HalResult<Counts> {
        let noise = config.noise.as_ref();
        let noise_channels = plan.noise_channels(noise);
        let mut counts = Counts::new();

        for shot in 0..config.shots {
            let sv = Self::evolve_trajectory(plan, &noise_channels, rng)?;
            let outcome = sv.sample(rng);
            Self::record(plan, outcome, noise, rng, &mut counts);

            if shot > 0 && shot % 1000 == 0 {
                debug!("Completed {} trajectories", shot);
            }
        }

        Ok(counts)
    }

    fn run_sampled(
        plan: &ExecutionPlan,
        config: &RunConfig,
        rng: &mut StdRng,
    ) -> HalResult<Counts> {
        let mut sv = Statevector::new(plan.num_qubits);
        for op in &plan.ops {
            if let OpKind::Unitary(gate) = &op.kind {
                sv.apply_gate(gate, &op.qubits);
            }
        }
        sv.check_valid()?;

        let noise = config.noise.as_ref();
        let mut counts = Counts::new();
        for _ in 0..config.shots {
            let outcome = sv.sample(rng);
            Self::record(plan, outcome, noise, rng, &mut counts);
        }
        Ok(counts)
    }
}

impl Default for SimulatorBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl Backend for SimulatorBackend {
    fn name(&self) -> &str {
        &self.config.name
    }

    fn capabilities(&self) -> &Capabilities {
        &self.capabilities
    }

    fn validate(&self, circuit: &Circuit, config: &RunConfig) -> HalResult<()> {
        self.plan(circuit, config).map(|_| ())
    }

    #[instrument(skip(self, circuit, config), fields(circuit = circuit.name(), shots = config.shots))]
    fn run(&self, circuit: &Circuit, config: &RunConfig) -> HalResult<ExecutionResult> {
        let start = Instant::now();
        let plan = self.plan(circuit, config)?;

        let seed = config.seed.unwrap_or_else(|| {
            let seed = rand::thread_rng().r#gen::<u64>();
            info!(seed, "No seed given, drew a fresh one");
            seed
        });
        let mut rng = StdRng::seed_from_u64(seed);

        let trajectories = plan.needs_trajectories(config.noise.as_ref());
        debug!(
            qubits = plan.num_qubits,
            ops = plan.ops.len(),
            trajectories,
            seed,
            "Starting simulation"
        );

        let counts = if trajectories {
            Self::run_trajectories(&plan, config, &mut rng)?
        } else {
            Self::run_sampled(&plan, config, &mut rng)?
        };

        let elapsed = start.elapsed();
        debug!("Simulation completed in {:?}", elapsed);

        Ok(ExecutionResult::new(counts, config.shots)
            .with_seed(seed)
            .with_execution_time(u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX)))
    }

    #[instrument(skip(self, circuit, noise), fields(circuit = circuit.name()))]
    fn probabilities(
        &self,
        circuit: &Circuit,
        noise: Option<&NoiseProfile>,
    ) -> HalResult<Distribution> {
        self.check_size(circuit, MAX_DENSITY_QUBITS.min(self.capabilities.num_qubits))?;
        if let Some(noise) = noise {
            noise.validate()?;
        }
        let plan = ExecutionPlan::from_circuit(circuit)?;
        let noise_channels = plan.noise_channels(noise);

        let mut rho = DensityMatrix::new(plan.num_qubits);
        for (op, channels) in plan.ops.iter().zip(&noise_channels) {
            match &op.kind {
                OpKind::Unitary(gate) => rho.apply_gate(gate, &op.qubits),
                OpKind::Channel(kraus) => rho.apply_kraus(kraus, &op.qubits),
            }
            for &q in &op.qubits {
                for channel in channels {
                    rho.apply_kraus(channel, &[q]);
                }
            }
        }
        rho.check_valid()?;

        let diagonal: Vec<f64> = rho.diagonal().into_iter().map(|p| p.max(0.0)).collect();
        debug!(qubits = plan.num_qubits, "Computed exact distribution");
        Ok(plan.distribution(&diagonal, noise))
    }
}

impl BackendFactory for SimulatorBackend {
    fn from_config(config: BackendConfig) -> HalResult<Self> {
        let max_qubits = config.extra_u32("max_qubits")?.unwrap_or(DEFAULT_MAX_QUBITS);
        let mut capabilities = Capabilities::simulator(max_qubits).with_name(&config.name);
        if let Some(max_shots) = config.extra_u32("max_shots")? {
            capabilities = capabilities.with_max_shots(max_shots);
        }

        Ok(Self {
            config,
            capabilities,
        })
    }
}
