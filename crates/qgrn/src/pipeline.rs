//! End-to-end simulation pipeline.

use qgrn_adapter_sim::SimulatorBackend;
use qgrn_decode::{ExpressionProfile, decode_distribution_with, decode_with};
use qgrn_encode::{CircuitEncoder, EncodedCircuit};
use qgrn_hal::{Backend, BackendFactory, ExecutionResult};
use qgrn_network::RegulatoryGraph;
use tracing::{info, instrument};

use crate::config::SimulationConfig;
use crate::error::GrnResult;

/// Everything one sampled run produced.
#[derive(Debug, Clone)]
pub struct SimulationRun {
    /// The circuit that was executed, with its gene ordering.
    pub encoded: EncodedCircuit,
    /// Raw backend output.
    pub result: ExecutionResult,
    /// Decoded expression profile.
    pub profile: ExpressionProfile,
}

/// Graph → circuit → backend → profile.
///
/// Stateless apart from its configuration; a pipeline can be reused for any
/// number of networks.
pub struct Pipeline<B: Backend> {
    backend: B,
    encoder: CircuitEncoder,
    config: SimulationConfig,
}

impl Pipeline<SimulatorBackend> {
    /// A pipeline over the local simulator, built from `config.backend`.
    pub fn simulator(config: SimulationConfig) -> GrnResult<Self> {
        let backend = SimulatorBackend::from_config(config.backend.clone())?;
        Self::new(backend, config)
    }
}

impl<B: Backend> Pipeline<B> {
    /// A pipeline over any backend.
    pub fn new(backend: B, config: SimulationConfig) -> GrnResult<Self> {
        config.validate()?;
        Ok(Self {
            backend,
            encoder: CircuitEncoder::new(config.encoding.clone()),
            config,
        })
    }

    /// The backend in use.
    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// The configuration in use.
    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Encode a network for this pipeline's backend.
    pub fn encode(&self, graph: &RegulatoryGraph) -> GrnResult<EncodedCircuit> {
        Ok(self.encoder.encode_for(graph, self.backend.capabilities())?)
    }

    /// Sample the network and decode the counts.
    #[instrument(skip(self, graph), fields(backend = self.backend.name(), genes = graph.num_genes()))]
    pub fn run(&self, graph: &RegulatoryGraph) -> GrnResult<SimulationRun> {
        let encoded = self.encode(graph)?;
        self.backend.validate(&encoded.circuit, &self.config.run)?;
        let result = self.backend.run(&encoded.circuit, &self.config.run)?;
        let profile = decode_with(&result, &encoded.ordering, self.config.decode)?;

        info!(
            shots = result.shots,
            seed = ?result.seed,
            most_probable = profile.most_probable_state(),
            entropy_bits = profile.entropy(),
            "Simulation complete"
        );

        Ok(SimulationRun {
            encoded,
            result,
            profile,
        })
    }

    /// Sample the network and return only the profile.
    pub fn simulate(&self, graph: &RegulatoryGraph) -> GrnResult<ExpressionProfile> {
        Ok(self.run(graph)?.profile)
    }

    /// Decode the exact outcome distribution, without shot noise.
    ///
    /// Uses the configured noise profile; shots and seed are ignored.
    #[instrument(skip(self, graph), fields(backend = self.backend.name(), genes = graph.num_genes()))]
    pub fn exact(&self, graph: &RegulatoryGraph) -> GrnResult<ExpressionProfile> {
        let encoded = self.encode(graph)?;
        let distribution = self
            .backend
            .probabilities(&encoded.circuit, self.config.run.noise.as_ref())?;
        Ok(decode_distribution_with(
            &distribution,
            &encoded.ordering,
            self.config.decode,
        )?)
    }
}

/// Simulate a network on the local simulator.
pub fn simulate(graph: &RegulatoryGraph, config: SimulationConfig) -> GrnResult<ExpressionProfile> {
    Pipeline::simulator(config)?.simulate(graph)
}
