//! Network → circuit translation.

use qgrn_hal::Capabilities;
use qgrn_ir::{Circuit, QubitId, TransferDirection};
use qgrn_network::{GeneOrdering, RegulatoryGraph, Sign};
use tracing::{debug, instrument};

use crate::config::{EdgeEncoding, EdgeOrder, EncodingConfig, MAX_ANGLE};
use crate::error::{EncodeError, EncodeResult};

/// A circuit together with the gene ordering its qubits follow.
#[derive(Debug, Clone, PartialEq)]
pub struct EncodedCircuit {
    /// The circuit. Qubit `i` and classical bit `i` carry gene `i`.
    pub circuit: Circuit,
    /// Gene ↔ qubit ordering.
    pub ordering: GeneOrdering,
}

impl EncodedCircuit {
    /// Number of qubits (equal to the number of genes).
    pub fn num_qubits(&self) -> usize {
        self.circuit.num_qubits()
    }
}

/// An edge resolved to qubit indices and an angle.
#[derive(Debug, Clone, Copy)]
struct ResolvedEdge {
    source: u32,
    target: u32,
    sign: Sign,
    theta: f64,
}

/// Rotation angle that prepares `|1⟩` with probability `p`.
pub fn preparation_angle(p: f64) -> f64 {
    2.0 * p.sqrt().asin()
}

/// Translates a [`RegulatoryGraph`] into a [`Circuit`].
///
/// The circuit has one qubit and one classical bit per gene, in the graph's
/// gene order:
///
/// ```text
///   prepare ─┬─ barrier ─ regulation layer ─┬─ measure
///            └──────────── × steps ─────────┘
/// ```
#[derive(Debug, Clone, Default)]
pub struct CircuitEncoder {
    config: EncodingConfig,
}

impl CircuitEncoder {
    /// Create an encoder.
    pub fn new(config: EncodingConfig) -> Self {
        Self { config }
    }

    /// The configuration in use.
    pub fn config(&self) -> &EncodingConfig {
        &self.config
    }

    /// Encode a network.
    pub fn encode(&self, graph: &RegulatoryGraph) -> EncodeResult<EncodedCircuit> {
        self.encode_with_limit(graph, None)
    }

    /// Encode a network for a backend, checking its qubit capacity.
    pub fn encode_for(
        &self,
        graph: &RegulatoryGraph,
        capabilities: &Capabilities,
    ) -> EncodeResult<EncodedCircuit> {
        self.encode_with_limit(graph, Some(capabilities))
    }

    #[instrument(skip(self, graph, capabilities), fields(genes = graph.num_genes(), edges = graph.num_edges()))]
    fn encode_with_limit(
        &self,
        graph: &RegulatoryGraph,
        capabilities: Option<&Capabilities>,
    ) -> EncodeResult<EncodedCircuit> {
        self.config.validate()?;
        if graph.is_empty() {
            return Err(EncodeError::EmptyNetwork);
        }
        self.check_budget(graph.num_genes(), capabilities)?;

        let edges = self.resolve_edges(graph)?;

        let mut circuit = Circuit::new("grn");
        for gene in graph.genes() {
            circuit.add_labelled_qubit(gene.name());
            circuit.add_clbit();
        }

        for (i, gene) in graph.genes().iter().enumerate() {
            let qubit = QubitId(index(i, graph.num_genes())?);
            match gene.initial() {
                p if p <= 0.0 => {}
                p if p >= 1.0 => {
                    circuit.x(qubit)?;
                }
                p => {
                    circuit.ry(preparation_angle(p), qubit)?;
                }
            }
        }

        for _ in 0..self.config.steps {
            circuit.barrier_all()?;
            for edge in &edges {
                self.append_edge(&mut circuit, edge)?;
            }
        }

        circuit.measure_all()?;

        debug!(
            qubits = circuit.num_qubits(),
            instructions = circuit.len(),
            depth = circuit.depth(),
            steps = self.config.steps,
            encoding = ?self.config.encoding,
            "Encoded regulatory network"
        );

        Ok(EncodedCircuit {
            circuit,
            ordering: graph.ordering().clone(),
        })
    }

    fn check_budget(&self, genes: usize, capabilities: Option<&Capabilities>) -> EncodeResult<()> {
        let limits = self
            .config
            .max_qubits
            .map(|limit| (limit, "max_qubits".to_string()))
            .into_iter()
            .chain(capabilities.map(|caps| (caps.num_qubits, format!("backend '{}'", caps.name))));

        for (limit, limit_source) in limits {
            if genes > limit as usize {
                return Err(EncodeError::QubitBudgetExceeded {
                    genes,
                    limit,
                    limit_source,
                });
            }
        }
        Ok(())
    }

    /// Resolve edges to qubits and angles, in application order.
    fn resolve_edges(&self, graph: &RegulatoryGraph) -> EncodeResult<Vec<ResolvedEdge>> {
        let mut indexed: Vec<_> = graph.indexed_edges().collect();
        if self.config.order == EdgeOrder::SourceMajor {
            // Keyed on names so the layer does not depend on gene listing order.
            indexed.sort_by(|(_, _, a), (_, _, b)| {
                a.source.cmp(&b.source).then_with(|| a.target.cmp(&b.target))
            });
        }

        let genes = graph.num_genes();
        let mut edges = Vec::with_capacity(indexed.len());
        for (source, target, edge) in indexed {
            if self.config.encoding == EdgeEncoding::Rotation && edge.sign == Sign::Repressing {
                return Err(EncodeError::RepressionUnsupported {
                    source_gene: edge.source.clone(),
                    target_gene: edge.target.clone(),
                });
            }
            let theta = self.config.angle.angle(edge.weight).ok_or_else(|| {
                EncodeError::AngleOutOfRange {
                    source_gene: edge.source.clone(),
                    target_gene: edge.target.clone(),
                    angle: self.config.angle.raw_angle(edge.weight),
                    max: MAX_ANGLE,
                }
            })?;
            edges.push(ResolvedEdge {
                source: index(source, genes)?,
                target: index(target, genes)?,
                sign: edge.sign,
                theta,
            });
        }
        Ok(edges)
    }

    fn append_edge(&self, circuit: &mut Circuit, edge: &ResolvedEdge) -> EncodeResult<()> {
        let source = QubitId(edge.source);
        let target = QubitId(edge.target);

        match (self.config.encoding, edge.source == edge.target) {
            (EdgeEncoding::Transfer, false) => {
                let direction = match edge.sign {
                    Sign::Activating => TransferDirection::Excite,
                    Sign::Repressing => TransferDirection::Relax,
                };
                circuit.transfer(edge.theta, direction, source, target)?;
            }
            (EdgeEncoding::Transfer, true) => {
                // A self-activating gene only sustains itself.
                if edge.sign == Sign::Repressing {
                    circuit.decay(edge.theta, source)?;
                }
            }
            (EdgeEncoding::Rotation, false) => {
                circuit.cry(edge.theta, source, target)?;
            }
            (EdgeEncoding::Rotation, true) => {
                circuit.ry(edge.theta, source)?;
            }
        }
        Ok(())
    }
}

fn index(i: usize, genes: usize) -> EncodeResult<u32> {
    u32::try_from(i).map_err(|_| EncodeError::QubitBudgetExceeded {
        genes,
        limit: u32::MAX,
        limit_source: "qubit index width".to_string(),
    })
}
