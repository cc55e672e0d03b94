//! The regulatory graph and its builder.

use petgraph::Direction;
use petgraph::algo::is_cyclic_directed;
use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::EdgeRef;
use rustc_hash::FxHashSet;
use tracing::debug;

use crate::error::{NetworkError, NetworkResult};
use crate::gene::{Gene, RegulatoryEdge, Sign};
use crate::observations::activation_ratios;
use crate::ordering::GeneOrdering;

/// A validated gene regulatory network.
///
/// Node `i` of the underlying directed graph is gene `i` of [`genes`]; edge
/// weights are positions in [`edges`]. The graph may contain cycles.
///
/// [`genes`]: RegulatoryGraph::genes
/// [`edges`]: RegulatoryGraph::edges
#[derive(Debug, Clone)]
pub struct RegulatoryGraph {
    genes: Vec<Gene>,
    edges: Vec<RegulatoryEdge>,
    endpoints: Vec<(usize, usize)>,
    graph: DiGraph<(), usize>,
    ordering: GeneOrdering,
    autoregulation: bool,
}

impl RegulatoryGraph {
    /// Start building a graph.
    pub fn builder() -> GraphBuilder {
        GraphBuilder::default()
    }

    /// Build a graph from genes and edges, with self-loops disallowed.
    pub fn new(genes: Vec<Gene>, edges: Vec<RegulatoryEdge>) -> NetworkResult<Self> {
        Self::construct(genes, edges, false)
    }

    /// Build a graph from genes and edges.
    pub fn construct(
        genes: Vec<Gene>,
        edges: Vec<RegulatoryEdge>,
        allow_autoregulation: bool,
    ) -> NetworkResult<Self> {
        let ordering = GeneOrdering::new(genes.iter().map(|g| g.name().to_string()))?;

        for gene in &genes {
            let p = gene.initial();
            if !p.is_finite() || !(0.0..=1.0).contains(&p) {
                return Err(NetworkError::InvalidInitialProbability {
                    gene: gene.name().to_string(),
                    value: p,
                });
            }
        }

        let mut graph = DiGraph::with_capacity(genes.len(), edges.len());
        for _ in &genes {
            graph.add_node(());
        }

        let mut seen = FxHashSet::default();
        let mut endpoints = Vec::with_capacity(edges.len());
        for (position, edge) in edges.iter().enumerate() {
            let resolve = |name: &str| {
                ordering
                    .position(name)
                    .ok_or_else(|| NetworkError::UnknownEdgeEndpoint {
                        source_gene: edge.source.clone(),
                        target_gene: edge.target.clone(),
                        missing: name.to_string(),
                    })
            };
            let source = resolve(&edge.source)?;
            let target = resolve(&edge.target)?;

            if !edge.weight.is_finite() || edge.weight < 0.0 {
                return Err(NetworkError::InvalidWeight {
                    source_gene: edge.source.clone(),
                    target_gene: edge.target.clone(),
                    value: edge.weight,
                });
            }
            if source == target && !allow_autoregulation {
                return Err(NetworkError::SelfLoop {
                    gene: edge.source.clone(),
                });
            }
            if !seen.insert((source, target)) {
                return Err(NetworkError::DuplicateEdge {
                    source_gene: edge.source.clone(),
                    target_gene: edge.target.clone(),
                });
            }

            graph.add_edge(NodeIndex::new(source), NodeIndex::new(target), position);
            endpoints.push((source, target));
        }

        debug!(
            genes = genes.len(),
            edges = edges.len(),
            autoregulation = allow_autoregulation,
            "Built regulatory graph"
        );

        Ok(Self {
            genes,
            edges,
            endpoints,
            graph,
            ordering,
            autoregulation: allow_autoregulation,
        })
    }

    /// Genes in insertion order.
    pub fn genes(&self) -> &[Gene] {
        &self.genes
    }

    /// Edges in insertion order.
    pub fn edges(&self) -> &[RegulatoryEdge] {
        &self.edges
    }

    /// Edges paired with their `(source, target)` gene indices, in insertion order.
    pub fn indexed_edges(&self) -> impl Iterator<Item = (usize, usize, &RegulatoryEdge)> {
        self.endpoints
            .iter()
            .zip(&self.edges)
            .map(|(&(s, t), edge)| (s, t, edge))
    }

    /// Look up a gene by name.
    pub fn gene(&self, name: &str) -> Option<&Gene> {
        self.index_of(name).map(|i| &self.genes[i])
    }

    /// Index (and qubit) of a gene.
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.ordering.position(name)
    }

    /// Edges regulating `gene`, in insertion order.
    pub fn in_edges(&self, gene: &str) -> NetworkResult<Vec<&RegulatoryEdge>> {
        self.adjacent(gene, Direction::Incoming)
    }

    /// Edges regulated by `gene`, in insertion order.
    pub fn out_edges(&self, gene: &str) -> NetworkResult<Vec<&RegulatoryEdge>> {
        self.adjacent(gene, Direction::Outgoing)
    }

    fn adjacent(&self, gene: &str, direction: Direction) -> NetworkResult<Vec<&RegulatoryEdge>> {
        let index = self.index_of(gene).ok_or_else(|| NetworkError::UnknownGene {
            gene: gene.to_string(),
        })?;
        let mut positions: Vec<usize> = self
            .graph
            .edges_directed(NodeIndex::new(index), direction)
            .map(|e| *e.weight())
            .collect();
        positions.sort_unstable();
        Ok(positions.into_iter().map(|p| &self.edges[p]).collect())
    }

    /// The gene ↔ qubit ordering.
    pub fn ordering(&self) -> &GeneOrdering {
        &self.ordering
    }

    /// Number of genes.
    pub fn num_genes(&self) -> usize {
        self.genes.len()
    }

    /// Number of edges.
    pub fn num_edges(&self) -> usize {
        self.edges.len()
    }

    /// True if the graph has no genes.
    pub fn is_empty(&self) -> bool {
        self.genes.is_empty()
    }

    /// Whether self-loops were allowed when the graph was built.
    pub fn allows_autoregulation(&self) -> bool {
        self.autoregulation
    }

    /// Whether the network contains a feedback loop (self-loops included).
    pub fn has_cycle(&self) -> bool {
        is_cyclic_directed(&self.graph)
    }
}

/// Builder for [`RegulatoryGraph`].
#[derive(Debug, Clone, Default)]
pub struct GraphBuilder {
    genes: Vec<Gene>,
    edges: Vec<RegulatoryEdge>,
    autoregulation: bool,
}

impl GraphBuilder {
    /// Add a gene with its initial expression probability.
    #[must_use]
    pub fn gene(mut self, name: impl Into<String>, initial: f64) -> Self {
        self.genes.push(Gene::new(name, initial));
        self
    }

    /// Add an activating edge with the default weight.
    #[must_use]
    pub fn activates(mut self, source: impl Into<String>, target: impl Into<String>) -> Self {
        self.edges.push(RegulatoryEdge::activating(source, target));
        self
    }

    /// Add a repressing edge with the default weight.
    #[must_use]
    pub fn represses(mut self, source: impl Into<String>, target: impl Into<String>) -> Self {
        self.edges.push(RegulatoryEdge::repressing(source, target));
        self
    }

    /// Add an edge with an explicit sign and weight.
    #[must_use]
    pub fn edge(
        mut self,
        source: impl Into<String>,
        target: impl Into<String>,
        sign: Sign,
        weight: f64,
    ) -> Self {
        self.edges.push(RegulatoryEdge::new(source, target, sign, weight));
        self
    }

    /// Allow or forbid self-loops.
    #[must_use]
    pub fn allow_autoregulation(mut self, allow: bool) -> Self {
        self.autoregulation = allow;
        self
    }

    /// Replace every gene's initial probability with its activation ratio in
    /// a cells × genes observation matrix whose columns follow gene insertion
    /// order.
    pub fn initial_from_observations<R>(mut self, observations: &[R]) -> NetworkResult<Self>
    where
        R: AsRef<[f64]>,
    {
        let ratios = activation_ratios(observations, self.genes.len())?;
        self.genes = self
            .genes
            .into_iter()
            .zip(ratios)
            .map(|(gene, p)| Gene::new(gene.name(), p))
            .collect();
        Ok(self)
    }

    /// Validate and build the graph.
    pub fn build(self) -> NetworkResult<RegulatoryGraph> {
        RegulatoryGraph::construct(self.genes, self.edges, self.autoregulation)
    }
}
