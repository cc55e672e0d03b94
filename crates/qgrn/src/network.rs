//! Serializable network descriptions.

use qgrn_network::{Gene, RegulatoryEdge, RegulatoryGraph};
use serde::{Deserialize, Serialize};

use crate::error::{GrnError, GrnResult};

/// A network as plain data, before validation.
///
/// ```yaml
/// genes:
///   - { name: lacI, initial: 1.0 }
///   - { name: tetR, initial: 0.0 }
/// edges:
///   - { source: lacI, target: tetR, sign: repressing, weight: 0.8 }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NetworkDescription {
    /// Genes in qubit order.
    pub genes: Vec<Gene>,
    /// Regulatory edges in application order.
    #[serde(default)]
    pub edges: Vec<RegulatoryEdge>,
    /// Accept self-loops.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub allow_autoregulation: bool,
}

impl NetworkDescription {
    /// Parse from JSON text.
    pub fn from_json(text: &str) -> GrnResult<Self> {
        serde_json::from_str(text).map_err(|e| GrnError::Config(format!("invalid network JSON: {e}")))
    }

    /// Parse from YAML text.
    pub fn from_yaml(text: &str) -> GrnResult<Self> {
        serde_yaml_ng::from_str(text)
            .map_err(|e| GrnError::Config(format!("invalid network YAML: {e}")))
    }

    /// Validate into a graph.
    pub fn build(self) -> GrnResult<RegulatoryGraph> {
        Ok(RegulatoryGraph::construct(
            self.genes,
            self.edges,
            self.allow_autoregulation,
        )?)
    }
}

impl From<&RegulatoryGraph> for NetworkDescription {
    fn from(graph: &RegulatoryGraph) -> Self {
        Self {
            genes: graph.genes().to_vec(),
            edges: graph.edges().to_vec(),
            allow_autoregulation: graph.allows_autoregulation(),
        }
    }
}

impl TryFrom<NetworkDescription> for RegulatoryGraph {
    type Error = GrnError;

    fn try_from(description: NetworkDescription) -> GrnResult<Self> {
        description.build()
    }
}
