//! The gene ↔ qubit ↔ bit position mapping.

use std::sync::Arc;

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::error::{NetworkError, NetworkResult};

/// Ordered list of gene names.
///
/// Position `i` is qubit `i`, classical bit `i`, and character `i` of every
/// measured bitstring. Cloning is a reference-count bump.
#[derive(Clone, Serialize, Deserialize)]
#[serde(try_from = "Vec<String>", into = "Vec<String>")]
pub struct GeneOrdering {
    inner: Arc<Inner>,
}

struct Inner {
    names: Vec<String>,
    positions: FxHashMap<String, usize>,
}

impl GeneOrdering {
    /// Build an ordering, rejecting empty or repeated names.
    pub fn new<I, S>(names: I) -> NetworkResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let names: Vec<String> = names.into_iter().map(Into::into).collect();
        let mut positions = FxHashMap::default();
        for (position, name) in names.iter().enumerate() {
            if name.is_empty() {
                return Err(NetworkError::EmptyGeneName { position });
            }
            if positions.insert(name.clone(), position).is_some() {
                return Err(NetworkError::DuplicateGene { name: name.clone() });
            }
        }
        Ok(Self {
            inner: Arc::new(Inner { names, positions }),
        })
    }

    /// Number of genes.
    pub fn len(&self) -> usize {
        self.inner.names.len()
    }

    /// True if there are no genes.
    pub fn is_empty(&self) -> bool {
        self.inner.names.is_empty()
    }

    /// Gene names in position order.
    pub fn names(&self) -> &[String] {
        &self.inner.names
    }

    /// Name at a position.
    pub fn get(&self, position: usize) -> Option<&str> {
        self.inner.names.get(position).map(String::as_str)
    }

    /// Position of a gene.
    pub fn position(&self, name: &str) -> Option<usize> {
        self.inner.positions.get(name).copied()
    }

    /// Iterate over `(position, name)`.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &str)> {
        self.inner.names.iter().map(String::as_str).enumerate()
    }
}

impl PartialEq for GeneOrdering {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner) || self.inner.names == other.inner.names
    }
}

impl Eq for GeneOrdering {}

impl std::fmt::Debug for GeneOrdering {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("GeneOrdering").field(&self.inner.names).finish()
    }
}

impl std::fmt::Display for GeneOrdering {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.inner.names.join(", "))
    }
}

impl TryFrom<Vec<String>> for GeneOrdering {
    type Error = NetworkError;

    fn try_from(names: Vec<String>) -> Result<Self, Self::Error> {
        Self::new(names)
    }
}

impl From<GeneOrdering> for Vec<String> {
    fn from(ordering: GeneOrdering) -> Self {
        ordering.inner.names.clone()
    }
}
