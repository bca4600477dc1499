//! # Graph View
//!
//! The read-only graph contract the exporter consumes, plus `Graph`, a
//! minimal insertion-ordered implementation of it.
//!
//! The exporter iterates the vertex set once and the edge set once, in the
//! graph's native order. It never mutates the graph.

use crate::primitives::DEFAULT_EDGE_WEIGHT;
use std::collections::BTreeSet;

// =============================================================================
// GRAPH VIEW TRAIT
// =============================================================================

/// Read-only view of a directed or undirected graph.
///
/// Directedness only changes how a caller reads `source`/`target`; the
/// exported document has the same shape either way.
pub trait GraphView {
    /// Vertex handle. `Ord` lets the exporter map edge endpoints to the ids
    /// resolved during the vertex pass.
    type Vertex: Ord + Clone;

    /// Edge handle.
    type Edge;

    /// All vertices in iteration order.
    fn vertices(&self) -> impl Iterator<Item = Self::Vertex>;

    /// All edges in iteration order.
    fn edges(&self) -> impl Iterator<Item = Self::Edge>;

    /// Source endpoint of an edge, `None` for an edge the graph does not hold.
    fn source(&self, edge: &Self::Edge) -> Option<Self::Vertex>;

    /// Target endpoint of an edge, `None` for an edge the graph does not hold.
    fn target(&self, edge: &Self::Edge) -> Option<Self::Vertex>;

    /// Whether edges carry weights.
    fn is_weighted(&self) -> bool;

    /// Weight of an edge, `DEFAULT_EDGE_WEIGHT` when unset.
    fn weight(&self, edge: &Self::Edge) -> f64;
}

// =============================================================================
// GRAPH IMPLEMENTATION
// =============================================================================

/// Handle of an edge in a [`Graph`]: its insertion index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EdgeId(pub usize);

/// One stored edge.
#[derive(Debug, Clone, PartialEq)]
pub struct EdgeRecord<V> {
    pub source: V,
    pub target: V,
    /// Explicit weight, `None` until set.
    pub weight: Option<f64>,
}

/// Insertion-ordered graph.
///
/// Vertices and edges iterate in the order they were added. Multiple edges
/// between the same endpoints and self-loops are allowed.
#[derive(Debug, Clone)]
pub struct Graph<V> {
    directed: bool,
    weighted: bool,

    /// Vertices in insertion order.
    vertices: Vec<V>,

    /// Membership index over `vertices`.
    index: BTreeSet<V>,

    /// Edges in insertion order; `EdgeId` is the position.
    edges: Vec<EdgeRecord<V>>,
}

impl<V: Ord + Clone> Graph<V> {
    fn with_kind(directed: bool) -> Self {
        Self {
            directed,
            weighted: false,
            vertices: Vec::new(),
            index: BTreeSet::new(),
            edges: Vec::new(),
        }
    }

    /// Create an empty directed graph.
    #[must_use]
    pub fn directed() -> Self {
        Self::with_kind(true)
    }

    /// Create an empty undirected graph.
    #[must_use]
    pub fn undirected() -> Self {
        Self::with_kind(false)
    }

    /// Make the graph weighted.
    #[must_use]
    pub fn weighted(mut self) -> Self {
        self.weighted = true;
        self
    }

    #[must_use]
    pub fn is_directed(&self) -> bool {
        self.directed
    }

    /// Add a vertex. Returns `false` if it was already present.
    pub fn add_vertex(&mut self, vertex: V) -> bool {
        if !self.index.insert(vertex.clone()) {
            return false;
        }
        self.vertices.push(vertex);
        true
    }

    /// Add an edge between two existing vertices.
    ///
    /// Returns `None` if either endpoint is missing.
    pub fn add_edge(&mut self, source: V, target: V) -> Option<EdgeId> {
        if !self.index.contains(&source) || !self.index.contains(&target) {
            return None;
        }
        let id = EdgeId(self.edges.len());
        self.edges.push(EdgeRecord {
            source,
            target,
            weight: None,
        });
        Some(id)
    }

    /// Set an edge weight. Returns `false` on unweighted graphs or unknown edges.
    pub fn set_edge_weight(&mut self, edge: EdgeId, weight: f64) -> bool {
        if !self.weighted {
            return false;
        }
        match self.edges.get_mut(edge.0) {
            Some(record) => {
                record.weight = Some(weight);
                true
            }
            None => false,
        }
    }

    /// Weight of an edge: the explicit one, else `DEFAULT_EDGE_WEIGHT`.
    #[must_use]
    pub fn edge_weight(&self, edge: EdgeId) -> f64 {
        self.edges
            .get(edge.0)
            .and_then(|record| record.weight)
            .unwrap_or(DEFAULT_EDGE_WEIGHT)
    }

    /// Look up an edge.
    #[must_use]
    pub fn edge(&self, edge: EdgeId) -> Option<&EdgeRecord<V>> {
        self.edges.get(edge.0)
    }

    #[must_use]
    pub fn contains_vertex(&self, vertex: &V) -> bool {
        self.index.contains(vertex)
    }

    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }
}

impl<V: Ord + Clone> Default for Graph<V> {
    fn default() -> Self {
        Self::directed()
    }
}

impl<V: Ord + Clone> GraphView for Graph<V> {
    type Vertex = V;
    type Edge = EdgeId;

    fn vertices(&self) -> impl Iterator<Item = V> {
        self.vertices.iter().cloned()
    }

    fn edges(&self) -> impl Iterator<Item = EdgeId> {
        (0..self.edges.len()).map(EdgeId)
    }

    fn source(&self, edge: &EdgeId) -> Option<V> {
        self.edge(*edge).map(|record| record.source.clone())
    }

    fn target(&self, edge: &EdgeId) -> Option<V> {
        self.edge(*edge).map(|record| record.target.clone())
    }

    fn is_weighted(&self) -> bool {
        self.weighted
    }

    fn weight(&self, edge: &EdgeId) -> f64 {
        self.edge_weight(*edge)
    }
}

// =============================================================================
// TESTS
// =============================================================================
