//! # Graph Descriptions
//!
//! The on-disk input format of the CLI and its conversion into an
//! exportable graph.
//!
//! ```json
//! {
//!   "directed": true,
//!   "weighted": true,
//!   "vertices": [{ "id": "a", "attributes": { "color": "red" } }],
//!   "edges": [{ "id": "ab", "source": "a", "target": "b", "weight": 2.5 }]
//! }
//! ```
//!
//! The same shape is accepted as TOML. Attribute values may be strings,
//! booleans, integers or floats; anything else is rejected.

use crate::AppError;
use clap::ValueEnum;
use graphjson_core::attribute::{self, AttributeMap};
use graphjson_core::{
    AttributeSupplier, AttributeValue, DisplayIds, EdgeId, Graph, GraphView, IdentityResolver,
    JsonExporter, SequentialIds,
};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;

// =============================================================================
// DESCRIPTION FORMAT
// =============================================================================

/// Serialized form of a description file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum InputFormat {
    Json,
    Toml,
}

impl InputFormat {
    /// Guess the format from a file extension, defaulting to JSON.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("toml") => Self::Toml,
            _ => Self::Json,
        }
    }
}

/// A whole graph as written in a description file.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GraphDescription {
    #[serde(default = "default_directed")]
    pub directed: bool,
    #[serde(default)]
    pub weighted: bool,
    #[serde(default)]
    pub vertices: Vec<VertexDescription>,
    #[serde(default)]
    pub edges: Vec<EdgeDescription>,
}

fn default_directed() -> bool {
    true
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct VertexDescription {
    pub id: String,
    #[serde(default)]
    pub attributes: serde_json::Map<String, serde_json::Value>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EdgeDescription {
    /// Label used by the `label` edge id strategy.
    #[serde(default)]
    pub id: Option<String>,
    pub source: String,
    pub target: String,
    /// Only meaningful on weighted graphs.
    #[serde(default)]
    pub weight: Option<f64>,
    #[serde(default)]
    pub attributes: serde_json::Map<String, serde_json::Value>,
}

impl GraphDescription {
    /// Parse a description from text.
    pub fn parse(text: &str, format: InputFormat) -> Result<Self, AppError> {
        let description = match format {
            InputFormat::Json => serde_json::from_str(text)?,
            InputFormat::Toml => toml::from_str(text)?,
        };
        Ok(description)
    }

    /// Build the graph and its attribute tables.
    pub fn into_graph(self) -> Result<LoadedGraph, AppError> {
        let mut graph = if self.directed {
            Graph::directed()
        } else {
            Graph::undirected()
        };
        if self.weighted {
            graph = graph.weighted();
        }

        let mut vertex_attributes = BTreeMap::new();
        for vertex in self.vertices {
            if !graph.add_vertex(vertex.id.clone()) {
                return Err(AppError::Description(format!(
                    "duplicate vertex id {:?}",
                    vertex.id
                )));
            }
            vertex_attributes.insert(vertex.id, convert_attributes(vertex.attributes)?);
        }

        let mut edge_labels = Vec::with_capacity(self.edges.len());
        let mut edge_attributes = Vec::with_capacity(self.edges.len());
        for (index, edge) in self.edges.into_iter().enumerate() {
            let Some(handle) = graph.add_edge(edge.source.clone(), edge.target.clone()) else {
                return Err(AppError::Description(format!(
                    "edge #{} connects unknown vertices {:?} -> {:?}",
                    index + 1,
                    edge.source,
                    edge.target
                )));
            };
            if let Some(weight) = edge.weight {
                if !graph.set_edge_weight(handle, weight) {
                    return Err(AppError::Description(format!(
                        "edge #{} has a weight but the graph is not weighted",
                        index + 1
                    )));
                }
            }
            edge_labels.push(edge.id);
            edge_attributes.push(convert_attributes(edge.attributes)?);
        }

        tracing::debug!(
            vertices = graph.vertex_count(),
            edges = graph.edge_count(),
            weighted = graph.is_weighted(),
            "graph description loaded"
        );

        Ok(LoadedGraph {
            graph,
            vertex_attributes,
            edge_labels,
            edge_attributes,
        })
    }
}

fn convert_attributes(
    raw: serde_json::Map<String, serde_json::Value>,
) -> Result<AttributeMap, AppError> {
    let mut map = AttributeMap::new();
    for (name, value) in raw {
        map.insert(name, AttributeValue::try_from(value)?);
    }
    Ok(map)
}

// =============================================================================
// ID STRATEGIES
// =============================================================================

/// How component ids are chosen on the command line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum IdStrategy {
    /// 1-based position in the description.
    #[default]
    Sequential,
    /// The id written in the description file.
    Label,
}

/// Vertex resolver selected at runtime.
#[derive(Debug, Clone, Copy)]
pub struct VertexIds(IdStrategy);

impl IdentityResolver<String> for VertexIds {
    fn id_of(&self, vertex: &String, sequence: u64) -> Option<String> {
        match self.0 {
            IdStrategy::Sequential => SequentialIds.id_of(vertex, sequence),
            IdStrategy::Label => DisplayIds.id_of(vertex, sequence),
        }
    }
}

/// Edge resolver selected at runtime. Unlabelled edges have no label id.
#[derive(Debug, Clone, Copy)]
pub struct EdgeIds<'a> {
    strategy: IdStrategy,
    labels: &'a [Option<String>],
}

impl IdentityResolver<EdgeId> for EdgeIds<'_> {
    fn id_of(&self, edge: &EdgeId, sequence: u64) -> Option<String> {
        match self.strategy {
            IdStrategy::Sequential => SequentialIds.id_of(edge, sequence),
            IdStrategy::Label => self.labels.get(edge.0).cloned().flatten(),
        }
    }
}

// =============================================================================
// LOADED GRAPH
// =============================================================================

/// A description turned into a graph plus the metadata the exporter reads.
#[derive(Debug, Clone)]
pub struct LoadedGraph {
    pub graph: Graph<String>,
    vertex_attributes: BTreeMap<String, AttributeMap>,
    edge_labels: Vec<Option<String>>,
    edge_attributes: Vec<AttributeMap>,
}

impl LoadedGraph {
    /// Load and convert a description file.
    pub fn from_text(text: &str, format: InputFormat) -> Result<Self, AppError> {
        GraphDescription::parse(text, format)?.into_graph()
    }

    /// Exporter wired to this graph's attribute tables.
    pub fn exporter(
        &self,
        vertex_ids: IdStrategy,
        edge_ids: IdStrategy,
    ) -> JsonExporter<
        VertexIds,
        impl AttributeSupplier<String> + '_,
        EdgeIds<'_>,
        impl AttributeSupplier<EdgeId> + '_,
    > {
        JsonExporter::new()
            .with_vertex_ids(VertexIds(vertex_ids))
            .with_vertex_attributes(attribute::from_fn(move |vertex: &String| {
                self.vertex_attributes
                    .get(vertex)
                    .cloned()
                    .unwrap_or_default()
            }))
            .with_edge_ids(EdgeIds {
                strategy: edge_ids,
                labels: &self.edge_labels,
            })
            .with_edge_attributes(attribute::from_fn(move |edge: &EdgeId| {
                self.edge_attributes
                    .get(edge.0)
                    .cloned()
                    .unwrap_or_default()
            }))
    }
}

// =============================================================================
// TESTS
// =============================================================================
