//! # Graph Document Assembler
//!
//! Builds the JSON document for one export call:
//!
//! ```text
//! {"creator":..,"version":..,"nodes":[{"id":..,<attrs>},..],"edges":[{"id":..,"source":..,"target":..,<attrs>[,"weight":..]},..]}
//! ```
//!
//! Assembly is two-phase. `JsonDocument::from_graph` walks the vertices and
//! then the edges once each, resolves every id, encodes every literal and
//! runs every validation. Only a fully valid document reaches
//! `JsonDocument::write_to`, so an encoding failure never leaves bytes in
//! the sink.
//!
//! Field order inside an object is part of the output contract: structural
//! fields first (`id`, then `source`, `target` for edges), then supplied
//! attributes in supplier order, then the structural `weight` when the
//! graph is weighted and the supplier did not provide one.

use crate::attribute::{AttributeMap, AttributeSupplier};
use crate::encoder::{self, EncodeError};
use crate::graph::GraphView;
use crate::identity::IdentityResolver;
use crate::primitives::{
    self, CREATOR, CREATOR_FIELD, EDGES_FIELD, FORMAT_VERSION, ID_FIELD, NODES_FIELD,
    SOURCE_FIELD, TARGET_FIELD, VERSION_FIELD, WEIGHT_FIELD,
};
use crate::sink::CountingSink;
use crate::{ComponentKind, ExportError, Result};
use std::collections::BTreeMap;
use std::io::{self, Write};

// =============================================================================
// JSON OBJECT
// =============================================================================

/// One output object as pre-encoded `(key, literal)` pairs in output order.
#[derive(Debug, Clone, Default, PartialEq)]
struct JsonObject {
    fields: Vec<(String, String)>,
}

impl JsonObject {
    fn push(&mut self, key: String, literal: String) {
        self.fields.push((key, literal));
    }

    fn write_to<W: Write + ?Sized>(&self, out: &mut W) -> io::Result<()> {
        out.write_all(b"{")?;
        for (i, (key, literal)) in self.fields.iter().enumerate() {
            if i > 0 {
                out.write_all(b",")?;
            }
            out.write_all(key.as_bytes())?;
            out.write_all(b":")?;
            out.write_all(literal.as_bytes())?;
        }
        out.write_all(b"}")
    }
}

/// Write a `[..]` array of objects.
fn write_array<W: Write + ?Sized>(out: &mut W, objects: &[JsonObject]) -> io::Result<()> {
    out.write_all(b"[")?;
    for (i, object) in objects.iter().enumerate() {
        if i > 0 {
            out.write_all(b",")?;
        }
        object.write_to(out)?;
    }
    out.write_all(b"]")
}

// =============================================================================
// COMPONENT CONTEXT
// =============================================================================

/// The component currently being encoded, for error messages.
struct Location<'a> {
    component: ComponentKind,
    id: &'a str,
}

impl Location<'_> {
    fn lift(&self, field: &str, err: EncodeError) -> ExportError {
        match err {
            EncodeError::NonFinite(value) => ExportError::InvalidNumericValue {
                component: self.component,
                id: self.id.to_string(),
                field: field.to_string(),
                value,
            },
            EncodeError::Json(e) => ExportError::Serialization(format!(
                "{} {:?} field '{}': {}",
                self.component, self.id, field, e
            )),
        }
    }

    fn key(&self, name: &str) -> Result<String> {
        encoder::encode_string(name).map_err(|e| self.lift(name, e))
    }

    fn text(&self, field: &str, text: &str) -> Result<String> {
        encoder::encode_string(text).map_err(|e| self.lift(field, e))
    }

    /// Encode structural fields followed by supplied attributes.
    fn object(&self, structural: &[(&str, &str)], attributes: AttributeMap) -> Result<JsonObject> {
        let mut object = JsonObject::default();

        for (name, text) in structural {
            object.push(self.key(name)?, self.text(name, text)?);
        }

        for (name, value) in attributes {
            if primitives::is_reserved(&name) {
                return Err(ExportError::ReservedAttribute {
                    component: self.component,
                    id: self.id.to_string(),
                    name,
                });
            }
            let literal = encoder::encode_value(&value).map_err(|e| self.lift(&name, e))?;
            object.push(self.key(&name)?, literal);
        }

        Ok(object)
    }
}

// =============================================================================
// JSON DOCUMENT
// =============================================================================

/// A fully resolved, validated and encoded graph document.
#[derive(Debug, Clone, PartialEq)]
pub struct JsonDocument {
    nodes: Vec<JsonObject>,
    edges: Vec<JsonObject>,
}

impl JsonDocument {
    /// Assemble the document for `graph`.
    ///
    /// # Errors
    ///
    /// - `NullIdentity` if a resolver returns no id
    /// - `DanglingEdge` if an edge endpoint is missing or not a vertex of the graph
    /// - `ReservedAttribute` if a supplier reuses `id`, `source` or `target`
    /// - `InvalidNumericValue` for a NaN or infinite float attribute or weight
    pub fn from_graph<G: GraphView>(
        graph: &G,
        vertex_ids: &dyn IdentityResolver<G::Vertex>,
        vertex_attributes: &dyn AttributeSupplier<G::Vertex>,
        edge_ids: &dyn IdentityResolver<G::Edge>,
        edge_attributes: &dyn AttributeSupplier<G::Edge>,
    ) -> Result<Self> {
        // Vertex pass: resolved ids are kept for the edge endpoints.
        let mut resolved: BTreeMap<G::Vertex, String> = BTreeMap::new();
        let mut nodes = Vec::new();

        for (sequence, vertex) in (1u64..).zip(graph.vertices()) {
            let id = vertex_ids
                .id_of(&vertex, sequence)
                .ok_or(ExportError::NullIdentity {
                    component: ComponentKind::Vertex,
                    sequence,
                })?;

            let location = Location {
                component: ComponentKind::Vertex,
                id: &id,
            };
            let object = location.object(
                &[(ID_FIELD, id.as_str())],
                vertex_attributes.attributes_of(&vertex),
            )?;
            tracing::trace!(sequence, id = %id, "vertex encoded");

            nodes.push(object);
            resolved.insert(vertex, id);
        }

        // Edge pass.
        let weighted = graph.is_weighted();
        let mut edges = Vec::new();

        for (sequence, edge) in (1u64..).zip(graph.edges()) {
            let id = edge_ids
                .id_of(&edge, sequence)
                .ok_or(ExportError::NullIdentity {
                    component: ComponentKind::Edge,
                    sequence,
                })?;

            let endpoints = (graph.source(&edge), graph.target(&edge));
            let (Some(source), Some(target)) = (
                endpoints.0.and_then(|v| resolved.get(&v)),
                endpoints.1.and_then(|v| resolved.get(&v)),
            ) else {
                return Err(ExportError::DanglingEdge { id });
            };

            let attributes = edge_attributes.attributes_of(&edge);
            let supplies_weight = attributes.contains(WEIGHT_FIELD);

            let location = Location {
                component: ComponentKind::Edge,
                id: &id,
            };
            let mut object = location.object(
                &[
                    (ID_FIELD, id.as_str()),
                    (SOURCE_FIELD, source.as_str()),
                    (TARGET_FIELD, target.as_str()),
                ],
                attributes,
            )?;

            // A supplied weight takes precedence over the structural one.
            if weighted && !supplies_weight {
                let literal = encoder::encode_weight(graph.weight(&edge))
                    .map_err(|e| location.lift(WEIGHT_FIELD, e))?;
                object.push(location.key(WEIGHT_FIELD)?, literal);
            }
            tracing::trace!(sequence, id = %id, "edge encoded");

            edges.push(object);
        }

        Ok(Self { nodes, edges })
    }

    /// Number of objects in the `nodes` array.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of objects in the `edges` array.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Write the document into `sink`. Returns the number of bytes written.
    ///
    /// # Errors
    ///
    /// `SinkWrite` if the sink rejects a write. Bytes written before the
    /// failure stay in the sink.
    pub fn write_to<W: Write + ?Sized>(&self, sink: &mut W) -> Result<u64> {
        let header = [
            (CREATOR_FIELD, CREATOR),
            (VERSION_FIELD, FORMAT_VERSION),
        ];
        let mut prefix = String::from("{");
        for (key, value) in header {
            prefix.push_str(&literal(key)?);
            prefix.push(':');
            prefix.push_str(&literal(value)?);
            prefix.push(',');
        }

        let mut out = CountingSink::new(sink);
        out.write_all(prefix.as_bytes())?;
        out.write_all(literal(NODES_FIELD)?.as_bytes())?;
        out.write_all(b":")?;
        write_array(&mut out, &self.nodes)?;
        out.write_all(b",")?;
        out.write_all(literal(EDGES_FIELD)?.as_bytes())?;
        out.write_all(b":")?;
        write_array(&mut out, &self.edges)?;
        out.write_all(b"}")?;

        Ok(out.written())
    }
}

/// Encode a fixed document string.
fn literal(text: &str) -> Result<String> {
    encoder::encode_string(text).map_err(|e| ExportError::Serialization(e.to_string()))
}

// =============================================================================
// TESTS
// =============================================================================
