//! # Exporter
//!
//! Public entry point: wires a graph, the identity and attribute providers
//! and a sink into one export call.
//!
//! ```text
//! JsonExporter::export(graph, sink)
//!   → JsonDocument::from_graph   (ids, attributes, encoding, validation)
//!   → JsonDocument::write_to     (append-only writes into the sink)
//! ```
//!
//! Providers are configured through a type-changing builder. Anything left
//! unset falls back to `SequentialIds` / `NoAttributes`, so an exporter can
//! never be built with a provider missing. An exporter holds no per-export
//! state and can be reused across calls and graphs.

use crate::attribute::{AttributeSupplier, NoAttributes};
use crate::document::JsonDocument;
use crate::graph::GraphView;
use crate::identity::{IdentityResolver, SequentialIds};
use crate::{ExportError, Result};
use std::io::Write;

// =============================================================================
// EXPORT SUMMARY
// =============================================================================

/// What one successful export produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExportSummary {
    /// Objects written into the `nodes` array.
    pub nodes: usize,
    /// Objects written into the `edges` array.
    pub edges: usize,
    /// Bytes accepted by the sink.
    pub bytes: u64,
}

// =============================================================================
// JSON EXPORTER
// =============================================================================

/// Graph-to-JSON exporter.
///
/// - `VI` / `EI`: identity resolvers for vertices and edges
/// - `VA` / `EA`: attribute suppliers for vertices and edges
#[derive(Debug, Clone, Default)]
pub struct JsonExporter<
    VI = SequentialIds,
    VA = NoAttributes,
    EI = SequentialIds,
    EA = NoAttributes,
> {
    vertex_ids: VI,
    vertex_attributes: VA,
    edge_ids: EI,
    edge_attributes: EA,
}

impl JsonExporter {
    /// Exporter with sequential ids and no attributes.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl<VI, VA, EI, EA> JsonExporter<VI, VA, EI, EA> {
    /// Replace the vertex identity resolver.
    pub fn with_vertex_ids<R>(self, resolver: R) -> JsonExporter<R, VA, EI, EA> {
        JsonExporter {
            vertex_ids: resolver,
            vertex_attributes: self.vertex_attributes,
            edge_ids: self.edge_ids,
            edge_attributes: self.edge_attributes,
        }
    }

    /// Replace the vertex attribute supplier.
    pub fn with_vertex_attributes<S>(self, supplier: S) -> JsonExporter<VI, S, EI, EA> {
        JsonExporter {
            vertex_ids: self.vertex_ids,
            vertex_attributes: supplier,
            edge_ids: self.edge_ids,
            edge_attributes: self.edge_attributes,
        }
    }

    /// Replace the edge identity resolver.
    pub fn with_edge_ids<R>(self, resolver: R) -> JsonExporter<VI, VA, R, EA> {
        JsonExporter {
            vertex_ids: self.vertex_ids,
            vertex_attributes: self.vertex_attributes,
            edge_ids: resolver,
            edge_attributes: self.edge_attributes,
        }
    }

    /// Replace the edge attribute supplier.
    pub fn with_edge_attributes<S>(self, supplier: S) -> JsonExporter<VI, VA, EI, S> {
        JsonExporter {
            vertex_ids: self.vertex_ids,
            vertex_attributes: self.vertex_attributes,
            edge_ids: self.edge_ids,
            edge_attributes: supplier,
        }
    }

    /// Assemble and validate the document without writing it.
    pub fn document<G>(&self, graph: &G) -> Result<JsonDocument>
    where
        G: GraphView,
        VI: IdentityResolver<G::Vertex>,
        VA: AttributeSupplier<G::Vertex>,
        EI: IdentityResolver<G::Edge>,
        EA: AttributeSupplier<G::Edge>,
    {
        JsonDocument::from_graph(
            graph,
            &self.vertex_ids,
            &self.vertex_attributes,
            &self.edge_ids,
            &self.edge_attributes,
        )
    }

    /// Export `graph` into `sink`.
    ///
    /// The whole document is validated before the first write, so any
    /// encoding error leaves the sink untouched. A sink failure aborts the
    /// call and may leave a prefix of the document behind; callers that
    /// need atomicity should export into a buffer first.
    pub fn export<G, W>(&self, graph: &G, sink: &mut W) -> Result<ExportSummary>
    where
        G: GraphView,
        W: Write + ?Sized,
        VI: IdentityResolver<G::Vertex>,
        VA: AttributeSupplier<G::Vertex>,
        EI: IdentityResolver<G::Edge>,
        EA: AttributeSupplier<G::Edge>,
    {
        tracing::debug!(weighted = graph.is_weighted(), "exporting graph");
        let document = self.document(graph)?;
        let bytes = document.write_to(sink)?;
        sink.flush()?;

        let summary = ExportSummary {
            nodes: document.node_count(),
            edges: document.edge_count(),
            bytes,
        };
        tracing::debug!(
            nodes = summary.nodes,
            edges = summary.edges,
            bytes = summary.bytes,
            "graph exported"
        );
        Ok(summary)
    }

    /// Export `graph` into a fresh byte buffer.
    pub fn export_to_vec<G>(&self, graph: &G) -> Result<Vec<u8>>
    where
        G: GraphView,
        VI: IdentityResolver<G::Vertex>,
        VA: AttributeSupplier<G::Vertex>,
        EI: IdentityResolver<G::Edge>,
        EA: AttributeSupplier<G::Edge>,
    {
        let mut buffer = Vec::new();
        self.export(graph, &mut buffer)?;
        Ok(buffer)
    }

    /// Export `graph` into a `String`.
    pub fn export_to_string<G>(&self, graph: &G) -> Result<String>
    where
        G: GraphView,
        VI: IdentityResolver<G::Vertex>,
        VA: AttributeSupplier<G::Vertex>,
        EI: IdentityResolver<G::Edge>,
        EA: AttributeSupplier<G::Edge>,
    {
        let buffer = self.export_to_vec(graph)?;
        String::from_utf8(buffer).map_err(|e| ExportError::Serialization(e.to_string()))
    }
}

// =============================================================================
// TESTS
// =============================================================================
