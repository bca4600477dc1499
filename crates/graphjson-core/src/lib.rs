//! # graphjson-core
//!
//! The deterministic graph-to-JSON export engine - THE LOGIC.
//!
//! Given a read-only graph view plus identity and attribute providers, this
//! crate produces one whitespace-free JSON document describing the graph's
//! topology and per-component metadata:
//!
//! ```text
//! {"creator":"graphjson exporter","version":"1","nodes":[{"id":"1"},..],"edges":[{"id":"1","source":"1","target":"2"},..]}
//! ```
//!
//! ## Pipeline
//!
//! ```text
//! JsonExporter ─▶ JsonDocument (vertices, then edges)
//!                   ├─ IdentityResolver   → ids
//!                   ├─ AttributeSupplier  → ordered attributes
//!                   └─ encoder            → JSON literals
//!              ─▶ sink (std::io::Write)
//! ```
//!
//! ## Guarantees
//!
//! - Same graph + same providers ⇒ byte-identical output
//! - Array order is graph iteration order; attribute order is supplier order
//! - NaN and infinite floats abort the export before any byte is written
//! - Has NO async, NO network dependencies (pure Rust)

// =============================================================================
// MODULES
// =============================================================================

pub mod attribute;
pub mod document;
pub mod encoder;
pub mod export;
pub mod graph;
pub mod identity;
pub mod primitives;
pub mod sink;
pub mod types;

// =============================================================================
// RE-EXPORTS: Core Types (from types module)
// =============================================================================

pub use types::{ComponentKind, ExportError, Result};

// =============================================================================
// RE-EXPORTS: Export Engine
// =============================================================================

pub use attribute::{AttributeMap, AttributeSupplier, AttributeValue, NoAttributes};
pub use document::JsonDocument;
pub use export::{ExportSummary, JsonExporter};
pub use graph::{EdgeId, EdgeRecord, Graph, GraphView};
pub use identity::{DisplayIds, IdentityResolver, SequentialIds};
pub use primitives::{CREATOR, DEFAULT_EDGE_WEIGHT, FORMAT_VERSION};
