//! # Core Type Definitions
//!
//! This module contains the shared types of the export engine:
//! - Component classification (`ComponentKind`)
//! - Error types (`ExportError`)
//!
//! Every fallible operation in the crate returns `Result<T, ExportError>`.
//! The engine never recovers locally from an error: each variant aborts the
//! export call that raised it.

use std::fmt;
use thiserror::Error;

// =============================================================================
// COMPONENT KIND
// =============================================================================

/// The two classes of graph component the engine exports.
///
/// Vertex ids and edge ids live in separate namespaces, so the kind is part
/// of every diagnostic that names a component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ComponentKind {
    /// A graph vertex, exported into the `nodes` array.
    Vertex,
    /// A graph edge, exported into the `edges` array.
    Edge,
}

impl ComponentKind {
    /// Lowercase name used in error messages and logs.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            ComponentKind::Vertex => "vertex",
            ComponentKind::Edge => "edge",
        }
    }
}

impl fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// =============================================================================
// ERROR TYPES
// =============================================================================

/// Errors that can occur while exporting a graph.
///
/// - No silent failures: a field is never dropped to make a document fit
/// - Every variant is fatal to the export call that produced it
/// - Messages identify the offending component and attribute where known
#[derive(Debug, Error)]
pub enum ExportError {
    /// A floating-point attribute or a structural weight is NaN or infinite.
    #[error(
        "Invalid numeric value {value} for {component} {id:?} field '{field}': JSON has no literal for non-finite numbers"
    )]
    InvalidNumericValue {
        component: ComponentKind,
        id: String,
        field: String,
        value: f64,
    },

    /// An identity resolver produced no id for a component.
    #[error("No identity resolved for {component} #{sequence}")]
    NullIdentity {
        component: ComponentKind,
        sequence: u64,
    },

    /// An input value has no attribute representation.
    #[error("Unsupported attribute type: {0}")]
    UnsupportedAttributeType(String),

    /// A supplied attribute would duplicate a structural field.
    #[error("Attribute '{name}' on {component} {id:?} collides with a structural field")]
    ReservedAttribute {
        component: ComponentKind,
        id: String,
        name: String,
    },

    /// An edge endpoint is not part of the graph's vertex set.
    #[error("Edge {id:?} references a vertex that is not in the graph")]
    DanglingEdge { id: String },

    /// A literal could not be encoded.
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// The sink rejected a write. Never retried.
    #[error("Sink write failure: {0}")]
    SinkWrite(#[from] std::io::Error),
}

/// Result alias used throughout the crate.
pub type Result<T, E = ExportError> = std::result::Result<T, E>;

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn component_kind_display() {
        assert_eq!(ComponentKind::Vertex.to_string(), "vertex");
        assert_eq!(ComponentKind::Edge.to_string(), "edge");
    }

    #[test]
    fn invalid_numeric_value_names_location() {
        let err = ExportError::InvalidNumericValue {
            component: ComponentKind::Vertex,
            id: "7".to_string(),
            field: "score".to_string(),
            value: f64::NAN,
        };
        let msg = err.to_string();
        assert!(msg.contains("vertex \"7\""), "got: {}", msg);
        assert!(msg.contains("'score'"), "got: {}", msg);
        assert!(msg.contains("NaN"), "got: {}", msg);
    }

    #[test]
    fn null_identity_names_sequence() {
        let err = ExportError::NullIdentity {
            component: ComponentKind::Edge,
            sequence: 3,
        };
        assert_eq!(err.to_string(), "No identity resolved for edge #3");
    }

    #[test]
    fn io_error_converts_to_sink_write() {
        let io = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed");
        let err: ExportError = io.into();
        assert!(matches!(err, ExportError::SinkWrite(_)));
    }
}
