//! # Document Primitives
//!
//! Hardcoded constants of the JSON document format.
//!
//! These are compiled into the binary and are immutable at runtime.
//! Changing any of them changes the output contract.

/// Producer label written into the `creator` field of every document.
pub const CREATOR: &str = "graphjson exporter";

/// Schema version written into the `version` field of every document.
///
/// Increment this when making breaking changes to the document shape.
pub const FORMAT_VERSION: &str = "1";

/// Weight reported for edges of weighted graphs that carry no explicit weight.
pub const DEFAULT_EDGE_WEIGHT: f64 = 1.0;

// =============================================================================
// FIELD NAMES
// =============================================================================

pub const CREATOR_FIELD: &str = "creator";
pub const VERSION_FIELD: &str = "version";
pub const NODES_FIELD: &str = "nodes";
pub const EDGES_FIELD: &str = "edges";

pub const ID_FIELD: &str = "id";
pub const SOURCE_FIELD: &str = "source";
pub const TARGET_FIELD: &str = "target";
pub const WEIGHT_FIELD: &str = "weight";

/// Structural keys a supplier may not reuse.
///
/// `weight` is deliberately absent: a supplied weight takes precedence over
/// the structural one instead of colliding with it.
pub const RESERVED_FIELDS: [&str; 3] = [ID_FIELD, SOURCE_FIELD, TARGET_FIELD];

/// Check whether an attribute name collides with a structural key.
#[must_use]
pub fn is_reserved(name: &str) -> bool {
    RESERVED_FIELDS.contains(&name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_version_is_one() {
        assert_eq!(FORMAT_VERSION, "1");
    }

    #[test]
    fn weight_is_not_reserved() {
        assert!(is_reserved("id"));
        assert!(is_reserved("source"));
        assert!(is_reserved("target"));
        assert!(!is_reserved("weight"));
        assert!(!is_reserved("Id"));
    }
}
