//! # Identity Resolution
//!
//! Maps opaque vertex and edge handles to the textual ids written into the
//! document. Vertex ids and edge ids are resolved by separate resolver
//! instances and occupy separate namespaces.
//!
//! Uniqueness is the caller's responsibility: duplicate ids still produce a
//! well-formed document, just an ambiguous one.

use std::fmt;

/// Produces the textual id of one component.
///
/// `sequence` is the component's 1-based position in the graph's iteration
/// order, counted separately for vertices and edges. Returning `None` is a
/// configuration error and aborts the export before any byte is written.
pub trait IdentityResolver<C: ?Sized> {
    fn id_of(&self, component: &C, sequence: u64) -> Option<String>;
}

/// Decimal iteration position: "1", "2", ... The default strategy.
#[derive(Debug, Clone, Copy, Default)]
pub struct SequentialIds;

impl<C: ?Sized> IdentityResolver<C> for SequentialIds {
    fn id_of(&self, _component: &C, sequence: u64) -> Option<String> {
        Some(sequence.to_string())
    }
}

/// The component's own `Display` form, e.g. vertex labels used as ids.
#[derive(Debug, Clone, Copy, Default)]
pub struct DisplayIds;

impl<C: fmt::Display + ?Sized> IdentityResolver<C> for DisplayIds {
    fn id_of(&self, component: &C, _sequence: u64) -> Option<String> {
        Some(component.to_string())
    }
}

/// Resolver backed by a closure. Built with [`from_fn`].
#[derive(Clone, Copy)]
pub struct FnResolver<F>(F);

impl<C: ?Sized, F> IdentityResolver<C> for FnResolver<F>
where
    F: Fn(&C) -> Option<String>,
{
    fn id_of(&self, component: &C, _sequence: u64) -> Option<String> {
        (self.0)(component)
    }
}

/// Build a resolver from a closure, e.g. one that reads an existing field.
pub fn from_fn<C: ?Sized, F>(f: F) -> FnResolver<F>
where
    F: Fn(&C) -> Option<String>,
{
    FnResolver(f)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sequential_ignores_component() {
        assert_eq!(SequentialIds.id_of("anything", 1), Some("1".to_string()));
        assert_eq!(SequentialIds.id_of(&99u8, 12), Some("12".to_string()));
    }

    #[test]
    fn display_uses_component() {
        assert_eq!(DisplayIds.id_of(&42u32, 1), Some("42".to_string()));
        assert_eq!(DisplayIds.id_of("alice", 7), Some("alice".to_string()));
    }

    #[test]
    fn closure_may_refuse() {
        let resolver = from_fn(|name: &String| {
            if name.is_empty() {
                None
            } else {
                Some(name.to_uppercase())
            }
        });
        assert_eq!(resolver.id_of(&"ab".to_string(), 1), Some("AB".to_string()));
        assert_eq!(resolver.id_of(&String::new(), 2), None);
    }
}
