//! # Attributes
//!
//! Per-component metadata that rides along with the structural fields.
//!
//! - `AttributeValue`: closed tagged variant, one JSON encoding per case
//! - `AttributeMap`: ordered name/value pairs, supplier order is output order
//! - `AttributeSupplier`: caller callback producing a fresh map per component

use crate::ExportError;
use serde::{Serialize, Serializer};
use std::fmt;

// =============================================================================
// ATTRIBUTE VALUE
// =============================================================================

/// One exportable attribute value.
///
/// Adding a variant forces every `match` in the encoder to handle it.
#[derive(Debug, Clone, PartialEq)]
pub enum AttributeValue {
    /// Encoded as a quoted, escaped JSON string.
    String(String),
    /// Encoded as `true` / `false`.
    Boolean(bool),
    /// 32-bit integer, encoded as a JSON integer literal.
    Int(i32),
    /// 64-bit integer, encoded as a JSON integer literal.
    Long(i64),
    /// 32-bit float, encoded as its shortest round-trip decimal form.
    Float(f32),
    /// 64-bit float, encoded as its shortest round-trip decimal form.
    Double(f64),
    /// Any other caller type, carried as its textual form and quoted.
    Custom(String),
}

impl AttributeValue {
    /// Wrap a caller type through its `Display` form.
    pub fn custom(value: impl fmt::Display) -> Self {
        Self::Custom(value.to_string())
    }

    /// Short type label used in diagnostics.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::String(_) => "string",
            Self::Boolean(_) => "boolean",
            Self::Int(_) => "int",
            Self::Long(_) => "long",
            Self::Float(_) => "float",
            Self::Double(_) => "double",
            Self::Custom(_) => "custom",
        }
    }

    /// The offending number if this is a NaN or infinite float.
    #[must_use]
    pub fn non_finite(&self) -> Option<f64> {
        match self {
            Self::Float(f) if !f.is_finite() => Some(*f as f64),
            Self::Double(d) if !d.is_finite() => Some(*d),
            _ => None,
        }
    }
}

impl Serialize for AttributeValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::String(s) | Self::Custom(s) => serializer.serialize_str(s),
            Self::Boolean(b) => serializer.serialize_bool(*b),
            Self::Int(i) => serializer.serialize_i32(*i),
            Self::Long(l) => serializer.serialize_i64(*l),
            Self::Float(f) => serializer.serialize_f32(*f),
            Self::Double(d) => serializer.serialize_f64(*d),
        }
    }
}

impl From<&str> for AttributeValue {
    fn from(s: &str) -> Self {
        Self::String(s.to_string())
    }
}

impl From<String> for AttributeValue {
    fn from(s: String) -> Self {
        Self::String(s)
    }
}

impl From<bool> for AttributeValue {
    fn from(b: bool) -> Self {
        Self::Boolean(b)
    }
}

impl From<i32> for AttributeValue {
    fn from(i: i32) -> Self {
        Self::Int(i)
    }
}

impl From<i64> for AttributeValue {
    fn from(l: i64) -> Self {
        Self::Long(l)
    }
}

impl From<f32> for AttributeValue {
    fn from(f: f32) -> Self {
        Self::Float(f)
    }
}

impl From<f64> for AttributeValue {
    fn from(d: f64) -> Self {
        Self::Double(d)
    }
}

/// Convert a parsed JSON value into an attribute.
///
/// Integers that fit in 64 bits become `Long`, other numbers `Double`.
/// Null, arrays, objects and unsigned integers beyond `i64::MAX` have no
/// attribute representation.
impl TryFrom<serde_json::Value> for AttributeValue {
    type Error = ExportError;

    fn try_from(value: serde_json::Value) -> Result<Self, ExportError> {
        use serde_json::Value;

        match value {
            Value::String(s) => Ok(Self::String(s)),
            Value::Bool(b) => Ok(Self::Boolean(b)),
            Value::Number(n) => {
                if let Some(l) = n.as_i64() {
                    Ok(Self::Long(l))
                } else if n.is_u64() {
                    Err(ExportError::UnsupportedAttributeType(format!(
                        "integer {} is out of range",
                        n
                    )))
                } else {
                    n.as_f64().map(Self::Double).ok_or_else(|| {
                        ExportError::UnsupportedAttributeType(format!("number {}", n))
                    })
                }
            }
            Value::Null => Err(ExportError::UnsupportedAttributeType("null".to_string())),
            Value::Array(_) => Err(ExportError::UnsupportedAttributeType("array".to_string())),
            Value::Object(_) => Err(ExportError::UnsupportedAttributeType(
                "object".to_string(),
            )),
        }
    }
}

// =============================================================================
// ATTRIBUTE MAP
// =============================================================================

/// Ordered attribute name/value pairs for one component.
///
/// Insertion order is output order. Re-inserting a name replaces its value
/// in place, so a map never holds the same name twice.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AttributeMap {
    entries: Vec<(String, AttributeValue)>,
}

impl AttributeMap {
    /// Create an empty map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace an attribute. Returns the previous value, if any.
    pub fn insert(
        &mut self,
        name: impl Into<String>,
        value: impl Into<AttributeValue>,
    ) -> Option<AttributeValue> {
        let name = name.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(n, _)| *n == name) {
            Some((_, slot)) => Some(std::mem::replace(slot, value)),
            None => {
                self.entries.push((name, value));
                None
            }
        }
    }

    /// Get an attribute by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&AttributeValue> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v)
    }

    /// Check whether an attribute is present.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over attributes in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &AttributeValue)> {
        self.entries.iter().map(|(n, v)| (n.as_str(), v))
    }
}

impl<K, V> FromIterator<(K, V)> for AttributeMap
where
    K: Into<String>,
    V: Into<AttributeValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (name, value) in iter {
            map.insert(name, value);
        }
        map
    }
}

impl IntoIterator for AttributeMap {
    type Item = (String, AttributeValue);
    type IntoIter = std::vec::IntoIter<(String, AttributeValue)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

// =============================================================================
// ATTRIBUTE SUPPLIER
// =============================================================================

/// Produces the attribute map of one component at export time.
///
/// Called exactly once per component per export, in iteration order.
pub trait AttributeSupplier<C: ?Sized> {
    fn attributes_of(&self, component: &C) -> AttributeMap;
}

/// Supplier that attaches nothing. The default for both component kinds.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoAttributes;

impl<C: ?Sized> AttributeSupplier<C> for NoAttributes {
    fn attributes_of(&self, _component: &C) -> AttributeMap {
        AttributeMap::new()
    }
}

/// Supplier backed by a closure. Built with [`from_fn`].
#[derive(Clone, Copy)]
pub struct FnSupplier<F>(F);

impl<C: ?Sized, F> AttributeSupplier<C> for FnSupplier<F>
where
    F: Fn(&C) -> AttributeMap,
{
    fn attributes_of(&self, component: &C) -> AttributeMap {
        (self.0)(component)
    }
}

/// Build a supplier from a closure.
pub fn from_fn<C: ?Sized, F>(f: F) -> FnSupplier<F>
where
    F: Fn(&C) -> AttributeMap,
{
    FnSupplier(f)
}

// =============================================================================
// TESTS
// =============================================================================
