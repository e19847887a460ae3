//! Property values: scalars, inline objects, and references

use serde_json::{Map, Value as JsonValue};

/// A reference to another record by identifier.
///
/// Serialized as `{"@id": "<target>"}`. A link never carries the target's
/// data; resolving it is a graph lookup.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LinkValue {
    target: String,
}

impl LinkValue {
    pub fn new(target: impl Into<String>) -> Self {
        LinkValue {
            target: target.into(),
        }
    }

    /// Identifier of the record this link points at.
    pub fn target(&self) -> &str {
        &self.target
    }

    pub fn into_target(self) -> String {
        self.target
    }
}

/// A single property value on an [`EntityRecord`](crate::EntityRecord).
///
/// Closed sum over the shapes that occur in crate documents: JSON scalars,
/// references, inline nested objects (kept opaque), and ordered sequences of
/// any of these.
#[derive(Debug, Clone, PartialEq)]
pub enum PropertyValue {
    /// String, number, boolean, or null
    Scalar(JsonValue),
    /// Reference-by-identifier
    Link(LinkValue),
    /// Inline nested object that is not a pure reference; passed through
    /// untouched by every transform
    Object(Map<String, JsonValue>),
    /// Ordered sequence
    List(Vec<PropertyValue>),
}

impl PropertyValue {
    /// Convenience constructor for a reference value.
    pub fn link(target: impl Into<String>) -> Self {
        PropertyValue::Link(LinkValue::new(target))
    }

    /// Convenience constructor for a string scalar.
    pub fn text(value: impl Into<String>) -> Self {
        PropertyValue::Scalar(JsonValue::String(value.into()))
    }

    /// Convenience constructor for a list of reference values.
    pub fn link_list<I, S>(targets: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        PropertyValue::List(targets.into_iter().map(PropertyValue::link).collect())
    }

    /// The string content of a scalar value, if any.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            PropertyValue::Scalar(JsonValue::String(s)) => Some(s),
            _ => None,
        }
    }

    /// All references carried by this value, in order.
    ///
    /// A bare link yields one entry; a list yields its link elements
    /// (recursively); scalars and inline objects yield none.
    pub fn links(&self) -> Vec<&LinkValue> {
        match self {
            PropertyValue::Link(link) => vec![link],
            PropertyValue::List(items) => items.iter().flat_map(PropertyValue::links).collect(),
            _ => vec![],
        }
    }

    /// Rewrite link targets in place.
    ///
    /// Applies `f` to every link target (bare or inside a list); a `Some`
    /// return replaces the target, `None` leaves it untouched. Scalars and
    /// inline objects are never visited.
    pub fn map_link_targets<F>(&mut self, f: &F)
    where
        F: Fn(&str) -> Option<String>,
    {
        match self {
            PropertyValue::Link(link) => {
                if let Some(new_target) = f(&link.target) {
                    link.target = new_target;
                }
            }
            PropertyValue::List(items) => {
                for item in items {
                    item.map_link_targets(f);
                }
            }
            PropertyValue::Scalar(_) | PropertyValue::Object(_) => {}
        }
    }

    /// Classify a JSON value.
    ///
    /// An object whose only key is `@id` (with a string value) is a link;
    /// any other object is inline data.
    pub fn from_json(value: JsonValue) -> PropertyValue {
        match value {
            JsonValue::Array(items) => {
                PropertyValue::List(items.into_iter().map(PropertyValue::from_json).collect())
            }
            JsonValue::Object(map) => {
                if map.len() == 1 {
                    if let Some(JsonValue::String(target)) = map.get(rocrate_vocab::keyword::ID) {
                        return PropertyValue::Link(LinkValue::new(target.clone()));
                    }
                }
                PropertyValue::Object(map)
            }
            other => PropertyValue::Scalar(other),
        }
    }

    pub fn to_json(&self) -> JsonValue {
        match self {
            PropertyValue::Scalar(v) => v.clone(),
            PropertyValue::Link(link) => {
                let mut map = Map::new();
                map.insert(
                    rocrate_vocab::keyword::ID.to_string(),
                    JsonValue::String(link.target.clone()),
                );
                JsonValue::Object(map)
            }
            PropertyValue::Object(map) => JsonValue::Object(map.clone()),
            PropertyValue::List(items) => {
                JsonValue::Array(items.iter().map(PropertyValue::to_json).collect())
            }
        }
    }
}
