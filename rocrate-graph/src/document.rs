//! Whole-document parsing and reassembly

use crate::error::{GraphError, Result};
use crate::graph::Graph;
use crate::record::EntityRecord;
use rocrate_vocab::keyword;
use serde_json::{Map, Value as JsonValue};

/// A crate metadata document: a `@context`, an ordered `@graph` of entity
/// records, and any other top-level fields passed through verbatim.
#[derive(Debug, Clone, PartialEq)]
pub struct CrateDocument {
    /// The `@context` value, kept opaque
    pub context: Option<JsonValue>,
    /// Top-level fields other than `@context`/`@graph`, in original order
    extra: Map<String, JsonValue>,
    pub graph: Graph,
}

impl CrateDocument {
    pub fn new(context: Option<JsonValue>, graph: Graph) -> Self {
        CrateDocument {
            context,
            extra: Map::new(),
            graph,
        }
    }

    /// Parse a document value.
    ///
    /// The top-level value must be an object with an `@graph` array; anything
    /// else is a fatal input-format error.
    pub fn parse(value: &JsonValue) -> Result<CrateDocument> {
        let map = value.as_object().ok_or(GraphError::MissingGraph)?;
        let entries = map
            .get(keyword::GRAPH)
            .and_then(JsonValue::as_array)
            .ok_or(GraphError::MissingGraph)?;

        let mut records = Vec::with_capacity(entries.len());
        for (index, entry) in entries.iter().enumerate() {
            records.push(EntityRecord::from_json(entry, index)?);
        }

        let mut extra = Map::new();
        for (key, value) in map {
            if key != keyword::GRAPH && key != keyword::CONTEXT {
                extra.insert(key.clone(), value.clone());
            }
        }

        Ok(CrateDocument {
            context: map.get(keyword::CONTEXT).cloned(),
            extra,
            graph: Graph::new(records),
        })
    }

    /// Parse from JSON text.
    pub fn parse_str(text: &str) -> Result<CrateDocument> {
        let value: JsonValue = serde_json::from_str(text)?;
        CrateDocument::parse(&value)
    }

    /// Replace the graph, keeping context and pass-through fields.
    pub fn with_graph(self, graph: Graph) -> CrateDocument {
        CrateDocument { graph, ..self }
    }

    /// Serialize: `@context` first, pass-through fields in original order,
    /// `@graph` last.
    pub fn to_json(&self) -> JsonValue {
        let mut map = Map::new();
        if let Some(context) = &self.context {
            map.insert(keyword::CONTEXT.to_string(), context.clone());
        }
        for (key, value) in &self.extra {
            map.insert(key.clone(), value.clone());
        }
        map.insert(
            keyword::GRAPH.to_string(),
            JsonValue::Array(self.graph.iter().map(EntityRecord::to_json).collect()),
        );
        JsonValue::Object(map)
    }

    pub fn to_string_pretty(&self) -> String {
        serde_json::to_string_pretty(&self.to_json()).unwrap_or_default()
    }
}

/// Check whether a value looks like a crate document (top-level `@graph`
/// array).
pub fn is_crate_document(value: &JsonValue) -> bool {
    value
        .as_object()
        .and_then(|map| map.get(keyword::GRAPH))
        .is_some_and(JsonValue::is_array)
}
