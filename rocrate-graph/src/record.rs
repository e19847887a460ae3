//! Typed entity records and the record-kind vocabulary

use crate::error::{GraphError, Result};
use crate::value::PropertyValue;
use indexmap::IndexMap;
use rocrate_vocab::{evi, keyword, prop};
use serde_json::{Map, Value as JsonValue};

/// Controlled vocabulary of provenance entity kinds.
///
/// Derived from a record's `@type` values; anything outside the recognized
/// set is `Unknown` and passes through every transform untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Computation,
    Dataset,
    Sample,
    Experiment,
    Instrument,
    Unknown,
}

impl EntityKind {
    /// Classify a single `@type` value. Comparison is exact and
    /// case-sensitive; both the full EVI IRI and the bare term are accepted.
    pub fn from_type(value: &str) -> EntityKind {
        match value {
            evi::COMPUTATION | evi::term::COMPUTATION => EntityKind::Computation,
            evi::DATASET | evi::term::DATASET => EntityKind::Dataset,
            evi::SAMPLE | evi::term::SAMPLE => EntityKind::Sample,
            evi::EXPERIMENT | evi::term::EXPERIMENT => EntityKind::Experiment,
            evi::INSTRUMENT | evi::term::INSTRUMENT => EntityKind::Instrument,
            _ => EntityKind::Unknown,
        }
    }

    /// Classify a record's `@type` list: the first recognized type wins.
    pub fn from_types(types: &[String]) -> EntityKind {
        types
            .iter()
            .map(|t| EntityKind::from_type(t))
            .find(|k| *k != EntityKind::Unknown)
            .unwrap_or(EntityKind::Unknown)
    }

    /// The full EVI IRI for a recognized kind.
    pub fn iri(&self) -> Option<&'static str> {
        match self {
            EntityKind::Computation => Some(evi::COMPUTATION),
            EntityKind::Dataset => Some(evi::DATASET),
            EntityKind::Sample => Some(evi::SAMPLE),
            EntityKind::Experiment => Some(evi::EXPERIMENT),
            EntityKind::Instrument => Some(evi::INSTRUMENT),
            EntityKind::Unknown => None,
        }
    }
}

/// One node of the entity graph.
///
/// Carries the identifier, the raw `@type` values, and an ordered property
/// bag. Property order is preserved from parse to serialization.
#[derive(Debug, Clone, PartialEq)]
pub struct EntityRecord {
    pub id: String,
    pub types: Vec<String>,
    pub properties: IndexMap<String, PropertyValue>,
}

impl EntityRecord {
    pub fn new(id: impl Into<String>, types: Vec<String>) -> Self {
        EntityRecord {
            id: id.into(),
            types,
            properties: IndexMap::new(),
        }
    }

    /// Record kind derived from the `@type` values.
    pub fn kind(&self) -> EntityKind {
        EntityKind::from_types(&self.types)
    }

    pub fn get(&self, key: &str) -> Option<&PropertyValue> {
        self.properties.get(key)
    }

    /// Insert or replace a property, preserving existing position on replace.
    pub fn set(&mut self, key: impl Into<String>, value: PropertyValue) {
        self.properties.insert(key.into(), value);
    }

    /// Remove a property, shifting later siblings up to preserve their
    /// relative order.
    pub fn remove(&mut self, key: &str) -> Option<PropertyValue> {
        self.properties.shift_remove(key)
    }

    /// String content of a scalar property.
    pub fn text(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(PropertyValue::as_str)
    }

    pub fn name(&self) -> Option<&str> {
        self.text(prop::NAME)
    }

    pub fn description(&self) -> Option<&str> {
        self.text(prop::DESCRIPTION)
    }

    /// Targets of every link carried by the given property, in order.
    pub fn link_targets(&self, key: &str) -> Vec<&str> {
        self.get(key)
            .map(|v| v.links().iter().map(|l| l.target()).collect())
            .unwrap_or_default()
    }

    /// First link target of the given property, if any.
    pub fn first_link_target(&self, key: &str) -> Option<&str> {
        self.link_targets(key).first().copied()
    }

    /// Parse one `@graph` entry. `index` is its position, used only for
    /// error reporting.
    pub fn from_json(value: &JsonValue, index: usize) -> Result<EntityRecord> {
        let map = value
            .as_object()
            .ok_or(GraphError::NotAnObject { index })?;

        let id = map
            .get(keyword::ID)
            .and_then(JsonValue::as_str)
            .ok_or(GraphError::MissingId { index })?
            .to_string();

        let types = match map.get(keyword::TYPE) {
            Some(JsonValue::String(t)) => vec![t.clone()],
            Some(JsonValue::Array(items)) => items
                .iter()
                .filter_map(JsonValue::as_str)
                .map(str::to_string)
                .collect(),
            _ => vec![],
        };

        let mut properties = IndexMap::with_capacity(map.len());
        for (key, value) in map {
            if key == keyword::ID || key == keyword::TYPE {
                continue;
            }
            properties.insert(key.clone(), PropertyValue::from_json(value.clone()));
        }

        Ok(EntityRecord {
            id,
            types,
            properties,
        })
    }

    /// Serialize back to a JSON object: `@id`, `@type`, then properties in
    /// their preserved order. A single type stays a bare string.
    pub fn to_json(&self) -> JsonValue {
        let mut map = Map::new();
        map.insert(keyword::ID.to_string(), JsonValue::String(self.id.clone()));
        match self.types.len() {
            0 => {}
            1 => {
                map.insert(
                    keyword::TYPE.to_string(),
                    JsonValue::String(self.types[0].clone()),
                );
            }
            _ => {
                map.insert(
                    keyword::TYPE.to_string(),
                    JsonValue::Array(
                        self.types
                            .iter()
                            .map(|t| JsonValue::String(t.clone()))
                            .collect(),
                    ),
                );
            }
        }
        for (key, value) in &self.properties {
            map.insert(key.clone(), value.to_json());
        }
        JsonValue::Object(map)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_kind_from_iri_and_term() {
        assert_eq!(
            EntityKind::from_type("https://w3id.org/EVI#Computation"),
            EntityKind::Computation
        );
        assert_eq!(EntityKind::from_type("Dataset"), EntityKind::Dataset);
        assert_eq!(EntityKind::from_type("dataset"), EntityKind::Unknown);
        assert_eq!(
            EntityKind::from_type("https://schema.org/Person"),
            EntityKind::Unknown
        );
    }

    #[test]
    fn test_kind_first_recognized_wins() {
        let types = vec![
            "https://schema.org/Thing".to_string(),
            "https://w3id.org/EVI#Sample".to_string(),
        ];
        assert_eq!(EntityKind::from_types(&types), EntityKind::Sample);
    }

    #[test]
    fn test_from_json_requires_id() {
        let err = EntityRecord::from_json(&json!({"@type": "Dataset"}), 3).unwrap_err();
        assert!(matches!(err, GraphError::MissingId { index: 3 }));
    }

    #[test]
    fn test_round_trip_preserves_property_order() {
        let value = json!({
            "@id": "ark:59852/d1",
            "@type": "https://w3id.org/EVI#Dataset",
            "name": "reads",
            "usedCellLine": {"@id": "ark:59852/c1"},
            "contentUrl": "file://reads.fastq"
        });
        let record = EntityRecord::from_json(&value, 0).unwrap();
        assert_eq!(record.kind(), EntityKind::Dataset);
        assert_eq!(record.name(), Some("reads"));
        assert_eq!(record.link_targets("usedCellLine"), vec!["ark:59852/c1"]);
        assert_eq!(record.to_json(), value);
    }

    #[test]
    fn test_single_type_stays_string() {
        let value = json!({"@id": "ark:59852/x", "@type": "Dataset"});
        let record = EntityRecord::from_json(&value, 0).unwrap();
        assert_eq!(record.to_json(), value);
    }

    #[test]
    fn test_remove_preserves_sibling_order() {
        let value = json!({
            "@id": "ark:59852/d1",
            "a": 1, "b": 2, "c": 3
        });
        let mut record = EntityRecord::from_json(&value, 0).unwrap();
        record.remove("b");
        let keys: Vec<&String> = record.properties.keys().collect();
        assert_eq!(keys, vec!["a", "c"]);
    }
}
