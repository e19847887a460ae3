//! Record classification against transform rules

use rocrate_graph::EntityRecord;

/// A classification rule: exact type match plus a textual pattern.
///
/// A record matches when any of its `@type` values equals one of
/// `type_iris` (case-sensitive) AND at least one of the configured textual
/// `fields` contains `needle`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchRule {
    pub type_iris: Vec<String>,
    pub fields: Vec<String>,
    pub needle: String,
}

impl MatchRule {
    pub fn new<T, F>(type_iris: T, fields: F, needle: impl Into<String>) -> Self
    where
        T: IntoIterator,
        T::Item: Into<String>,
        F: IntoIterator,
        F::Item: Into<String>,
    {
        MatchRule {
            type_iris: type_iris.into_iter().map(Into::into).collect(),
            fields: fields.into_iter().map(Into::into).collect(),
            needle: needle.into(),
        }
    }
}

/// Classify one record against a rule. Side-effect-free.
pub fn classify(record: &EntityRecord, rule: &MatchRule) -> bool {
    let type_matches = record
        .types
        .iter()
        .any(|t| rule.type_iris.iter().any(|iri| iri == t));
    if !type_matches {
        return false;
    }
    rule.fields
        .iter()
        .any(|field| record.text(field).is_some_and(|s| s.contains(&rule.needle)))
}
