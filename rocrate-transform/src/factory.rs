//! Construction of promoted records from declared field tables

use crate::error::Result;
use rocrate_graph::{EntityRecord, PropertyValue};
use rocrate_schema::{FieldMap, ShapeKind};
use serde_json::Value as JsonValue;

/// What a new record is built from.
#[derive(Debug, Clone, Copy)]
pub enum Source<'a> {
    /// One matched record (1:1 transforms)
    Single(&'a EntityRecord),
    /// The member records of one aggregation group, in first-seen order
    Group(&'a [&'a EntityRecord]),
    /// No source record (synthesized auxiliaries such as a shared
    /// instrument)
    Synthesized,
}

impl<'a> Source<'a> {
    fn first(&self) -> Option<&'a EntityRecord> {
        match *self {
            Source::Single(record) => Some(record),
            Source::Group(members) => members.first().copied(),
            Source::Synthesized => None,
        }
    }
}

/// Values computable only from a whole aggregation group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GroupDerived {
    /// Reference list of every member id, in member order
    MemberIds,
    /// Number of members, as a scalar
    MemberCount,
}

/// A value-producing rule for one output field.
#[derive(Debug, Clone)]
pub enum FieldRule {
    /// Copy the property from the source record (first member for groups);
    /// absent source properties simply omit the field
    CopyFrom(&'static str),
    /// Fixed value; objects holding only `@id` become references
    Const(JsonValue),
    /// Computed from the group
    Derived(GroupDerived),
    /// Reference list built from already-known ids; empty lists omit the
    /// field
    LinkList(Vec<String>),
}

/// An ordered field table: output field name to producing rule.
pub type FieldTable = Vec<(&'static str, FieldRule)>;

fn evaluate(rule: &FieldRule, source: &Source<'_>) -> Option<PropertyValue> {
    match rule {
        FieldRule::CopyFrom(key) => source.first().and_then(|r| r.get(key).cloned()),
        FieldRule::Const(value) => Some(PropertyValue::from_json(value.clone())),
        FieldRule::Derived(derived) => match (derived, source) {
            (GroupDerived::MemberIds, Source::Group(members)) => Some(PropertyValue::link_list(
                members.iter().map(|m| m.id.clone()),
            )),
            (GroupDerived::MemberCount, Source::Group(members)) => {
                Some(PropertyValue::Scalar(JsonValue::from(members.len())))
            }
            _ => None,
        },
        FieldRule::LinkList(ids) => {
            (!ids.is_empty()).then(|| PropertyValue::link_list(ids.iter().cloned()))
        }
    }
}

/// Build one record: evaluate the field table in order, then delegate the
/// final shape to the schema collaborator.
///
/// Never performs a partial write: either the record validates as a whole or
/// the error aborts the calling transform.
pub fn build(
    kind: ShapeKind,
    id: &str,
    source: &Source<'_>,
    field_table: &FieldTable,
) -> Result<EntityRecord> {
    let mut fields = FieldMap::new();
    for (name, rule) in field_table {
        if let Some(value) = evaluate(rule, source) {
            fields.insert((*name).to_string(), value);
        }
    }
    Ok(rocrate_schema::validate(kind, id, fields)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rocrate_schema::SchemaError;
    use crate::error::TransformError;
    use serde_json::json;

    fn dataset(id: &str, name: &str) -> EntityRecord {
        let mut record = EntityRecord::new(id, vec!["Dataset".to_string()]);
        record.set("name", PropertyValue::text(name));
        record
    }

    #[test]
    fn test_build_from_single_source() {
        let source = dataset("ark:59852/dataset-1", "raw reads");
        let table: FieldTable = vec![
            ("name", FieldRule::CopyFrom("name")),
            ("description", FieldRule::Const(json!("promoted record"))),
            (
                "generated",
                FieldRule::LinkList(vec!["ark:59852/dataset-1".to_string()]),
            ),
        ];
        let record = build(
            ShapeKind::Sample,
            "ark:59852/sample-raw-reads-000001",
            &Source::Single(&source),
            &table,
        )
        .unwrap();

        assert_eq!(record.name(), Some("raw reads"));
        assert_eq!(record.link_targets("generated"), vec!["ark:59852/dataset-1"]);
    }

    #[test]
    fn test_group_derived_member_ids() {
        let a = dataset("ark:59852/dataset-a", "a");
        let b = dataset("ark:59852/dataset-b", "b");
        let members = [&a, &b];
        let table: FieldTable = vec![
            ("name", FieldRule::Const(json!("aggregate"))),
            ("description", FieldRule::Const(json!("group of images"))),
            ("generated", FieldRule::Derived(GroupDerived::MemberIds)),
        ];
        let record = build(
            ShapeKind::Experiment,
            "ark:59852/experiment-agg-000001",
            &Source::Group(&members),
            &table,
        )
        .unwrap();
        assert_eq!(
            record.link_targets("generated"),
            vec!["ark:59852/dataset-a", "ark:59852/dataset-b"]
        );
    }

    #[test]
    fn test_empty_link_list_omits_field() {
        let table: FieldTable = vec![
            ("name", FieldRule::Const(json!("inst"))),
            ("description", FieldRule::Const(json!("shared"))),
            ("used_sample", FieldRule::LinkList(vec![])),
        ];
        let record = build(
            ShapeKind::Experiment,
            "ark:59852/experiment-x-000001",
            &Source::Synthesized,
            &table,
        )
        .unwrap();
        assert!(record.get("usedSample").is_none());
    }

    #[test]
    fn test_validation_failure_aborts_build() {
        let source = dataset("ark:59852/dataset-1", "raw reads");
        // No description rule: required field missing.
        let table: FieldTable = vec![("name", FieldRule::CopyFrom("name"))];
        let err = build(
            ShapeKind::Sample,
            "ark:59852/sample-1",
            &Source::Single(&source),
            &table,
        )
        .unwrap_err();
        assert!(matches!(
            err,
            TransformError::Schema(SchemaError::MissingField {
                kind: "sample",
                field: "description"
            })
        ));
    }

    #[test]
    fn test_const_id_object_becomes_reference() {
        let table: FieldTable = vec![
            ("name", FieldRule::Const(json!("sample"))),
            ("description", FieldRule::Const(json!("desc"))),
            (
                "cell_line",
                FieldRule::Const(json!({"@id": "ark:59852/cellline-1"})),
            ),
        ];
        let record = build(
            ShapeKind::Sample,
            "ark:59852/sample-1-000001",
            &Source::Synthesized,
            &table,
        )
        .unwrap();
        assert_eq!(
            record.link_targets("usedCellLine"),
            vec!["ark:59852/cellline-1"]
        );
    }
}
