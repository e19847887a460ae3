//! Field-map validation and canonical record construction

use crate::error::{Result, SchemaError};
use crate::shape::{shape, FieldSpec, ShapeKind, ValueKind};
use indexmap::IndexMap;
use rocrate_graph::{EntityRecord, PropertyValue};
use serde_json::Value as JsonValue;

/// An assembled field map: field-map key to produced value.
pub type FieldMap = IndexMap<String, PropertyValue>;

fn check_value(kind: ShapeKind, spec: &FieldSpec, value: PropertyValue) -> Result<PropertyValue> {
    match spec.value {
        ValueKind::Text => match &value {
            PropertyValue::Scalar(JsonValue::String(_)) => Ok(value),
            _ => Err(SchemaError::InvalidField {
                kind: kind.label(),
                field: spec.key,
                expected: "a string",
            }),
        },
        ValueKind::Link => match &value {
            PropertyValue::Link(_) => Ok(value),
            _ => Err(SchemaError::InvalidField {
                kind: kind.label(),
                field: spec.key,
                expected: "a reference",
            }),
        },
        ValueKind::LinkList => match value {
            PropertyValue::Link(link) => Ok(PropertyValue::List(vec![PropertyValue::Link(link)])),
            PropertyValue::List(items) => {
                if items.iter().all(|i| matches!(i, PropertyValue::Link(_))) {
                    Ok(PropertyValue::List(items))
                } else {
                    Err(SchemaError::InvalidField {
                        kind: kind.label(),
                        field: spec.key,
                        expected: "a list of references",
                    })
                }
            }
            _ => Err(SchemaError::InvalidField {
                kind: kind.label(),
                field: spec.key,
                expected: "a list of references",
            }),
        },
    }
}

/// Validate a field map against the shape for `kind` and produce the
/// canonical record.
///
/// All-or-nothing: either every required field is present and every supplied
/// value conforms, or the first violation is returned and no record exists.
/// Declared fields are emitted in shape order under their serialization
/// aliases; unrecognized fields pass through afterwards in map order.
pub fn validate(kind: ShapeKind, id: &str, mut fields: FieldMap) -> Result<EntityRecord> {
    if !rocrate_ark::is_valid(id) {
        return Err(SchemaError::InvalidId {
            kind: kind.label(),
            id: id.to_string(),
        });
    }

    let mut record = EntityRecord::new(id, vec![kind.type_iri().to_string()]);
    for spec in shape(kind) {
        match fields.shift_remove(spec.key) {
            Some(value) => {
                let value = check_value(kind, spec, value)?;
                record.set(spec.serialized, value);
            }
            None if spec.required => {
                return Err(SchemaError::MissingField {
                    kind: kind.label(),
                    field: spec.key,
                });
            }
            None => {}
        }
    }

    // Pass-through copying of unmapped fields, after the declared ones.
    for (key, value) in fields {
        record.set(key, value);
    }

    Ok(record)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn base_fields() -> FieldMap {
        let mut fields = FieldMap::new();
        fields.insert("name".to_string(), PropertyValue::text("U2OS sample"));
        fields.insert(
            "description".to_string(),
            PropertyValue::text("U2OS cells prepared for imaging"),
        );
        fields
    }

    #[test]
    fn test_valid_sample() {
        let mut fields = base_fields();
        fields.insert(
            "cell_line".to_string(),
            PropertyValue::link("ark:59852/cellline-u2os"),
        );
        let record = validate(ShapeKind::Sample, "ark:59852/sample-u2os-000001", fields).unwrap();

        assert_eq!(record.id, "ark:59852/sample-u2os-000001");
        assert_eq!(record.types, vec!["https://w3id.org/EVI#Sample".to_string()]);
        // Bare link normalized to a one-element list under the alias.
        assert_eq!(
            record.link_targets("usedCellLine"),
            vec!["ark:59852/cellline-u2os"]
        );
    }

    #[test]
    fn test_missing_required_field_names_it() {
        let mut fields = FieldMap::new();
        fields.insert("name".to_string(), PropertyValue::text("no description"));
        let err = validate(ShapeKind::Experiment, "ark:59852/experiment-x-1", fields).unwrap_err();
        assert_eq!(
            err,
            SchemaError::MissingField {
                kind: "experiment",
                field: "description"
            }
        );
    }

    #[test]
    fn test_wrong_value_kind_names_field() {
        let mut fields = base_fields();
        fields.insert("used_sample".to_string(), PropertyValue::text("not a link"));
        let err = validate(ShapeKind::Experiment, "ark:59852/experiment-x-1", fields).unwrap_err();
        assert_eq!(
            err,
            SchemaError::InvalidField {
                kind: "experiment",
                field: "used_sample",
                expected: "a list of references"
            }
        );
    }

    #[test]
    fn test_non_ark_id_rejected() {
        let err = validate(ShapeKind::Instrument, "urn:uuid:1234", base_fields()).unwrap_err();
        assert!(matches!(err, SchemaError::InvalidId { kind: "instrument", .. }));
    }

    #[test]
    fn test_emission_order_is_shape_order_then_pass_through() {
        let mut fields = FieldMap::new();
        // Deliberately out of shape order, with one unknown field.
        fields.insert(
            "generated".to_string(),
            PropertyValue::link_list(["ark:59852/dataset-1"]),
        );
        fields.insert("keywords".to_string(), PropertyValue::from_json(json!(["imaging"])));
        fields.insert("description".to_string(), PropertyValue::text("desc"));
        fields.insert("name".to_string(), PropertyValue::text("exp"));

        let record =
            validate(ShapeKind::Experiment, "ark:59852/experiment-x-1", fields).unwrap();
        let keys: Vec<&String> = record.properties.keys().collect();
        assert_eq!(keys, vec!["name", "description", "generated", "keywords"]);
    }

    #[test]
    fn test_no_partial_record_on_failure() {
        let mut fields = base_fields();
        fields.insert("model".to_string(), PropertyValue::link("ark:59852/x"));
        // model must be text; the whole build fails rather than dropping it.
        assert!(validate(ShapeKind::Instrument, "ark:59852/instrument-1", fields).is_err());
    }
}
