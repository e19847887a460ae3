//! Canonical shapes for promoted provenance records
//!
//! The promotion pipelines never decide field layout themselves; they
//! assemble a [`FieldMap`] and delegate here. This crate owns:
//!
//! - [`ShapeKind`]: the record kinds that can be constructed (Sample,
//!   Experiment, Instrument)
//! - the declarative shape tables: required vs optional fields, accepted
//!   value kinds, and the serialization alias for each field
//! - [`validate`]: all-or-nothing construction of a canonical
//!   [`EntityRecord`](rocrate_graph::EntityRecord), failing with a
//!   [`SchemaError`] that names the missing or invalid field
//!
//! # Example
//!
//! ```
//! use rocrate_schema::{validate, FieldMap, ShapeKind};
//! use rocrate_graph::PropertyValue;
//!
//! let mut fields = FieldMap::new();
//! fields.insert("name".into(), PropertyValue::text("confocal microscope"));
//! fields.insert("description".into(), PropertyValue::text("shared imaging instrument"));
//!
//! let record = validate(ShapeKind::Instrument, "ark:59852/instrument-000001", fields).unwrap();
//! assert_eq!(record.types, vec!["https://w3id.org/EVI#Instrument".to_string()]);
//! ```

mod error;
mod shape;
mod validate;

pub use error::{Result, SchemaError};
pub use shape::{shape, FieldSpec, ShapeKind, ValueKind};
pub use validate::{validate, FieldMap};
