//! Entity graph model for RO-Crate provenance documents
//!
//! This library provides the in-memory document model the promotion pipelines
//! operate on:
//!
//! - [`LinkValue`] / [`PropertyValue`]: inline values vs references-by-id
//! - [`EntityKind`] / [`EntityRecord`]: typed graph nodes with ordered
//!   property bags
//! - [`Graph`]: an ordered entity sequence with id lookup and
//!   referential-integrity checking
//! - [`CrateDocument`]: whole-document parse and reassembly, preserving
//!   `@context` and unknown top-level fields
//!
//! # Example
//!
//! ```
//! use rocrate_graph::{CrateDocument, EntityKind};
//! use serde_json::json;
//!
//! let doc = CrateDocument::parse(&json!({
//!     "@context": {"@vocab": "https://w3id.org/EVI#"},
//!     "@graph": [
//!         {"@id": "ark:59852/d1", "@type": "Dataset", "name": "reads",
//!          "generatedBy": {"@id": "ark:59852/c1"}},
//!         {"@id": "ark:59852/c1", "@type": "Computation", "name": "alignment"}
//!     ]
//! })).unwrap();
//!
//! assert_eq!(doc.graph.len(), 2);
//! assert_eq!(doc.graph.get("ark:59852/d1").unwrap().kind(), EntityKind::Dataset);
//! assert!(doc.graph.dangling_references().is_empty());
//! ```

pub mod document;
pub mod error;
pub mod graph;
pub mod record;
pub mod value;

pub use document::{is_crate_document, CrateDocument};
pub use error::{GraphError, Result};
pub use graph::{DanglingReference, Graph};
pub use record::{EntityKind, EntityRecord};
pub use value::{LinkValue, PropertyValue};
