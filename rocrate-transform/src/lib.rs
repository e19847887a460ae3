//! # rocrate-transform
//!
//! The shared graph-rewrite core behind the two promotion pipelines for
//! RO-Crate provenance documents.
//!
//! This crate provides:
//! - Classification of records against transform rules (`scan`)
//! - Identifier derivation: deterministic rename or authority minting
//!   (`ident`)
//! - Construction of promoted records from declared field tables, validated
//!   by the schema collaborator (`factory`)
//! - N:1 aggregation keys and grouping (`group`)
//! - Reference rewriting, removal filtering, and grouping field migration
//!   (`rewrite`)
//! - Deterministic reassembly of the output graph (`assemble`)
//!
//! ## Pipelines
//!
//! - **Sequencing** (1:1): matched Computations become Experiments by
//!   identifier rename; one Sample per used dataset; one shared Instrument.
//! - **Imaging** (N:1): matched Datasets group by their (cell line, stain,
//!   treatment) links; one Experiment per distinct triple, one Sample per
//!   distinct cell line; members gain a `wasGeneratedBy` back-reference.
//!
//! Both are strict two-stage runs: stage 1 produces a [`TransformPlan`],
//! stage 2 consumes it into the output document. A failed run yields
//! nothing; there is no partial output.
//!
//! ## Example
//!
//! ```
//! use rocrate_ark::MemoryAuthority;
//! use rocrate_graph::CrateDocument;
//! use rocrate_transform::{promote_sequencing, SequencingOptions};
//! use serde_json::json;
//!
//! let doc = CrateDocument::parse(&json!({
//!     "@graph": [
//!         {"@id": "ark:59852/dataset-1", "@type": "https://w3id.org/EVI#Dataset",
//!          "name": "raw reads"},
//!         {"@id": "ark:59852/computation-1", "@type": "https://w3id.org/EVI#Computation",
//!          "name": "SRA Experiment X",
//!          "usedDataset": [{"@id": "ark:59852/dataset-1"}]}
//!     ]
//! })).unwrap();
//!
//! let authority = MemoryAuthority::new("59852");
//! let out = promote_sequencing(doc, &SequencingOptions::default(), &authority).unwrap();
//! assert!(out.graph.get("ark:59852/experiment-1").is_some());
//! assert!(out.graph.get("ark:59852/computation-1").is_none());
//! ```

pub mod assemble;
pub mod error;
pub mod factory;
pub mod group;
pub mod ident;
pub mod imaging;
pub mod plan;
pub mod rewrite;
pub mod scan;
pub mod sequencing;

// Re-exports
pub use assemble::assemble;
pub use error::{Result, TransformError};
pub use factory::{FieldRule, FieldTable, GroupDerived, Source};
pub use group::{compute_key, group_by, GroupKey};
pub use ident::{mint_id, rename_id, IdentifierStrategy};
pub use imaging::{plan_imaging, promote_imaging, ImagingOptions, GROUP_KEY_FIELDS};
pub use plan::{apply_plan, NewRecords, Skip, TransformPlan};
pub use rewrite::{rewrite_survivors, FieldMigration};
pub use scan::{classify, MatchRule};
pub use sequencing::{plan_sequencing, promote_sequencing, SequencingOptions};
