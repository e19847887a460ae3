//! Vocabulary constants for RO-Crate provenance metadata
//!
//! This crate provides a centralized location for the EVI type IRIs, relation
//! predicate keys, and common property keys used throughout the rocrate-promote
//! workspace.
//!
//! # Organization
//!
//! Constants are organized by vocabulary:
//! - `evi` - EVI provenance entity types (https://w3id.org/EVI#)
//! - `relation` - serialized relation keys treated as graph edges
//! - `prop` - common literal property keys

/// EVI provenance entity type constants
pub mod evi {
    /// EVI namespace IRI
    pub const NAMESPACE: &str = "https://w3id.org/EVI#";

    /// evi:Computation IRI
    pub const COMPUTATION: &str = "https://w3id.org/EVI#Computation";

    /// evi:Dataset IRI
    pub const DATASET: &str = "https://w3id.org/EVI#Dataset";

    /// evi:Sample IRI
    pub const SAMPLE: &str = "https://w3id.org/EVI#Sample";

    /// evi:Experiment IRI
    pub const EXPERIMENT: &str = "https://w3id.org/EVI#Experiment";

    /// evi:Instrument IRI
    pub const INSTRUMENT: &str = "https://w3id.org/EVI#Instrument";

    /// Bare term names, accepted alongside the full IRIs in `@type` values
    pub mod term {
        /// Computation term
        pub const COMPUTATION: &str = "Computation";

        /// Dataset term
        pub const DATASET: &str = "Dataset";

        /// Sample term
        pub const SAMPLE: &str = "Sample";

        /// Experiment term
        pub const EXPERIMENT: &str = "Experiment";

        /// Instrument term
        pub const INSTRUMENT: &str = "Instrument";
    }
}

/// Relation predicate keys whose values are references to other records
pub mod relation {
    /// Datasets consumed by a computation or experiment
    pub const USED_DATASET: &str = "usedDataset";

    /// Samples consumed by an experiment
    pub const USED_SAMPLE: &str = "usedSample";

    /// Instruments consumed by an experiment
    pub const USED_INSTRUMENT: &str = "usedInstrument";

    /// Cell line a dataset was derived from
    pub const USED_CELL_LINE: &str = "usedCellLine";

    /// Stain applied when producing a dataset
    pub const USED_STAIN: &str = "usedStain";

    /// Treatment applied when producing a dataset
    pub const USED_TREATMENT: &str = "usedTreatment";

    /// Forward reference from a record to the activity that generated it
    pub const GENERATED_BY: &str = "generatedBy";

    /// Backward reference from an activity to its outputs
    pub const GENERATED: &str = "generated";

    /// Back-reference from a grouped member to its aggregate experiment
    pub const WAS_GENERATED_BY: &str = "wasGeneratedBy";

    /// All recognized relation keys, in a fixed order
    pub const ALL: &[&str] = &[
        USED_DATASET,
        USED_SAMPLE,
        USED_INSTRUMENT,
        USED_CELL_LINE,
        USED_STAIN,
        USED_TREATMENT,
        GENERATED_BY,
        GENERATED,
        WAS_GENERATED_BY,
    ];
}

/// Common literal property keys
pub mod prop {
    /// Record display name
    pub const NAME: &str = "name";

    /// Record description
    pub const DESCRIPTION: &str = "description";

    /// Media-type marker on datasets
    pub const FORMAT: &str = "format";

    /// Instrument manufacturer
    pub const MANUFACTURER: &str = "manufacturer";

    /// Instrument model
    pub const MODEL: &str = "model";
}

/// JSON-LD structural keywords used by the document model
pub mod keyword {
    /// @id keyword
    pub const ID: &str = "@id";

    /// @type keyword
    pub const TYPE: &str = "@type";

    /// @graph keyword
    pub const GRAPH: &str = "@graph";

    /// @context keyword
    pub const CONTEXT: &str = "@context";
}
