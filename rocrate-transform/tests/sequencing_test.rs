//! End-to-end behavior of the sequencing (1:1 rename) pipeline

use pretty_assertions::assert_eq;
use rocrate_ark::MemoryAuthority;
use rocrate_graph::{CrateDocument, EntityKind};
use rocrate_transform::{
    classify, promote_sequencing, SequencingOptions, TransformError,
};
use serde_json::json;

const INSTRUMENT_ID: &str = "ark:59852/instrument-dna-sequencer-000001";
const SAMPLE_ID: &str = "ark:59852/sample-raw-sequencing-reads-000002";
const EXPERIMENT_ID: &str = "ark:59852/experiment-sra-0001";

fn fixture() -> serde_json::Value {
    json!({
        "@context": {"@vocab": "https://w3id.org/EVI#"},
        "@graph": [
            {
                "@id": "ark:59852/rocrate-root",
                "@type": "https://schema.org/Dataset",
                "name": "SRA study crate",
                "hasPart": [
                    {"@id": "ark:59852/dataset-0001"},
                    {"@id": "ark:59852/computation-sra-0001"}
                ]
            },
            {
                "@id": "ark:59852/dataset-0001",
                "@type": "https://w3id.org/EVI#Dataset",
                "name": "raw sequencing reads",
                "contentUrl": "file://SRX0001/reads.fastq"
            },
            {
                "@id": "ark:59852/computation-sra-0001",
                "@type": "https://w3id.org/EVI#Computation",
                "name": "SRA Experiment X",
                "usedDataset": [{"@id": "ark:59852/dataset-0001"}]
            }
        ]
    })
}

fn promote(value: serde_json::Value) -> CrateDocument {
    let doc = CrateDocument::parse(&value).unwrap();
    let authority = MemoryAuthority::new("59852");
    promote_sequencing(doc, &SequencingOptions::default(), &authority).unwrap()
}

#[test]
fn test_scenario_a_record_set() {
    let out = promote(fixture());

    // The consumed computation is gone; its replacements exist.
    assert!(out.graph.get("ark:59852/computation-sra-0001").is_none());
    assert!(out.graph.get(INSTRUMENT_ID).is_some());
    assert!(out.graph.get(SAMPLE_ID).is_some());
    assert!(out.graph.get(EXPERIMENT_ID).is_some());
    assert_eq!(out.graph.len(), 5);
}

#[test]
fn test_scenario_a_experiment_shape() {
    let out = promote(fixture());
    let experiment = out.graph.get(EXPERIMENT_ID).unwrap();

    assert_eq!(experiment.kind(), EntityKind::Experiment);
    assert_eq!(experiment.name(), Some("SRA Experiment X"));
    assert_eq!(experiment.link_targets("usedSample"), vec![SAMPLE_ID]);
    assert_eq!(experiment.link_targets("usedInstrument"), vec![INSTRUMENT_ID]);
}

#[test]
fn test_scenario_a_sample_links_to_dataset() {
    let out = promote(fixture());
    let sample = out.graph.get(SAMPLE_ID).unwrap();

    assert_eq!(sample.kind(), EntityKind::Sample);
    assert_eq!(
        sample.link_targets("generated"),
        vec!["ark:59852/dataset-0001"]
    );
}

#[test]
fn test_references_to_consumed_record_are_repointed() {
    let out = promote(fixture());
    let root = out.graph.get("ark:59852/rocrate-root").unwrap();
    assert_eq!(
        root.link_targets("hasPart"),
        vec!["ark:59852/dataset-0001", EXPERIMENT_ID]
    );
}

#[test]
fn test_untouched_record_survives_byte_for_byte() {
    let out = promote(fixture());
    let dataset = out.graph.get("ark:59852/dataset-0001").unwrap();
    assert_eq!(dataset.to_json(), fixture()["@graph"][1]);
}

#[test]
fn test_output_order_is_survivors_then_new_records() {
    let out = promote(fixture());
    let ids: Vec<&str> = out.graph.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(
        ids,
        vec![
            "ark:59852/rocrate-root",
            "ark:59852/dataset-0001",
            INSTRUMENT_ID,
            SAMPLE_ID,
            EXPERIMENT_ID
        ]
    );
}

#[test]
fn test_output_has_no_dangling_references() {
    let out = promote(fixture());
    assert_eq!(out.graph.dangling_references(), vec![]);
}

#[test]
fn test_rerun_matches_nothing_and_is_noop() {
    let out = promote(fixture());
    let rule = SequencingOptions::default().rule;
    assert_eq!(out.graph.iter().filter(|r| classify(r, &rule)).count(), 0);

    let authority = MemoryAuthority::new("59852");
    let again =
        promote_sequencing(out.clone(), &SequencingOptions::default(), &authority).unwrap();
    assert_eq!(again.to_json(), out.to_json());
}

#[test]
fn test_cardinality_follows_matches_and_dataset_usage() {
    let value = json!({
        "@graph": [
            {"@id": "ark:59852/dataset-a", "@type": "https://w3id.org/EVI#Dataset", "name": "reads a"},
            {"@id": "ark:59852/dataset-b", "@type": "https://w3id.org/EVI#Dataset", "name": "reads b"},
            {"@id": "ark:59852/dataset-c", "@type": "https://w3id.org/EVI#Dataset", "name": "reads c"},
            {"@id": "ark:59852/computation-run1", "@type": "https://w3id.org/EVI#Computation",
             "name": "SRA Experiment 1",
             "usedDataset": [{"@id": "ark:59852/dataset-a"}, {"@id": "ark:59852/dataset-b"}]},
            {"@id": "ark:59852/computation-run2", "@type": "https://w3id.org/EVI#Computation",
             "name": "SRA Experiment 2",
             "usedDataset": [{"@id": "ark:59852/dataset-c"}]}
        ]
    });
    let out = promote(value);

    let kinds = |kind: EntityKind| out.graph.iter().filter(|r| r.kind() == kind).count();
    assert_eq!(kinds(EntityKind::Experiment), 2);
    assert_eq!(kinds(EntityKind::Sample), 3);
    assert_eq!(kinds(EntityKind::Instrument), 1);
    assert_eq!(kinds(EntityKind::Computation), 0);

    // Each experiment's sample usage mirrors its source's dataset usage.
    let run1 = out.graph.get("ark:59852/experiment-run1").unwrap();
    assert_eq!(run1.link_targets("usedSample").len(), 2);
    let run2 = out.graph.get("ark:59852/experiment-run2").unwrap();
    assert_eq!(run2.link_targets("usedSample").len(), 1);
}

#[test]
fn test_matched_record_without_dataset_usage_is_skipped() {
    let value = json!({
        "@graph": [
            {"@id": "ark:59852/computation-empty", "@type": "https://w3id.org/EVI#Computation",
             "name": "SRA Experiment without inputs"}
        ]
    });
    let out = promote(value.clone());

    // Nothing was transformed; the record is untouched.
    assert_eq!(out.graph.len(), 1);
    let record = out.graph.get("ark:59852/computation-empty").unwrap();
    assert_eq!(record.to_json(), value["@graph"][0]);
}

#[test]
fn test_duplicate_rename_targets_abort() {
    let value = json!({
        "@graph": [
            {"@id": "ark:59852/dataset-a", "@type": "https://w3id.org/EVI#Dataset", "name": "reads"},
            {"@id": "ark:59852/computation-experiment-z", "@type": "https://w3id.org/EVI#Computation",
             "name": "SRA Experiment Z1", "usedDataset": [{"@id": "ark:59852/dataset-a"}]},
            {"@id": "ark:59852/experiment-computation-z", "@type": "https://w3id.org/EVI#Computation",
             "name": "SRA Experiment Z2", "usedDataset": [{"@id": "ark:59852/dataset-a"}]}
        ]
    });
    let doc = CrateDocument::parse(&value).unwrap();
    let authority = MemoryAuthority::new("59852");
    let err = promote_sequencing(doc, &SequencingOptions::default(), &authority).unwrap_err();

    match err {
        TransformError::DuplicateId { id, .. } => {
            assert_eq!(id, "ark:59852/experiment-experiment-z");
        }
        other => panic!("expected DuplicateId, got {other:?}"),
    }
}

#[test]
fn test_rename_collision_with_existing_record_aborts() {
    let value = json!({
        "@graph": [
            {"@id": "ark:59852/dataset-a", "@type": "https://w3id.org/EVI#Dataset", "name": "reads"},
            {"@id": "ark:59852/experiment-x", "@type": "https://w3id.org/EVI#Experiment",
             "name": "already here", "description": "pre-existing"},
            {"@id": "ark:59852/computation-x", "@type": "https://w3id.org/EVI#Computation",
             "name": "SRA Experiment X", "usedDataset": [{"@id": "ark:59852/dataset-a"}]}
        ]
    });
    let doc = CrateDocument::parse(&value).unwrap();
    let authority = MemoryAuthority::new("59852");
    let err = promote_sequencing(doc, &SequencingOptions::default(), &authority).unwrap_err();
    assert!(matches!(err, TransformError::DuplicateId { .. }));
}

#[test]
fn test_rename_without_expected_segment_aborts() {
    let value = json!({
        "@graph": [
            {"@id": "ark:59852/dataset-a", "@type": "https://w3id.org/EVI#Dataset", "name": "reads"},
            {"@id": "ark:59852/run-77", "@type": "https://w3id.org/EVI#Computation",
             "name": "SRA Experiment 77", "usedDataset": [{"@id": "ark:59852/dataset-a"}]}
        ]
    });
    let doc = CrateDocument::parse(&value).unwrap();
    let authority = MemoryAuthority::new("59852");
    let err = promote_sequencing(doc, &SequencingOptions::default(), &authority).unwrap_err();
    assert!(matches!(err, TransformError::MissingSegment { .. }));
}
