//! 1:1 promotion of SRA-derived computations into experiments
//!
//! Each matched Computation is consumed and replaced by one Experiment whose
//! identifier is a deterministic rename of the Computation's. One Sample is
//! created per `usedDataset` entry, and a single shared Instrument is
//! synthesized per run. Every surviving reference to a consumed Computation
//! is repointed at its Experiment.

use crate::error::{Result, TransformError};
use crate::factory::{self, FieldRule, FieldTable, Source};
use crate::ident::{id_tail, mint_id, IdentifierStrategy};
use crate::plan::{apply_plan, Skip, TransformPlan};
use crate::scan::{classify, MatchRule};
use rocrate_ark::NamingAuthority;
use rocrate_graph::{CrateDocument, EntityRecord};
use rocrate_schema::ShapeKind;
use rocrate_vocab::{evi, prop, relation};
use serde_json::json;

/// Options for the sequencing promotion pipeline.
#[derive(Debug, Clone)]
pub struct SequencingOptions {
    /// Which records are promoted
    pub rule: MatchRule,
    /// How the replacement Experiment derives its identifier
    pub strategy: IdentifierStrategy,
    pub instrument_name: String,
    pub instrument_description: String,
}

impl Default for SequencingOptions {
    fn default() -> Self {
        SequencingOptions {
            rule: MatchRule::new(
                [evi::COMPUTATION, evi::term::COMPUTATION],
                [prop::NAME, prop::DESCRIPTION],
                "SRA Experiment",
            ),
            strategy: IdentifierStrategy::rename("computation", "experiment"),
            instrument_name: "DNA sequencer".to_string(),
            instrument_description: "Shared sequencing instrument for promoted SRA experiments"
                .to_string(),
        }
    }
}

fn dataset_label(doc: &CrateDocument, dataset_id: &str) -> String {
    doc.graph
        .get(dataset_id)
        .and_then(EntityRecord::name)
        .unwrap_or_else(|| id_tail(dataset_id))
        .to_string()
}

/// Stage 1: classify matched computations and build the plan.
pub fn plan_sequencing(
    doc: &CrateDocument,
    opts: &SequencingOptions,
    authority: &dyn NamingAuthority,
) -> Result<TransformPlan> {
    let mut plan = TransformPlan::default();

    let mut eligible: Vec<&EntityRecord> = Vec::new();
    for record in doc.graph.iter().filter(|r| classify(r, &opts.rule)) {
        if record.link_targets(relation::USED_DATASET).is_empty() {
            tracing::warn!(
                id = %record.id,
                field = relation::USED_DATASET,
                "matched record lacks required linking field, leaving untouched"
            );
            plan.skipped.push(Skip {
                id: record.id.clone(),
                missing_field: relation::USED_DATASET.to_string(),
            });
        } else {
            eligible.push(record);
        }
    }
    if eligible.is_empty() {
        return Ok(plan);
    }

    let instrument_table: FieldTable = vec![
        ("name", FieldRule::Const(json!(opts.instrument_name))),
        (
            "description",
            FieldRule::Const(json!(opts.instrument_description)),
        ),
    ];
    let instrument = factory::build(
        ShapeKind::Instrument,
        &mint_id(authority, "instrument", &opts.instrument_name),
        &Source::Synthesized,
        &instrument_table,
    )?;
    let instrument_id = instrument.id.clone();
    plan.new_records.instruments.push(instrument);

    for computation in eligible {
        let display = computation.name().unwrap_or_default();
        let experiment_id = opts.strategy.derive(authority, &computation.id, display)?;

        // Derived identifiers must stay unique across the whole run.
        if let Some((first, _)) = plan
            .id_map
            .iter()
            .find(|(_, new_id)| **new_id == experiment_id)
        {
            return Err(TransformError::DuplicateId {
                first: first.clone(),
                second: computation.id.clone(),
                id: experiment_id,
            });
        }
        if doc.graph.contains(&experiment_id) {
            return Err(TransformError::DuplicateId {
                first: experiment_id.clone(),
                second: computation.id.clone(),
                id: experiment_id,
            });
        }

        let mut sample_ids = Vec::new();
        for dataset_id in computation.link_targets(relation::USED_DATASET) {
            let label = dataset_label(doc, dataset_id);
            let sample_table: FieldTable = vec![
                ("name", FieldRule::Const(json!(format!("{label} sample")))),
                (
                    "description",
                    FieldRule::Const(json!(format!("Sample that generated {label}"))),
                ),
                (
                    "generated",
                    FieldRule::LinkList(vec![dataset_id.to_string()]),
                ),
            ];
            let sample = factory::build(
                ShapeKind::Sample,
                &mint_id(authority, "sample", &label),
                &Source::Single(computation),
                &sample_table,
            )?;
            sample_ids.push(sample.id.clone());
            plan.new_records.samples.push(sample);
        }

        let description = computation
            .description()
            .map(str::to_string)
            .unwrap_or_else(|| format!("Sequencing experiment {display}"));
        let experiment_table: FieldTable = vec![
            ("name", FieldRule::CopyFrom(prop::NAME)),
            ("description", FieldRule::Const(json!(description))),
            ("experiment_type", FieldRule::Const(json!("sequencing"))),
            ("used_sample", FieldRule::LinkList(sample_ids)),
            (
                "used_instrument",
                FieldRule::LinkList(vec![instrument_id.clone()]),
            ),
        ];
        let experiment = factory::build(
            ShapeKind::Experiment,
            &experiment_id,
            &Source::Single(computation),
            &experiment_table,
        )?;
        plan.new_records.experiments.push(experiment);

        plan.id_map
            .insert(computation.id.clone(), experiment_id);
        plan.removals.insert(computation.id.clone());
    }

    Ok(plan)
}

/// Run the whole pipeline: plan, then rewrite and reassemble.
pub fn promote_sequencing(
    doc: CrateDocument,
    opts: &SequencingOptions,
    authority: &dyn NamingAuthority,
) -> Result<CrateDocument> {
    let plan = plan_sequencing(&doc, opts, authority)?;
    Ok(apply_plan(doc, plan))
}
