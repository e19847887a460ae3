//! N:1 promotion of imaging datasets into grouped experiments
//!
//! Matched Datasets are grouped by the (cell line, stain, treatment) link
//! triple. Each distinct triple yields one minted Experiment; each distinct
//! cell line yields one minted Sample; a single shared Instrument is
//! synthesized per run. Members survive: their grouping links migrate onto
//! the aggregates and are replaced by a `wasGeneratedBy` back-reference.

use crate::error::Result;
use crate::factory::{self, FieldRule, FieldTable, GroupDerived, Source};
use crate::group::{group_by, missing_key_field};
use crate::ident::{id_tail, mint_id};
use crate::plan::{apply_plan, Skip, TransformPlan};
use crate::rewrite::FieldMigration;
use crate::scan::{classify, MatchRule};
use indexmap::IndexMap;
use rocrate_ark::NamingAuthority;
use rocrate_graph::{CrateDocument, EntityRecord, PropertyValue};
use rocrate_schema::ShapeKind;
use rocrate_vocab::{evi, prop, relation};
use serde_json::json;

/// The aggregation key fields, in fixed order.
pub const GROUP_KEY_FIELDS: &[&str] = &[
    relation::USED_CELL_LINE,
    relation::USED_STAIN,
    relation::USED_TREATMENT,
];

/// Options for the imaging promotion pipeline.
#[derive(Debug, Clone)]
pub struct ImagingOptions {
    /// Which records are grouping candidates
    pub rule: MatchRule,
    pub instrument_name: String,
    pub instrument_description: String,
    /// Media-type marker added to members that carry none
    pub format_marker: Option<String>,
}

impl Default for ImagingOptions {
    fn default() -> Self {
        ImagingOptions {
            rule: MatchRule::new(
                [evi::DATASET, evi::term::DATASET],
                [prop::NAME, prop::DESCRIPTION],
                "image",
            ),
            instrument_name: "Fluorescence confocal microscope".to_string(),
            instrument_description: "Shared microscope for promoted imaging experiments"
                .to_string(),
            format_marker: Some("image/ome-tiff".to_string()),
        }
    }
}

fn label_for(doc: &CrateDocument, id: &str) -> String {
    doc.graph
        .get(id)
        .and_then(EntityRecord::name)
        .unwrap_or_else(|| id_tail(id))
        .to_string()
}

/// Stage 1: classify candidates, group them, and build the plan.
pub fn plan_imaging(
    doc: &CrateDocument,
    opts: &ImagingOptions,
    authority: &dyn NamingAuthority,
) -> Result<TransformPlan> {
    let mut plan = TransformPlan::default();

    let mut members: Vec<&EntityRecord> = Vec::new();
    for record in doc.graph.iter().filter(|r| classify(r, &opts.rule)) {
        match missing_key_field(record, GROUP_KEY_FIELDS) {
            None => members.push(record),
            Some(field) => {
                tracing::warn!(
                    id = %record.id,
                    field = %field,
                    "matched record lacks required linking field, leaving untouched"
                );
                plan.skipped.push(Skip {
                    id: record.id.clone(),
                    missing_field: field,
                });
            }
        }
    }
    if members.is_empty() {
        return Ok(plan);
    }

    let groups = group_by(members.iter().copied(), GROUP_KEY_FIELDS);

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

    // One sample per distinct cell line, in first-seen member order.
    let mut sample_by_cell: IndexMap<String, String> = IndexMap::new();
    for member in &members {
        let cell_id = match member.first_link_target(relation::USED_CELL_LINE) {
            Some(id) => id.to_string(),
            None => continue,
        };
        if sample_by_cell.contains_key(&cell_id) {
            continue;
        }
        let label = label_for(doc, &cell_id);
        let sample_table: FieldTable = vec![
            ("name", FieldRule::Const(json!(format!("{label} sample")))),
            (
                "description",
                FieldRule::Const(json!(format!(
                    "Cultured {label} cells prepared for imaging"
                ))),
            ),
            ("cell_line", FieldRule::LinkList(vec![cell_id.clone()])),
        ];
        let sample = factory::build(
            ShapeKind::Sample,
            &mint_id(authority, "sample", &label),
            &Source::Synthesized,
            &sample_table,
        )?;
        sample_by_cell.insert(cell_id, sample.id.clone());
        plan.new_records.samples.push(sample);
    }

    // One experiment per distinct key triple, in first-seen order.
    for (key, group_members) in &groups {
        let (cell_id, stain_id, treatment_id) = (&key[0], &key[1], &key[2]);
        let cell = label_for(doc, cell_id);
        let stain = label_for(doc, stain_id);
        let treatment = label_for(doc, treatment_id);

        let name = format!("Imaging of {cell} with {stain} under {treatment}");
        let experiment_id = mint_id(authority, "experiment", &name);
        let experiment_table: FieldTable = vec![
            ("name", FieldRule::Const(json!(name))),
            (
                "description",
                FieldRule::Const(json!(format!(
                    "Fluorescence imaging of {cell} cells stained with {stain} under {treatment} treatment"
                ))),
            ),
            ("experiment_type", FieldRule::Const(json!("imaging"))),
            (
                "used_sample",
                FieldRule::LinkList(vec![sample_by_cell[cell_id].clone()]),
            ),
            (
                "used_instrument",
                FieldRule::LinkList(vec![instrument_id.clone()]),
            ),
            ("used_stain", FieldRule::LinkList(vec![stain_id.clone()])),
            (
                "used_treatment",
                FieldRule::LinkList(vec![treatment_id.clone()]),
            ),
            ("generated", FieldRule::Derived(GroupDerived::MemberIds)),
        ];
        let experiment = factory::build(
            ShapeKind::Experiment,
            &experiment_id,
            &Source::Group(group_members.as_slice()),
            &experiment_table,
        )?;

        // Members shed the absorbed links and point back at the aggregate.
        for member in group_members {
            let mut add = vec![(
                relation::WAS_GENERATED_BY.to_string(),
                PropertyValue::link(experiment_id.clone()),
            )];
            if let Some(format) = &opts.format_marker {
                add.push((prop::FORMAT.to_string(), PropertyValue::text(format.clone())));
            }
            plan.migrations.insert(
                member.id.clone(),
                FieldMigration {
                    drop: GROUP_KEY_FIELDS.iter().map(|f| f.to_string()).collect(),
                    add,
                },
            );
        }
        plan.new_records.experiments.push(experiment);
    }

    Ok(plan)
}

/// Run the whole pipeline: plan, then rewrite and reassemble.
pub fn promote_imaging(
    doc: CrateDocument,
    opts: &ImagingOptions,
    authority: &dyn NamingAuthority,
) -> Result<CrateDocument> {
    let plan = plan_imaging(&doc, opts, authority)?;
    Ok(apply_plan(doc, plan))
}
