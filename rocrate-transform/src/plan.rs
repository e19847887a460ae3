//! The transient plan connecting the two pipeline stages

use crate::assemble;
use crate::rewrite::{self, FieldMigration};
use rocrate_graph::{CrateDocument, EntityRecord};
use rustc_hash::{FxHashMap, FxHashSet};

/// Records created by stage 1, kept apart by creation phase.
///
/// The phases flatten in a fixed order at assembly time: shared auxiliaries
/// (instruments), then samples, then experiments, then any per-member
/// derived records.
#[derive(Debug, Clone, Default)]
pub struct NewRecords {
    pub instruments: Vec<EntityRecord>,
    pub samples: Vec<EntityRecord>,
    pub experiments: Vec<EntityRecord>,
    pub derived: Vec<EntityRecord>,
}

impl NewRecords {
    pub fn len(&self) -> usize {
        self.instruments.len() + self.samples.len() + self.experiments.len() + self.derived.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Flatten into creation order.
    pub fn into_ordered(self) -> Vec<EntityRecord> {
        let mut records = self.instruments;
        records.extend(self.samples);
        records.extend(self.experiments);
        records.extend(self.derived);
        records
    }
}

/// A candidate excluded from transformation because a required linking
/// field was absent. Non-fatal; the record passes through untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Skip {
    pub id: String,
    pub missing_field: String,
}

/// Everything stage 1 decided: the id remap table, the removal set, the new
/// records, and member field migrations. Scoped to one invocation and
/// consumed by [`apply_plan`].
#[derive(Debug, Clone, Default)]
pub struct TransformPlan {
    pub id_map: FxHashMap<String, String>,
    pub removals: FxHashSet<String>,
    pub new_records: NewRecords,
    pub migrations: FxHashMap<String, FieldMigration>,
    pub skipped: Vec<Skip>,
}

impl TransformPlan {
    /// True when stage 1 matched nothing: stage 2 will return the input
    /// graph unchanged.
    pub fn is_noop(&self) -> bool {
        self.id_map.is_empty()
            && self.removals.is_empty()
            && self.new_records.is_empty()
            && self.migrations.is_empty()
    }
}

/// Stage 2: consume a plan, producing the output document.
///
/// Rewrites and filters the surviving records, appends the new records in
/// creation order, and surfaces any dangling references left in the result.
/// The input document is consumed; nothing aliases back into it.
pub fn apply_plan(mut doc: CrateDocument, plan: TransformPlan) -> CrateDocument {
    let original = std::mem::take(&mut doc.graph);
    let survivors = rewrite::rewrite_survivors(
        original.into_records(),
        &plan.id_map,
        &plan.removals,
        &plan.migrations,
    );

    tracing::info!(
        removed = plan.removals.len(),
        created = plan.new_records.len(),
        skipped = plan.skipped.len(),
        "applying transform plan"
    );

    let graph = assemble::assemble(survivors, plan.new_records);
    for dangling in graph.dangling_references() {
        tracing::warn!(
            source = %dangling.source,
            property = %dangling.property,
            target = %dangling.target,
            "dangling reference in output graph"
        );
    }
    doc.with_graph(graph)
}
