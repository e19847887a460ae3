//! Deterministic reassembly of the output graph

use crate::plan::NewRecords;
use rocrate_graph::{EntityRecord, Graph};

/// Merge rewritten survivors and newly created records into the output
/// graph.
///
/// Survivors keep their original relative order; new records follow in
/// creation order (shared auxiliaries, samples, experiments, derived). The
/// ordering is a compatibility contract for downstream consumers and
/// reproducible fixtures.
pub fn assemble(survivors: Vec<EntityRecord>, new_records: NewRecords) -> Graph {
    let mut records = survivors;
    records.extend(new_records.into_ordered());
    Graph::new(records)
}
