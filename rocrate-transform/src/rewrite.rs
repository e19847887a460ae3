//! Reference rewriting and grouping field migration

use rocrate_graph::{EntityRecord, PropertyValue};
use rustc_hash::{FxHashMap, FxHashSet};

/// Field changes applied to one grouped member record once its grouping
/// links have been absorbed into an aggregate.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldMigration {
    /// Properties removed from the member (the consumed grouping links)
    pub drop: Vec<String>,
    /// Properties appended to the member; a key the member already carries
    /// is left untouched
    pub add: Vec<(String, PropertyValue)>,
}

/// Rewrite the surviving records of a graph.
///
/// Records in `removals` are dropped. On every survivor, each link (bare or
/// inside a sequence) whose target is a key of `id_map` is repointed at the
/// mapped id; every other value, and the presence and order of sibling
/// fields, is preserved. Idempotent: with an empty map this is the identity,
/// and after one pass no mapped old id remains.
pub fn rewrite_survivors(
    records: Vec<EntityRecord>,
    id_map: &FxHashMap<String, String>,
    removals: &FxHashSet<String>,
    migrations: &FxHashMap<String, FieldMigration>,
) -> Vec<EntityRecord> {
    let mut survivors = Vec::with_capacity(records.len());
    for mut record in records {
        if removals.contains(&record.id) {
            continue;
        }
        if !id_map.is_empty() {
            for (_, value) in record.properties.iter_mut() {
                value.map_link_targets(&|target| id_map.get(target).cloned());
            }
        }
        if let Some(migration) = migrations.get(&record.id) {
            for key in &migration.drop {
                record.remove(key);
            }
            for (key, value) in &migration.add {
                if record.get(key).is_none() {
                    record.set(key.clone(), value.clone());
                }
            }
        }
        survivors.push(record);
    }
    survivors
}
