//! Aggregation keys and N:1 grouping

use indexmap::IndexMap;
use rocrate_graph::EntityRecord;

/// An aggregation key: the link targets of the configured key fields, in
/// field order.
pub type GroupKey = Vec<String>;

/// Extract a record's aggregation key.
///
/// Takes the first link target of each key field, in the given fixed order.
/// Returns `None` when any key field carries no link; such records are
/// excluded from grouping.
pub fn compute_key(record: &EntityRecord, key_fields: &[&str]) -> Option<GroupKey> {
    key_fields
        .iter()
        .map(|field| record.first_link_target(field).map(str::to_string))
        .collect()
}

/// The key field a record is missing, if any. Used for skip diagnostics.
pub fn missing_key_field(record: &EntityRecord, key_fields: &[&str]) -> Option<String> {
    key_fields
        .iter()
        .find(|field| record.first_link_target(field).is_none())
        .map(|field| (*field).to_string())
}

/// Group records by aggregation key, preserving first-seen order of
/// distinct keys and member order within each group.
///
/// First-seen order drives downstream id minting and output ordering, so it
/// is part of the determinism contract.
pub fn group_by<'a, I>(records: I, key_fields: &[&str]) -> IndexMap<GroupKey, Vec<&'a EntityRecord>>
where
    I: IntoIterator<Item = &'a EntityRecord>,
{
    let mut groups: IndexMap<GroupKey, Vec<&'a EntityRecord>> = IndexMap::new();
    for record in records {
        if let Some(key) = compute_key(record, key_fields) {
            groups.entry(key).or_default().push(record);
        }
    }
    groups
}
