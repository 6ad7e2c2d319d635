// src/models/entry.rs
use serde_yaml_ng::Mapping;
use std::collections::BTreeMap;

/// The body of one catalog entry: arbitrary display fields plus `tags`.
pub type EntryRecord = Mapping;

/// The assembled database, keyed by entry identifier.
pub type Database = BTreeMap<String, EntryRecord>;

/// Field injected with the GitHub URL of the source file.
pub const URL_FIELD: &str = "__url";
/// Field injected with the last-commit timestamp (epoch seconds, as text).
pub const LAST_MOD_FIELD: &str = "__last_mod";
/// Field injected with the canonical page URL of the entry.
pub const SITE_URL_FIELD: &str = "__site_url";

pub const SITE_URL_PREFIX: &str = "https://unify.ai/database/";
pub const SOURCE_URL_PREFIX: &str = "https://github.com/unifyai/database/blob/main/";

/// One-level override of directory defaults by entry fields.
///
/// Returns a new record containing every default, with any field the entry
/// declares itself replacing the default wholesale. Nested mappings are not
/// merged recursively.
#[must_use]
pub fn merge_defaults(defaults: &EntryRecord, entry: &EntryRecord) -> EntryRecord {
    let mut merged = defaults.clone();
    for (key, value) in entry {
        merged.insert(key.clone(), value.clone());
    }
    merged
}
