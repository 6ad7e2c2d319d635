// src/core/ranking.rs
use crate::log;
use crate::models::Database;
use serde_yaml_ng::Value;
use std::cmp::Reverse;
use std::collections::HashMap;

/// Orders the declared tags by usage across the database.
///
/// Most-used first; ties keep declaration order because the sort is stable.
/// Tags no entry uses are dropped from the result (declaring them is still
/// valid).
#[must_use]
pub fn rank_tags(declared: &[String], database: &Database) -> Vec<String> {
    let mut counts: HashMap<&str, u64> = declared.iter().map(|tag| (tag.as_str(), 0)).collect();

    for record in database.values() {
        let Some(tags) = record.get("tags").and_then(Value::as_sequence) else {
            continue;
        };
        for tag in tags.iter().filter_map(Value::as_str) {
            if let Some(count) = counts.get_mut(tag) {
                *count = count.saturating_add(1);
            }
        }
    }

    let usage = |tag: &str| counts.get(tag).copied().unwrap_or(0);
    let mut ranked: Vec<&String> = declared.iter().filter(|tag| usage(tag.as_str()) > 0).collect();
    ranked.sort_by_key(|tag| Reverse(usage(tag.as_str())));

    log!("ranking"; "ranked {} of {} declared tags", ranked.len(), declared.len());
    ranked.into_iter().cloned().collect()
}
