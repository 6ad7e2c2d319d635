// src/core/schema.rs
use crate::log;
use crate::models::TagGroup;
use anyhow::{Context as _, Result};
use serde::Deserialize;
use std::collections::HashSet;
use std::fs;
use std::path::Path;

/// File name of the tag-group schema at the catalog root.
pub const TAGS_FILE_NAME: &str = "tags.yaml";

#[derive(Deserialize)]
struct SchemaFile {
    tags: serde_yaml_ng::Mapping,
}

/// Loads the tag-group schema, preserving declaration order.
///
/// Declaration order matters: the first group containing a tag is treated
/// as that tag's owning group during dependency resolution.
///
/// # Errors
///
/// Returns an error if the schema file is missing, is not valid YAML, or a
/// group definition does not match the expected shape.
pub fn load_tag_groups(path: &Path) -> Result<Vec<TagGroup>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read tag schema: {}", path.display()))?;
    let schema: SchemaFile = serde_yaml_ng::from_str(&content)
        .with_context(|| format!("Malformed tag schema: {}", path.display()))?;

    let mut groups = Vec::with_capacity(schema.tags.len());
    for (key, value) in schema.tags {
        let name = key
            .as_str()
            .context("Tag group names must be strings")?
            .to_owned();
        let mut group: TagGroup = serde_yaml_ng::from_value(value)
            .with_context(|| format!("Invalid definition for tag group '{name}'"))?;
        group.name = name;
        groups.push(group);
    }

    log!("schema"; "loaded {} tag groups", groups.len());
    Ok(groups)
}

/// All declared tags, deduplicated, first declaration wins the position.
///
/// The order is load-bearing: ranking uses it as the stable tie-break for
/// equal usage counts.
#[must_use]
pub fn declared_tags(groups: &[TagGroup]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut tags = Vec::new();
    for group in groups {
        for tag in &group.tags {
            if seen.insert(tag.as_str()) {
                tags.push(tag.clone());
            }
        }
    }
    tags
}
