// src/core/loader.rs
use crate::core::resolver::{ValidationContext, check_tags};
use crate::core::schema::TAGS_FILE_NAME;
use crate::models::entry::{
    LAST_MOD_FIELD, SITE_URL_FIELD, SITE_URL_PREFIX, SOURCE_URL_PREFIX, URL_FIELD,
};
use crate::models::{Database, EntryRecord, TagGroup, merge_defaults};
use crate::utils::{History, fix_image_url, is_hidden};
use crate::{debug, log};
use anyhow::{Context as _, Result, bail};
use serde_yaml_ng::Value;
use std::env;
use std::fs;
use std::path::Path;
use walkdir::WalkDir;

/// Per-directory defaults file applied to every sibling entry.
pub const DEFAULT_FILE_NAME: &str = "__default.yaml";

/// Walks the catalog tree and assembles the entry database.
///
/// Hidden files and directories are skipped. Entry files directly at the
/// catalog root are ignored; descriptors live one directory level or more
/// below it, next to an optional `__default.yaml`.
///
/// # Errors
///
/// Fatal: unreadable or malformed YAML, an entry file without a single
/// top-level key, a record without `tags`, or a duplicate entry id. In
/// strict mode the first validation warning is fatal too.
pub fn load_database(
    root: &Path,
    groups: &[TagGroup],
    ctx: &mut ValidationContext,
    history: &dyn History,
) -> Result<Database> {
    let root = if root.is_absolute() {
        root.to_path_buf()
    } else {
        env::current_dir()?.join(root)
    };
    let mut database = Database::new();

    for dir in WalkDir::new(&root)
        .follow_links(true)
        .into_iter()
        .filter_entry(|e| !is_hidden(e))
    {
        let dir = dir?;
        if !dir.file_type().is_dir() {
            continue;
        }
        load_directory(dir.path(), &root, groups, ctx, history, &mut database)?;
    }

    log!("loader"; "loaded {} entries", database.len());
    Ok(database)
}

fn load_directory(
    dir: &Path,
    root: &Path,
    groups: &[TagGroup],
    ctx: &mut ValidationContext,
    history: &dyn History,
    database: &mut Database,
) -> Result<()> {
    let defaults = load_defaults(dir, groups, ctx)?;

    for file in fs::read_dir(dir).with_context(|| format!("Failed to list {}", dir.display()))? {
        let file = file?;
        if !file.file_type()?.is_file() {
            continue;
        }
        let path = file.path();
        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            continue;
        };
        if !is_entry_file(name) {
            continue;
        }
        if dir == root {
            // Only the schema and defaults machinery lives at the root.
            continue;
        }

        debug!("loader"; "loading {}", path.display());
        let (key, record) = load_entry(&path, groups, ctx)?;
        if database.contains_key(&key) {
            bail!(
                "Duplicate entry id '{key}' (second definition in {})",
                path.display()
            );
        }
        let record = finalize_record(&path, root, &key, &record, &defaults, history)?;
        database.insert(key, record);
    }

    Ok(())
}

/// Entry files are YAML, and names starting with `.` or `_` are reserved.
fn is_entry_file(name: &str) -> bool {
    if name == TAGS_FILE_NAME || name.starts_with('.') || name.starts_with('_') {
        return false;
    }
    Path::new(name)
        .extension()
        .is_some_and(|ext| ext == "yaml" || ext == "yml")
}

fn load_defaults(dir: &Path, groups: &[TagGroup], ctx: &mut ValidationContext) -> Result<EntryRecord> {
    let path = dir.join(DEFAULT_FILE_NAME);
    if !path.exists() {
        return Ok(EntryRecord::new());
    }

    debug!("loader"; "loading defaults from {}", path.display());
    let content = fs::read_to_string(&path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let mut defaults: EntryRecord = serde_yaml_ng::from_str(&content)
        .with_context(|| format!("Malformed defaults file {}", path.display()))?;

    if let Some(tags) = defaults.get("tags") {
        let tags = tag_list(tags)
            .with_context(|| format!("Invalid 'tags' in {}", path.display()))?;
        check_tags(groups, &tags, ctx)?;
    }
    if let Some(fixed) = defaults.get("image_url").and_then(Value::as_str).map(fix_image_url) {
        defaults.insert("image_url".into(), Value::String(fixed));
    }

    Ok(defaults)
}

fn load_entry(
    path: &Path,
    groups: &[TagGroup],
    ctx: &mut ValidationContext,
) -> Result<(String, EntryRecord)> {
    let content =
        fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))?;
    let doc: EntryRecord = serde_yaml_ng::from_str(&content)
        .with_context(|| format!("Malformed entry file {}", path.display()))?;

    let mut pairs = doc.into_iter();
    let (key, body) = pairs
        .next()
        .with_context(|| format!("{} declares no entry", path.display()))?;
    if pairs.next().is_some() {
        bail!("{} must declare exactly one entry", path.display());
    }
    let key = key
        .as_str()
        .with_context(|| format!("Entry id in {} must be a string", path.display()))?
        .to_owned();
    let Value::Mapping(mut record) = body else {
        bail!("Entry '{key}' in {} must be a mapping", path.display());
    };

    let tags = record
        .get("tags")
        .with_context(|| format!("Entry '{key}' is missing its 'tags' field"))?;
    let tags = tag_list(tags).with_context(|| format!("Invalid 'tags' on entry '{key}'"))?;
    check_tags(groups, &tags, ctx)?;

    if let Some(fixed) = record.get("image_url").and_then(Value::as_str).map(fix_image_url) {
        record.insert("image_url".into(), Value::String(fixed));
    }

    Ok((key, record))
}

fn finalize_record(
    path: &Path,
    root: &Path,
    key: &str,
    record: &EntryRecord,
    defaults: &EntryRecord,
    history: &dyn History,
) -> Result<EntryRecord> {
    let mut merged = merge_defaults(defaults, record);

    let relative = path.strip_prefix(root).unwrap_or(path);
    let source_url = format!(
        "{SOURCE_URL_PREFIX}{}",
        relative.to_string_lossy().replace('\\', "/")
    );
    merged.insert(URL_FIELD.into(), Value::String(source_url));
    merged.insert(
        LAST_MOD_FIELD.into(),
        Value::String(history.last_modified(path)?),
    );
    merged.insert(
        SITE_URL_FIELD.into(),
        Value::String(format!("{SITE_URL_PREFIX}{key}")),
    );

    Ok(merged)
}

fn tag_list(value: &Value) -> Result<Vec<String>> {
    let items = value
        .as_sequence()
        .context("'tags' must be a list of strings")?;
    items
        .iter()
        .map(|item| {
            item.as_str()
                .map(str::to_owned)
                .context("'tags' entries must be strings")
        })
        .collect()
}
