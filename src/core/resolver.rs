// src/core/resolver.rs
use crate::models::TagGroup;
use crate::warn;
use anyhow::{Result, bail};
use std::collections::HashSet;

/// Warning accumulator threaded through validation and loading.
///
/// In strict mode the first warning is returned as a fatal error instead of
/// being recorded, so nothing downstream of it runs.
#[derive(Debug)]
pub struct ValidationContext {
    strict: bool,
    warnings: u64,
}

impl ValidationContext {
    #[must_use]
    pub const fn new(strict: bool) -> Self {
        Self {
            strict,
            warnings: 0,
        }
    }

    #[must_use]
    pub const fn warnings(&self) -> u64 {
        self.warnings
    }

    /// Records a soft validation failure.
    ///
    /// # Errors
    ///
    /// Returns the message as an error when strict mode is on.
    pub fn warn(&mut self, msg: String) -> Result<()> {
        if self.strict {
            bail!(msg);
        }
        warn!("check"; "{msg}");
        self.warnings = self.warnings.saturating_add(1);
        Ok(())
    }
}

/// Validates one entry's tags against the group schema.
///
/// Activation is a single pass: unconditionally active groups (empty
/// `depends_on`) are joined by every group whose dependency names either a
/// used tag or the owning group of a used tag. A tag activating a group does
/// not cascade into that group's own dependents. The owning group of a tag
/// is the first group in schema order that lists it.
///
/// Soft failures (duplicates, unknown tags, out-of-scope tags, min/max
/// violations) go through `ctx`; only strict mode turns them into errors.
///
/// # Errors
///
/// Returns an error only when `ctx` is strict and a warning fires.
pub fn check_tags(
    groups: &[TagGroup],
    entry_tags: &[String],
    ctx: &mut ValidationContext,
) -> Result<()> {
    let mut seen = HashSet::new();
    let mut tag_set: Vec<&str> = Vec::new();
    for tag in entry_tags {
        if seen.insert(tag.as_str()) {
            tag_set.push(tag);
        }
    }
    if tag_set.len() != entry_tags.len() {
        ctx.warn("Duplicate tags found".to_owned())?;
    }

    // 1: Collect active groups
    let mut active: HashSet<usize> = groups
        .iter()
        .enumerate()
        .filter(|(_, group)| group.depends_on.is_empty())
        .map(|(idx, _)| idx)
        .collect();
    let mut known: Vec<&str> = Vec::new();

    for &tag in &tag_set {
        let Some(owner) = groups.iter().find(|group| group.contains(tag)) else {
            ctx.warn(format!("Can't find tag '{tag}'. Skipping.."))?;
            continue;
        };
        known.push(tag);

        for (idx, group) in groups.iter().enumerate() {
            if group.depends_on.groups.iter().any(|name| *name == owner.name) {
                active.insert(idx);
                continue;
            }
            if group.depends_on.tags.iter().any(|t| t == tag) {
                active.insert(idx);
            }
        }
    }

    // 2: Check tags are not outside the active scope
    for &tag in &known {
        let in_scope = active.iter().any(|&idx| groups[idx].contains(tag));
        if !in_scope {
            ctx.warn(format!(
                "Tag '{tag}' couldn't be found in the current scope. Are you \
                 sure you enabled the scope for this tag? (i.e. added tags \
                 that '{tag}' depends on)"
            ))?;
        }
    }

    // 3: Check min/max constraints per active group
    for &idx in &active {
        let group = &groups[idx];
        let count = tag_set.iter().filter(|tag| group.contains(tag)).count();
        let count = u64::try_from(count).unwrap_or(u64::MAX);

        if count < group.min {
            ctx.warn(format!(
                "Minimum tags for group '{}' is not met, required {} and found {count}",
                group.name, group.min
            ))?;
        }
        if let Some(max) = group.max {
            if count > max {
                ctx.warn(format!(
                    "Maximum tags for group '{}' is exceeded, allowed {max} and found {count}",
                    group.name
                ))?;
            }
        }
    }

    Ok(())
}
