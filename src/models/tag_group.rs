// src/models/tag_group.rs
use serde::{Deserialize, Serialize};

/// Condition under which a tag group becomes active for an entry.
///
/// An empty restriction means the group is active unconditionally. Otherwise
/// the group activates when the entry uses one of the listed `tags`, or any
/// tag owned by one of the listed `groups`.
#[derive(Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct DependencyRestriction {
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub groups: Vec<String>,
}

impl DependencyRestriction {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tags.is_empty() && self.groups.is_empty()
    }
}

/// A named collection of tags from the schema file.
///
/// `min`/`max` bound how many of the group's tags may appear on a single
/// entry; `max: None` means unbounded. The `name` is the mapping key in the
/// schema file and is filled in after deserialization.
#[derive(Deserialize, Debug, Clone)]
pub struct TagGroup {
    #[serde(skip)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default = "default_visible")]
    pub visible: bool,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub min: u64,
    #[serde(default)]
    pub max: Option<u64>,
    #[serde(default)]
    pub depends_on: DependencyRestriction,
}

const fn default_visible() -> bool {
    true
}

impl TagGroup {
    #[must_use]
    pub fn contains(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }
}

/// Public projection of a group for the tag-groups manifest.
///
/// Only `name`, `description` and `tags` are published; bounds and
/// dependency information stay internal to validation.
#[derive(Serialize, Debug)]
pub struct VisibleGroup<'a> {
    pub name: &'a str,
    pub description: &'a str,
    pub tags: &'a [String],
}

impl<'a> From<&'a TagGroup> for VisibleGroup<'a> {
    fn from(group: &'a TagGroup) -> Self {
        Self {
            name: &group.name,
            description: &group.description,
            tags: &group.tags,
        }
    }
}
