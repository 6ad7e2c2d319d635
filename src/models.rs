// src/models.rs
pub mod entry;
pub mod tag_group;

pub use entry::{Database, EntryRecord, merge_defaults};
pub use tag_group::{DependencyRestriction, TagGroup, VisibleGroup};
