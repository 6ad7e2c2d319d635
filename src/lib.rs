// src/lib.rs
pub mod cli;
pub mod core;
pub mod logger;
pub mod models;
pub mod utils;

pub use crate::cli::{Args, run, run_with_history};
pub use crate::core::loader::{DEFAULT_FILE_NAME, load_database};
pub use crate::core::ranking::rank_tags;
pub use crate::core::resolver::{ValidationContext, check_tags};
pub use crate::core::schema::{TAGS_FILE_NAME, declared_tags, load_tag_groups};
pub use crate::models::{Database, DependencyRestriction, EntryRecord, TagGroup, merge_defaults};
pub use crate::utils::{FixedHistory, GitHistory, History, fix_image_url};
