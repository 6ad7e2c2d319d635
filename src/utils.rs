// src/utils.rs
use crate::debug;
use anyhow::{Context as _, Result};
use std::path::Path;
use std::process::Command;

pub const CDN_PREFIX: &str = "https://cdn.saas.unify.ai/";

/// Prefix relative image paths with the CDN base.
///
/// Absolute `http(s)` URLs and inline `data:image` URIs pass through
/// unchanged.
#[must_use]
pub fn fix_image_url(url: &str) -> String {
    if url.starts_with("http") || url.starts_with("data:image") {
        url.to_owned()
    } else {
        format!("{CDN_PREFIX}{url}")
    }
}

pub fn is_hidden(entry: &walkdir::DirEntry) -> bool {
    entry.file_name().to_str().is_some_and(|s| {
        // Don't consider temp directories as hidden
        if s.starts_with(".tmp") {
            return false;
        }
        s.starts_with('.')
    })
}

/// Source of last-modified timestamps for entry files.
///
/// The production implementation reads version-control history; tests
/// substitute a fixed value.
pub trait History {
    /// Epoch-seconds timestamp of the last change to `path`, as text.
    /// Empty string when the file has no recorded history.
    fn last_modified(&self, path: &Path) -> Result<String>;
}

/// Reads the last commit timestamp of a file from the enclosing git
/// repository.
pub struct GitHistory;

impl History for GitHistory {
    fn last_modified(&self, path: &Path) -> Result<String> {
        let output = Command::new("git")
            .args(["log", "-1", "--format=%at", "--"])
            .arg(path)
            .output()
            .context("Failed to run git log")?;

        if !output.status.success() {
            debug!("history"; "no git history for {}", path.display());
            return Ok(String::new());
        }

        Ok(String::from_utf8_lossy(&output.stdout).trim().to_owned())
    }
}

/// Test double returning the same timestamp for every path.
pub struct FixedHistory(pub String);

impl History for FixedHistory {
    fn last_modified(&self, _path: &Path) -> Result<String> {
        Ok(self.0.clone())
    }
}
