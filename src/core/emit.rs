// src/core/emit.rs
//! Writes the build artifacts: the database, the ranked tag list, the
//! visible tag-group manifest, and the sitemap.

use crate::log;
use crate::models::entry::SITE_URL_PREFIX;
use crate::models::{Database, TagGroup, VisibleGroup};
use anyhow::{Context as _, Result};
use serde::Serialize;
use std::fs;
use std::path::Path;

const SITEMAP_NS: &str = "http://www.sitemaps.org/schemas/sitemap/0.9";

/// Serializes every artifact into `out_dir`, creating it if needed.
///
/// Called only after the whole pipeline succeeded, so a failed run never
/// leaves partial output behind.
///
/// # Errors
///
/// Returns an error when the output directory cannot be created or a file
/// cannot be serialized or written.
pub fn write_artifacts(
    out_dir: &Path,
    database: &Database,
    ranked: &[String],
    groups: &[TagGroup],
) -> Result<()> {
    fs::create_dir_all(out_dir)
        .with_context(|| format!("Failed to create {}", out_dir.display()))?;

    write_json(&out_dir.join("database.json"), database)?;
    write_json(&out_dir.join("tags.json"), &ranked)?;

    let visible: Vec<VisibleGroup> = groups
        .iter()
        .filter(|group| group.visible)
        .map(VisibleGroup::from)
        .collect();
    write_json(&out_dir.join("tag-groups.json"), &visible)?;

    fs::write(out_dir.join("sitemap.xml"), sitemap_xml())
        .with_context(|| format!("Failed to write sitemap to {}", out_dir.display()))?;
    log!("emit"; "sitemap.xml");

    Ok(())
}

fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    let json = serde_json::to_string(value)
        .with_context(|| format!("Failed to serialize {}", path.display()))?;
    fs::write(path, json).with_context(|| format!("Failed to write {}", path.display()))?;
    log!("emit"; "{}", path.file_name().unwrap_or_default().to_string_lossy());
    Ok(())
}

/// Sitemap with the site root as its only URL.
///
/// Per-entry URLs stay out until the site serves a page per entry.
fn sitemap_xml() -> String {
    let mut xml = String::new();
    xml.push_str(r#"<?xml version="1.0" encoding="UTF-8"?>"#);
    xml.push('\n');
    xml.push_str(&format!(r#"<urlset xmlns="{SITEMAP_NS}">"#));
    xml.push('\n');
    xml.push_str("  <url>\n");
    xml.push_str(&format!("    <loc>{}</loc>\n", escape_xml(SITE_URL_PREFIX)));
    xml.push_str("  </url>\n");
    xml.push_str("</urlset>\n");
    xml
}

fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}
