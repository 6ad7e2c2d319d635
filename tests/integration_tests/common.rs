// tests/integration_tests/common.rs
use anyhow::Result;
use dbgen::Args;
use std::fs;
use std::io::Write as _;
use std::path::Path;
use tempfile::TempDir;

pub const TEST_TIMESTAMP: &str = "1700000000";

pub fn create_test_file(dir: &Path, name: &str, content: &str) -> Result<()> {
    let path = dir.join(name);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let mut file = fs::File::create(path)?;
    file.write_all(content.as_bytes())?;
    Ok(())
}

/// Catalog with one `core` group (tags x/y, min 1) and one entry using `x`.
pub fn setup_catalog() -> Result<TempDir> {
    let temp_dir = TempDir::new()?;

    create_test_file(
        temp_dir.path(),
        "tags.yaml",
        "tags:\n  core:\n    description: Core tags\n    tags: [x, y]\n    min: 1\n",
    )?;

    create_test_file(
        temp_dir.path(),
        "entries/alpha.yaml",
        "alpha:\n  name: Alpha\n  tags: [x]\n",
    )?;

    Ok(temp_dir)
}

pub fn args_for(root: &Path) -> Args {
    Args {
        directory: root.to_path_buf(),
        output: root.join("build"),
        strict: false,
        test: false,
        verbose: false,
    }
}
