// tests/integration_tests/loader_test.rs
use super::common::{TEST_TIMESTAMP, args_for, create_test_file, setup_catalog};
use anyhow::Result;
use dbgen::{FixedHistory, run_with_history};
use std::fs;

fn entry_keys(args: &dbgen::Args) -> Result<Vec<String>> {
    let db: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(args.output.join("database.json"))?)?;
    Ok(db.as_object().unwrap().keys().cloned().collect())
}

#[test]
fn test_root_level_entry_files_are_ignored() -> Result<()> {
    let catalog = setup_catalog()?;
    create_test_file(catalog.path(), "rootling.yaml", "rootling:\n  tags: [x]\n")?;

    let args = args_for(catalog.path());
    run_with_history(&args, &FixedHistory(TEST_TIMESTAMP.to_owned()))?;
    assert_eq!(entry_keys(&args)?, vec!["alpha"]);
    Ok(())
}

#[test]
fn test_hidden_directories_are_skipped() -> Result<()> {
    let catalog = setup_catalog()?;
    create_test_file(
        catalog.path(),
        ".drafts/hidden.yaml",
        "hidden:\n  tags: [x]\n",
    )?;

    let args = args_for(catalog.path());
    run_with_history(&args, &FixedHistory(TEST_TIMESTAMP.to_owned()))?;
    assert_eq!(entry_keys(&args)?, vec!["alpha"]);
    Ok(())
}

#[test]
fn test_underscore_and_dot_files_are_skipped() -> Result<()> {
    let catalog = setup_catalog()?;
    create_test_file(catalog.path(), "entries/.wip.yaml", "wip:\n  tags: [x]\n")?;
    create_test_file(catalog.path(), "entries/_notes.yaml", "notes:\n  tags: [x]\n")?;
    create_test_file(catalog.path(), "entries/readme.md", "not yaml")?;

    let args = args_for(catalog.path());
    run_with_history(&args, &FixedHistory(TEST_TIMESTAMP.to_owned()))?;
    assert_eq!(entry_keys(&args)?, vec!["alpha"]);
    Ok(())
}

#[test]
fn test_yml_extension_is_accepted() -> Result<()> {
    let catalog = setup_catalog()?;
    create_test_file(catalog.path(), "entries/beta.yml", "beta:\n  tags: [y]\n")?;

    let args = args_for(catalog.path());
    run_with_history(&args, &FixedHistory(TEST_TIMESTAMP.to_owned()))?;
    assert_eq!(entry_keys(&args)?, vec!["alpha", "beta"]);
    Ok(())
}

#[test]
fn test_nested_directories_are_walked() -> Result<()> {
    let catalog = setup_catalog()?;
    create_test_file(
        catalog.path(),
        "entries/deeper/gamma.yaml",
        "gamma:\n  tags: [y]\n",
    )?;

    let args = args_for(catalog.path());
    run_with_history(&args, &FixedHistory(TEST_TIMESTAMP.to_owned()))?;
    assert_eq!(entry_keys(&args)?, vec!["alpha", "gamma"]);
    Ok(())
}

#[test]
fn test_schema_file_is_never_an_entry() -> Result<()> {
    // A copy of tags.yaml inside an entry directory is still skipped.
    let catalog = setup_catalog()?;
    let schema = fs::read_to_string(catalog.path().join("tags.yaml"))?;
    create_test_file(catalog.path(), "entries/tags.yaml", &schema)?;

    let args = args_for(catalog.path());
    run_with_history(&args, &FixedHistory(TEST_TIMESTAMP.to_owned()))?;
    assert_eq!(entry_keys(&args)?, vec!["alpha"]);
    Ok(())
}
