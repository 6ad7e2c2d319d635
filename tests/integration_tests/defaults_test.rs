// tests/integration_tests/defaults_test.rs
use super::common::{TEST_TIMESTAMP, args_for, create_test_file, setup_catalog};
use anyhow::Result;
use dbgen::{FixedHistory, run_with_history};
use std::fs;

fn database_json(args: &dbgen::Args) -> Result<serde_json::Value> {
    Ok(serde_json::from_str(&fs::read_to_string(
        args.output.join("database.json"),
    )?)?)
}

#[test]
fn test_inherited_image_url_gets_cdn_prefix() -> Result<()> {
    let catalog = setup_catalog()?;
    create_test_file(
        catalog.path(),
        "entries/__default.yaml",
        "image_url: foo.png\nlicense: MIT\n",
    )?;

    let args = args_for(catalog.path());
    let warnings = run_with_history(&args, &FixedHistory(TEST_TIMESTAMP.to_owned()))?;
    assert_eq!(warnings, 0);

    let db = database_json(&args)?;
    assert_eq!(
        db["alpha"]["image_url"],
        "https://cdn.saas.unify.ai/foo.png"
    );
    assert_eq!(db["alpha"]["license"], "MIT");
    Ok(())
}

#[test]
fn test_own_image_url_beats_default() -> Result<()> {
    let catalog = setup_catalog()?;
    create_test_file(catalog.path(), "entries/__default.yaml", "image_url: foo.png\n")?;
    create_test_file(
        catalog.path(),
        "entries/beta.yaml",
        "beta:\n  tags: [y]\n  image_url: http://x/y.png\n",
    )?;

    let args = args_for(catalog.path());
    run_with_history(&args, &FixedHistory(TEST_TIMESTAMP.to_owned()))?;

    let db = database_json(&args)?;
    assert_eq!(db["beta"]["image_url"], "http://x/y.png");
    assert_eq!(
        db["alpha"]["image_url"],
        "https://cdn.saas.unify.ai/foo.png"
    );
    Ok(())
}

#[test]
fn test_default_tags_fill_in_missing_field_after_merge() -> Result<()> {
    // The entry must carry its own tags to parse; defaults still provide
    // other fields and have their own tags validated.
    let catalog = setup_catalog()?;
    create_test_file(catalog.path(), "entries/__default.yaml", "tags: [x]\nvendor: acme\n")?;

    let args = args_for(catalog.path());
    let warnings = run_with_history(&args, &FixedHistory(TEST_TIMESTAMP.to_owned()))?;
    assert_eq!(warnings, 0);

    let db = database_json(&args)?;
    assert_eq!(db["alpha"]["vendor"], "acme");
    // The entry's own tag list wins over the default one.
    assert_eq!(db["alpha"]["tags"], serde_json::json!(["x"]));
    Ok(())
}

#[test]
fn test_default_tags_are_validated() -> Result<()> {
    // 'x' keeps core's min satisfied, so the unknown tag is the only
    // warning the defaults list produces.
    let catalog = setup_catalog()?;
    create_test_file(
        catalog.path(),
        "entries/__default.yaml",
        "tags: [x, unheard_of]\n",
    )?;

    let args = args_for(catalog.path());
    let warnings = run_with_history(&args, &FixedHistory(TEST_TIMESTAMP.to_owned()))?;
    assert_eq!(warnings, 1);
    Ok(())
}

#[test]
fn test_default_tags_violating_min_warn_too() -> Result<()> {
    // A defaults list with no core tag trips both the unknown-tag check
    // and core's min bound.
    let catalog = setup_catalog()?;
    create_test_file(
        catalog.path(),
        "entries/__default.yaml",
        "tags: [unheard_of]\n",
    )?;

    let args = args_for(catalog.path());
    let warnings = run_with_history(&args, &FixedHistory(TEST_TIMESTAMP.to_owned()))?;
    assert_eq!(warnings, 2);
    Ok(())
}
