use anyhow::Result;
use podfile_targets::constants::MANIFEST_FILE_NAME;
use podfile_targets::core::{PodfileError, user_friendly_error};
use podfile_targets::manifest::{TargetManifest, find_manifest_from, find_manifest_with_optional};
use podfile_targets::test_utils::{ManifestFixture, init_test_logging};
use tempfile::TempDir;

#[test]
fn test_discover_and_load_from_subdirectory() -> Result<()> {
    init_test_logging(None);
    let temp = TempDir::new()?;
    let written = ManifestFixture::basic().write_to(temp.path())?;
    let nested = temp.path().join("App").join("Classes");
    std::fs::create_dir_all(&nested)?;

    let found = find_manifest_from(nested)?;
    assert_eq!(found, written);

    let tree = TargetManifest::load_tree(&found)?;
    let labels: Vec<String> = tree.iter().map(|t| t.label()).collect();
    assert_eq!(labels, ["Pods", "Pods-App", "Pods-App-AppTests"]);
    Ok(())
}

#[test]
fn test_explicit_manifest_path() -> Result<()> {
    let temp = TempDir::new()?;
    let written = ManifestFixture::multi_platform().write_to(temp.path())?;

    let found = find_manifest_with_optional(Some(written.clone()))?;
    assert_eq!(found, written);
    Ok(())
}

#[test]
fn test_no_manifest_anywhere() -> Result<()> {
    let temp = TempDir::new()?;
    // A manifest above the temp dir would be found; only the miss is checked.
    match find_manifest_from(temp.path().to_path_buf()) {
        Ok(found) => assert!(!found.starts_with(temp.path())),
        Err(err) => {
            let ctx = user_friendly_error(err);
            assert!(matches!(ctx.error, PodfileError::ManifestNotFound { .. }));
            assert!(ctx.to_string().contains(MANIFEST_FILE_NAME));
        }
    }
    Ok(())
}

#[test]
fn test_invalid_syntax_is_reported_with_suggestion() -> Result<()> {
    let temp = TempDir::new()?;
    let path = ManifestFixture::invalid_syntax().write_to(temp.path())?;

    let err = TargetManifest::load(&path).unwrap_err();
    assert!(format!("{err:#}").contains("Failed to parse manifest file"));

    let ctx = user_friendly_error(err);
    assert!(matches!(ctx.error, PodfileError::ManifestParseError { .. }));
    assert!(ctx.suggestion.is_some());
    Ok(())
}

#[test]
fn test_duplicate_labels_fail_tree_construction() -> Result<()> {
    let temp = TempDir::new()?;
    let path = ManifestFixture::duplicate_labels().write_to(temp.path())?;

    // Parsing succeeds; only building the tree notices the collision.
    TargetManifest::load(&path)?;
    let err = TargetManifest::load_tree(&path).unwrap_err();
    assert!(format!("{err:#}").contains("Invalid target definitions"));

    let ctx = user_friendly_error(err);
    match &ctx.error {
        PodfileError::DuplicateLabel { label, .. } => assert_eq!(label, "Pods-Tests"),
        other => panic!("unexpected error: {other}"),
    }
    assert!(ctx.details.is_some());
    Ok(())
}
