use anyhow::Result;
use podfile_targets::dependency::Dependency;
use podfile_targets::manifest::TargetManifest;
use podfile_targets::platform::Platform;
use podfile_targets::target::ResolvedTarget;
use podfile_targets::test_utils::{ManifestFixture, init_test_logging};
use tempfile::TempDir;

fn load_multi_platform() -> Result<(TempDir, Vec<ResolvedTarget>)> {
    init_test_logging(None);
    let temp = TempDir::new()?;
    let path = ManifestFixture::multi_platform().write_to(temp.path())?;
    let tree = TargetManifest::load_tree(&path)?;
    Ok((temp, tree.resolve_all()))
}

fn by_name<'a>(resolved: &'a [ResolvedTarget], name: &str) -> &'a ResolvedTarget {
    resolved
        .iter()
        .find(|t| t.name == name)
        .unwrap_or_else(|| panic!("target {name} missing"))
}

fn dependency_names(target: &ResolvedTarget) -> Vec<&str> {
    target.dependencies.iter().map(|d| d.name.as_str()).collect()
}

#[test]
fn test_resolve_all_in_tree_order() -> Result<()> {
    let (_temp, resolved) = load_multi_platform()?;
    let names: Vec<&str> = resolved.iter().map(|t| t.name.as_str()).collect();
    assert_eq!(names, ["default", "Desktop", "DesktopTests", "Phone", "Tablet"]);
    Ok(())
}

#[test]
fn test_same_platform_child_inherits() -> Result<()> {
    let (_temp, resolved) = load_multi_platform()?;
    let phone = by_name(&resolved, "Phone");

    assert_eq!(phone.label, "Pods-Phone");
    assert!(!phone.exclusive);
    assert_eq!(phone.platform, Some(Platform::ios().with_deployment_target("6.0")));
    assert!(phone.inhibit_all_warnings);
    assert_eq!(phone.link_with, ["Phone", "PhoneWidget"]);
    assert_eq!(dependency_names(phone), ["SVProgressHUD", "SSKeychain"]);
    Ok(())
}

#[test]
fn test_newer_deployment_target_is_exclusive() -> Result<()> {
    let (_temp, resolved) = load_multi_platform()?;
    let tablet = by_name(&resolved, "Tablet");

    assert!(tablet.exclusive);
    assert!(!tablet.inhibit_all_warnings);
    assert_eq!(dependency_names(tablet), ["PSTCollectionView"]);
    Ok(())
}

#[test]
fn test_other_platform_subtree() -> Result<()> {
    let (_temp, resolved) = load_multi_platform()?;
    let desktop = by_name(&resolved, "Desktop");
    let tests = by_name(&resolved, "DesktopTests");

    assert!(desktop.exclusive);
    assert_eq!(desktop.link_with, ["Desktop"]);
    assert_eq!(dependency_names(desktop), ["Sparkle"]);

    assert!(!tests.exclusive);
    assert_eq!(tests.label, "Pods-Desktop-DesktopTests");
    assert_eq!(tests.platform, Some(Platform::osx().with_deployment_target("10.8")));
    assert!(tests.link_with.is_empty());
    assert!(tests.inhibit_all_warnings);
    assert_eq!(dependency_names(tests), ["Specta", "Sparkle"]);
    Ok(())
}

#[test]
fn test_root_snapshot() -> Result<()> {
    let (_temp, resolved) = load_multi_platform()?;
    let root = &resolved[0];

    assert_eq!(root.label, "Pods");
    assert!(root.exclusive);
    assert_eq!(root.dependencies, [Dependency::new("SSKeychain")]);
    Ok(())
}

#[test]
fn test_snapshot_json_round_trip() -> Result<()> {
    let (_temp, resolved) = load_multi_platform()?;
    let json = serde_json::to_string_pretty(&resolved)?;
    let back: Vec<ResolvedTarget> = serde_json::from_str(&json)?;
    assert_eq!(back, resolved);

    let value: serde_json::Value = serde_json::from_str(&json)?;
    assert_eq!(value[0]["label"], "Pods");
    assert_eq!(value[1]["platform"]["deployment_target"], "10.8");
    Ok(())
}
