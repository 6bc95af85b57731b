//! Test fixtures for creating sample target manifests

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

use crate::constants::MANIFEST_FILE_NAME;

/// Test fixture for creating sample Podfile.toml files
#[derive(Clone, Debug)]
pub struct ManifestFixture {
    pub content: String,
    pub name: String,
}

impl ManifestFixture {
    /// Root plus one iOS app target with a nested test target
    pub fn basic() -> Self {
        Self {
            name: "basic".to_string(),
            content: r#"
dependencies = ["Reachability"]

[targets.App]
platform = "ios"
dependencies = ["AFNetworking", { name = "JSONKit", requirement = "~> 1.4" }]

[targets.App.targets.AppTests]
dependencies = ["Kiwi"]
"#
            .trim()
            .to_string(),
        }
    }

    /// Targets for two platforms sharing a root dependency
    pub fn multi_platform() -> Self {
        Self {
            name: "multi_platform".to_string(),
            content: r#"
platform = "ios 6.0"
inhibit_all_warnings = true
dependencies = ["SSKeychain"]

[targets.Phone]
link_with = ["Phone", "PhoneWidget"]
dependencies = ["SVProgressHUD"]

[targets.Tablet]
platform = "ios 7.0"
inhibit_all_warnings = false
dependencies = ["PSTCollectionView"]

[targets.Desktop]
platform = { name = "osx", deployment_target = "10.8" }
link_with = "Desktop"
dependencies = ["Sparkle"]

[targets.Desktop.targets.DesktopTests]
dependencies = ["Specta"]
"#
            .trim()
            .to_string(),
        }
    }

    /// Manifest with invalid TOML syntax
    pub fn invalid_syntax() -> Self {
        Self {
            name: "invalid_syntax".to_string(),
            content: r#"
[targets.App
dependencies = ["AFNetworking"
"#
            .trim()
            .to_string(),
        }
    }

    /// Manifest whose labels collide
    pub fn duplicate_labels() -> Self {
        Self {
            name: "duplicate_labels".to_string(),
            content: r#"
[targets.Tests]

[targets.App.targets.Tests]
exclusive = true
"#
            .trim()
            .to_string(),
        }
    }

    /// Write the fixture to `dir` under the default manifest file name
    pub fn write_to(&self, dir: &Path) -> Result<PathBuf> {
        let manifest_path = dir.join(MANIFEST_FILE_NAME);
        fs::write(&manifest_path, &self.content)
            .with_context(|| format!("Failed to write fixture {}", self.name))?;
        Ok(manifest_path)
    }
}
