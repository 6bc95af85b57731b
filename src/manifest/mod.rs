//! Target manifest parsing and tree construction
//!
//! The manifest (`Podfile.toml`) declares the target definition tree in TOML.
//! Root-level keys configure the implicit root target; every `[targets.<Name>]`
//! table declares a nested target with the same keys, recursively.
//!
//! # Manifest Format
//!
//! ```toml
//! platform = "ios 6.0"
//! inhibit_all_warnings = true
//! dependencies = ["Reachability"]
//!
//! [targets.App]
//! link_with = ["App", "AppExtension"]
//! dependencies = [
//!     "AFNetworking",
//!     { name = "JSONKit", requirement = "~> 1.4" },
//! ]
//!
//! [targets.App.targets.AppTests]
//! dependencies = ["Kiwi"]
//!
//! [targets.MacApp]
//! platform = { name = "osx", deployment_target = "10.8" }
//! ```
//!
//! # Keys
//!
//! | Key                    | Type                               | Notes                              |
//! |------------------------|------------------------------------|------------------------------------|
//! | `platform`             | `"ios"`, `"ios 6.0"` or a table    | inherited by nested targets        |
//! | `exclusive`            | bool                               | initial exclusivity                |
//! | `inhibit_all_warnings` | bool                               | inherited by nested targets        |
//! | `link_with`            | string or array of strings         | never inherited                    |
//! | `dependencies`         | array of names or `{name, requirement}` tables | inherited unless exclusive |
//! | `targets`              | table of nested targets            | names must be unique among siblings |
//!
//! Unknown keys are rejected. Sibling uniqueness comes for free from TOML,
//! which refuses duplicate keys.
//!
//! # Validation
//!
//! While building the tree the loader rejects empty target names, nested
//! targets named after the reserved root name, and any two targets that
//! derive the same label.

mod helpers;


pub use helpers::{find_manifest, find_manifest_from, find_manifest_with_optional};

use crate::constants::{MANIFEST_FILE_NAME, ROOT_TARGET_NAME};
use crate::core::PodfileError;
use crate::dependency::Dependency;
use crate::platform::{Platform, PlatformName};
use crate::target::{Target, TargetDefinitionTree, TargetId};
use anyhow::{Context, Result};
use serde::Deserialize;
use std::collections::{BTreeMap, HashMap};
use std::path::Path;
use std::str::FromStr;

/// A parsed target manifest.
///
/// The top-level table is the root target's configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct TargetManifest {
    /// Configuration of the root target and, through `targets`, everything below it
    pub root: TargetTable,
}

/// Configuration for one target as written in the manifest.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TargetTable {
    #[serde(default)]
    pub platform: Option<PlatformEntry>,

    #[serde(default)]
    pub exclusive: Option<bool>,

    #[serde(default)]
    pub inhibit_all_warnings: Option<bool>,

    #[serde(default)]
    pub link_with: Option<LinkWith>,

    #[serde(default)]
    pub dependencies: Vec<Dependency>,

    /// Nested targets keyed by name
    #[serde(default)]
    pub targets: BTreeMap<String, TargetTable>,
}

/// Accepted forms of the `platform` key.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum PlatformEntry {
    /// `"ios"` or `"ios 6.0"`
    Short(String),
    /// `{ name = "ios", deployment_target = "6.0" }`
    Detailed(PlatformTable),
}

/// Table form of the `platform` key.
///
/// The name is kept as written and parsed like the short form, so both
/// accept the same spellings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PlatformTable {
    pub name: String,
    #[serde(default)]
    pub deployment_target: Option<String>,
}

impl PlatformEntry {
    /// The platform this entry describes.
    pub fn to_platform(&self) -> Result<Platform, PodfileError> {
        match self {
            Self::Short(value) => value.parse(),
            Self::Detailed(table) => {
                let name: PlatformName = table.name.parse()?;
                Ok(Platform {
                    name,
                    deployment_target: table.deployment_target.clone(),
                })
            }
        }
    }
}

/// Accepted forms of the `link_with` key.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum LinkWith {
    /// A single user target
    One(String),
    /// Several user targets
    Many(Vec<String>),
}

impl LinkWith {
    #[must_use]
    pub fn into_vec(self) -> Vec<String> {
        match self {
            Self::One(target) => vec![target],
            Self::Many(targets) => targets,
        }
    }
}

impl FromStr for TargetManifest {
    type Err = PodfileError;

    fn from_str(content: &str) -> Result<Self, Self::Err> {
        toml::from_str(content).map_err(|e| PodfileError::ManifestParseError {
            file: MANIFEST_FILE_NAME.to_string(),
            reason: e.to_string(),
        })
    }
}

impl TargetManifest {
    /// Read and parse a manifest file.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.is_file() {
            return Err(PodfileError::ManifestNotFound {
                path: path.display().to_string(),
            }
            .into());
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read manifest file {}", path.display()))?;

        let manifest: Self = toml::from_str(&content)
            .map_err(|e| PodfileError::ManifestParseError {
                file: path.display().to_string(),
                reason: e.to_string(),
            })
            .with_context(|| format!("Failed to parse manifest file {}", path.display()))?;

        tracing::debug!(
            path = %path.display(),
            targets = manifest.root.targets.len(),
            "loaded target manifest"
        );
        Ok(manifest)
    }

    /// Load a manifest file and build its tree in one step.
    pub fn load_tree(path: &Path) -> Result<TargetDefinitionTree> {
        let manifest = Self::load(path)?;
        manifest
            .build_tree()
            .with_context(|| format!("Invalid target definitions in {}", path.display()))
    }

    /// Build the target definition tree described by this manifest.
    ///
    /// Nested targets are inserted depth-first in name order, so the
    /// resulting tree order is deterministic.
    pub fn build_tree(&self) -> Result<TargetDefinitionTree, PodfileError> {
        let mut tree = TargetDefinitionTree::with_root_exclusivity(self.root.exclusive);
        let root = tree.root_id();
        self.root.apply(&mut tree, root)?;
        self.root.insert_children(&mut tree, root)?;
        validate_labels(&tree)?;

        tracing::debug!(targets = tree.len(), "built target definition tree");
        Ok(tree)
    }
}

impl TargetTable {
    /// Copy this table's own settings onto an existing node.
    fn apply(&self, tree: &mut TargetDefinitionTree, id: TargetId) -> Result<(), PodfileError> {
        let definition = tree.target_mut(id)?;

        if let Some(platform) = &self.platform {
            definition.set_platform(platform.to_platform()?);
        }
        if let Some(inhibit) = self.inhibit_all_warnings {
            definition.set_inhibit_all_warnings(inhibit);
        }
        if let Some(link_with) = &self.link_with {
            definition.set_link_with(link_with.clone().into_vec());
        }
        for dependency in &self.dependencies {
            definition.store_dependency(dependency.clone());
        }
        Ok(())
    }

    fn insert_children(
        &self,
        tree: &mut TargetDefinitionTree,
        parent: TargetId,
    ) -> Result<(), PodfileError> {
        for (name, table) in &self.targets {
            validate_target_name(name)?;
            let id = tree.add_child(parent, name.as_str(), table.exclusive)?;
            table.apply(tree, id)?;
            table.insert_children(tree, id)?;
        }
        Ok(())
    }
}

fn validate_target_name(name: &str) -> Result<(), PodfileError> {
    if name.trim().is_empty() {
        return Err(PodfileError::InvalidTargetName {
            name: name.to_string(),
            reason: "target names cannot be empty".to_string(),
        });
    }
    if name == ROOT_TARGET_NAME {
        return Err(PodfileError::ReservedTargetName {
            name: name.to_string(),
        });
    }
    Ok(())
}

fn validate_labels(tree: &TargetDefinitionTree) -> Result<(), PodfileError> {
    let mut seen: HashMap<String, Target<'_>> = HashMap::with_capacity(tree.len());
    for target in tree.iter() {
        let label = target.label();
        if let Some(first) = seen.get(&label) {
            return Err(PodfileError::DuplicateLabel {
                label,
                first: first.path(),
                second: target.path(),
            });
        }
        seen.insert(label, target);
    }
    Ok(())
}
