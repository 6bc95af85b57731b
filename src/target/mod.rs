//! Hierarchical target definitions
//!
//! A target definition is a named scope that declares dependencies and
//! build configuration for one generated library. Definitions nest: every
//! definition except the implicit root has exactly one parent, and unset
//! configuration is looked up through the parent chain at read time.
//!
//! # Ownership
//!
//! The [`TargetDefinitionTree`] owns every node. A [`TargetDefinition`] only
//! records its parent's [`TargetId`], a non-owning back-reference; children
//! are enumerated through the tree, never through the node. Nodes are never
//! removed individually, the tree is dropped as a whole.
//!
//! # Reading
//!
//! Derived values (effective platform, exclusivity, aggregated dependencies,
//! labels) are computed on every call through a borrowed [`Target`] view and
//! are never stored. The tree is `Send + Sync`, so once loading is finished
//! any number of readers may share `&TargetDefinitionTree`.
//!
//! | Read                                  | Inherits | Default when unset |
//! |---------------------------------------|----------|--------------------|
//! | [`Target::dependencies`]              | unless exclusive | own only  |
//! | [`Target::platform`]                  | yes      | `None`             |
//! | [`Target::inhibits_all_warnings`]     | yes      | `false`            |
//! | [`Target::is_exclusive`]              | derived  | `false`            |
//! | [`Target::link_with`]                 | no       | empty              |
//! | [`Target::label`]                     | derived  | `"Pods"` for root  |
//!
//! # Examples
//!
//! ```rust
//! use podfile_targets::dependency::Dependency;
//! use podfile_targets::platform::Platform;
//! use podfile_targets::target::TargetDefinitionTree;
//!
//! let mut tree = TargetDefinitionTree::new();
//! let app = tree.add_child(tree.root_id(), "App", None).unwrap();
//! let tests = tree.add_child(app, "AppTests", None).unwrap();
//!
//! let definition = tree.get_mut(app).unwrap();
//! definition.set_platform(Platform::ios());
//! definition.store_dependency(Dependency::new("AFNetworking"));
//!
//! let tests = tree.get(tests).unwrap();
//! assert_eq!(tests.platform(), Some(&Platform::ios()));
//! assert_eq!(tests.label(), "Pods-App-AppTests");
//! assert_eq!(tests.dependencies().len(), 1);
//! ```

mod dependencies;
mod inheritance;
mod label;
mod resolved;


pub use inheritance::Ancestors;
pub use resolved::ResolvedTarget;

use crate::constants::{PATH_SEPARATOR, ROOT_TARGET_NAME};
use crate::core::PodfileError;
use crate::dependency::Dependency;
use crate::platform::Platform;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A tri-state setting: never assigned, or explicitly on or off.
///
/// Keeps "inherit from the parent" distinct from "explicitly false".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Override {
    /// Not assigned on this node
    #[default]
    Unset,
    /// Explicitly true
    Enabled,
    /// Explicitly false
    Disabled,
}

impl Override {
    /// The explicit value, if any.
    #[must_use]
    pub const fn value(self) -> Option<bool> {
        match self {
            Self::Unset => None,
            Self::Enabled => Some(true),
            Self::Disabled => Some(false),
        }
    }

    #[must_use]
    pub const fn is_set(self) -> bool {
        !matches!(self, Self::Unset)
    }
}

impl From<bool> for Override {
    fn from(value: bool) -> Self {
        if value { Self::Enabled } else { Self::Disabled }
    }
}

impl From<Option<bool>> for Override {
    fn from(value: Option<bool>) -> Self {
        value.map_or(Self::Unset, Self::from)
    }
}

/// Index of a node inside the [`TargetDefinitionTree`] that issued it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TargetId(usize);

impl TargetId {
    /// Position of the node in tree order.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for TargetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// The stored state of one target definition.
///
/// Only values assigned directly on this node are held here. Inherited and
/// derived values are read through [`Target`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetDefinition {
    name: String,
    parent: Option<TargetId>,
    dependencies: Vec<Dependency>,
    exclusive: Override,
    platform: Option<Platform>,
    link_with: Vec<String>,
    inhibit_all_warnings: Override,
}

impl TargetDefinition {
    fn new(name: String, parent: Option<TargetId>, exclusive: Option<bool>) -> Self {
        Self {
            name,
            parent,
            dependencies: Vec::new(),
            exclusive: exclusive.into(),
            platform: None,
            link_with: Vec::new(),
            inhibit_all_warnings: Override::Unset,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The enclosing definition, `None` only for the root.
    #[must_use]
    pub const fn parent(&self) -> Option<TargetId> {
        self.parent
    }

    /// Whether this is the reserved root definition.
    #[must_use]
    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }

    /// Dependencies declared directly on this node, in declaration order.
    #[must_use]
    pub fn own_dependencies(&self) -> &[Dependency] {
        &self.dependencies
    }

    /// Append a dependency. Duplicates are kept.
    pub fn store_dependency(&mut self, dependency: Dependency) {
        tracing::trace!(name = %self.name, dependency = %dependency, "storing dependency");
        self.dependencies.push(dependency);
    }

    /// True when no dependency was declared on this node itself.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.dependencies.is_empty()
    }

    #[must_use]
    pub const fn exclusive_override(&self) -> Override {
        self.exclusive
    }

    pub fn set_exclusive(&mut self, exclusive: bool) {
        tracing::trace!(name = %self.name, exclusive, "setting exclusivity");
        self.exclusive = exclusive.into();
    }

    /// The platform assigned on this node, ignoring ancestors.
    #[must_use]
    pub const fn platform_override(&self) -> Option<&Platform> {
        self.platform.as_ref()
    }

    pub fn set_platform(&mut self, platform: Platform) {
        tracing::trace!(name = %self.name, platform = %platform, "setting platform");
        self.platform = Some(platform);
    }

    /// Names of the user project targets this definition links with.
    ///
    /// Never inherited.
    #[must_use]
    pub fn link_with(&self) -> &[String] {
        &self.link_with
    }

    pub fn set_link_with<I, S>(&mut self, targets: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.link_with = targets.into_iter().map(Into::into).collect();
        tracing::trace!(name = %self.name, link_with = ?self.link_with, "setting link targets");
    }

    #[must_use]
    pub const fn inhibit_all_warnings_override(&self) -> Override {
        self.inhibit_all_warnings
    }

    pub fn set_inhibit_all_warnings(&mut self, inhibit: bool) {
        tracing::trace!(name = %self.name, inhibit, "setting warning suppression");
        self.inhibit_all_warnings = inhibit.into();
    }
}

/// Owner of a tree of target definitions.
///
/// Nodes are stored in insertion order. The root is always the first node
/// and parents always precede their children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetDefinitionTree {
    targets: Vec<TargetDefinition>,
}

impl Default for TargetDefinitionTree {
    fn default() -> Self {
        Self::new()
    }
}

impl TargetDefinitionTree {
    /// Create a tree holding only the root definition.
    #[must_use]
    pub fn new() -> Self {
        Self::with_root_exclusivity(None)
    }

    /// Create a tree whose root carries an initial exclusivity hint.
    #[must_use]
    pub fn with_root_exclusivity(exclusive: Option<bool>) -> Self {
        Self {
            targets: vec![TargetDefinition::new(ROOT_TARGET_NAME.to_string(), None, exclusive)],
        }
    }

    #[must_use]
    pub const fn root_id(&self) -> TargetId {
        TargetId(0)
    }

    #[must_use]
    pub fn root(&self) -> Target<'_> {
        Target {
            tree: self,
            id: self.root_id(),
        }
    }

    /// Insert a new definition under `parent`.
    ///
    /// Sibling names are not checked for uniqueness here; that is up to
    /// whoever builds the tree (see [`crate::manifest`]).
    pub fn add_child(
        &mut self,
        parent: TargetId,
        name: impl Into<String>,
        exclusive: Option<bool>,
    ) -> Result<TargetId, PodfileError> {
        self.check(parent)?;
        let name = name.into();
        let id = TargetId(self.targets.len());
        tracing::trace!(name = %name, parent = %parent, id = %id, "adding target definition");
        self.targets.push(TargetDefinition::new(name, Some(parent), exclusive));
        Ok(id)
    }

    /// Read view of a node, `None` for an id this tree never issued.
    #[must_use]
    pub fn get(&self, id: TargetId) -> Option<Target<'_>> {
        (id.0 < self.targets.len()).then_some(Target { tree: self, id })
    }

    /// Mutable access to a node's own settings.
    pub fn get_mut(&mut self, id: TargetId) -> Option<&mut TargetDefinition> {
        self.targets.get_mut(id.0)
    }

    /// Like [`get`](Self::get) but reports a foreign id as an error.
    pub fn target(&self, id: TargetId) -> Result<Target<'_>, PodfileError> {
        self.check(id)?;
        Ok(Target { tree: self, id })
    }

    /// Like [`get_mut`](Self::get_mut) but reports a foreign id as an error.
    pub fn target_mut(&mut self, id: TargetId) -> Result<&mut TargetDefinition, PodfileError> {
        self.targets
            .get_mut(id.0)
            .ok_or(PodfileError::UnknownTarget { id: id.0 })
    }

    /// Number of definitions, root included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.targets.len()
    }

    /// Always false: a tree has at least its root.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }

    /// All definitions in tree order.
    pub fn iter(&self) -> impl Iterator<Item = Target<'_>> + '_ {
        (0..self.targets.len()).map(move |index| Target {
            tree: self,
            id: TargetId(index),
        })
    }

    /// Direct children of `parent` in insertion order.
    pub fn children(&self, parent: TargetId) -> impl Iterator<Item = Target<'_>> + '_ {
        self.iter().filter(move |target| target.definition().parent == Some(parent))
    }

    /// Look up a definition by its path below the root, e.g. `App/AppTests`.
    ///
    /// `default` names the root itself. Paths use the same format as
    /// [`Target::path`], so `tree.find(&target.path())` returns `target`.
    #[must_use]
    pub fn find(&self, path: &str) -> Option<Target<'_>> {
        let mut current = self.root();
        if path == ROOT_TARGET_NAME {
            return Some(current);
        }
        for segment in path.split(PATH_SEPARATOR) {
            current = self.children(current.id()).find(|child| child.name() == segment)?;
        }
        Some(current)
    }

    /// Snapshot every definition's derived values, in tree order.
    #[must_use]
    pub fn resolve_all(&self) -> Vec<ResolvedTarget> {
        self.iter().map(|target| target.resolve()).collect()
    }

    fn check(&self, id: TargetId) -> Result<(), PodfileError> {
        if id.0 < self.targets.len() {
            Ok(())
        } else {
            Err(PodfileError::UnknownTarget { id: id.0 })
        }
    }
}

/// Borrowed read view of one definition within its tree.
///
/// All derived lookups walk parent links through the tree; nothing is
/// cached, so results always reflect the tree's current state.
#[derive(Clone, Copy)]
pub struct Target<'a> {
    tree: &'a TargetDefinitionTree,
    id: TargetId,
}

impl<'a> Target<'a> {
    #[must_use]
    pub const fn id(&self) -> TargetId {
        self.id
    }

    /// The stored node behind this view.
    #[must_use]
    pub fn definition(&self) -> &'a TargetDefinition {
        &self.tree.targets[self.id.0]
    }

    #[must_use]
    pub fn name(&self) -> &'a str {
        &self.definition().name
    }

    #[must_use]
    pub fn parent(&self) -> Option<Target<'a>> {
        self.definition().parent.map(|id| Target {
            tree: self.tree,
            id,
        })
    }

    #[must_use]
    pub fn is_root(&self) -> bool {
        self.definition().is_root()
    }

    /// `App/AppTests` style path from below the root down to this node.
    /// The root's path is its reserved name.
    #[must_use]
    pub fn path(&self) -> String {
        if self.is_root() {
            return ROOT_TARGET_NAME.to_string();
        }
        let mut names: Vec<&str> = self
            .ancestors()
            .filter(|target| !target.is_root())
            .map(|target| target.name())
            .collect();
        names.reverse();
        names.join(&PATH_SEPARATOR.to_string())
    }

    /// Link targets as declared on this node; never inherited.
    #[must_use]
    pub fn link_with(&self) -> &'a [String] {
        &self.definition().link_with
    }

    /// True when this node declares no dependency of its own.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.definition().is_empty()
    }
}

impl fmt::Debug for Target<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Target")
            .field("id", &self.id)
            .field("name", &self.name())
            .finish()
    }
}
