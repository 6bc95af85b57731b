//! Serializable snapshot of a target's derived values.

use super::Target;
use crate::dependency::Dependency;
use crate::platform::Platform;
use serde::{Deserialize, Serialize};

/// Every value a consumer reads from a target, resolved at one point in time.
///
/// This is what dependency resolution and project integration consume. It is
/// built on demand by [`Target::resolve`] and goes stale if the tree is
/// mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedTarget {
    /// Declared name
    pub name: String,
    /// Derived label
    pub label: String,
    /// Effective platform
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub platform: Option<Platform>,
    /// Effective exclusivity
    pub exclusive: bool,
    /// Effective warning suppression
    pub inhibit_all_warnings: bool,
    /// Declared link targets
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub link_with: Vec<String>,
    /// Aggregated dependencies, own first
    #[serde(default)]
    pub dependencies: Vec<Dependency>,
}

impl Target<'_> {
    /// Resolve every derived value of this target.
    #[must_use]
    pub fn resolve(&self) -> ResolvedTarget {
        ResolvedTarget {
            name: self.name().to_string(),
            label: self.label(),
            platform: self.platform().cloned(),
            exclusive: self.is_exclusive(),
            inhibit_all_warnings: self.inhibits_all_warnings(),
            link_with: self.link_with().to_vec(),
            dependencies: self.dependencies().into_iter().cloned().collect(),
        }
    }
}
