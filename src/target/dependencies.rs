//! Exclusivity and dependency aggregation.

use super::{Override, Target};
use crate::dependency::Dependency;

impl<'a> Target<'a> {
    /// Whether this target ignores the dependencies of its ancestors.
    ///
    /// A target is exclusive when its exclusivity is explicitly enabled, or
    /// when it assigns its own platform and that platform differs from the
    /// parent's effective platform. An undefined parent platform (including
    /// the root's missing parent) differs from every explicit platform.
    /// Inheriting a platform never makes a target exclusive, and explicitly
    /// disabling exclusivity does not override a platform mismatch.
    #[must_use]
    pub fn is_exclusive(&self) -> bool {
        let definition = self.definition();
        if definition.exclusive_override() == Override::Enabled {
            return true;
        }

        match definition.platform_override() {
            Some(own) => self.parent().and_then(|parent| parent.platform()) != Some(own),
            None => false,
        }
    }

    /// Own dependencies followed by the parent's aggregated dependencies.
    ///
    /// The walk stops after the first exclusive target, so an exclusive
    /// target returns only its own dependencies. Nothing is deduplicated.
    #[must_use]
    pub fn dependencies(&self) -> Vec<&'a Dependency> {
        let mut dependencies = Vec::new();
        for target in self.ancestors() {
            dependencies.extend(target.definition().own_dependencies());
            if target.is_exclusive() {
                break;
            }
        }
        dependencies
    }
}
