//! Nearest-ancestor lookup for inherited settings.
//!
//! Platform and warning suppression are resolved the same way: the first
//! node on the path from a target up to the root that assigns a value wins.
//! Trees are shallow, so each query is a plain upward walk.

use super::{Target, TargetDefinition};
use crate::platform::Platform;

/// Iterator over a target and its ancestors, nearest first.
#[derive(Debug, Clone)]
pub struct Ancestors<'a> {
    next: Option<Target<'a>>,
}

impl<'a> Iterator for Ancestors<'a> {
    type Item = Target<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = current.parent();
        Some(current)
    }
}

impl<'a> Target<'a> {
    /// This target followed by its parent, grandparent, up to the root.
    #[must_use]
    pub fn ancestors(&self) -> Ancestors<'a> {
        Ancestors { next: Some(*self) }
    }

    /// Value of the nearest definition (self included) for which `select`
    /// returns `Some`.
    pub fn resolve_inherited<T, F>(&self, mut select: F) -> Option<T>
    where
        F: FnMut(&'a TargetDefinition) -> Option<T>,
    {
        self.ancestors().find_map(|target| select(target.definition()))
    }

    /// Effective platform: own if assigned, else the nearest ancestor's.
    #[must_use]
    pub fn platform(&self) -> Option<&'a Platform> {
        self.resolve_inherited(TargetDefinition::platform_override)
    }

    /// Effective warning suppression, `false` when nothing up the chain
    /// assigns it. An explicit `false` stops the lookup.
    #[must_use]
    pub fn inhibits_all_warnings(&self) -> bool {
        self.resolve_inherited(|definition| definition.inhibit_all_warnings_override().value())
            .unwrap_or(false)
    }
}
