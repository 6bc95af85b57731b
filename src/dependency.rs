//! Dependency records declared on target definitions.
//!
//! A [`Dependency`] is opaque to the tree: the requirement string is carried
//! verbatim and is never parsed or compared here. The tree only aggregates
//! records in order.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A single declared dependency.
///
/// In a manifest it may be written as a bare name or as a table:
///
/// ```toml
/// dependencies = [
///     "Reachability",
///     { name = "AFNetworking", requirement = "~> 1.0" },
/// ]
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "DependencyEntry")]
pub struct Dependency {
    /// Name of the dependency
    pub name: String,
    /// Version requirement exactly as declared
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub requirement: Option<String>,
}

impl Dependency {
    /// Create a dependency with no requirement.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            requirement: None,
        }
    }

    /// Create a dependency with a requirement.
    pub fn with_requirement(name: impl Into<String>, requirement: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            requirement: Some(requirement.into()),
        }
    }
}

impl fmt::Display for Dependency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.requirement {
            Some(requirement) => write!(f, "{} ({})", self.name, requirement),
            None => write!(f, "{}", self.name),
        }
    }
}

/// Accepted manifest forms of a dependency.
#[derive(Deserialize)]
#[serde(untagged)]
enum DependencyEntry {
    /// Just a name
    Simple(String),
    /// Name plus requirement
    Detailed(DetailedEntry),
}

/// Table form of a dependency. Misspelled keys are errors, not ignored.
#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct DetailedEntry {
    name: String,
    #[serde(default)]
    requirement: Option<String>,
}

impl From<DependencyEntry> for Dependency {
    fn from(entry: DependencyEntry) -> Self {
        match entry {
            DependencyEntry::Simple(name) => Self::new(name),
            DependencyEntry::Detailed(DetailedEntry { name, requirement }) => {
                Self { name, requirement }
            }
        }
    }
}
