//! Podfile target definitions
//!
//! A dependency manager groups third-party dependencies by *target
//! definition*: a named scope that becomes one generated support library and
//! is linked into one or more targets of the user's project. Definitions nest,
//! and each one inherits what it does not set itself from the scope around it.
//!
//! # Architecture Overview
//!
//! - [`target`] - the tree of definitions and every derived read on it:
//!   inherited platform and warning suppression, exclusivity, aggregated
//!   dependencies and labels
//! - [`manifest`] - the TOML manifest (`Podfile.toml`) that declares a tree,
//!   and the loader that builds and validates it
//! - [`platform`] and [`dependency`] - value types stored on definitions
//! - [`core`] - error types and user-facing error reporting
//! - [`constants`] - reserved names and label fragments
//!
//! # Inheritance Rules
//!
//! | Value                  | Rule                                                          |
//! |------------------------|---------------------------------------------------------------|
//! | dependencies           | own, then the parent's aggregate unless the target is exclusive |
//! | platform               | nearest explicit value up the chain, else none                |
//! | inhibit all warnings   | nearest explicit value up the chain, else `false`             |
//! | exclusive              | explicitly enabled, or own platform differs from the parent's |
//! | link with              | never inherited                                               |
//! | label                  | `Pods` for the root, `Pods-<name>` when exclusive, else `<parent label>-<name>` |
//!
//! # Example
//!
//! ```rust
//! use podfile_targets::manifest::TargetManifest;
//!
//! let manifest: TargetManifest = r#"
//! dependencies = ["Reachability"]
//!
//! [targets.App]
//! platform = "ios"
//! dependencies = ["AFNetworking"]
//!
//! [targets.App.targets.AppTests]
//! dependencies = ["Kiwi"]
//! "#
//! .parse()?;
//!
//! let tree = manifest.build_tree()?;
//! let tests = tree.find("App/AppTests").unwrap();
//! assert_eq!(tests.label(), "Pods-App-AppTests");
//!
//! let names: Vec<String> = tests.dependencies().iter().map(|d| d.name.clone()).collect();
//! assert_eq!(names, ["Kiwi", "AFNetworking"]);
//! # Ok::<(), podfile_targets::core::PodfileError>(())
//! ```

pub mod constants;
pub mod core;
pub mod dependency;
pub mod manifest;
pub mod platform;
pub mod target;

// test_utils module is available for both unit tests and integration tests
#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;
