//! Global constants used throughout the target definition model.
//!
//! Reserved names and label fragments live here so the tree, the label
//! derivation and the manifest loader agree on them.

/// Name of the implicit root target definition.
///
/// Every tree has exactly one node with this name. A manifest may not declare
/// a nested target using it.
pub const ROOT_TARGET_NAME: &str = "default";

/// Label of the root target definition.
///
/// Also the prefix of every exclusive target's label.
pub const ROOT_LABEL: &str = "Pods";

/// Separator placed between label segments.
pub const LABEL_SEPARATOR: &str = "-";

/// Separator between target names in a path such as `App/AppTests`.
pub const PATH_SEPARATOR: char = '/';

/// Default file name of the TOML target manifest.
pub const MANIFEST_FILE_NAME: &str = "Podfile.toml";
