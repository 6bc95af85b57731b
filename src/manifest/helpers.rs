//! Helper functions for locating target manifests.

use crate::constants::MANIFEST_FILE_NAME;
use crate::core::PodfileError;
use anyhow::{Context, Result};
use std::path::PathBuf;

/// Find the manifest by searching up the directory tree from the current directory.
///
/// Mirrors Cargo, Git, and NPM project file discovery behavior.
///
/// # Directory Structure Example
///
/// ```text
/// /home/user/project/
/// ├── Podfile.toml       ← Found here
/// └── App/
///     └── Sources/       ← Search started here, walks up
/// ```
pub fn find_manifest() -> Result<PathBuf> {
    let current = std::env::current_dir()
        .context("Cannot determine current working directory. This may indicate a permission issue or corrupted filesystem")?;
    find_manifest_from(current)
}

/// Use the explicit path if given, otherwise search from the current directory.
///
/// # Errors
///
/// - Explicit path provided but doesn't exist
/// - No explicit path and no manifest found via search
pub fn find_manifest_with_optional(explicit_path: Option<PathBuf>) -> Result<PathBuf> {
    match explicit_path {
        Some(path) => {
            if path.is_file() {
                Ok(path)
            } else {
                Err(PodfileError::ManifestNotFound {
                    path: path.display().to_string(),
                }
                .into())
            }
        }
        None => find_manifest(),
    }
}

/// Find the manifest by searching up from a specific starting directory.
///
/// Returns [`PodfileError::ManifestNotFound`] wrapped in an [`anyhow::Error`]
/// when the filesystem root is reached without finding one.
pub fn find_manifest_from(start: PathBuf) -> Result<PathBuf> {
    let mut current = start.clone();
    loop {
        let manifest_path = current.join(MANIFEST_FILE_NAME);
        if manifest_path.is_file() {
            tracing::debug!(path = %manifest_path.display(), "found target manifest");
            return Ok(manifest_path);
        }

        if !current.pop() {
            return Err(PodfileError::ManifestNotFound {
                path: start.display().to_string(),
            }
            .into());
        }
    }
}
