//! Error handling for target definition manifests
//!
//! The tree's read operations are total: dependency aggregation, platform and
//! warning lookups and label derivation never fail on a well-formed tree. Errors
//! only arise at the edges, while a manifest is read, parsed and turned into a
//! tree, or when a caller hands the tree an id it never issued.
//!
//! The error system follows two principles:
//! 1. **Strongly-typed errors** ([`PodfileError`]) for precise handling in code
//! 2. **User-friendly messages** ([`ErrorContext`]) with actionable suggestions
//!
//! # Examples
//!
//! ```rust,no_run
//! use podfile_targets::core::{PodfileError, user_friendly_error};
//!
//! let error = PodfileError::ReservedTargetName {
//!     name: "default".to_string(),
//! };
//! let ctx = user_friendly_error(anyhow::Error::from(error));
//! ctx.display(); // Shows colored error with suggestions
//! ```

use colored::Colorize;
use std::fmt;
use thiserror::Error;

/// The main error type for target definition operations
///
/// Each variant carries the offending name, path or value so the message can
/// be shown to a user without further context.
#[derive(Error, Debug)]
pub enum PodfileError {
    /// No manifest file was found at the given path or any parent directory
    #[error("Manifest file {path} not found")]
    ManifestNotFound {
        /// Path (or starting directory) that was searched
        path: String,
    },

    /// The manifest is not valid TOML or does not match the expected schema
    #[error("Invalid manifest file syntax in {file}: {reason}")]
    ManifestParseError {
        /// Manifest file that failed to parse
        file: String,
        /// Parser message
        reason: String,
    },

    /// A platform string named no known platform
    #[error("Invalid platform '{value}': {reason}")]
    InvalidPlatform {
        /// The rejected platform string
        value: String,
        /// Why it was rejected
        reason: String,
    },

    /// A target name is malformed (for example empty)
    #[error("Invalid target name '{name}': {reason}")]
    InvalidTargetName {
        /// The rejected name
        name: String,
        /// Why it was rejected
        reason: String,
    },

    /// A nested target tried to use the name reserved for the root
    #[error("Target name '{name}' is reserved for the root target definition")]
    ReservedTargetName {
        /// The reserved name that was used
        name: String,
    },

    /// Two target definitions derive the same label
    #[error("Targets '{first}' and '{second}' both derive the label '{label}'")]
    DuplicateLabel {
        /// The colliding label
        label: String,
        /// Path of the first target producing it
        first: String,
        /// Path of the second target producing it
        second: String,
    },

    /// A target id does not belong to the tree it was used with
    #[error("Target id {id} does not belong to this target definition tree")]
    UnknownTarget {
        /// Index carried by the foreign id
        id: usize,
    },

    /// I/O error while reading a manifest
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Error wrapper that adds a suggestion and details for display
#[derive(Debug)]
pub struct ErrorContext {
    /// The underlying error
    pub error: PodfileError,
    /// Optional suggestion for resolving the error
    pub suggestion: Option<String>,
    /// Optional additional details about the error
    pub details: Option<String>,
}

impl ErrorContext {
    /// Create a new error context with no suggestion or details.
    #[must_use]
    pub const fn new(error: PodfileError) -> Self {
        Self {
            error,
            suggestion: None,
            details: None,
        }
    }

    /// Add a suggestion for resolving the error.
    ///
    /// Suggestions are displayed in green in the terminal.
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    /// Add additional details explaining the error.
    ///
    /// Details are displayed in yellow in the terminal.
    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    /// Display the error context to stderr with terminal colors
    ///
    /// - Error message: Red and bold
    /// - Details: Yellow
    /// - Suggestion: Green
    pub fn display(&self) {
        eprintln!("{}: {}", "error".red().bold(), self.error);

        if let Some(details) = &self.details {
            eprintln!("{}: {}", "details".yellow(), details);
        }

        if let Some(suggestion) = &self.suggestion {
            eprintln!("{}: {}", "suggestion".green(), suggestion);
        }
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.error)?;

        if let Some(details) = &self.details {
            write!(f, "\nDetails: {details}")?;
        }

        if let Some(suggestion) = &self.suggestion {
            write!(f, "\nSuggestion: {suggestion}")?;
        }

        Ok(())
    }
}

impl std::error::Error for ErrorContext {}

/// Convert any error into an [`ErrorContext`] with a suggestion where one is known.
///
/// Walks the anyhow chain looking for a [`PodfileError`] first, then for
/// I/O and TOML errors. Anything else is reported as a parse error carrying
/// the full error chain.
pub fn user_friendly_error(error: anyhow::Error) -> ErrorContext {
    let podfile_error = error.chain().find_map(|cause| cause.downcast_ref::<PodfileError>());
    if let Some(podfile_error) = podfile_error {
        return create_error_context(podfile_error);
    }

    if let Some(io_error) = error.downcast_ref::<std::io::Error>() {
        let ctx = ErrorContext::new(PodfileError::Io(std::io::Error::new(
            io_error.kind(),
            io_error.to_string(),
        )));
        return match io_error.kind() {
            std::io::ErrorKind::PermissionDenied => ctx
                .with_suggestion("Check the file permissions of the manifest")
                .with_details("The manifest could not be read by the current user"),
            std::io::ErrorKind::NotFound => ctx
                .with_suggestion("Check that the file or directory exists and the path is correct"),
            _ => ctx,
        };
    }

    if let Some(toml_error) = error.downcast_ref::<toml::de::Error>() {
        return ErrorContext::new(PodfileError::ManifestParseError {
            file: crate::constants::MANIFEST_FILE_NAME.to_string(),
            reason: toml_error.to_string(),
        })
        .with_suggestion("Check the TOML syntax in your manifest. Verify quotes, brackets, and table headers");
    }

    ErrorContext::new(PodfileError::ManifestParseError {
        file: crate::constants::MANIFEST_FILE_NAME.to_string(),
        reason: format!("{error:#}"),
    })
}

fn create_error_context(error: &PodfileError) -> ErrorContext {
    match error {
        PodfileError::ManifestNotFound { path } => ErrorContext::new(PodfileError::ManifestNotFound {
            path: path.clone(),
        })
        .with_suggestion(format!(
            "Create a {} file in your project directory",
            crate::constants::MANIFEST_FILE_NAME
        ))
        .with_details("The manifest is searched for in the current directory and its parents"),
        PodfileError::ManifestParseError { file, reason } => {
            ErrorContext::new(PodfileError::ManifestParseError {
                file: file.clone(),
                reason: reason.clone(),
            })
            .with_suggestion("Check the TOML syntax and the keys allowed in a target table")
        }
        PodfileError::InvalidPlatform { value, reason } => {
            ErrorContext::new(PodfileError::InvalidPlatform {
                value: value.clone(),
                reason: reason.clone(),
            })
            .with_suggestion("Use 'ios' or 'osx', optionally followed by a deployment target such as 'ios 6.0'")
        }
        PodfileError::InvalidTargetName { name, reason } => {
            ErrorContext::new(PodfileError::InvalidTargetName {
                name: name.clone(),
                reason: reason.clone(),
            })
            .with_suggestion("Give every nested target a non-empty name")
        }
        PodfileError::ReservedTargetName { name } => {
            ErrorContext::new(PodfileError::ReservedTargetName {
                name: name.clone(),
            })
            .with_suggestion("Rename the nested target; root-level keys already configure the root target")
        }
        PodfileError::DuplicateLabel { label, first, second } => {
            ErrorContext::new(PodfileError::DuplicateLabel {
                label: label.clone(),
                first: first.clone(),
                second: second.clone(),
            })
            .with_suggestion("Rename one of the targets so their generated support files do not collide")
            .with_details(
                "Exclusive targets are labelled from the root, so an exclusive target can collide with a top-level target",
            )
        }
        PodfileError::UnknownTarget { id } => {
            ErrorContext::new(PodfileError::UnknownTarget { id: *id })
                .with_details("Target ids are only valid for the tree that issued them")
        }
        PodfileError::Io(io_error) => ErrorContext::new(PodfileError::Io(std::io::Error::new(
            io_error.kind(),
            io_error.to_string(),
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Context;

    #[test]
    fn test_error_display() {
        let error = PodfileError::ReservedTargetName {
            name: "default".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Target name 'default' is reserved for the root target definition"
        );

        let error = PodfileError::DuplicateLabel {
            label: "Pods-Tests".to_string(),
            first: "Tests".to_string(),
            second: "App/Tests".to_string(),
        };
        assert!(error.to_string().contains("Pods-Tests"));
    }

    #[test]
    fn test_error_context_display() {
        let ctx = ErrorContext::new(PodfileError::UnknownTarget { id: 7 })
            .with_suggestion("use the right tree")
            .with_details("ids are per tree");

        let rendered = ctx.to_string();
        assert!(rendered.contains("Target id 7"));
        assert!(rendered.contains("Details: ids are per tree"));
        assert!(rendered.contains("Suggestion: use the right tree"));
    }

    #[test]
    fn test_user_friendly_error_finds_wrapped_podfile_error() {
        let result: anyhow::Result<()> = Err(PodfileError::ManifestNotFound {
            path: "/tmp/project".to_string(),
        })
        .context("loading targets");

        let ctx = user_friendly_error(result.unwrap_err());
        assert!(matches!(ctx.error, PodfileError::ManifestNotFound { .. }));
        assert!(ctx.suggestion.unwrap().contains("Podfile.toml"));
    }

    #[test]
    fn test_user_friendly_error_io() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let ctx = user_friendly_error(anyhow::Error::from(io));
        assert!(matches!(ctx.error, PodfileError::Io(_)));
        assert!(ctx.suggestion.is_some());
    }

    #[test]
    fn test_user_friendly_error_fallback() {
        let ctx = user_friendly_error(anyhow::anyhow!("something odd"));
        assert!(ctx.to_string().contains("something odd"));
    }
}
