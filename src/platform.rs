//! Platform values attached to target definitions.
//!
//! A [`Platform`] pairs a [`PlatformName`] with an optional deployment
//! target. Platforms are compared as whole values: `iOS 6.0` and `iOS 5.0`
//! are different platforms, and so are `iOS` and `iOS 6.0`. This matters for
//! exclusivity, where a target whose own platform differs from its parent's
//! stops inheriting dependencies.
//!
//! # Examples
//!
//! ```rust
//! use podfile_targets::platform::{Platform, PlatformName};
//!
//! let platform: Platform = "ios 6.0".parse().unwrap();
//! assert_eq!(platform.name, PlatformName::Ios);
//! assert_eq!(platform.deployment_target.as_deref(), Some("6.0"));
//! assert_eq!(platform.to_string(), "iOS 6.0");
//! ```

use crate::core::PodfileError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Operating system family a target builds for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlatformName {
    /// iPhone and iPad
    Ios,
    /// Desktop macOS
    Osx,
}

impl PlatformName {
    /// Lowercase identifier as written in manifests.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Ios => "ios",
            Self::Osx => "osx",
        }
    }
}

impl fmt::Display for PlatformName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ios => write!(f, "iOS"),
            Self::Osx => write!(f, "OS X"),
        }
    }
}

impl FromStr for PlatformName {
    type Err = PodfileError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "ios" => Ok(Self::Ios),
            "osx" | "macos" => Ok(Self::Osx),
            _ => Err(PodfileError::InvalidPlatform {
                value: s.to_string(),
                reason: "unknown platform name, expected 'ios' or 'osx'".to_string(),
            }),
        }
    }
}

/// A platform with an optional minimum deployment target.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Platform {
    /// Platform family
    pub name: PlatformName,
    /// Minimum OS version, carried verbatim (e.g. `"6.0"`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deployment_target: Option<String>,
}

impl Platform {
    /// Create a platform without a deployment target.
    #[must_use]
    pub const fn new(name: PlatformName) -> Self {
        Self {
            name,
            deployment_target: None,
        }
    }

    #[must_use]
    pub const fn ios() -> Self {
        Self::new(PlatformName::Ios)
    }

    #[must_use]
    pub const fn osx() -> Self {
        Self::new(PlatformName::Osx)
    }

    /// Return this platform with the given deployment target.
    #[must_use]
    pub fn with_deployment_target(mut self, deployment_target: impl Into<String>) -> Self {
        self.deployment_target = Some(deployment_target.into());
        self
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.deployment_target {
            Some(target) => write!(f, "{} {}", self.name, target),
            None => write!(f, "{}", self.name),
        }
    }
}

impl FromStr for Platform {
    type Err = PodfileError;

    /// Parse `"ios"` or `"ios 6.0"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.split_whitespace();
        let name = parts.next().ok_or_else(|| PodfileError::InvalidPlatform {
            value: s.to_string(),
            reason: "platform is empty".to_string(),
        })?;
        let name: PlatformName = name.parse()?;

        let deployment_target = parts.next().map(str::to_string);
        if parts.next().is_some() {
            return Err(PodfileError::InvalidPlatform {
                value: s.to_string(),
                reason: "expected '<name>' or '<name> <deployment target>'".to_string(),
            });
        }

        Ok(Self {
            name,
            deployment_target,
        })
    }
}
