//! Core types shared across the crate
//!
//! Currently this is the error system: the strongly-typed [`PodfileError`],
//! the display wrapper [`ErrorContext`] and [`user_friendly_error`] which
//! turns any `anyhow::Error` into something worth showing a user.

pub mod error;

pub use error::{ErrorContext, PodfileError, user_friendly_error};
