//! Integration test suite
//!
//! End-to-end tests that load manifests from disk, build target definition
//! trees and check the values handed to downstream consumers.
//!
//! # Running Integration Tests
//!
//! ```bash
//! cargo test --test integration
//! RUST_LOG=podfile_targets=debug cargo test --test integration
//! ```
//!
//! # Test Organization
//!
//! - **manifest_loading**: discovery, parsing and error reporting
//! - **resolution**: derived values of loaded trees and their snapshots

mod manifest_loading;
mod resolution;
