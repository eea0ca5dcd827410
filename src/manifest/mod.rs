//! Dependency manifest (`godeps.json`) handling
//!
//! This module provides:
//! - Loading the manifest from the working directory
//! - Add / delete / update operations with uniqueness checks
//! - Persisting the manifest as 4-space indented JSON

mod store;

pub use store::Manifest;

/// File name of the manifest in the project directory
pub const MANIFEST_FILE_NAME: &str = "godeps.json";
