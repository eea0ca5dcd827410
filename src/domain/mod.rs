//! Core domain models for godeps
//!
//! - Dependency entries stored in the manifest
//! - Package settings that override origin resolution
//! - Import path helpers shared by the scanner and the resolver

mod dep_item;
mod import_path;
mod package_setting;

pub use dep_item::DepItem;
pub use import_path::{has_path_prefix, parent_path};
pub use package_setting::PackageSetting;
