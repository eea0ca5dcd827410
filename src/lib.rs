//! godeps - dependency manifest manager for Go projects
//!
//! This library provides the pieces behind the `godeps` command:
//! - scanning a project's Go imports for external packages
//! - resolving each package to the git origin of its local checkout
//! - keeping the `godeps.json` manifest
//! - cloning / pulling the recorded packages into `vendor/`

pub mod cli;
pub mod commands;
pub mod config;
pub mod domain;
pub mod error;
pub mod manifest;
pub mod output;
pub mod progress;
pub mod resolver;
pub mod scanner;
pub mod vendor;
