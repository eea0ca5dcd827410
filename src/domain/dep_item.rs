//! Dependency entry structures

use serde::{Deserialize, Serialize};
use std::fmt;

/// A vendored package and the git remote it is fetched from
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DepItem {
    /// Import path of the package root, e.g. `github.com/x/y`
    #[serde(rename = "Path")]
    pub path: String,
    /// Git remote URL
    #[serde(rename = "Origin")]
    pub origin: String,
}

impl DepItem {
    /// Creates a new dependency entry
    pub fn new(path: impl Into<String>, origin: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            origin: origin.into(),
        }
    }
}

impl fmt::Display for DepItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.path, self.origin)
    }
}
