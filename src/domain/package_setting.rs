//! Package settings: user overrides applied during origin resolution

use super::{has_path_prefix, DepItem};
use serde::{Deserialize, Serialize};

/// Ignore and custom package overrides, read from a JSON file
///
/// ```json
/// {
///     "ignorePackages": [{"Path": "github.com/internal", "Origin": ""}],
///     "customPackages": [{"Path": "golang.org/x/net", "Origin": "https://github.com/golang/net.git"}]
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackageSetting {
    /// Packages skipped entirely (prefix match on `path`)
    #[serde(rename = "ignorePackages", default)]
    pub ignore_packages: Vec<DepItem>,
    /// Packages whose origin is given directly (prefix match on `path`)
    #[serde(rename = "customPackages", default)]
    pub custom_packages: Vec<DepItem>,
}

impl PackageSetting {
    /// Returns true if the package lies below an ignored path
    pub fn is_ignored(&self, package: &str) -> bool {
        self.ignore_packages
            .iter()
            .any(|item| has_path_prefix(package, &item.path))
    }

    /// Returns the first custom entry covering the package
    pub fn custom_item(&self, package: &str) -> Option<&DepItem> {
        self.custom_packages
            .iter()
            .find(|item| has_path_prefix(package, &item.path))
    }
}
