//! Process environment captured once per invocation
//!
//! The scanner and resolver never read environment variables themselves;
//! `main` builds an [`Environment`] and hands it down.

use crate::domain::PackageSetting;
use crate::error::ConfigError;
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Go toolchain root, used to list standard-library packages
pub const GOROOT_ENV: &str = "GOROOT";

/// Path list of workspaces searched for dependency checkouts
pub const GOPATH_ENV: &str = "GOPATH";

/// Environment-derived configuration
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Environment {
    /// `$GOROOT`, if set
    pub go_root: Option<PathBuf>,
    /// Entries of `$GOPATH`, in order
    pub search_roots: Vec<PathBuf>,
}

impl Environment {
    /// Read GOROOT and GOPATH from the process environment
    pub fn from_env() -> Self {
        Self::from_vars(
            std::env::var_os(GOROOT_ENV),
            std::env::var_os(GOPATH_ENV),
        )
    }

    /// Build from raw variable values
    pub fn from_vars(go_root: Option<OsString>, go_path: Option<OsString>) -> Self {
        let go_root = go_root.filter(|v| !v.is_empty()).map(PathBuf::from);
        let search_roots = go_path
            .map(|v| {
                std::env::split_paths(&v)
                    .filter(|p| !p.as_os_str().is_empty())
                    .collect()
            })
            .unwrap_or_default();
        Self {
            go_root,
            search_roots,
        }
    }

    /// GOROOT, or an error when it is not configured
    pub fn require_go_root(&self) -> Result<&Path, ConfigError> {
        self.go_root.as_deref().ok_or(ConfigError::MissingGoRoot)
    }
}

/// Load the package-setting JSON file
pub fn load_package_setting(path: &Path) -> Result<PackageSetting, ConfigError> {
    if !path.exists() {
        return Err(ConfigError::SettingNotFound {
            path: path.to_path_buf(),
        });
    }
    let content = fs::read_to_string(path).map_err(|e| ConfigError::SettingReadError {
        path: path.to_path_buf(),
        source: e,
    })?;
    let setting: PackageSetting =
        serde_json::from_str(&content).map_err(|e| ConfigError::SettingParseError {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
    debug!(
        "loaded {} ignore and {} custom packages from {}",
        setting.ignore_packages.len(),
        setting.custom_packages.len(),
        path.display()
    );
    Ok(setting)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use tempfile::TempDir;

    #[test]
    fn test_from_vars_empty() {
        let env = Environment::from_vars(None, None);
        assert!(env.go_root.is_none());
        assert!(env.search_roots.is_empty());
        assert_eq!(env.require_go_root().unwrap_err().kind(), ErrorKind::InvalidParameter);
    }

    #[test]
    fn test_from_vars_empty_goroot_is_unset() {
        let env = Environment::from_vars(Some(OsString::new()), None);
        assert!(env.go_root.is_none());
    }

    #[test]
    fn test_from_vars_splits_gopath() {
        let joined = std::env::join_paths(["/go/one", "/go/two"]).unwrap();
        let env = Environment::from_vars(Some(OsString::from("/usr/lib/go")), Some(joined));
        assert_eq!(env.go_root, Some(PathBuf::from("/usr/lib/go")));
        assert_eq!(
            env.search_roots,
            vec![PathBuf::from("/go/one"), PathBuf::from("/go/two")]
        );
    }

    #[test]
    fn test_load_package_setting_missing() {
        let dir = TempDir::new().unwrap();
        let err = load_package_setting(&dir.path().join("settings.json")).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotExist);
    }

    #[test]
    fn test_load_package_setting_malformed() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, "{ not json").unwrap();
        let err = load_package_setting(&path).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ParseError);
    }

    #[test]
    fn test_load_package_setting() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(
            &path,
            r#"{"customPackages": [{"Path": "golang.org/x/net", "Origin": "https://github.com/golang/net.git"}]}"#,
        )
        .unwrap();
        let setting = load_package_setting(&path).unwrap();
        assert!(setting.ignore_packages.is_empty());
        assert_eq!(setting.custom_packages.len(), 1);
    }
}
