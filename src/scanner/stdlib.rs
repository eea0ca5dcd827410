//! Standard-library package listing

use crate::error::ConfigError;
use std::fs;
use std::path::Path;

/// Names of the directories directly under `<go_root>/src`
///
/// Every import path below one of these names belongs to the Go
/// distribution rather than to a vendored dependency.
pub fn list_system_packages(go_root: &Path) -> Result<Vec<String>, ConfigError> {
    let src = go_root.join("src");
    let unreadable = |source| ConfigError::GoRootUnreadable {
        path: src.clone(),
        source,
    };

    let mut packages = Vec::new();
    for entry in fs::read_dir(&src).map_err(unreadable)? {
        let entry = entry.map_err(unreadable)?;
        if entry.file_type().map_err(unreadable)?.is_dir() {
            packages.push(entry.file_name().to_string_lossy().into_owned());
        }
    }
    packages.sort();
    Ok(packages)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_lists_only_directories() {
        let dir = TempDir::new().unwrap();
        let src = dir.path().join("src");
        fs::create_dir_all(src.join("net")).unwrap();
        fs::create_dir_all(src.join("crypto")).unwrap();
        fs::write(src.join("Make.dist"), "").unwrap();

        let packages = list_system_packages(dir.path()).unwrap();
        assert_eq!(packages, vec!["crypto", "net"]);
    }

    #[test]
    fn test_missing_src_fails() {
        let dir = TempDir::new().unwrap();
        assert!(list_system_packages(dir.path()).is_err());
    }
}
