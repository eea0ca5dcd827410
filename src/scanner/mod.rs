//! Import scanning for Go projects
//!
//! Walks a project directory, reads the import declarations of every `.go`
//! file and keeps the import paths that point outside the project and
//! outside the Go distribution.

mod go_imports;
mod stdlib;

pub use go_imports::{parse_imports, ImportSpec, ImportSyntaxError};
pub use stdlib::list_system_packages;

use crate::domain::has_path_prefix;
use crate::error::ScanError;
use std::collections::HashSet;
use std::fs;
use std::path::{Component, Path, PathBuf};
use tracing::{debug, trace};
use walkdir::{DirEntry, WalkDir};

/// Directory holding vendored packages, skipped while scanning
pub const VENDOR_DIR: &str = "vendor";

/// How an import path relates to the scanned project
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImportClass {
    /// Single-segment path such as `fmt`
    Standard,
    /// Below a directory of `$GOROOT/src`
    System,
    /// Below the scanned project's own package
    SelfImport,
    /// Anything else: a dependency candidate
    External,
}

/// Scanner collecting external import paths under a project root
pub struct ImportScanner {
    root: PathBuf,
    system_packages: Vec<String>,
    search_roots: Vec<PathBuf>,
}

impl ImportScanner {
    /// Create a scanner for `root`, given the standard-library package names
    pub fn new(root: impl Into<PathBuf>, system_packages: Vec<String>) -> Self {
        Self {
            root: root.into(),
            system_packages,
            search_roots: Vec::new(),
        }
    }

    /// Workspaces tried first when working out the project's own package
    pub fn with_search_roots(mut self, search_roots: &[PathBuf]) -> Self {
        self.search_roots = search_roots.to_vec();
        self
    }

    /// Import path of the scanned directory itself
    ///
    /// The part of the root below `<search root>/src`, or failing that,
    /// below the first `src` component of the root.
    pub fn current_package(&self) -> Result<String, ScanError> {
        let from_search_root = self
            .search_roots
            .iter()
            .find_map(|search_root| self.root.strip_prefix(search_root.join("src")).ok());

        let relative = match from_search_root {
            Some(relative) => relative.to_path_buf(),
            None => {
                let mut components = self.root.components();
                components
                    .by_ref()
                    .find(|c| matches!(c, Component::Normal(name) if *name == "src"))
                    .ok_or_else(|| ScanError::outside_source_tree(&self.root))?;
                components.as_path().to_path_buf()
            }
        };

        let package = to_import_path(&relative);
        if package.is_empty() {
            return Err(ScanError::outside_source_tree(&self.root));
        }
        Ok(package)
    }

    /// Classify an import path relative to `current_package`
    pub fn classify(&self, import: &str, current_package: &str) -> ImportClass {
        if !import.contains('/') {
            ImportClass::Standard
        } else if self
            .system_packages
            .iter()
            .any(|system| has_path_prefix(import, system))
        {
            ImportClass::System
        } else if has_path_prefix(import, current_package) {
            ImportClass::SelfImport
        } else {
            ImportClass::External
        }
    }

    /// Collect the sorted external import paths of the project
    ///
    /// A syntax error in any file aborts the whole scan.
    pub fn scan(&self) -> Result<Vec<String>, ScanError> {
        let current_package = self.current_package()?;
        debug!(
            "scanning {} as package {}",
            self.root.display(),
            current_package
        );

        let mut seen = HashSet::new();
        let mut external = Vec::new();

        for path in self.find_source_files()? {
            let relative = path.strip_prefix(&self.root).unwrap_or(&path);
            // Only the import section has to be valid UTF-8
            let bytes = fs::read(&path).map_err(|e| ScanError::io(&path, e))?;
            let content = String::from_utf8_lossy(&bytes);
            let imports = parse_imports(&content)
                .map_err(|e| ScanError::parse_error(relative, e.line, e.message))?;

            for spec in imports {
                if !seen.insert(spec.path.clone()) {
                    continue;
                }
                let class = self.classify(&spec.path, &current_package);
                match &spec.name {
                    Some(name) => trace!(
                        "{}:{} imports {} as {} ({:?})",
                        relative.display(),
                        spec.line,
                        spec.path,
                        name,
                        class
                    ),
                    None => trace!(
                        "{}:{} imports {} ({:?})",
                        relative.display(),
                        spec.line,
                        spec.path,
                        class
                    ),
                }
                if class == ImportClass::External {
                    external.push(spec.path);
                }
            }
        }

        external.sort();
        debug!("found {} external packages", external.len());
        Ok(external)
    }

    /// `.go` files below the root, in lexical walk order
    fn find_source_files(&self) -> Result<Vec<PathBuf>, ScanError> {
        let mut files = Vec::new();

        for entry in WalkDir::new(&self.root)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|e| !is_excluded(e))
        {
            let entry = entry.map_err(|e| {
                let path = e.path().unwrap_or(self.root.as_path()).to_path_buf();
                ScanError::io(path, e.into())
            })?;

            if !entry.file_type().is_file() {
                continue;
            }
            if entry.path().extension().is_some_and(|ext| ext == "go") {
                files.push(entry.into_path());
            }
        }

        Ok(files)
    }
}

/// Hidden entries anywhere and the top-level vendor directory
fn is_excluded(entry: &DirEntry) -> bool {
    if entry.depth() == 0 {
        return false;
    }
    let name = entry.file_name().to_string_lossy();
    name.starts_with('.') || (entry.depth() == 1 && name == VENDOR_DIR)
}

fn to_import_path(path: &Path) -> String {
    path.components()
        .filter_map(|c| match c {
            Component::Normal(name) => Some(name.to_string_lossy().into_owned()),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join("/")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use tempfile::TempDir;

    fn system() -> Vec<String> {
        vec!["net".to_string(), "encoding".to_string(), "vendor".to_string()]
    }

    fn project(dir: &TempDir) -> PathBuf {
        let root = dir.path().join("src").join("example.com").join("me").join("app");
        fs::create_dir_all(&root).unwrap();
        root
    }

    fn write(path: PathBuf, content: &str) {
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    #[test]
    fn test_current_package_from_src_component() {
        let dir = TempDir::new().unwrap();
        let scanner = ImportScanner::new(project(&dir), system());
        assert_eq!(scanner.current_package().unwrap(), "example.com/me/app");
    }

    #[test]
    fn test_current_package_prefers_search_root() {
        let dir = TempDir::new().unwrap();
        let gopath = dir.path().join("src").join("work");
        let root = gopath.join("src").join("example.com").join("tool");
        fs::create_dir_all(&root).unwrap();

        let scanner = ImportScanner::new(&root, system()).with_search_roots(&[gopath]);
        assert_eq!(scanner.current_package().unwrap(), "example.com/tool");
    }

    #[test]
    fn test_current_package_outside_src() {
        let dir = TempDir::new().unwrap();
        let scanner = ImportScanner::new(dir.path().join("project"), system());
        let err = scanner.current_package().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidParameter);
    }

    #[test]
    fn test_classify() {
        let scanner = ImportScanner::new("/go/src/example.com/me/app", system());
        let current = "example.com/me/app";
        assert_eq!(scanner.classify("fmt", current), ImportClass::Standard);
        assert_eq!(scanner.classify("net/http", current), ImportClass::System);
        assert_eq!(
            scanner.classify("example.com/me/app/internal/db", current),
            ImportClass::SelfImport
        );
        assert_eq!(
            scanner.classify("example.com/me/apptools", current),
            ImportClass::External
        );
        assert_eq!(
            scanner.classify("github.com/gin-gonic/gin", current),
            ImportClass::External
        );
    }

    #[test]
    fn test_scan_collects_sorted_external_imports() {
        let dir = TempDir::new().unwrap();
        let root = project(&dir);
        write(
            root.join("main.go"),
            r#"package main

import (
	"fmt"
	"net/http"

	"github.com/zeta/last"
	"example.com/me/app/internal/db"
	"github.com/alpha/first/sub"
)
"#,
        );
        write(
            root.join("internal/db/db.go"),
            "package db\n\nimport \"github.com/alpha/first/sub\"\nimport \"golang.org/x/net/context\"\n",
        );

        let scanner = ImportScanner::new(&root, system());
        let first = scanner.scan().unwrap();
        assert_eq!(
            first,
            vec![
                "github.com/alpha/first/sub",
                "github.com/zeta/last",
                "golang.org/x/net/context",
            ]
        );
        assert_eq!(scanner.scan().unwrap(), first);
    }

    #[test]
    fn test_scan_skips_vendor_hidden_and_other_files() {
        let dir = TempDir::new().unwrap();
        let root = project(&dir);
        write(root.join("vendor/github.com/v/v/v.go"), "package v\nimport \"github.com/from/vendor\"\n");
        write(root.join(".git/hooks/x.go"), "package x\nimport \"github.com/from/hidden\"\n");
        write(root.join("notes.txt"), "import \"github.com/from/text\"\n");
        write(root.join("cmd/vendor/keep.go"), "package vendor\nimport \"github.com/nested/vendor\"\n");

        let scanner = ImportScanner::new(&root, system());
        assert_eq!(scanner.scan().unwrap(), vec!["github.com/nested/vendor"]);
    }

    #[test]
    fn test_scan_empty_root() {
        let dir = TempDir::new().unwrap();
        let scanner = ImportScanner::new(project(&dir), system());
        assert!(scanner.scan().unwrap().is_empty());
    }

    #[test]
    fn test_scan_ignores_invalid_utf8_after_imports() {
        let dir = TempDir::new().unwrap();
        let root = project(&dir);
        fs::write(
            root.join("latin1.go"),
            b"package main\n\nimport \"github.com/x/y\"\n\n// caf\xE9\nfunc main() {}\n",
        )
        .unwrap();

        let scanner = ImportScanner::new(&root, system());
        assert_eq!(scanner.scan().unwrap(), vec!["github.com/x/y"]);
    }

    #[test]
    fn test_scan_invalid_utf8_in_import_path() {
        let dir = TempDir::new().unwrap();
        let root = project(&dir);
        fs::write(
            root.join("bad.go"),
            b"package main\n\nimport \"github.com/caf\xE9\"\n",
        )
        .unwrap();

        let scanner = ImportScanner::new(&root, system());
        let err = scanner.scan().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ParseError);
        assert!(err.to_string().contains("bad.go:3"));
    }

    #[test]
    fn test_scan_aborts_on_parse_error() {
        let dir = TempDir::new().unwrap();
        let root = project(&dir);
        write(root.join("good.go"), "package main\nimport \"github.com/x/y\"\n");
        write(root.join("bad.go"), "package main\nimport (\n\t\"github.com/broken\n)\n");

        let scanner = ImportScanner::new(&root, system());
        let err = scanner.scan().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ParseError);
        assert!(err.to_string().contains("bad.go:3"));
    }
}
