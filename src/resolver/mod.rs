//! Origin resolution for external packages
//!
//! Maps import paths found by the scanner to git remotes:
//! 1. ignored packages are dropped
//! 2. packages below an already solved path are folded into it
//! 3. custom packages use their configured origin
//! 4. otherwise `<search root>/src/<path>/.git/config` is looked up for the
//!    package and each of its parents, search roots in order

mod git_config;
mod trie;

pub use git_config::{git_config_path, parse_origin, read_origin};
pub use trie::SolvedPaths;

use crate::domain::{parent_path, DepItem, PackageSetting};
use crate::error::ResolveError;
use std::path::PathBuf;
use tracing::{debug, warn};

/// Outcome of resolving a list of candidate packages
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Resolution {
    /// One entry per solved package root, in resolution order
    pub items: Vec<DepItem>,
    /// Candidates no search root could resolve
    pub unresolved: Vec<String>,
}

/// Resolver mapping import paths to git origins
pub struct OriginResolver {
    search_roots: Vec<PathBuf>,
    setting: PackageSetting,
}

impl OriginResolver {
    /// Create a resolver over the given search roots (e.g. GOPATH entries)
    pub fn new(search_roots: Vec<PathBuf>, setting: PackageSetting) -> Self {
        Self {
            search_roots,
            setting,
        }
    }

    /// Resolve sorted candidates into dependency entries
    ///
    /// Unresolved candidates are reported and collected but never fail the
    /// call. Reading an existing git config that turns out unreadable does.
    pub fn resolve(&self, candidates: &[String]) -> Result<Resolution, ResolveError> {
        let mut resolution = Resolution::default();
        let mut solved = SolvedPaths::new();

        for candidate in candidates {
            if self.setting.is_ignored(candidate) {
                debug!("the package {} is in ignore list", candidate);
                continue;
            }

            if let Some(parent) = solved.covering(candidate) {
                debug!("the package {} is covered by {}", candidate, parent);
                continue;
            }

            if let Some(item) = self.setting.custom_item(candidate) {
                debug!("using custom origin {} for {}", item.origin, candidate);
                solved.insert(&item.path);
                resolution.items.push(item.clone());
                continue;
            }

            match self.lookup(candidate)? {
                Some(item) => {
                    debug!("resolved {} as {}", candidate, item);
                    solved.insert(&item.path);
                    resolution.items.push(item);
                }
                None => {
                    warn!("{}", ResolveError::unresolved(candidate));
                    resolution.unresolved.push(candidate.clone());
                }
            }
        }

        Ok(resolution)
    }

    /// Find git metadata for the package or one of its parents
    ///
    /// Search roots are tried in order; within a root the deepest path with
    /// a usable git config wins.
    pub fn lookup(&self, package: &str) -> Result<Option<DepItem>, ResolveError> {
        for search_root in &self.search_roots {
            let mut current = Some(package);
            while let Some(path) = current {
                let config = git_config_path(&search_root.join("src").join(path));
                if config.is_file() {
                    match read_origin(&config) {
                        Ok(origin) => return Ok(Some(DepItem::new(path, origin))),
                        Err(ResolveError::OriginNotFound { path: config }) => {
                            debug!("no remote url in {}", config.display());
                        }
                        Err(e) => return Err(e),
                    }
                }
                current = parent_path(path);
            }
        }
        Ok(None)
    }
}
