//! Command implementations
//!
//! Each command loads what it needs, validates its input before touching
//! the file system, and saves the manifest at most once, after every
//! in-memory change succeeded.

use crate::config::{load_package_setting, Environment};
use crate::domain::{DepItem, PackageSetting};
use crate::error::{AppError, ConfigError, ManifestError};
use crate::manifest::{Manifest, MANIFEST_FILE_NAME};
use crate::progress::Progress;
use crate::resolver::{OriginResolver, Resolution};
use crate::scanner::{list_system_packages, ImportScanner};
use crate::vendor::{CommandRunner, SyncReport, VendorSyncer, DEFAULT_VENDOR_DIR};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Where and with which environment a command runs
#[derive(Debug, Clone)]
pub struct Context {
    /// Project directory holding godeps.json and vendor/
    pub work_dir: PathBuf,
    pub env: Environment,
}

impl Context {
    pub fn new(work_dir: impl Into<PathBuf>, env: Environment) -> Self {
        Self {
            work_dir: work_dir.into(),
            env,
        }
    }

    /// Context for the process's current directory
    pub fn from_current_dir(env: Environment) -> Result<Self, ConfigError> {
        let work_dir =
            std::env::current_dir().map_err(|source| ConfigError::WorkingDir { source })?;
        Ok(Self::new(work_dir, env))
    }

    pub fn manifest_path(&self) -> PathBuf {
        self.work_dir.join(MANIFEST_FILE_NAME)
    }

    fn load_manifest(&self) -> Result<Manifest, ManifestError> {
        Manifest::load(self.manifest_path())
    }
}

/// Result of `init`
#[derive(Debug)]
pub struct InitReport {
    pub manifest: Manifest,
    pub resolution: Resolution,
    /// Entries newly added to the manifest
    pub added: usize,
}

fn required<'a>(value: Option<&'a str>, message: &str) -> Result<&'a str, ManifestError> {
    match value {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(ManifestError::invalid_parameter(message)),
    }
}

/// Scan the project, resolve origins and record them in the manifest
pub fn run_init(
    ctx: &Context,
    package_setting: Option<&Path>,
    progress: &mut Progress,
) -> Result<InitReport, AppError> {
    let setting = match package_setting {
        Some(path) => load_package_setting(path)?,
        None => PackageSetting::default(),
    };
    let system_packages = list_system_packages(ctx.env.require_go_root()?)?;

    progress.scanning(&ctx.work_dir);
    let candidates = ImportScanner::new(&ctx.work_dir, system_packages)
        .with_search_roots(&ctx.env.search_roots)
        .scan();
    progress.clear();
    let candidates = candidates?;

    progress.resolving(candidates.len());
    let resolution = OriginResolver::new(ctx.env.search_roots.clone(), setting).resolve(&candidates);
    progress.clear();
    let resolution = resolution?;

    let mut manifest = ctx.load_manifest()?;
    let mut added = 0;
    for item in &resolution.items {
        match manifest.add_item(&item.path, &item.origin) {
            Ok(()) => added += 1,
            Err(ManifestError::AlreadyExists { .. }) => {
                debug!("{} is already recorded", item.path);
            }
            Err(e) => return Err(e.into()),
        }
    }
    manifest.save()?;
    info!("recorded {} new packages", added);

    Ok(InitReport {
        manifest,
        resolution,
        added,
    })
}

/// Add one entry and save
pub fn run_add(ctx: &Context, path: Option<&str>, origin: Option<&str>) -> Result<DepItem, AppError> {
    let message = "the path or origin is not specified";
    let path = required(path, message)?;
    let origin = required(origin, message)?;

    let mut manifest = ctx.load_manifest()?;
    manifest.add_item(path, origin)?;
    manifest.save()?;
    Ok(DepItem::new(path, origin))
}

/// Delete one entry; returns whether it existed
pub fn run_delete(ctx: &Context, path: Option<&str>) -> Result<bool, AppError> {
    let path = required(path, "the path is not specified")?;

    let mut manifest = ctx.load_manifest()?;
    let removed = manifest.delete_item(path)?;
    if removed {
        manifest.save()?;
    }
    Ok(removed)
}

/// Update the origin of one entry; returns whether anything changed
pub fn run_update(ctx: &Context, path: Option<&str>, origin: Option<&str>) -> Result<bool, AppError> {
    let message = "the path or origin is not specified";
    let path = required(path, message)?;
    let origin = required(origin, message)?;

    let mut manifest = ctx.load_manifest()?;
    let changed = manifest.update_item(path, origin)?;
    if changed {
        manifest.save()?;
    }
    Ok(changed)
}

/// Load the manifest for display
pub fn run_list(ctx: &Context) -> Result<Manifest, AppError> {
    Ok(ctx.load_manifest()?)
}

/// Clone or pull every entry, or only the one matching `path`
///
/// A `path` that is not in the manifest fails with NotExist before any
/// command runs.
pub fn run_sync<R: CommandRunner>(
    ctx: &Context,
    path: Option<&str>,
    runner: R,
    progress: &mut Progress,
) -> Result<SyncReport, AppError> {
    let manifest = ctx.load_manifest()?;

    let items: Vec<DepItem> = match path.filter(|p| !p.is_empty()) {
        Some(path) => {
            debug!("will update package with path {}", path);
            let item = manifest
                .find(path)
                .ok_or_else(|| ManifestError::path_not_found(path))?;
            vec![item.clone()]
        }
        None => manifest.items().to_vec(),
    };

    let syncer = VendorSyncer::new(&ctx.work_dir, DEFAULT_VENDOR_DIR, runner);
    progress.syncing(items.len());
    let report = syncer.sync_all(&items, progress);
    progress.clear();
    Ok(report?)
}
