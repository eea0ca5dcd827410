//! In-memory manifest store backed by a JSON file

use crate::domain::DepItem;
use crate::error::ManifestError;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Ordered list of dependencies loaded from (and saved to) a manifest file
///
/// Paths and origins are both unique across entries. Mutations only touch
/// the in-memory list; callers persist with [`Manifest::save`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Manifest {
    path: PathBuf,
    items: Vec<DepItem>,
}

impl Manifest {
    /// Create an empty manifest that will be saved to `path`
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            items: Vec::new(),
        }
    }

    /// Load the manifest at `path`
    ///
    /// A missing file yields an empty manifest. A file holding JSON `null`
    /// is treated as an empty list.
    pub fn load(path: impl Into<PathBuf>) -> Result<Self, ManifestError> {
        let path = path.into();
        if !path.exists() {
            debug!("manifest {} does not exist, starting empty", path.display());
            return Ok(Self::new(path));
        }

        let content =
            fs::read_to_string(&path).map_err(|e| ManifestError::read_error(&path, e))?;
        let items: Option<Vec<DepItem>> = serde_json::from_str(&content)
            .map_err(|e| ManifestError::parse_error(&path, e.to_string()))?;

        let items = items.unwrap_or_default();
        debug!("loaded {} entries from {}", items.len(), path.display());
        Ok(Self { path, items })
    }

    /// Location of the manifest file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Entries in insertion order
    pub fn items(&self) -> &[DepItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Find the entry with exactly this path
    pub fn find(&self, path: &str) -> Option<&DepItem> {
        self.items.iter().find(|item| item.path == path)
    }

    /// Append a new entry
    ///
    /// Fails if either value is empty or if the path or origin is already
    /// recorded; the manifest is left unchanged on failure.
    pub fn add_item(&mut self, path: &str, origin: &str) -> Result<(), ManifestError> {
        if path.is_empty() || origin.is_empty() {
            return Err(ManifestError::invalid_parameter(
                "the path or origin is empty",
            ));
        }
        for item in &self.items {
            if item.path == path {
                warn!("the path {} already exists", path);
                return Err(ManifestError::path_exists(path));
            }
            if item.origin == origin {
                warn!("the origin {} already exists", origin);
                return Err(ManifestError::origin_exists(origin));
            }
        }
        self.items.push(DepItem::new(path, origin));
        Ok(())
    }

    /// Remove the first entry whose path matches exactly
    ///
    /// Returns whether an entry was removed. A missing path is not an error.
    pub fn delete_item(&mut self, path: &str) -> Result<bool, ManifestError> {
        if path.is_empty() {
            return Err(ManifestError::invalid_parameter("the path is not specified"));
        }
        match self.items.iter().position(|item| item.path == path) {
            Some(index) => {
                self.items.remove(index);
                Ok(true)
            }
            None => {
                debug!("the path {} is not in the manifest", path);
                Ok(false)
            }
        }
    }

    /// Set the origin of every entry whose path matches exactly
    ///
    /// Returns whether any entry changed. An unknown path is a no-op;
    /// moving an origin that belongs to another path onto this one is
    /// rejected.
    pub fn update_item(&mut self, path: &str, origin: &str) -> Result<bool, ManifestError> {
        if path.is_empty() || origin.is_empty() {
            return Err(ManifestError::invalid_parameter(
                "the path or origin is not specified",
            ));
        }
        if self.find(path).is_none() {
            debug!("the path {} is not in the manifest", path);
            return Ok(false);
        }
        if self
            .items
            .iter()
            .any(|item| item.origin == origin && item.path != path)
        {
            return Err(ManifestError::origin_exists(origin));
        }

        let mut changed = false;
        for item in self.items.iter_mut().filter(|item| item.path == path) {
            if item.origin != origin {
                item.origin = origin.to_string();
                changed = true;
            }
        }
        Ok(changed)
    }

    /// Serialize the manifest with 4-space indentation
    pub fn to_json(&self) -> Result<String, ManifestError> {
        let mut buf = Vec::new();
        let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
        let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
        self.items
            .serialize(&mut serializer)
            .map_err(|e| ManifestError::parse_error(&self.path, e.to_string()))?;
        // serde_json only emits valid UTF-8
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }

    /// Write the manifest to its file, replacing previous content
    ///
    /// The JSON is written to a sibling temporary file which is then
    /// renamed over the manifest.
    pub fn save(&self) -> Result<(), ManifestError> {
        let content = self.to_json()?;

        let file_name = self
            .path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let tmp_path = self.path.with_file_name(format!(".{}.tmp", file_name));

        fs::write(&tmp_path, &content).map_err(|e| ManifestError::write_error(&tmp_path, e))?;
        if let Err(e) = fs::rename(&tmp_path, &self.path) {
            let _ = fs::remove_file(&tmp_path);
            return Err(ManifestError::write_error(&self.path, e));
        }

        debug!("the content of {} is:\n{}", self.path.display(), content);
        Ok(())
    }
}
