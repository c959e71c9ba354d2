//! File-backed record store.
//!
//! Layout under the data directory:
//!
//! ```text
//! <data_dir>/json/<name>.json   collection records
//! <data_dir>/<kind>/<name>.<kind>   exports (csv, txt, gv, png, svg, pdf)
//! ```

use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

use crate::error::{StoreError, StoreResult};
use crate::models::Collection;

/// Subdirectory and extension of collection records.
const RECORD_KIND: &str = "json";

/// Named collections persisted one file each.
#[derive(Debug, Clone)]
pub struct RecordStore {
    root: PathBuf,
}

impl RecordStore {
    /// Open a store rooted at `root`. Nothing is created until first write.
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Whether a collection with this name is stored.
    ///
    /// # Errors
    ///
    /// Returns error if the name is not a valid file stem.
    pub fn exists(&self, name: &str) -> StoreResult<bool> {
        Ok(self.record_path(name)?.is_file())
    }

    /// Create and persist a new empty collection.
    ///
    /// # Errors
    ///
    /// Fails if the name is invalid or already taken.
    pub fn create(&self, name: &str) -> StoreResult<Collection> {
        if self.exists(name)? {
            return Err(StoreError::AlreadyExists(name.to_string()));
        }

        let collection = Collection::new(name);
        self.save(&collection)?;
        tracing::info!(name, "Created collection");
        Ok(collection)
    }

    /// Read a collection.
    ///
    /// # Errors
    ///
    /// Fails if the collection is absent or its file does not parse.
    pub fn load(&self, name: &str) -> StoreResult<Collection> {
        let path = self.record_path(name)?;
        // Raw bytes: bad encoding is a format problem, not an I/O failure.
        let bytes = match fs::read(&path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(StoreError::NotFound(name.to_string()));
            }
            Err(e) => return Err(StoreError::io(path, e)),
        };

        let mut collection: Collection = serde_json::from_slice(&bytes)
            .map_err(|source| StoreError::Corrupt { path: path.clone(), source })?;

        // The file name is authoritative; a renamed file keeps working.
        collection.name = name.to_string();
        let dropped = collection.dedup();
        if dropped > 0 {
            tracing::warn!(name, dropped, "Dropped duplicate articles while loading");
        }

        tracing::info!(name, articles = collection.len(), "Loaded collection");
        Ok(collection)
    }

    /// Write a collection, replacing any previous version.
    ///
    /// # Errors
    ///
    /// Fails on invalid name or I/O error.
    pub fn save(&self, collection: &Collection) -> StoreResult<()> {
        let path = self.record_path(&collection.name)?;
        let dir = self.root.join(RECORD_KIND);
        fs::create_dir_all(&dir).map_err(|e| StoreError::io(&dir, e))?;

        let json = serde_json::to_string_pretty(collection)?;

        // Write-then-rename so an interrupted save never truncates the record.
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, json).map_err(|e| StoreError::io(&tmp, e))?;
        fs::rename(&tmp, &path).map_err(|e| StoreError::io(&path, e))?;

        tracing::debug!(name = %collection.name, articles = collection.len(), "Saved collection");
        Ok(())
    }

    /// Delete a collection and every export named after it.
    ///
    /// Returns the removed paths, collection record first.
    ///
    /// # Errors
    ///
    /// Fails if nothing with that name exists.
    pub fn remove(&self, name: &str) -> StoreResult<Vec<PathBuf>> {
        validate_name(name)?;

        let mut kinds = self.kinds()?;
        // Record first so the report reads naturally.
        kinds.sort_by_key(|k| (k.as_str() != RECORD_KIND, k.clone()));

        let mut removed = Vec::new();
        for kind in kinds {
            let path = self.root.join(&kind).join(format!("{name}.{kind}"));
            match fs::remove_file(&path) {
                Ok(()) => {
                    tracing::info!(path = %path.display(), "Removed");
                    removed.push(path);
                }
                Err(e) if e.kind() == ErrorKind::NotFound => {}
                Err(e) => return Err(StoreError::io(path, e)),
            }
        }

        if removed.is_empty() {
            return Err(StoreError::NotFound(name.to_string()));
        }
        Ok(removed)
    }

    /// Sorted names of all stored collections.
    ///
    /// # Errors
    ///
    /// Fails if the record directory exists but cannot be read.
    pub fn peek(&self) -> StoreResult<Vec<String>> {
        let dir = self.root.join(RECORD_KIND);
        let entries = match fs::read_dir(&dir) {
            Ok(entries) => entries,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(StoreError::io(dir, e)),
        };

        let mut names = Vec::new();
        for entry in entries {
            let path = entry.map_err(|e| StoreError::io(&dir, e))?.path();
            if path.extension().is_some_and(|ext| ext == RECORD_KIND) {
                if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                    names.push(stem.to_string());
                }
            }
        }

        names.sort();
        Ok(names)
    }

    /// Path of an export artifact, creating its directory.
    ///
    /// # Errors
    ///
    /// Fails on invalid name or if the directory cannot be created.
    pub fn export_path(&self, name: &str, kind: &str) -> StoreResult<PathBuf> {
        validate_name(name)?;
        let dir = self.root.join(kind);
        fs::create_dir_all(&dir).map_err(|e| StoreError::io(&dir, e))?;
        Ok(dir.join(format!("{name}.{kind}")))
    }

    /// Write an export artifact, replacing any previous version.
    ///
    /// # Errors
    ///
    /// Fails on invalid name or I/O error.
    pub fn write_export(&self, name: &str, kind: &str, contents: &str) -> StoreResult<PathBuf> {
        let path = self.export_path(name, kind)?;
        fs::write(&path, contents).map_err(|e| StoreError::io(&path, e))?;
        tracing::info!(path = %path.display(), bytes = contents.len(), "Wrote export");
        Ok(path)
    }

    fn record_path(&self, name: &str) -> StoreResult<PathBuf> {
        validate_name(name)?;
        Ok(self.root.join(RECORD_KIND).join(format!("{name}.{RECORD_KIND}")))
    }

    /// Subdirectories of the data root.
    fn kinds(&self) -> StoreResult<Vec<String>> {
        let entries = match fs::read_dir(&self.root) {
            Ok(entries) => entries,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(StoreError::io(&self.root, e)),
        };

        let mut kinds = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| StoreError::io(&self.root, e))?;
            if entry.path().is_dir() {
                if let Some(kind) = entry.file_name().to_str() {
                    kinds.push(kind.to_string());
                }
            }
        }
        Ok(kinds)
    }
}

/// Check that a collection name is usable as a single file stem.
///
/// # Errors
///
/// Returns [`StoreError::InvalidName`] describing the problem.
pub fn validate_name(name: &str) -> StoreResult<()> {
    if name.is_empty() {
        return Err(StoreError::invalid_name(name, "name is empty"));
    }
    if name.starts_with('.') {
        return Err(StoreError::invalid_name(name, "name cannot start with '.'"));
    }
    if name.contains(['/', '\\']) {
        return Err(StoreError::invalid_name(name, "name cannot contain path separators"));
    }
    if name.chars().any(char::is_control) {
        return Err(StoreError::invalid_name(name, "name cannot contain control characters"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_name() {
        assert!(validate_name("covid-2020").is_ok());
        assert!(validate_name("with.dot").is_ok());
        assert!(validate_name("").is_err());
        assert!(validate_name(".hidden").is_err());
        assert!(validate_name("../escape").is_err());
        assert!(validate_name("a\\b").is_err());
    }

    #[test]
    fn test_peek_missing_root_is_empty() {
        let store = RecordStore::new("/nonexistent/gref-store-root");
        assert!(store.peek().unwrap().is_empty());
    }
}
