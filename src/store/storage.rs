//! Saved-list file management
//!
//! Owns the directory of saved option lists and performs all file I/O
//! on behalf of the frontends. The store itself never touches the
//! filesystem; it only sees the string content.

use std::fs;
use std::path::{Path, PathBuf};

use crate::store::OptionStore;
use crate::util::text::sanitize_file_name;
use crate::{Result, SpinPickError, APP_NAME, SAVE_DIR};

/// Manager for the saved options directory
#[derive(Debug)]
pub struct ListStorage {
    dir: PathBuf,
}

impl ListStorage {
    /// Create a storage manager rooted at the standard location,
    /// `$DATA_HOME/spinpick/saved_options` or the platform equivalent.
    pub fn new() -> Result<Self> {
        let data_dir = dirs::data_dir().ok_or_else(|| {
            SpinPickError::Storage("Unable to determine data directory".to_string())
        })?;
        Ok(Self {
            dir: data_dir.join(APP_NAME).join(SAVE_DIR),
        })
    }

    /// Create a storage manager rooted at an explicit directory
    pub fn with_dir(dir: PathBuf) -> Self {
        Self { dir }
    }

    /// The directory saved lists live in
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Timestamped default file name for a new save
    pub fn default_file_name() -> String {
        chrono::Local::now()
            .format("options-%Y%m%d-%H%M%S.json")
            .to_string()
    }

    /// Write the store's current list under `name` (sanitized, `.json`
    /// appended when missing) and return the path written.
    pub fn save(&self, name: &str, store: &OptionStore) -> Result<PathBuf> {
        let cleaned = sanitize_file_name(name);
        if cleaned.is_empty() {
            return Err(SpinPickError::Storage(
                "file name is empty after sanitizing".to_string(),
            ));
        }

        let file_name = if cleaned.ends_with(".json") {
            cleaned
        } else {
            format!("{}.json", cleaned)
        };

        fs::create_dir_all(&self.dir).map_err(|e| {
            SpinPickError::Storage(format!(
                "Failed to create save directory {}: {}",
                self.dir.display(),
                e
            ))
        })?;

        let path = self.dir.join(file_name);
        let content = store.serialize()?;
        fs::write(&path, content).map_err(|e| {
            SpinPickError::Storage(format!("Failed to write {}: {}", path.display(), e))
        })?;

        Ok(path)
    }

    /// Read `path` and replace the store's contents with the file's
    /// list. Returns the new count. A malformed file fails with a
    /// `Format` error and leaves the store unchanged.
    pub fn load(&self, path: &Path, store: &mut OptionStore) -> Result<usize> {
        let content = fs::read_to_string(path).map_err(|e| {
            SpinPickError::Storage(format!("Failed to read {}: {}", path.display(), e))
        })?;
        store.deserialize(&content)
    }

    /// The saved `*.json` files, sorted by name
    pub fn list_saved(&self) -> Result<Vec<PathBuf>> {
        if !self.dir.exists() {
            return Ok(Vec::new());
        }

        let mut files = Vec::new();
        let entries = fs::read_dir(&self.dir).map_err(|e| {
            SpinPickError::Storage(format!(
                "Failed to read save directory {}: {}",
                self.dir.display(),
                e
            ))
        })?;
        for entry in entries {
            let path = entry
                .map_err(|e| SpinPickError::Storage(format!("Failed to read entry: {}", e)))?
                .path();
            if path.extension().is_some_and(|ext| ext == "json") {
                files.push(path);
            }
        }

        files.sort();
        Ok(files)
    }
}
