use std::fs;
use std::path::{Path, PathBuf};

use crate::core::errors::{Result, SlotSyncError};
use crate::core::models::target::StoredSelection;
use crate::core::traits::preferences::PreferenceStore;

/// Preference store backed by a single JSON file.
///
/// Holds the last successfully used target so the next run can offer
/// to reuse it. The file is rewritten whole, via a temporary file and
/// a rename, so a reader never observes a half-written store.
pub struct FilePreferenceStore {
    path: PathBuf,
}

impl FilePreferenceStore {
    /// Create a store backed by the given file path.
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Default location under the user configuration directory,
    /// e.g. `~/.config/slotsync/last_target.json`.
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .map(|d| d.join("slotsync").join("last_target.json"))
            .unwrap_or_else(|| PathBuf::from(".slotsync-last-target.json"))
    }

    /// Return the file path this store reads from.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Delete the stored selection. Returns whether one existed.
    pub fn clear(&self) -> Result<bool> {
        if self.path.exists() {
            fs::remove_file(&self.path)?;
            Ok(true)
        } else {
            Ok(false)
        }
    }
}

impl PreferenceStore for FilePreferenceStore {
    /// Missing or unreadable files read as "no stored selection".
    /// Corruption is deliberately silent: the worst case is that the
    /// operator gets asked again instead of offered a reuse.
    fn read(&self) -> Option<StoredSelection> {
        let content = fs::read_to_string(&self.path).ok()?;
        serde_json::from_str(&content).ok()
    }

    fn write(&self, selection: &StoredSelection) -> Result<()> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            fs::create_dir_all(parent)?;
        }

        let json = serde_json::to_string_pretty(selection).map_err(|e| {
            SlotSyncError::InvalidConfig {
                detail: format!("failed to serialize stored selection: {e}"),
            }
        })?;

        // Write-then-rename keeps the store readable at every instant
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, json)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}
