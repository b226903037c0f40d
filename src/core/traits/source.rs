use std::path::Path;

use crate::core::errors::Result;
use crate::core::models::config_entry::ConfigEntry;

/// Port for reading local key/value configuration files.
pub trait ConfigSource: Send + Sync {
    /// Load all entries from the file at `path`.
    ///
    /// Fails with `MissingLocalFile` when the file does not exist.
    fn load(&self, path: &Path) -> Result<Vec<ConfigEntry>>;
}
