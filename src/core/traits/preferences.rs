use crate::core::errors::Result;
use crate::core::models::target::StoredSelection;

/// Port for remembering the last successfully used target.
pub trait PreferenceStore: Send + Sync {
    /// The stored selection, or `None` when nothing usable is stored.
    /// A missing or unreadable store reads as `None`.
    fn read(&self) -> Option<StoredSelection>;

    /// Overwrite the store with a new selection.
    fn write(&self, selection: &StoredSelection) -> Result<()>;
}
