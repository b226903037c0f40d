use std::path::Path;

use crate::adapters::preferences::file_store::FilePreferenceStore;
use crate::cli::output;
use crate::core::errors::Result;

/// Execute the `slotsync forget` command: drop the remembered target
/// so the next push starts from a clean selection.
pub fn execute(prefs: Option<&Path>) -> Result<()> {
    let store = FilePreferenceStore::new(
        prefs
            .map(Path::to_path_buf)
            .unwrap_or_else(FilePreferenceStore::default_path),
    );

    if store.clear()? {
        output::success("Stored target forgotten");
    } else {
        output::warning("No stored target to forget");
    }

    Ok(())
}
