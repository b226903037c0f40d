use std::path::PathBuf;

/// All domain errors for slotsync.
///
/// Each variant provides enough context to diagnose the issue
/// without needing a debugger.
#[derive(Debug, thiserror::Error)]
pub enum SlotSyncError {
    #[error(
        "Not signed in to the platform\n\n  \
         slotsync could not establish an authenticated session: {reason}\n\n  \
         Solutions:\n    \
         → Sign in manually: az login\n    \
         → Check that the Azure CLI is installed and on your PATH"
    )]
    AuthFailed { reason: String },

    #[error(
        "Could not create slot '{slot}': {reason}\n\n  \
         The slot was not created and nothing was uploaded.\n  \
         Inspect the cause before retrying — slot creation is not safe\n  \
         to retry blindly."
    )]
    ProvisioningFailed { slot: String, reason: String },

    #[error(
        "Local configuration file not found: {path}\n\n  \
         slotsync expects '.env' for production and '.env.<slot>' for\n  \
         any other environment.\n\n  \
         Solutions:\n    \
         → Create the file next to where you run slotsync\n    \
         → Pick a different environment when prompted"
    )]
    MissingLocalFile { path: PathBuf },

    #[error(
        "Remote write failed during {operation}: {reason}\n\n  \
         Settings applied by earlier steps in this run are NOT rolled\n  \
         back. Check the app's configuration in the portal before\n  \
         running again."
    )]
    WriteFailed { operation: String, reason: String },

    #[error(
        "Platform query failed during {operation}: {reason}\n\n  \
         Check your network connection and that the signed-in account\n  \
         can see the subscription you expect (az account show)."
    )]
    DiscoveryFailed { operation: String, reason: String },

    #[error(
        "Parse error in {file}: {detail}\n\n  \
         Expected format: KEY=value (one per line).\n  \
         Comments (#) and blank lines are allowed."
    )]
    ParseError { file: PathBuf, detail: String },

    #[error(
        "'{name}' is not a valid slot name\n\n  \
         Slot names use letters, digits and hyphens (2 to 59 characters)\n  \
         and cannot start or end with a hyphen."
    )]
    InvalidSlotName { name: String },

    #[error("Invalid configuration: {detail}")]
    InvalidConfig { detail: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, SlotSyncError>;
