use crate::core::errors::Result;
use crate::core::models::config_entry::ConfigEntry;

/// Port for the hosting platform's control plane.
///
/// Implementations live in `adapters::gateway` (e.g. AzureCliGateway).
/// The core layer only depends on this trait, never on a concrete
/// platform client, so the adapter can be swapped for a native SDK
/// without touching the pipeline.
pub trait EnvironmentGateway: Send + Sync {
    /// Whether an authenticated session already exists.
    fn is_authenticated(&self) -> bool;

    /// Establish a session interactively.
    fn login(&self) -> Result<()>;

    /// Resource groups visible to the signed-in account.
    fn list_resource_groups(&self) -> Result<Vec<String>>;

    /// Apps visible to the signed-in account.
    fn list_apps(&self) -> Result<Vec<String>>;

    /// Deployment slots that exist for the app.
    ///
    /// Callers must treat `"production"` as implicitly present even
    /// when this call fails or omits it: production is the base
    /// environment and always exists.
    fn list_slots(&self, app: &str, resource_group: &str) -> Result<Vec<String>>;

    /// Create a new deployment slot.
    fn create_slot(&self, app: &str, resource_group: &str, slot: &str) -> Result<()>;

    /// Apply all entries as app settings on the target. The slot
    /// qualifier is omitted for production.
    fn write_settings(
        &self,
        app: &str,
        resource_group: &str,
        slot: Option<&str>,
        entries: &[ConfigEntry],
    ) -> Result<()>;

    /// Mark the given keys as sticky to the target slot.
    fn mark_slot_settings(
        &self,
        app: &str,
        resource_group: &str,
        slot: Option<&str>,
        keys: &[String],
    ) -> Result<()>;
}
