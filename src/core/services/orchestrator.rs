use std::path::PathBuf;

use crate::core::errors::Result;
use crate::core::models::config_entry::{ConfigEntry, mask_value};
use crate::core::models::target::{StoredSelection, Target};
use crate::core::services::classifier::SlotSettingClassifier;
use crate::core::services::resolver::EnvironmentResolver;
use crate::core::traits::gateway::EnvironmentGateway;
use crate::core::traits::operator::Operator;
use crate::core::traits::preferences::PreferenceStore;
use crate::core::traits::source::ConfigSource;

/// How a run ended when it did not fail.
///
/// Declining a prompt is a normal outcome, not an error; the process
/// exits zero either way.
#[derive(Debug, Clone, PartialEq)]
pub enum RunOutcome {
    Completed { target: Target },
    Cancelled { reason: String },
}

/// Drives one full push: session check, resolution, provisioning
/// fallback, local load, classification, confirmation, the two remote
/// writes, and finally persisting the selection.
///
/// Strictly sequential; every prompt and every remote call is awaited
/// to completion before the next step. Nothing is retried anywhere:
/// remote configuration writes are not proven safe to retry blindly.
pub struct UploadOrchestrator<'a> {
    gateway: &'a dyn EnvironmentGateway,
    operator: &'a dyn Operator,
    source: &'a dyn ConfigSource,
    preferences: &'a dyn PreferenceStore,
    default_slot_settings: &'a [String],
}

impl<'a> UploadOrchestrator<'a> {
    pub fn new(
        gateway: &'a dyn EnvironmentGateway,
        operator: &'a dyn Operator,
        source: &'a dyn ConfigSource,
        preferences: &'a dyn PreferenceStore,
        default_slot_settings: &'a [String],
    ) -> Self {
        Self {
            gateway,
            operator,
            source,
            preferences,
            default_slot_settings,
        }
    }

    /// Run the pipeline once.
    ///
    /// The preference store is only written after both remote writes
    /// succeed. If applying the settings succeeds and marking the
    /// sticky keys fails, the settings are NOT rolled back; the error
    /// carries the cause and says so.
    pub fn run(&self) -> Result<RunOutcome> {
        self.ensure_session()?;

        let stored = self.preferences.read();
        let resolution =
            EnvironmentResolver::new(self.gateway, self.operator).resolve(stored.as_ref())?;
        let target = resolution.target;

        if resolution.needs_provisioning && !self.ensure_slot_exists(&target)? {
            return Ok(RunOutcome::Cancelled {
                reason: format!("slot '{}' was not created", target.environment),
            });
        }

        let path = PathBuf::from(target.env_file_name());
        let entries = self.source.load(&path)?;

        let available_keys: Vec<String> = entries.iter().map(|e| e.key.clone()).collect();
        let slot_settings = SlotSettingClassifier::new(self.operator, self.default_slot_settings)
            .classify(&target, &available_keys)?;

        if !self.confirm_upload(&target, &entries, &slot_settings)? {
            return Ok(RunOutcome::Cancelled {
                reason: "upload declined".into(),
            });
        }

        self.gateway.write_settings(
            &target.app,
            &target.resource_group,
            target.slot_name(),
            &entries,
        )?;
        if !slot_settings.is_empty() {
            self.gateway.mark_slot_settings(
                &target.app,
                &target.resource_group,
                target.slot_name(),
                &slot_settings,
            )?;
        }

        self.preferences.write(&StoredSelection::now(target.clone()))?;

        Ok(RunOutcome::Completed { target })
    }

    /// Verify the gateway has a session, signing in interactively if
    /// not. Failure here is fatal; nothing downstream can succeed.
    fn ensure_session(&self) -> Result<()> {
        if self.gateway.is_authenticated() {
            return Ok(());
        }
        self.operator.show("No active session; signing in.");
        self.gateway.login()
    }

    /// Provisioning fallback for a chosen environment with no live
    /// slot. Returns false when the operator declines (a clean
    /// cancellation, not an error). Creation failures propagate and
    /// are never retried automatically.
    fn ensure_slot_exists(&self, target: &Target) -> Result<bool> {
        let Some(slot) = target.slot_name() else {
            return Ok(true);
        };

        let prompt = format!(
            "Slot '{slot}' does not exist on '{}'. Create it now?",
            target.app
        );
        if !self.operator.confirm(&prompt, false)? {
            return Ok(false);
        }

        self.gateway
            .create_slot(&target.app, &target.resource_group, slot)?;
        self.operator.show(&format!("Created slot '{slot}'."));
        Ok(true)
    }

    /// Show the masked entry list and require an explicit accept
    /// before anything is written. Default answer: decline.
    fn confirm_upload(
        &self,
        target: &Target,
        entries: &[ConfigEntry],
        slot_settings: &[String],
    ) -> Result<bool> {
        let mut preview = format!("Settings to push to '{}':\n", target.environment);
        for entry in entries {
            let sticky = if slot_settings.contains(&entry.key) {
                "  (slot setting)"
            } else {
                ""
            };
            preview.push_str(&format!(
                "  {} = {}{}\n",
                entry.key,
                mask_value(&entry.value),
                sticky
            ));
        }
        self.operator.show(&preview);

        self.operator.confirm(
            &format!(
                "Push {} setting(s) to '{}'?",
                entries.len(),
                target.environment
            ),
            false,
        )
    }
}
