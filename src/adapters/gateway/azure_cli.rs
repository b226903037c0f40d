use std::ffi::OsStr;
use std::path::PathBuf;
use std::process::{Command, Stdio};
use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

use crate::core::errors::{Result, SlotSyncError};
use crate::core::models::config_entry::ConfigEntry;
use crate::core::traits::gateway::EnvironmentGateway;

/// Gateway that shells out to the Azure CLI (`az`).
///
/// Every call maps to one `az` invocation with `-o json` output where a
/// result is parsed. This adapter is deliberately the only place that
/// knows the platform's command syntax; the pipeline only sees the
/// `EnvironmentGateway` trait.
pub struct AzureCliGateway {
    /// Path to the az binary (defaults to "az").
    az_path: PathBuf,
}

impl AzureCliGateway {
    /// Create a gateway using the default `az` binary.
    pub fn new() -> Self {
        Self {
            az_path: PathBuf::from("az"),
        }
    }

    /// Create a gateway with a custom az binary path.
    pub fn with_path(az_path: PathBuf) -> Self {
        Self { az_path }
    }

    /// Run an az command and return stdout on success, stderr as the
    /// error text otherwise.
    fn run<I, S>(&self, args: I) -> std::result::Result<String, String>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<OsStr>,
    {
        let output = Command::new(&self.az_path)
            .args(args)
            .stdin(Stdio::null())
            .output()
            .map_err(|e| format!("failed to run {}: {e}", self.az_path.display()))?;

        if !output.status.success() {
            return Err(String::from_utf8_lossy(&output.stderr).trim().to_string());
        }

        Ok(String::from_utf8_lossy(&output.stdout).to_string())
    }

    /// Same as `run`, with a spinner while the call is in flight.
    /// Control-plane mutations routinely take tens of seconds.
    fn run_with_spinner<I, S>(&self, message: &str, args: I) -> std::result::Result<String, String>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<OsStr>,
    {
        let spinner = ProgressBar::new_spinner();
        spinner.set_style(
            ProgressStyle::with_template("{spinner} {msg}").unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        spinner.set_message(message.to_string());
        spinner.enable_steady_tick(Duration::from_millis(120));

        let result = self.run(args);
        spinner.finish_and_clear();
        result
    }

    /// Parse `--query [].name -o json` output into a list of names.
    fn parse_names(json: &str) -> std::result::Result<Vec<String>, String> {
        serde_json::from_str(json).map_err(|e| format!("unexpected az output: {e}"))
    }

    fn list_names(&self, operation: &str, args: &[&str]) -> Result<Vec<String>> {
        self.run(args)
            .and_then(|out| Self::parse_names(&out))
            .map_err(|reason| SlotSyncError::DiscoveryFailed {
                operation: operation.to_string(),
                reason,
            })
    }
}

impl Default for AzureCliGateway {
    fn default() -> Self {
        Self::new()
    }
}

impl EnvironmentGateway for AzureCliGateway {
    fn is_authenticated(&self) -> bool {
        self.run(["account", "show", "--only-show-errors"]).is_ok()
    }

    fn login(&self) -> Result<()> {
        // Interactive: az drives the browser/device-code flow itself
        let status = Command::new(&self.az_path)
            .arg("login")
            .status()
            .map_err(|e| SlotSyncError::AuthFailed {
                reason: format!("failed to run {}: {e}", self.az_path.display()),
            })?;

        if status.success() {
            Ok(())
        } else {
            Err(SlotSyncError::AuthFailed {
                reason: "az login did not complete".into(),
            })
        }
    }

    fn list_resource_groups(&self) -> Result<Vec<String>> {
        self.list_names(
            "resource group list",
            &["group", "list", "--query", "[].name", "-o", "json"],
        )
    }

    fn list_apps(&self) -> Result<Vec<String>> {
        self.list_names(
            "app list",
            &["webapp", "list", "--query", "[].name", "-o", "json"],
        )
    }

    fn list_slots(&self, app: &str, resource_group: &str) -> Result<Vec<String>> {
        self.list_names(
            "slot list",
            &[
                "webapp",
                "deployment",
                "slot",
                "list",
                "--name",
                app,
                "--resource-group",
                resource_group,
                "--query",
                "[].name",
                "-o",
                "json",
            ],
        )
    }

    fn create_slot(&self, app: &str, resource_group: &str, slot: &str) -> Result<()> {
        self.run_with_spinner(
            &format!("Creating slot '{slot}'..."),
            [
                "webapp",
                "deployment",
                "slot",
                "create",
                "--name",
                app,
                "--resource-group",
                resource_group,
                "--slot",
                slot,
            ],
        )
        .map(|_| ())
        .map_err(|reason| SlotSyncError::ProvisioningFailed {
            slot: slot.to_string(),
            reason,
        })
    }

    fn write_settings(
        &self,
        app: &str,
        resource_group: &str,
        slot: Option<&str>,
        entries: &[ConfigEntry],
    ) -> Result<()> {
        let mut args: Vec<String> = vec![
            "webapp".into(),
            "config".into(),
            "appsettings".into(),
            "set".into(),
            "--name".into(),
            app.into(),
            "--resource-group".into(),
            resource_group.into(),
        ];
        if let Some(slot) = slot {
            args.push("--slot".into());
            args.push(slot.into());
        }
        args.push("--settings".into());
        for entry in entries {
            args.push(format!("{}={}", entry.key, entry.value));
        }

        self.run_with_spinner("Applying settings...", &args)
            .map(|_| ())
            .map_err(|reason| SlotSyncError::WriteFailed {
                operation: "applying settings".into(),
                reason,
            })
    }

    fn mark_slot_settings(
        &self,
        app: &str,
        resource_group: &str,
        slot: Option<&str>,
        keys: &[String],
    ) -> Result<()> {
        let mut args: Vec<String> = vec![
            "webapp".into(),
            "config".into(),
            "appsettings".into(),
            "set".into(),
            "--name".into(),
            app.into(),
            "--resource-group".into(),
            resource_group.into(),
        ];
        if let Some(slot) = slot {
            args.push("--slot".into());
            args.push(slot.into());
        }
        // Bare names: az marks the already-applied settings sticky
        args.push("--slot-settings".into());
        args.extend(keys.iter().cloned());

        self.run_with_spinner("Marking slot settings...", &args)
            .map(|_| ())
            .map_err(|reason| SlotSyncError::WriteFailed {
                operation: "marking slot settings".into(),
                reason,
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_name_arrays() {
        let names = AzureCliGateway::parse_names(r#"["production-rg", "staging-rg"]"#).unwrap();
        assert_eq!(names, vec!["production-rg", "staging-rg"]);
    }

    #[test]
    fn parses_empty_arrays() {
        assert!(AzureCliGateway::parse_names("[]").unwrap().is_empty());
    }

    #[test]
    fn rejects_non_array_output() {
        assert!(AzureCliGateway::parse_names("login required").is_err());
    }

    #[test]
    fn missing_binary_reads_as_not_authenticated() {
        let gateway = AzureCliGateway::with_path(PathBuf::from("az-definitely-not-installed"));
        assert!(!gateway.is_authenticated());
    }
}
