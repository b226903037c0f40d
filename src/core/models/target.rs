use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::core::errors::{Result, SlotSyncError};

/// Name of the implicit base environment that always exists remotely.
pub const PRODUCTION: &str = "production";

/// Where configuration will be written: one app in one resource group,
/// targeting either production or a named secondary slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Target {
    pub app: String,
    pub resource_group: String,
    pub environment: String,
}

impl Target {
    pub fn new(app: impl Into<String>, resource_group: impl Into<String>, environment: impl Into<String>) -> Self {
        Self {
            app: app.into(),
            resource_group: resource_group.into(),
            environment: environment.into(),
        }
    }

    /// True when this target is the production baseline rather than a slot.
    pub fn is_production(&self) -> bool {
        self.environment == PRODUCTION
    }

    /// The slot qualifier for remote calls. `None` iff the target is
    /// production; otherwise the environment name doubles as the slot name.
    pub fn slot_name(&self) -> Option<&str> {
        if self.is_production() {
            None
        } else {
            Some(&self.environment)
        }
    }

    /// The local file this target reads its entries from: `.env` for
    /// production, `.env.<environment>` otherwise. The orchestrator relies
    /// on this convention; it is part of the contract, not a detail.
    pub fn env_file_name(&self) -> String {
        match self.slot_name() {
            None => ".env".to_string(),
            Some(slot) => format!(".env.{slot}"),
        }
    }
}

impl std::fmt::Display for Target {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} / {} ({})",
            self.resource_group, self.app, self.environment
        )
    }
}

/// The last successfully used target, persisted between runs.
///
/// Written only after an upload completes; never mutated mid-run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredSelection {
    pub target: Target,
    pub last_used: chrono::DateTime<chrono::Utc>,
}

impl StoredSelection {
    pub fn now(target: Target) -> Self {
        Self {
            target,
            last_used: chrono::Utc::now(),
        }
    }
}

static SLOT_NAME_RE: OnceLock<Regex> = OnceLock::new();

/// Validate an operator-entered slot name against the platform's rules:
/// letters, digits and hyphens, 2 to 59 characters, no leading or
/// trailing hyphen.
pub fn validate_slot_name(name: &str) -> Result<()> {
    let re = SLOT_NAME_RE.get_or_init(|| {
        Regex::new(r"^[A-Za-z0-9][A-Za-z0-9-]{0,57}[A-Za-z0-9]$").unwrap()
    });
    if re.is_match(name) {
        Ok(())
    } else {
        Err(SlotSyncError::InvalidSlotName {
            name: name.to_string(),
        })
    }
}
