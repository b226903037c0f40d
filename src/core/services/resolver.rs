use crate::core::errors::{Result, SlotSyncError};
use crate::core::models::target::{PRODUCTION, StoredSelection, Target, validate_slot_name};
use crate::core::traits::gateway::EnvironmentGateway;
use crate::core::traits::operator::Operator;

/// Menu entry offered when the operator wants a slot that is not live yet.
/// Only shown when discovery succeeded; on degraded discovery the choice
/// is restricted to what we know exists.
pub const NEW_SLOT_CHOICE: &str = "<create a new slot>";

/// The outcome of target resolution.
///
/// `needs_provisioning` is set when the chosen environment has no
/// corresponding live slot. Resolution never creates infrastructure
/// itself; the orchestrator runs the provisioning fallback first.
#[derive(Debug, Clone, PartialEq)]
pub struct Resolution {
    pub target: Target,
    pub needs_provisioning: bool,
}

/// Decides which app / resource group / environment triple a run
/// operates on, from the stored selection and live discovery.
pub struct EnvironmentResolver<'a> {
    gateway: &'a dyn EnvironmentGateway,
    operator: &'a dyn Operator,
}

impl<'a> EnvironmentResolver<'a> {
    pub fn new(gateway: &'a dyn EnvironmentGateway, operator: &'a dyn Operator) -> Self {
        Self { gateway, operator }
    }

    /// Resolve the target for this run.
    ///
    /// A stored selection, when accepted, is returned verbatim and no
    /// discovery call is made. Otherwise the operator picks a resource
    /// group, an app and an environment from the gateway's lists.
    ///
    /// Environment discovery failure is non-fatal: the choice degrades
    /// to the single production default and the run continues.
    pub fn resolve(&self, stored: Option<&StoredSelection>) -> Result<Resolution> {
        if let Some(stored) = stored {
            let prompt = format!(
                "Use the last target {} (last used {})?",
                stored.target,
                stored.last_used.format("%Y-%m-%d %H:%M UTC")
            );
            if self.operator.confirm(&prompt, true)? {
                return Ok(Resolution {
                    target: stored.target.clone(),
                    needs_provisioning: false,
                });
            }
        }

        let groups = self.gateway.list_resource_groups()?;
        if groups.is_empty() {
            return Err(SlotSyncError::InvalidConfig {
                detail: "no resource groups are visible to the signed-in account".into(),
            });
        }
        let resource_group = self.operator.choose_one("Resource group", &groups, 0)?;

        let apps = self.gateway.list_apps()?;
        if apps.is_empty() {
            return Err(SlotSyncError::InvalidConfig {
                detail: "no apps are visible to the signed-in account".into(),
            });
        }
        let app = self.operator.choose_one("App", &apps, 0)?;

        let (live, degraded) = self.discover_environments(&app, &resource_group);

        let mut options = live.clone();
        if !degraded {
            options.push(NEW_SLOT_CHOICE.to_string());
        }
        let default = options.iter().position(|o| o == PRODUCTION).unwrap_or(0);
        let chosen = self.operator.choose_one("Environment", &options, default)?;

        let environment = if chosen == NEW_SLOT_CHOICE {
            let name = self.operator.input("New slot name")?.trim().to_string();
            validate_slot_name(&name)?;
            name
        } else {
            chosen
        };

        let needs_provisioning =
            environment != PRODUCTION && !live.iter().any(|e| e == &environment);

        Ok(Resolution {
            target: Target::new(app, resource_group, environment),
            needs_provisioning,
        })
    }

    /// Live environment list for the app, always including production.
    /// Returns `(environments, degraded)`; `degraded` is true when the
    /// discovery call failed and the list is the implicit default.
    fn discover_environments(&self, app: &str, resource_group: &str) -> (Vec<String>, bool) {
        let (mut live, degraded) = match self.gateway.list_slots(app, resource_group) {
            Ok(slots) => (slots, false),
            Err(_) => (Vec::new(), true),
        };
        if !live.iter().any(|e| e == PRODUCTION) {
            live.insert(0, PRODUCTION.to_string());
        }
        (live, degraded)
    }
}
