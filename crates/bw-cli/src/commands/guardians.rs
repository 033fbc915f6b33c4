//! Guardian roster commands.

use tracing::{info_span, Instrument};

use bw_core::GuardianId;

use crate::bootstrap::AppRuntime;

pub async fn add_guardian(runtime: &AppRuntime, address: &str) -> Result<String, String> {
    let span = info_span!("command.guardians.add");
    async {
        let guardian = runtime
            .orchestrator()
            .add_guardian(address)
            .await
            .map_err(|e| e.to_string())?;
        Ok(format!("Added guardian {}", guardian.address.short()))
    }
    .instrument(span)
    .await
}

pub async fn remove_guardian(runtime: &AppRuntime, id: &str) -> Result<String, String> {
    let span = info_span!("command.guardians.remove", guardian_id = id);
    async {
        let removed = runtime
            .orchestrator()
            .remove_guardian(&GuardianId::from(id))
            .await
            .map_err(|e| e.to_string())?;
        Ok(match removed {
            Some(guardian) => format!("Removed guardian {}", guardian.address.short()),
            None => format!("No guardian with id {id}"),
        })
    }
    .instrument(span)
    .await
}
