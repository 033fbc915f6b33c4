//! Wizard navigation commands.

use tracing::{info_span, Instrument};

use bw_core::{Role, VerificationMethod, WizardState, WizardStep};

use crate::bootstrap::AppRuntime;
use crate::commands::render;

fn entered(state: &WizardState) -> String {
    format!("Now at: {}", render::state_title(state))
}

pub async fn select_role(runtime: &AppRuntime, role: Role) -> Result<String, String> {
    let span = info_span!("command.wizard.select_role", role = ?role);
    async {
        let state = runtime
            .orchestrator()
            .select_role(role)
            .await
            .map_err(|e| e.to_string())?;
        Ok(entered(&state))
    }
    .instrument(span)
    .await
}

pub async fn continue_step(runtime: &AppRuntime) -> Result<String, String> {
    let span = info_span!("command.wizard.continue");
    async {
        let state = runtime
            .orchestrator()
            .continue_step()
            .await
            .map_err(|e| e.to_string())?;
        Ok(entered(&state))
    }
    .instrument(span)
    .await
}

pub async fn back(runtime: &AppRuntime) -> Result<String, String> {
    let span = info_span!("command.wizard.back");
    async {
        let state = runtime
            .orchestrator()
            .back()
            .await
            .map_err(|e| e.to_string())?;
        Ok(entered(&state))
    }
    .instrument(span)
    .await
}

pub async fn edit(runtime: &AppRuntime, step: WizardStep) -> Result<String, String> {
    let span = info_span!("command.wizard.edit", step = %step);
    async {
        let state = runtime
            .orchestrator()
            .edit(step)
            .await
            .map_err(|e| e.to_string())?;
        Ok(entered(&state))
    }
    .instrument(span)
    .await
}

pub async fn toggle_method(
    runtime: &AppRuntime,
    method: VerificationMethod,
) -> Result<String, String> {
    let span = info_span!("command.wizard.toggle_method", method = %method);
    async {
        let selected = runtime
            .orchestrator()
            .toggle_method(method)
            .await
            .map_err(|e| e.to_string())?;
        Ok(format!(
            "{} {}",
            method.label(),
            if selected { "selected" } else { "deselected" }
        ))
    }
    .instrument(span)
    .await
}

/// The full view as pretty JSON.
pub async fn status_json(runtime: &AppRuntime) -> Result<String, String> {
    let view = runtime.orchestrator().snapshot().await;
    serde_json::to_string_pretty(&view).map_err(|e| e.to_string())
}
