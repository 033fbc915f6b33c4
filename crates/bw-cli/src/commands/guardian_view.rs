//! Guardian-side commands.

use tracing::{info_span, Instrument};

use bw_core::{PassingVerificationStatus, WizardState};

use crate::bootstrap::AppRuntime;

pub async fn verify_passing(runtime: &AppRuntime) -> Result<String, String> {
    let span = info_span!("command.guardian_view.verify_passing");
    async {
        let state = runtime
            .orchestrator()
            .verify_passing()
            .await
            .map_err(|e| e.to_string())?;
        match state {
            WizardState::GuardianRoleView {
                verification: PassingVerificationStatus::Verified,
            } => Ok("Passing verified. Thank you for confirming.".to_string()),
            WizardState::GuardianRoleView {
                verification: PassingVerificationStatus::Failed,
            } => Err("Verification failed. Please try again.".to_string()),
            _ => Ok("Verification session ended".to_string()),
        }
    }
    .instrument(span)
    .await
}
