use async_trait::async_trait;

use bw_core::ports::WizardEventPort;
use bw_core::WizardState;

/// Logs wizard state changes using `tracing`.
///
/// The terminal re-renders after every command, so nothing needs pushing.
pub struct LoggingWizardEventSink;

#[async_trait]
impl WizardEventPort for LoggingWizardEventSink {
    async fn emit_state_changed(&self, state: &WizardState) {
        tracing::info!(state = state.name(), step = ?state.step(), "wizard state changed");
    }
}
