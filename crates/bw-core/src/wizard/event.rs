use serde::{Deserialize, Serialize};

use crate::deployment::DeploymentRecord;
use crate::ports::SigningError;
use crate::wizard::Role;

/// Events that drive the wizard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum WizardEvent {
    // Role picker
    SelectRole { role: Role },

    // Navigation
    Continue,
    Back,
    EditGuardians,
    EditVault,
    EditVerification,

    // Deployment
    Deploy,
    DeploySucceeded { record: DeploymentRecord },
    DeployFailed { error: SigningError },

    // Guardian branch
    StartPassingVerification,
    PassingVerificationSettled { verified: bool },
}

impl WizardEvent {
    pub fn name(&self) -> &'static str {
        match self {
            WizardEvent::SelectRole { .. } => "select_role",
            WizardEvent::Continue => "continue",
            WizardEvent::Back => "back",
            WizardEvent::EditGuardians => "edit_guardians",
            WizardEvent::EditVault => "edit_vault",
            WizardEvent::EditVerification => "edit_verification",
            WizardEvent::Deploy => "deploy",
            WizardEvent::DeploySucceeded { .. } => "deploy_succeeded",
            WizardEvent::DeployFailed { .. } => "deploy_failed",
            WizardEvent::StartPassingVerification => "start_passing_verification",
            WizardEvent::PassingVerificationSettled { .. } => "passing_verification_settled",
        }
    }
}
