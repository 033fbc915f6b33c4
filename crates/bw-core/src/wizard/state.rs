use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::deployment::DeploymentRecord;
use crate::ports::SigningError;

/// Who is using the app.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Testator building a will.
    Creator,
    /// Guardian attesting to a testator's passing.
    Guardian,
}

/// The linear steps of the creator branch, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WizardStep {
    Verification,
    Guardians,
    Vault,
    Review,
}

impl WizardStep {
    pub fn as_str(&self) -> &'static str {
        match self {
            WizardStep::Verification => "verification",
            WizardStep::Guardians => "guardians",
            WizardStep::Vault => "vault",
            WizardStep::Review => "review",
        }
    }
}

impl Display for WizardStep {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Deploy progress while on the review step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DeployStatus {
    Ready,
    Deploying,
    Failed { error: SigningError },
}

/// Guardian-side verification progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PassingVerificationStatus {
    Pending,
    Verifying,
    Verified,
    Failed,
}

/// Wizard flow state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum WizardState {
    /// Role picker.
    RoleUnselected,
    /// Death-verification method selection.
    Verification,
    /// Guardian roster editing.
    Guardians,
    /// Vault deposits.
    Vault,
    /// Final review and deployment.
    Review { deploy: DeployStatus },
    /// Will deployed. Terminal for the session.
    Deployed { record: DeploymentRecord },
    /// Guardian branch, outside the creator sequence.
    GuardianRoleView {
        verification: PassingVerificationStatus,
    },
}

impl WizardState {
    /// The creator step this state belongs to, if any.
    pub fn step(&self) -> Option<WizardStep> {
        match self {
            WizardState::Verification => Some(WizardStep::Verification),
            WizardState::Guardians => Some(WizardStep::Guardians),
            WizardState::Vault => Some(WizardStep::Vault),
            WizardState::Review { .. } => Some(WizardStep::Review),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            WizardState::RoleUnselected => "role_unselected",
            WizardState::Verification => "verification",
            WizardState::Guardians => "guardians",
            WizardState::Vault => "vault",
            WizardState::Review { .. } => "review",
            WizardState::Deployed { .. } => "deployed",
            WizardState::GuardianRoleView { .. } => "guardian_role_view",
        }
    }

    pub fn is_deploying(&self) -> bool {
        matches!(
            self,
            WizardState::Review {
                deploy: DeployStatus::Deploying
            }
        )
    }
}
