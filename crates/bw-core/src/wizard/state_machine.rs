//! Wizard state machine.
//!
//! Defines a pure state transition function for the will-creation flow.
//! Forward edges are gated on [`WizardGates`]; backward and edit edges never
//! touch accumulated data.

use tracing::warn;

use crate::wizard::{
    DeployStatus, PassingVerificationStatus, Role, WizardAction, WizardError, WizardEvent,
    WizardState,
};

/// Whether the connected wallet may act in the guardian branch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardianAccess {
    NotConnected,
    NotAGuardian,
    Authorized,
}

/// Facts the transition function needs from the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WizardGates {
    pub guardian_count: usize,
    pub asset_count: usize,
    pub guardian_access: GuardianAccess,
}

impl WizardGates {
    fn require_guardians(&self) -> Result<(), WizardError> {
        if self.guardian_count >= 1 {
            Ok(())
        } else {
            Err(WizardError::GuardianRequired)
        }
    }

    fn require_assets(&self) -> Result<(), WizardError> {
        if self.asset_count >= 1 {
            Ok(())
        } else {
            Err(WizardError::VaultEmpty)
        }
    }
}

/// Pure wizard state machine.
pub struct WizardStateMachine;

impl WizardStateMachine {
    pub fn transition(
        state: WizardState,
        event: WizardEvent,
        gates: &WizardGates,
    ) -> Result<(WizardState, Vec<WizardAction>), WizardError> {
        use WizardEvent as E;
        use WizardState as S;

        let next = match (state, event) {
            (S::RoleUnselected, E::SelectRole { role: Role::Creator }) => S::Verification,
            (S::RoleUnselected, E::SelectRole { role: Role::Guardian }) => S::GuardianRoleView {
                verification: PassingVerificationStatus::Pending,
            },

            (S::Verification, E::Continue) => S::Guardians,
            (S::Verification, E::Back) => S::RoleUnselected,

            (S::Guardians, E::Continue) => {
                gates.require_guardians()?;
                S::Vault
            }
            (S::Guardians, E::Back) => S::Verification,

            (S::Vault, E::Continue) => {
                gates.require_assets()?;
                S::Review {
                    deploy: DeployStatus::Ready,
                }
            }
            (S::Vault, E::Back) => S::Guardians,

            (
                S::Review {
                    deploy: DeployStatus::Deploying,
                },
                E::DeploySucceeded { record },
            ) => S::Deployed { record },
            (
                S::Review {
                    deploy: DeployStatus::Deploying,
                },
                E::DeployFailed { error },
            ) => S::Review {
                deploy: DeployStatus::Failed { error },
            },
            (
                S::Review {
                    deploy: DeployStatus::Deploying,
                },
                _,
            ) => return Err(WizardError::DeployInProgress),

            (S::Review { .. }, E::Back) | (S::Review { .. }, E::EditVault) => S::Vault,
            (S::Review { .. }, E::EditGuardians) => S::Guardians,
            (S::Review { .. }, E::EditVerification) => S::Verification,
            (S::Review { .. }, E::Deploy) => {
                gates.require_guardians()?;
                gates.require_assets()?;
                return Ok((
                    S::Review {
                        deploy: DeployStatus::Deploying,
                    },
                    vec![WizardAction::SignAndDeploy],
                ));
            }

            (S::Deployed { .. }, _) => return Err(WizardError::DeploymentSealed),

            (
                S::GuardianRoleView {
                    verification: PassingVerificationStatus::Verifying,
                },
                E::PassingVerificationSettled { verified },
            ) => S::GuardianRoleView {
                verification: if verified {
                    PassingVerificationStatus::Verified
                } else {
                    PassingVerificationStatus::Failed
                },
            },
            (
                S::GuardianRoleView {
                    verification: PassingVerificationStatus::Verifying,
                },
                _,
            ) => return Err(WizardError::VerificationInProgress),
            (S::GuardianRoleView { .. }, E::Back) => S::RoleUnselected,
            (
                S::GuardianRoleView {
                    verification: PassingVerificationStatus::Verified,
                },
                E::StartPassingVerification,
            ) => return Err(WizardError::AlreadyVerified),
            (S::GuardianRoleView { .. }, E::StartPassingVerification) => {
                match gates.guardian_access {
                    GuardianAccess::NotConnected => return Err(WizardError::WalletNotConnected),
                    GuardianAccess::NotAGuardian => return Err(WizardError::NotAGuardian),
                    GuardianAccess::Authorized => {}
                }
                return Ok((
                    S::GuardianRoleView {
                        verification: PassingVerificationStatus::Verifying,
                    },
                    vec![WizardAction::SettlePassingVerification],
                ));
            }

            (state, event) => {
                warn!(state = state.name(), event = event.name(), "invalid wizard transition");
                return Err(WizardError::InvalidTransition {
                    state: state.name(),
                    event: event.name(),
                })
            }
        };

        Ok((next, Vec::new()))
    }
}
