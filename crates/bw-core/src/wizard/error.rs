use thiserror::Error;

use crate::validation::ValidationError;
use crate::wizard::WizardStep;

/// Wizard errors: refused transitions and gated mutations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WizardError {
    #[error("Add at least one trusted guardian to continue")]
    GuardianRequired,

    #[error("Deposit assets into the vault to continue")]
    VaultEmpty,

    #[error("Will deployment is already in progress")]
    DeployInProgress,

    #[error("Will has been deployed; the configuration can no longer change")]
    DeploymentSealed,

    #[error("A deposit is already in progress")]
    DepositInProgress,

    #[error("This action is only available on the {expected} step")]
    StepMismatch { expected: WizardStep },

    #[error("'{event}' is not allowed from {state}")]
    InvalidTransition {
        state: &'static str,
        event: &'static str,
    },

    #[error("Please connect your wallet to access the guardian panel")]
    WalletNotConnected,

    #[error("Connected wallet is not a guardian for this will")]
    NotAGuardian,

    #[error("Passing has already been verified")]
    AlreadyVerified,

    #[error("Verification is already in progress")]
    VerificationInProgress,

    #[error(transparent)]
    Validation(#[from] ValidationError),
}
