//! Wizard domain module.
//!
//! This module defines the will-creation wizard state machine types and the
//! session data the wizard accumulates.

mod action;
mod error;
mod event;
mod session;
mod state;
pub mod state_machine;

pub use action::WizardAction;
pub use error::WizardError;
pub use event::WizardEvent;
pub use session::{DepositTicket, WizardSession};
pub use state::{DeployStatus, PassingVerificationStatus, Role, WizardState, WizardStep};
pub use state_machine::{GuardianAccess, WizardGates, WizardStateMachine};
