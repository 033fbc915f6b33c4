//! Wizard use cases.
//!
//! This module exposes the wizard orchestrator and the use cases it drives.

mod context;
mod deploy_will;
pub mod orchestrator;
mod share_deployment;
mod verify_passing;
mod view;

pub use context::WizardContext;
pub use deploy_will::DeployWill;
pub use orchestrator::{DeployOutcome, DepositOutcome, OrchestratorError, WizardOrchestrator};
pub use share_deployment::{ShareDeployment, ShareOutcome};
pub use verify_passing::VerifyPassing;
pub use view::{AvailableBalance, WizardView};
