//! Base Will Application Orchestration Layer
//!
//! This crate contains the wizard use cases and the orchestrator that drives
//! the wizard state machine through its ports.

pub mod usecases;

pub use usecases::wizard::{
    AvailableBalance, DeployOutcome, DeployWill, DepositOutcome, OrchestratorError, ShareDeployment, ShareOutcome,
    VerifyPassing, WizardOrchestrator, WizardView,
};
