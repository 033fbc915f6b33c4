//! # bw-core
//!
//! Core domain models and business logic for Base Will.
//!
//! This crate contains pure business logic without any infrastructure dependencies.

// Public module exports
pub mod address;
pub mod config;
pub mod deployment;
pub mod guardian;
pub mod ids;
pub mod ports;
pub mod validation;
pub mod vault;
pub mod verification;
pub mod wizard;

// Re-export commonly used types at the crate root
pub use address::WalletAddress;
pub use config::AppConfig;
pub use deployment::{ContractAddress, DeploymentRecord, Signature, WillSnapshot};
pub use guardian::{Guardian, GuardianRoster, WillGuardian, WillRecord};
pub use ids::GuardianId;
pub use validation::ValidationError;
pub use vault::{AssetSymbol, PriceTable, TokenAmount, UsdValue, VaultAsset, VaultLedger};
pub use verification::{VerificationMethod, VerificationMethodSet};
pub use wizard::{
    DeployStatus, PassingVerificationStatus, Role, WizardAction, WizardError, WizardEvent,
    WizardGates, WizardSession, WizardState, WizardStateMachine, WizardStep,
};
