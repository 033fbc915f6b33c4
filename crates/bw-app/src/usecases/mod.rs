//! Business logic use cases
//!
//! The wizard orchestrator owns the session; the capability use cases
//! (deploy, share, verify) own one side effect each and know nothing about
//! wizard state.

pub mod wizard;

pub use wizard::WizardOrchestrator;
