//! # App Runtime
//!
//! Holds the wired orchestrator for the lifetime of the terminal session.
//! Commands reach use cases only through this type.

use std::sync::Arc;

use bw_app::WizardOrchestrator;
use bw_infra::SimulatedWallet;

/// The assembled application.
///
/// The simulated wallet is kept concretely as well as behind its port so the
/// `wallet approve|reject` command can change its signing policy.
pub struct AppRuntime {
    orchestrator: Arc<WizardOrchestrator>,
    wallet: Arc<SimulatedWallet>,
}

impl AppRuntime {
    pub fn new(orchestrator: Arc<WizardOrchestrator>, wallet: Arc<SimulatedWallet>) -> Self {
        Self {
            orchestrator,
            wallet,
        }
    }

    pub fn orchestrator(&self) -> &WizardOrchestrator {
        &self.orchestrator
    }

    pub fn wallet(&self) -> &SimulatedWallet {
        &self.wallet
    }
}
