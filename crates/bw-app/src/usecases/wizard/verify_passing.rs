use std::sync::Arc;

use tracing::{info, info_span, warn, Instrument};

use bw_core::ports::{SettlementKind, SettlementPort};
use bw_core::WalletAddress;

/// Use case for a guardian's passing attestation.
///
/// Only waits for the attestation to settle; recording the result on the
/// will is left to the caller, which owns the will record.
pub struct VerifyPassing {
    settlement: Arc<dyn SettlementPort>,
}

impl VerifyPassing {
    pub fn new(settlement: Arc<dyn SettlementPort>) -> Self {
        Self { settlement }
    }

    /// Returns whether the attestation settled.
    pub async fn execute(&self, guardian: &WalletAddress) -> bool {
        let span = info_span!("usecase.verify_passing.execute", guardian = %guardian.short());
        async move {
            match self.settlement.settle(SettlementKind::PassingVerification).await {
                Ok(()) => {
                    info!("passing attestation settled");
                    true
                }
                Err(err) => {
                    warn!(error = %err, "passing attestation failed");
                    false
                }
            }
        }
        .instrument(span)
        .await
    }
}
