use async_trait::async_trait;
use tokio::time::{sleep, Duration};
use tracing::debug;

use bw_core::ports::{SettlementError, SettlementKind, SettlementPort};

/// How long each simulated operation takes to settle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SettlementDelays {
    pub deposit: Duration,
    pub deployment: Duration,
    pub passing_verification: Duration,
}

impl SettlementDelays {
    pub fn from_millis(deposit_ms: u64, deployment_ms: u64, verification_ms: u64) -> Self {
        Self {
            deposit: Duration::from_millis(deposit_ms),
            deployment: Duration::from_millis(deployment_ms),
            passing_verification: Duration::from_millis(verification_ms),
        }
    }

    fn for_kind(&self, kind: SettlementKind) -> Duration {
        match kind {
            SettlementKind::Deposit => self.deposit,
            SettlementKind::Deployment => self.deployment,
            SettlementKind::PassingVerification => self.passing_verification,
        }
    }
}

/// Settles every operation after a fixed tokio sleep.
pub struct TokioSettlement {
    delays: SettlementDelays,
}

impl TokioSettlement {
    pub fn new(delays: SettlementDelays) -> Self {
        Self { delays }
    }
}

#[async_trait]
impl SettlementPort for TokioSettlement {
    async fn settle(&self, kind: SettlementKind) -> Result<(), SettlementError> {
        let delay = self.delays.for_kind(kind);
        debug!(kind = %kind, delay_ms = delay.as_millis() as u64, "settlement started");
        sleep(delay).await;
        debug!(kind = %kind, "settlement finished");
        Ok(())
    }
}
