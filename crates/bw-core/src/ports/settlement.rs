use std::fmt::{Display, Formatter};

use crate::ports::SettlementError;

/// Which simulated chain operation is settling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SettlementKind {
    Deposit,
    Deployment,
    PassingVerification,
}

impl SettlementKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            SettlementKind::Deposit => "deposit",
            SettlementKind::Deployment => "deployment",
            SettlementKind::PassingVerification => "passing_verification",
        }
    }
}

impl Display for SettlementKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Waits for a simulated on-chain operation to settle.
#[async_trait::async_trait]
pub trait SettlementPort: Send + Sync {
    async fn settle(&self, kind: SettlementKind) -> Result<(), SettlementError>;
}
