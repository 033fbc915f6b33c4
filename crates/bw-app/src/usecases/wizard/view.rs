use serde::Serialize;

use bw_core::{
    Guardian, VaultAsset, VerificationMethod, WalletAddress, WillRecord, WizardState,
};
use bw_core::{AssetSymbol, TokenAmount, UsdValue, WizardSession};

/// Wallet balance available for deposit, valued at the configured price.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AvailableBalance {
    pub symbol: AssetSymbol,
    pub amount: TokenAmount,
    pub usd_value: UsdValue,
}

/// Read-only picture of a wizard session, for rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WizardView {
    pub state: WizardState,
    pub connected_wallet: Option<WalletAddress>,
    pub guardians: Vec<Guardian>,
    pub assets: Vec<VaultAsset>,
    pub total_value: UsdValue,
    /// Deposit ceilings per asset; empty when the balances could not be read.
    pub available: Vec<AvailableBalance>,
    pub verification_methods: Vec<VerificationMethod>,
    pub deposit_in_flight: bool,
    pub will_record: WillRecord,
}

impl WizardView {
    pub fn capture(
        session: &WizardSession,
        connected_wallet: Option<WalletAddress>,
        available: Vec<AvailableBalance>,
    ) -> Self {
        Self {
            state: session.state().clone(),
            connected_wallet,
            guardians: session.roster().iter().cloned().collect(),
            assets: session.ledger().entries().to_vec(),
            total_value: session.ledger().total(),
            available,
            verification_methods: session.methods().to_vec(),
            deposit_in_flight: session.deposit_in_flight(),
            will_record: session.will_record().clone(),
        }
    }
}
