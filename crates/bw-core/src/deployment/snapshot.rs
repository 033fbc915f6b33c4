use serde::{Deserialize, Serialize};

use crate::address::WalletAddress;
use crate::guardian::GuardianRoster;
use crate::vault::{AssetSymbol, TokenAmount, UsdValue, VaultLedger};
use crate::verification::{VerificationMethod, VerificationMethodSet};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnapshotAsset {
    pub symbol: AssetSymbol,
    pub amount: TokenAmount,
    pub value: UsdValue,
}

/// Everything the testator signs when deploying a will.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WillSnapshot {
    pub creator: WalletAddress,
    pub guardians: Vec<WalletAddress>,
    pub assets: Vec<SnapshotAsset>,
    pub verification_methods: Vec<VerificationMethod>,
    /// Unix milliseconds.
    pub timestamp: i64,
    pub total_value: UsdValue,
}

impl WillSnapshot {
    pub fn compose(
        creator: WalletAddress,
        roster: &GuardianRoster,
        ledger: &VaultLedger,
        methods: &VerificationMethodSet,
        timestamp: i64,
    ) -> Self {
        Self {
            creator,
            guardians: roster.addresses(),
            assets: ledger
                .entries()
                .iter()
                .map(|a| SnapshotAsset {
                    symbol: a.symbol,
                    amount: a.balance,
                    value: a.usd_value,
                })
                .collect(),
            verification_methods: methods.to_vec(),
            timestamp,
            total_value: ledger.total(),
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}
