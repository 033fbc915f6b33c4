//! Vault deposit command.

use tracing::{info_span, Instrument};

use bw_app::DepositOutcome;
use bw_core::AssetSymbol;

use crate::bootstrap::AppRuntime;

/// Deposit and wait for settlement.
pub async fn deposit(
    runtime: &AppRuntime,
    symbol: AssetSymbol,
    amount: &str,
) -> Result<String, String> {
    let span = info_span!("command.vault.deposit", symbol = %symbol);
    async {
        let outcome = runtime
            .orchestrator()
            .deposit(symbol, amount)
            .await
            .map_err(|e| e.to_string())?;
        Ok(match outcome {
            DepositOutcome::Deposited(asset) => format!(
                "Deposited into vault: {} {} (${})",
                asset.balance, asset.symbol, asset.usd_value
            ),
            DepositOutcome::Discarded => "Deposit discarded".to_string(),
        })
    }
    .instrument(span)
    .await
}
