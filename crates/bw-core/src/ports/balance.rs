use crate::vault::{AssetSymbol, TokenAmount};

/// Wallet balances available for vault deposits.
#[async_trait::async_trait]
pub trait BalancePort: Send + Sync {
    async fn available_balance(&self, symbol: AssetSymbol) -> anyhow::Result<TokenAmount>;
}
