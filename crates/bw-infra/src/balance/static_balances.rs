use async_trait::async_trait;

use bw_core::ports::BalancePort;
use bw_core::{AssetSymbol, TokenAmount};

/// Wallet balances fixed at startup.
///
/// Deposits do not draw these down; every deposit is checked against the
/// same available amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StaticBalances {
    eth: TokenAmount,
    usdc: TokenAmount,
}

impl StaticBalances {
    pub fn new(eth: TokenAmount, usdc: TokenAmount) -> Self {
        Self { eth, usdc }
    }
}

#[async_trait]
impl BalancePort for StaticBalances {
    async fn available_balance(&self, symbol: AssetSymbol) -> anyhow::Result<TokenAmount> {
        Ok(match symbol {
            AssetSymbol::Eth => self.eth,
            AssetSymbol::Usdc => self.usdc,
        })
    }
}
