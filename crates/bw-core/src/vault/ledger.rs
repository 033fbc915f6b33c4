use serde::{Deserialize, Serialize};

use crate::validation::ValidationError;
use crate::vault::{AssetSymbol, PriceTable, TokenAmount, UsdValue};

/// One vault position; at most one per symbol.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VaultAsset {
    pub symbol: AssetSymbol,
    pub name: String,
    pub balance: TokenAmount,
    pub usd_value: UsdValue,
}

/// Deposited assets, in first-deposit order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct VaultLedger {
    entries: Vec<VaultAsset>,
}

impl VaultLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Check a deposit against the available balance without touching the
    /// ledger.
    pub fn check_deposit(
        &self,
        symbol: AssetSymbol,
        amount: TokenAmount,
        available: TokenAmount,
    ) -> Result<(), ValidationError> {
        if amount.is_zero() {
            return Err(ValidationError::NonPositiveAmount);
        }
        if amount > available {
            return Err(ValidationError::InsufficientBalance {
                symbol: symbol.to_string(),
            });
        }
        Ok(())
    }

    /// Add `amount` of `symbol`, creating the entry on first deposit, and
    /// recompute its USD value from `prices`.
    pub fn deposit(
        &mut self,
        symbol: AssetSymbol,
        amount: TokenAmount,
        available: TokenAmount,
        prices: &PriceTable,
    ) -> Result<VaultAsset, ValidationError> {
        self.check_deposit(symbol, amount, available)?;

        let price = prices.price(symbol);
        let current = self.balance_of(symbol);
        let balance = current
            .checked_add(amount)
            .ok_or(ValidationError::AmountOutOfRange)?;
        let usd_value = balance
            .value_at(price)
            .ok_or(ValidationError::AmountOutOfRange)?;

        let asset = match self.entries.iter_mut().find(|a| a.symbol == symbol) {
            Some(existing) => {
                existing.balance = balance;
                existing.usd_value = usd_value;
                existing.clone()
            }
            None => {
                let asset = VaultAsset {
                    symbol,
                    name: symbol.name().to_string(),
                    balance,
                    usd_value,
                };
                self.entries.push(asset.clone());
                asset
            }
        };
        Ok(asset)
    }

    pub fn balance_of(&self, symbol: AssetSymbol) -> TokenAmount {
        self.entries
            .iter()
            .find(|a| a.symbol == symbol)
            .map(|a| a.balance)
            .unwrap_or(TokenAmount::ZERO)
    }

    /// Sum of every entry's USD value.
    pub fn total(&self) -> UsdValue {
        self.entries.iter().map(|a| &a.usd_value).sum()
    }

    pub fn entries(&self) -> &[VaultAsset] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The vault step needs at least one deposit before review.
    pub fn can_advance(&self) -> bool {
        !self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn amount(s: &str) -> TokenAmount {
        TokenAmount::parse(s).unwrap()
    }

    #[test]
    fn deposits_of_same_symbol_accumulate_into_one_entry() {
        let mut ledger = VaultLedger::new();
        let prices = PriceTable::default();

        ledger
            .deposit(AssetSymbol::Eth, amount("0.5"), amount("2.0"), &prices)
            .unwrap();
        let asset = ledger
            .deposit(AssetSymbol::Eth, amount("1.0"), amount("2.0"), &prices)
            .unwrap();

        assert_eq!(ledger.len(), 1);
        assert_eq!(asset.balance.to_string(), "1.5");
        assert_eq!(asset.usd_value.to_string(), "4800.00");
        assert_eq!(asset.name, "Ethereum");
    }

    #[test]
    fn distinct_symbols_get_separate_entries_and_total_sums_them() {
        let mut ledger = VaultLedger::new();
        let prices = PriceTable::default();

        ledger
            .deposit(AssetSymbol::Eth, amount("1"), amount("2"), &prices)
            .unwrap();
        ledger
            .deposit(AssetSymbol::Usdc, amount("250.25"), amount("1250.50"), &prices)
            .unwrap();

        assert_eq!(ledger.len(), 2);
        assert_eq!(ledger.total().to_string(), "3450.25");
        let sum: UsdValue = ledger.entries().iter().map(|a| &a.usd_value).sum();
        assert_eq!(ledger.total(), sum);
    }

    #[test]
    fn zero_amount_is_rejected() {
        let mut ledger = VaultLedger::new();
        let err = ledger
            .deposit(AssetSymbol::Eth, TokenAmount::ZERO, amount("2"), &PriceTable::default())
            .unwrap_err();
        assert_eq!(err, ValidationError::NonPositiveAmount);
        assert!(!ledger.can_advance());
    }

    #[test]
    fn exceeding_available_balance_leaves_ledger_unchanged() {
        let mut ledger = VaultLedger::new();
        let prices = PriceTable::default();
        ledger
            .deposit(AssetSymbol::Eth, amount("1"), amount("2"), &prices)
            .unwrap();
        let before = ledger.clone();

        let err = ledger
            .deposit(AssetSymbol::Eth, amount("2.5"), amount("2"), &prices)
            .unwrap_err();

        assert_eq!(
            err,
            ValidationError::InsufficientBalance {
                symbol: "ETH".to_string()
            }
        );
        assert_eq!(ledger, before);
    }

    #[test]
    fn usdc_is_valued_one_to_one() {
        let mut ledger = VaultLedger::new();
        let asset = ledger
            .deposit(AssetSymbol::Usdc, amount("100.5"), amount("1250.50"), &PriceTable::default())
            .unwrap();
        assert_eq!(asset.usd_value.to_string(), "100.50");
    }
}
