use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::vault::UsdValue;

/// Assets accepted by the vault.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum AssetSymbol {
    #[serde(rename = "ETH")]
    Eth,
    #[serde(rename = "USDC")]
    Usdc,
}

impl AssetSymbol {
    pub const ALL: [AssetSymbol; 2] = [AssetSymbol::Eth, AssetSymbol::Usdc];

    pub fn ticker(&self) -> &'static str {
        match self {
            AssetSymbol::Eth => "ETH",
            AssetSymbol::Usdc => "USDC",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            AssetSymbol::Eth => "Ethereum",
            AssetSymbol::Usdc => "USD Coin",
        }
    }
}

impl Display for AssetSymbol {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.ticker())
    }
}

impl FromStr for AssetSymbol {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "ETH" => Ok(AssetSymbol::Eth),
            "USDC" => Ok(AssetSymbol::Usdc),
            other => Err(format!("unsupported asset: {other}")),
        }
    }
}

/// Fixed USD prices per whole token.
///
/// This is a stand-in for a price feed: ETH defaults to 3200 and USDC is
/// valued 1:1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceTable {
    pub eth: UsdValue,
    pub usdc: UsdValue,
}

impl PriceTable {
    pub fn price(&self, symbol: AssetSymbol) -> UsdValue {
        match symbol {
            AssetSymbol::Eth => self.eth,
            AssetSymbol::Usdc => self.usdc,
        }
    }
}

impl Default for PriceTable {
    fn default() -> Self {
        Self {
            eth: UsdValue::from_dollars(3200),
            usdc: UsdValue::from_dollars(1),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn symbol_parsing_is_case_insensitive() {
        assert_eq!("eth".parse::<AssetSymbol>(), Ok(AssetSymbol::Eth));
        assert_eq!(" Usdc ".parse::<AssetSymbol>(), Ok(AssetSymbol::Usdc));
        assert!("btc".parse::<AssetSymbol>().is_err());
    }

    #[test]
    fn default_prices_match_the_demo_feed() {
        let prices = PriceTable::default();
        assert_eq!(prices.price(AssetSymbol::Eth).to_string(), "3200.00");
        assert_eq!(prices.price(AssetSymbol::Usdc).to_string(), "1.00");
    }
}
