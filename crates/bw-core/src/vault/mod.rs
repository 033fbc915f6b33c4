//! Vault domain module.
//!
//! Token amounts are fixed-point decimals and USD values are whole cents, so
//! accumulation across deposits never drifts.

mod amount;
mod asset;
mod ledger;

pub use amount::{TokenAmount, UsdValue, TOKEN_DECIMALS};
pub use asset::{AssetSymbol, PriceTable};
pub use ledger::{VaultAsset, VaultLedger};
