//! Port interfaces for the application layer
//!
//! Ports define the contract between the wizard use cases and the
//! infrastructure that simulates a wallet, the chain and the outside world.
//! The core never talks to a wallet, a timer or a share target directly.

mod balance;
mod clock;
mod contract_address;
pub mod errors;
mod settlement;
mod share;
mod wallet;
mod wizard_event;

pub use balance::BalancePort;
pub use clock::*;
pub use contract_address::ContractAddressPort;
pub use errors::{SettlementError, ShareError, SigningError};
pub use settlement::{SettlementKind, SettlementPort};
pub use share::SharePort;
pub use wallet::WalletPort;
pub use wizard_event::WizardEventPort;
