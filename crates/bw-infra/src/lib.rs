//! Infrastructure adapters for Base Will.
//!
//! Everything here simulates the chain side of the product: a local wallet
//! that signs with a hash, timers standing in for block confirmations, and
//! configured balances.

pub mod balance;
pub mod chain;
pub mod settlement;
pub mod time;
pub mod wallet;

pub use balance::StaticBalances;
pub use chain::RandomContractAddress;
pub use settlement::{SettlementDelays, TokioSettlement};
pub use time::SystemClock;
pub use wallet::SimulatedWallet;
