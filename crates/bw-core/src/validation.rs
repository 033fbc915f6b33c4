//! Field-level validation errors.
//!
//! These are recovered locally and rendered next to the offending input;
//! none of them is fatal to the wizard session.

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum ValidationError {
    #[error("Please enter a wallet address")]
    EmptyInput,

    #[error("Please enter a valid wallet address (0x...)")]
    InvalidFormat,

    #[error("This guardian has already been added")]
    Duplicate,

    #[error("Deposit amount must be greater than zero")]
    NonPositiveAmount,

    #[error("Insufficient {symbol} balance")]
    InsufficientBalance { symbol: String },

    #[error("Please enter a valid amount")]
    InvalidAmount,

    #[error("Amount is too large")]
    AmountOutOfRange,
}
