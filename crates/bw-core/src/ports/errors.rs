use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Why a signature request did not produce a signature.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum SigningError {
    #[error("Will deployment cancelled. Please sign the message to deploy your digital inheritance will.")]
    UserRejected,

    #[error("Failed to deploy will. Please try again.")]
    Other(String),
}

impl SigningError {
    pub fn is_user_rejected(&self) -> bool {
        matches!(self, SigningError::UserRejected)
    }

    /// Underlying wallet detail, for logs only.
    pub fn detail(&self) -> &str {
        match self {
            SigningError::UserRejected => "user rejected",
            SigningError::Other(detail) => detail,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SettlementError {
    #[error("{kind} settlement failed: {reason}")]
    Failed { kind: &'static str, reason: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShareError {
    #[error("share target not supported")]
    Unsupported,

    #[error("share failed: {0}")]
    Failed(String),
}
