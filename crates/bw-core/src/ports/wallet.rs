use crate::address::WalletAddress;
use crate::deployment::Signature;
use crate::ports::SigningError;

/// The user's connected wallet.
#[async_trait::async_trait]
pub trait WalletPort: Send + Sync {
    /// Address of the connected account, `None` when disconnected.
    fn connected_address(&self) -> Option<WalletAddress>;

    /// Ask the user to sign `message`.
    ///
    /// Error semantics:
    /// - UserRejected: the user declined the request
    /// - Other       : any other wallet failure
    async fn sign_message(&self, message: &str) -> Result<Signature, SigningError>;
}
