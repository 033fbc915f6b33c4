use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use tracing::{debug, info};

use bw_core::ports::{SigningError, WalletPort};
use bw_core::{Signature, WalletAddress};

/// Local stand-in for a browser wallet.
///
/// Signatures are a keyed blake3 digest of the message, so the same account
/// signing the same message always yields the same signature. Whether
/// requests are approved can be flipped at runtime.
pub struct SimulatedWallet {
    address: Option<WalletAddress>,
    approve: AtomicBool,
}

impl SimulatedWallet {
    pub fn new(address: Option<WalletAddress>, approve: bool) -> Self {
        Self {
            address,
            approve: AtomicBool::new(approve),
        }
    }

    pub fn set_approve(&self, approve: bool) {
        self.approve.store(approve, Ordering::SeqCst);
        info!(approve, "wallet signing policy changed");
    }

    pub fn approves(&self) -> bool {
        self.approve.load(Ordering::SeqCst)
    }

    fn digest(address: &WalletAddress, message: &str) -> String {
        let key = blake3::hash(address.as_str().to_ascii_lowercase().as_bytes());
        let mac = blake3::keyed_hash(key.as_bytes(), message.as_bytes());
        format!("0x{}", hex::encode(mac.as_bytes()))
    }
}

#[async_trait]
impl WalletPort for SimulatedWallet {
    fn connected_address(&self) -> Option<WalletAddress> {
        self.address.clone()
    }

    async fn sign_message(&self, message: &str) -> Result<Signature, SigningError> {
        let address = self
            .address
            .as_ref()
            .ok_or_else(|| SigningError::Other("no wallet connected".to_string()))?;
        if !self.approves() {
            debug!("signature request rejected");
            return Err(SigningError::UserRejected);
        }
        debug!(bytes = message.len(), "signature request approved");
        Ok(Signature::new(Self::digest(address, message)))
    }
}
