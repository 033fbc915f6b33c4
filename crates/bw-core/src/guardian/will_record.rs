use serde::{Deserialize, Serialize};

use crate::address::WalletAddress;

/// A guardian as listed on a deployed will.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WillGuardian {
    pub address: WalletAddress,
    pub name: String,
    pub verified: bool,
}

/// A deployed will, viewed by one of its guardians.
///
/// The record is an immutable snapshot: [`WillRecord::with_verified`]
/// returns an updated copy instead of changing shared data in place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WillRecord {
    pub testator_address: WalletAddress,
    pub testator_name: String,
    pub guardians: Vec<WillGuardian>,
    pub vault_value: String,
    pub created_date: String,
}

impl WillRecord {
    pub fn guardian(&self, address: &WalletAddress) -> Option<&WillGuardian> {
        self.guardians.iter().find(|g| g.address.matches(address))
    }

    pub fn is_guardian(&self, address: &WalletAddress) -> bool {
        self.guardian(address).is_some()
    }

    /// Returns a copy with `address` marked as verified, or `None` when the
    /// address is not one of this will's guardians.
    pub fn with_verified(&self, address: &WalletAddress) -> Option<WillRecord> {
        let index = self
            .guardians
            .iter()
            .position(|g| g.address.matches(address))?;
        let mut next = self.clone();
        next.guardians[index].verified = true;
        Some(next)
    }

    pub fn verified_count(&self) -> usize {
        self.guardians.iter().filter(|g| g.verified).count()
    }
}
