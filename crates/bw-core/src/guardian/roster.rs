use serde::{Deserialize, Serialize};

use crate::address::WalletAddress;
use crate::ids::GuardianId;
use crate::validation::ValidationError;

/// A guardian wallet that attests to the testator's passing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Guardian {
    pub id: GuardianId,
    pub address: WalletAddress,
}

/// Ordered list of guardians, unique by address (case-insensitive).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GuardianRoster {
    guardians: Vec<Guardian>,
}

impl GuardianRoster {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate `input` and append it as a new guardian.
    pub fn add(&mut self, input: &str) -> Result<Guardian, ValidationError> {
        self.add_at(input, chrono::Utc::now().timestamp_millis())
    }

    /// Same as [`GuardianRoster::add`] with an explicit id timestamp.
    pub fn add_at(&mut self, input: &str, now_ms: i64) -> Result<Guardian, ValidationError> {
        let address = WalletAddress::parse(input)?;
        if self.contains(&address) {
            return Err(ValidationError::Duplicate);
        }

        let mut id = GuardianId::generate(now_ms);
        while self.guardians.iter().any(|g| g.id == id) {
            id = GuardianId::generate(now_ms);
        }

        let guardian = Guardian { id, address };
        self.guardians.push(guardian.clone());
        Ok(guardian)
    }

    /// Remove the guardian with `id`. Unknown ids are ignored.
    pub fn remove(&mut self, id: &GuardianId) -> Option<Guardian> {
        let index = self.guardians.iter().position(|g| &g.id == id)?;
        Some(self.guardians.remove(index))
    }

    pub fn contains(&self, address: &WalletAddress) -> bool {
        self.guardians.iter().any(|g| g.address.matches(address))
    }

    pub fn count(&self) -> usize {
        self.guardians.len()
    }

    pub fn is_empty(&self) -> bool {
        self.guardians.is_empty()
    }

    /// At least one guardian is required before leaving the guardians step.
    pub fn can_advance(&self) -> bool {
        self.count() >= 1
    }

    pub fn iter(&self) -> impl Iterator<Item = &Guardian> {
        self.guardians.iter()
    }

    pub fn addresses(&self) -> Vec<WalletAddress> {
        self.guardians.iter().map(|g| g.address.clone()).collect()
    }
}
