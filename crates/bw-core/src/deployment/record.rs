use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::deployment::WillSnapshot;
use crate::validation::ValidationError;

const CONTRACT_ADDRESS_LEN: usize = 42;

/// Opaque signature returned by the wallet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Signature(String);

impl Signature {
    pub fn new(value: String) -> Self {
        Self(value)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for Signature {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Mock contract address: `0x` + 40 lowercase hex characters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ContractAddress(String);

impl ContractAddress {
    /// Build an address from a random hex fragment.
    ///
    /// Non-hex characters are dropped; the result is cut to 42 characters
    /// and right-padded with `0` when the fragment is short.
    pub fn from_hex_fragment(fragment: &str) -> Self {
        let hex: String = fragment
            .chars()
            .filter(|c| c.is_ascii_hexdigit())
            .map(|c| c.to_ascii_lowercase())
            .collect();
        let mut address = format!("0x{hex}");
        address.truncate(CONTRACT_ADDRESS_LEN);
        while address.len() < CONTRACT_ADDRESS_LEN {
            address.push('0');
        }
        Self(address)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// First eight characters, used in notifications.
    pub fn prefix(&self) -> &str {
        self.0.get(..8).unwrap_or(&self.0)
    }
}

impl TryFrom<String> for ContractAddress {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        let well_formed = value.len() == CONTRACT_ADDRESS_LEN
            && value.starts_with("0x")
            && value[2..]
                .bytes()
                .all(|b| b.is_ascii_digit() || (b'a'..=b'f').contains(&b));
        if !well_formed {
            return Err(ValidationError::InvalidFormat);
        }
        Ok(Self(value))
    }
}

impl From<ContractAddress> for String {
    fn from(value: ContractAddress) -> Self {
        value.0
    }
}

impl Display for ContractAddress {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Result of a successful deployment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeploymentRecord {
    pub contract_address: ContractAddress,
    pub signature: Signature,
    pub snapshot: WillSnapshot,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_fragment_is_zero_padded() {
        let address = ContractAddress::from_hex_fragment("abc123");
        assert_eq!(address.as_str().len(), 42);
        assert_eq!(
            address.as_str(),
            "0xabc1230000000000000000000000000000000000"
        );
    }

    #[test]
    fn long_fragment_is_truncated() {
        let address = ContractAddress::from_hex_fragment(&"F".repeat(64));
        assert_eq!(address.as_str(), format!("0x{}", "f".repeat(40)));
    }

    #[test]
    fn non_hex_characters_are_dropped() {
        let address = ContractAddress::from_hex_fragment("0.9z1");
        assert_eq!(address.as_str(), format!("0x091{}", "0".repeat(37)));
        assert_eq!(address.prefix(), "0x091000");
    }

    #[test]
    fn deserialization_accepts_only_well_formed_addresses() {
        let minted = ContractAddress::from_hex_fragment("abc123");
        let json = serde_json::to_string(&minted).unwrap();
        assert_eq!(serde_json::from_str::<ContractAddress>(&json).unwrap(), minted);

        assert!(serde_json::from_str::<ContractAddress>(r#""0x""#).is_err());
        assert!(serde_json::from_str::<ContractAddress>(&format!(r#""0x{}""#, "g".repeat(40))).is_err());
        assert!(serde_json::from_str::<ContractAddress>(&format!(r#""0x{}""#, "A".repeat(40))).is_err());
    }
}
