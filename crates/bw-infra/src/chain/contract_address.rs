use rand::Rng;

use bw_core::ports::ContractAddressPort;

/// Mints random 20-byte contract addresses.
pub struct RandomContractAddress;

impl ContractAddressPort for RandomContractAddress {
    fn next_hex_fragment(&self) -> String {
        let mut bytes = [0u8; 20];
        rand::rng().fill(&mut bytes);
        hex::encode(bytes)
    }
}
