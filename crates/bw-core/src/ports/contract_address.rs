/// Source of hex fragments for mock contract addresses.
pub trait ContractAddressPort: Send + Sync {
    /// A fresh hex fragment. The caller normalizes it to a 42-character
    /// `0x` address.
    fn next_hex_fragment(&self) -> String;
}
