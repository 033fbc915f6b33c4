mod contract_address;

pub use contract_address::RandomContractAddress;
