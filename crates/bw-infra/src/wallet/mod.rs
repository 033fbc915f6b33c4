mod simulated_wallet;

pub use simulated_wallet::SimulatedWallet;
