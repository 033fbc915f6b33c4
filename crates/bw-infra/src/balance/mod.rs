mod static_balances;

pub use static_balances::StaticBalances;
