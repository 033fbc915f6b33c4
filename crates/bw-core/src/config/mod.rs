//! # Configuration DTOs
//!
//! This module maps TOML onto plain data. It holds no policy and performs no
//! validation: an empty string or a zero delay is a fact read from the file.
//! Turning those facts into domain values (and deciding what to do when they
//! do not parse) happens during bootstrap.

mod app_config;

pub use app_config::{
    AppConfig, BalancesConfig, GuardianEntryConfig, GuardianViewConfig, PricingConfig,
    ShareConfig, TimingConfig, WalletConfig,
};
