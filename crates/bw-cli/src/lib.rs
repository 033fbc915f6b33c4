//! # bw-cli
//!
//! Terminal integration layer for Base Will.
//!
//! ## Modules
//!
//! - **adapters**: terminal-side port implementations (share target, state events)
//! - **bootstrap**: configuration loading, tracing, dependency wiring and the session loop
//! - **commands**: line parser and command handlers for the interactive session

pub mod adapters;
pub mod bootstrap;
pub mod commands;

pub use bootstrap::{run_session, AppRuntime};
