pub mod config;
pub mod run;
pub mod runtime;
pub mod tracing;
pub mod wiring;

pub use config::{load_config, resolve_config};
pub use run::run_session;
pub use runtime::AppRuntime;
pub use wiring::{build_runtime, resolve_settings, RuntimeSettings};
