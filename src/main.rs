use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tokio::io::BufReader;
use tracing::{error, info};

use bw_cli::bootstrap::tracing::init_tracing_subscriber;
use bw_cli::bootstrap::{build_runtime, resolve_config, resolve_settings};
use bw_cli::run_session;

/// Create a digital inheritance will, or verify one as a guardian.
#[derive(Debug, Parser)]
#[command(name = "basewill", version, about)]
struct Args {
    /// Config file; defaults to the platform config directory, then the demo setup
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Show log output in the terminal
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    if let Err(err) = init_tracing_subscriber(args.verbose) {
        eprintln!("Failed to initialize tracing: {err}");
    }
    info!(version = env!("CARGO_PKG_VERSION"), "basewill starting");

    let config = resolve_config(args.config).map_err(|err| {
        error!(error = %err, "failed to load configuration");
        err
    })?;
    let settings = resolve_settings(&config).context("failed to resolve runtime settings")?;
    let runtime = build_runtime(settings);

    let stdin = BufReader::new(tokio::io::stdin());
    let mut stdout = std::io::stdout();
    run_session(&runtime, stdin, &mut stdout).await
}
