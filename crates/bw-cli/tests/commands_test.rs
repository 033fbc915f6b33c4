//! Terminal session tests.
//!
//! Sessions run against the real adapters with zero settlement delays.

use bw_cli::bootstrap::{build_runtime, resolve_settings};
use bw_cli::commands::{self, CommandFlow, ReplCommand, WalletPolicy};
use bw_cli::{run_session, AppRuntime};
use bw_core::config::AppConfig;
use bw_core::WizardState;

fn runtime() -> AppRuntime {
    build_runtime(resolve_settings(&AppConfig::with_demo_defaults()).unwrap())
}

fn runtime_without_delays() -> AppRuntime {
    let mut config = AppConfig::with_demo_defaults();
    config.timing.deposit_ms = Some(0);
    config.timing.deployment_ms = Some(0);
    config.timing.verification_ms = Some(0);
    build_runtime(resolve_settings(&config).unwrap())
}

async fn run_script(runtime: &AppRuntime, script: &str) -> String {
    let mut out = Vec::new();
    run_session(runtime, script.as_bytes(), &mut out)
        .await
        .unwrap();
    String::from_utf8(out).unwrap()
}

#[tokio::test]
async fn creator_session_deploys_and_shares() {
    let runtime = runtime_without_delays();
    let script = "role creator\n\
                  toggle heartbeat\n\
                  continue\n\
                  guardian add 0x742d35Cc6432C8Cf6a58130ac2C03c8ad5E8b0b0\n\
                  continue\n\
                  deposit eth 1.5\n\
                  continue\n\
                  deploy\n\
                  share\n\
                  quit\n";

    let out = run_script(&runtime, script).await;

    assert!(out.contains("Activity heartbeat selected"), "{out}");
    assert!(out.contains("Added guardian 0x742d...b0b0"), "{out}");
    assert!(out.contains("Deposited into vault: 1.5 ETH ($4800.00)"), "{out}");
    assert!(out.contains("Will deployed at 0x"), "{out}");
    assert!(out.contains("https://base.org/compose?text=Just+secured"), "{out}");
    assert!(out.contains("Goodbye."), "{out}");
}

#[tokio::test]
async fn vault_step_shows_ceilings_and_accepts_max() {
    let runtime = runtime_without_delays();
    let script = "role creator\n\
                  continue\n\
                  guardian add 0x742d35Cc6432C8Cf6a58130ac2C03c8ad5E8b0b0\n\
                  continue\n\
                  deposit eth 3\n\
                  deposit eth max\n\
                  quit\n";

    let out = run_script(&runtime, script).await;

    assert!(
        out.contains("Available to deposit (`deposit <asset> max` for all):"),
        "{out}"
    );
    assert!(out.contains("$6400.00"), "{out}");
    assert!(out.contains("error: Insufficient ETH balance"), "{out}");
    assert!(out.contains("Deposited into vault: 2 ETH ($6400.00)"), "{out}");
}

#[tokio::test]
async fn command_errors_do_not_end_the_session() {
    let runtime = runtime_without_delays();
    let script = "role creator\n\
                  continue\n\
                  continue\n\
                  fly away\n\
                  deposit eth 1\n\
                  status\n";

    let out = run_script(&runtime, script).await;

    assert!(
        out.contains("error: Add at least one trusted guardian to continue"),
        "{out}"
    );
    assert!(
        out.contains("error: This action is only available on the vault step"),
        "{out}"
    );
    assert!(out.contains("Step 2/4: Guardians"), "{out}");
}

#[tokio::test]
async fn end_of_input_resets_the_session() {
    let runtime = runtime_without_delays();

    run_script(&runtime, "role creator\n").await;

    assert_eq!(
        runtime.orchestrator().get_state().await,
        WizardState::RoleUnselected
    );
}

#[tokio::test]
async fn rejected_signature_can_be_retried() {
    let runtime = runtime_without_delays();
    let script = "role creator\n\
                  continue\n\
                  guardian add 0x742d35Cc6432C8Cf6a58130ac2C03c8ad5E8b0b0\n\
                  continue\n\
                  deposit usdc 100\n\
                  continue\n\
                  wallet reject\n\
                  deploy\n\
                  wallet approve\n\
                  deploy\n\
                  quit\n";

    let out = run_script(&runtime, script).await;

    assert!(out.contains("error: Will deployment cancelled."), "{out}");
    assert!(out.contains("`deploy` to retry."), "{out}");
    assert!(out.contains("Will deployed at 0x"), "{out}");
}

#[tokio::test]
async fn demo_wallet_verifies_as_guardian() {
    let runtime = runtime_without_delays();

    let out = run_script(&runtime, "role guardian\nverify\nverify\nquit\n").await;

    assert!(out.contains("Will of John Doe"), "{out}");
    assert!(out.contains("Passing verified."), "{out}");
    assert!(out.contains("error: Passing has already been verified"), "{out}");
}

#[tokio::test]
async fn execute_reports_quit_and_wallet_policy() {
    let runtime = runtime();

    let reply = commands::execute(
        &runtime,
        ReplCommand::Wallet {
            policy: WalletPolicy::Reject,
        },
    )
    .await;
    assert_eq!(reply.flow, CommandFlow::Continue);
    assert!(!runtime.wallet().approves());

    let reply = commands::execute(&runtime, ReplCommand::Quit).await;
    assert_eq!(reply.flow, CommandFlow::Quit);
}

#[tokio::test]
async fn share_before_deploy_is_refused() {
    let runtime = runtime();

    let reply = commands::execute(&runtime, ReplCommand::Share).await;

    assert_eq!(
        reply.message,
        Err("Deploy your will before sharing it".to_string())
    );
}
