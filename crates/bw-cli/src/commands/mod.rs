//! Terminal commands.
//!
//! Each input line is parsed with clap into a [`ReplCommand`] and executed
//! against the [`AppRuntime`]. Handlers return a one-line message for the
//! user; errors are user-facing strings and never end the session.

pub mod deployment;
pub mod guardian_view;
pub mod guardians;
pub mod render;
pub mod vault;
pub mod wallet;
pub mod wizard;

use clap::{Parser, Subcommand, ValueEnum};

use bw_core::{AssetSymbol, Role, VerificationMethod, WizardStep};

use crate::bootstrap::AppRuntime;

/// One line of interactive input.
#[derive(Debug, Parser)]
#[command(
    name = "basewill",
    no_binary_name = true,
    disable_help_flag = true,
    disable_version_flag = true
)]
pub struct ReplLine {
    #[command(subcommand)]
    pub command: ReplCommand,
}

impl ReplLine {
    pub fn parse_line(line: &str) -> Result<Self, clap::Error> {
        Self::try_parse_from(line.split_whitespace())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum ReplCommand {
    /// Pick who you are
    Role { role: RoleArg },
    /// Go to the next step
    Continue,
    /// Go to the previous step
    Back,
    /// Jump from review back to a step
    Edit { step: StepArg },
    /// Toggle an optional verification method
    Toggle { method: MethodArg },
    /// Edit the guardian roster
    Guardian {
        #[command(subcommand)]
        action: GuardianAction,
    },
    /// Deposit into the vault
    Deposit {
        asset: AssetArg,
        /// Decimal amount, or `max` for the whole available balance
        amount: String,
    },
    /// Sign and deploy the will
    Deploy,
    /// Share the deployed will
    Share,
    /// Attest the testator's passing as a guardian
    Verify,
    /// Approve or reject future signature requests
    Wallet { policy: WalletPolicy },
    /// Show the current state
    Status {
        /// Print the raw view as JSON
        #[arg(long)]
        json: bool,
    },
    /// End the session
    #[command(alias = "exit")]
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum GuardianAction {
    Add { address: String },
    Remove { id: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum RoleArg {
    Creator,
    Guardian,
}

impl From<RoleArg> for Role {
    fn from(value: RoleArg) -> Self {
        match value {
            RoleArg::Creator => Role::Creator,
            RoleArg::Guardian => Role::Guardian,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StepArg {
    Verification,
    Guardians,
    Vault,
}

impl From<StepArg> for WizardStep {
    fn from(value: StepArg) -> Self {
        match value {
            StepArg::Verification => WizardStep::Verification,
            StepArg::Guardians => WizardStep::Guardians,
            StepArg::Vault => WizardStep::Vault,
        }
    }
}

/// `guardian` is always selected, so it cannot be toggled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum MethodArg {
    Government,
    Heartbeat,
}

impl From<MethodArg> for VerificationMethod {
    fn from(value: MethodArg) -> Self {
        match value {
            MethodArg::Government => VerificationMethod::Government,
            MethodArg::Heartbeat => VerificationMethod::Heartbeat,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum AssetArg {
    Eth,
    Usdc,
}

impl From<AssetArg> for AssetSymbol {
    fn from(value: AssetArg) -> Self {
        match value {
            AssetArg::Eth => AssetSymbol::Eth,
            AssetArg::Usdc => AssetSymbol::Usdc,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum WalletPolicy {
    Approve,
    Reject,
}

/// Whether the session continues after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandFlow {
    Continue,
    Quit,
}

/// What a command reports back to the loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandReply {
    pub message: Result<String, String>,
    pub flow: CommandFlow,
}

impl CommandReply {
    fn from_result(message: Result<String, String>) -> Self {
        Self {
            message,
            flow: CommandFlow::Continue,
        }
    }
}

/// Run one parsed command.
pub async fn execute(runtime: &AppRuntime, command: ReplCommand) -> CommandReply {
    let result = match command {
        ReplCommand::Role { role } => wizard::select_role(runtime, role.into()).await,
        ReplCommand::Continue => wizard::continue_step(runtime).await,
        ReplCommand::Back => wizard::back(runtime).await,
        ReplCommand::Edit { step } => wizard::edit(runtime, step.into()).await,
        ReplCommand::Toggle { method } => wizard::toggle_method(runtime, method.into()).await,
        ReplCommand::Guardian {
            action: GuardianAction::Add { address },
        } => guardians::add_guardian(runtime, &address).await,
        ReplCommand::Guardian {
            action: GuardianAction::Remove { id },
        } => guardians::remove_guardian(runtime, &id).await,
        ReplCommand::Deposit { asset, amount } => {
            vault::deposit(runtime, asset.into(), &amount).await
        }
        ReplCommand::Deploy => deployment::deploy(runtime).await,
        ReplCommand::Share => deployment::share(runtime).await,
        ReplCommand::Verify => guardian_view::verify_passing(runtime).await,
        ReplCommand::Wallet { policy } => Ok(wallet::set_policy(runtime, policy)),
        ReplCommand::Status { json: false } => Ok(String::new()),
        ReplCommand::Status { json: true } => wizard::status_json(runtime).await,
        ReplCommand::Quit => {
            return CommandReply {
                message: Ok("Goodbye.".to_string()),
                flow: CommandFlow::Quit,
            }
        }
    };
    CommandReply::from_result(result)
}
