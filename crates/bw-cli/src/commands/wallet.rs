use tracing::info_span;

use crate::bootstrap::AppRuntime;
use crate::commands::WalletPolicy;

/// Change how the simulated wallet answers signature requests.
pub fn set_policy(runtime: &AppRuntime, policy: WalletPolicy) -> String {
    let _span = info_span!("command.wallet.set_policy", policy = ?policy).entered();
    let approve = policy == WalletPolicy::Approve;
    runtime.wallet().set_approve(approve);
    if approve {
        "Wallet will approve signature requests".to_string()
    } else {
        "Wallet will reject signature requests".to_string()
    }
}
