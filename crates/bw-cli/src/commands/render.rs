//! Plain-text rendering of the wizard view.

use std::fmt::{self, Display, Formatter};

use bw_app::WizardView;
use bw_core::{DeployStatus, PassingVerificationStatus, VerificationMethod, WizardState};

const RULE: &str = "----------------------------------------";

pub fn welcome() -> String {
    [
        "Base Will: secure your digital legacy on Base.",
        "Type a command, or `quit` to leave. Commands:",
        "  role creator|guardian, continue, back, edit guardians|vault|verification,",
        "  toggle government|heartbeat, guardian add <address>, guardian remove <id>,",
        "  deposit eth|usdc <amount|max>, deploy, share, verify, wallet approve|reject,",
        "  status [--json]",
    ]
    .join("\n")
}

/// Short heading for a state.
pub fn state_title(state: &WizardState) -> &'static str {
    match state {
        WizardState::RoleUnselected => "Choose your role",
        WizardState::Verification => "Step 1/4: Death verification",
        WizardState::Guardians => "Step 2/4: Guardians",
        WizardState::Vault => "Step 3/4: Vault",
        WizardState::Review { .. } => "Step 4/4: Review & deploy",
        WizardState::Deployed { .. } => "Will deployed",
        WizardState::GuardianRoleView { .. } => "Guardian panel",
    }
}

/// Render everything the current step needs.
pub fn view(view: &WizardView) -> String {
    ViewText(view).to_string()
}

struct ViewText<'a>(&'a WizardView);

impl Display for ViewText<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let view = self.0;
        writeln!(f, "{RULE}")?;
        writeln!(f, "{}", state_title(&view.state))?;
        match &view.connected_wallet {
            Some(address) => writeln!(f, "Wallet: {}", address.short())?,
            None => writeln!(f, "Wallet: not connected")?,
        }

        match &view.state {
            WizardState::RoleUnselected => writeln!(
                f,
                "Creating a will? `role creator`. Named as a guardian? `role guardian`."
            )?,
            WizardState::Verification => methods(f, view)?,
            WizardState::Guardians => roster(f, view, true)?,
            WizardState::Vault => {
                available(f, view)?;
                ledger(f, view)?;
            }
            WizardState::Review { deploy } => {
                methods(f, view)?;
                roster(f, view, false)?;
                ledger(f, view)?;
                match deploy {
                    DeployStatus::Ready => writeln!(f, "Ready to deploy. `deploy` to sign.")?,
                    DeployStatus::Deploying => writeln!(f, "Deploying...")?,
                    DeployStatus::Failed { error } => {
                        writeln!(f, "Last attempt failed: {error}. `deploy` to retry.")?
                    }
                }
            }
            WizardState::Deployed { record } => {
                writeln!(f, "Contract: {}", record.contract_address)?;
                writeln!(f, "Guardians: {}", record.snapshot.guardians.len())?;
                writeln!(f, "Vault value: ${}", record.snapshot.total_value)?;
                writeln!(f, "`share` to tell people about it.")?;
            }
            WizardState::GuardianRoleView { verification } => will_record(f, view, *verification)?,
        }

        write!(f, "{RULE}")
    }
}

fn methods(f: &mut Formatter<'_>, view: &WizardView) -> fmt::Result {
    writeln!(f, "Verification methods:")?;
    for method in VerificationMethod::ALL {
        let mark = if view.verification_methods.contains(&method) {
            "x"
        } else {
            " "
        };
        writeln!(f, "  [{mark}] {}", method.label())?;
    }
    Ok(())
}

fn roster(f: &mut Formatter<'_>, view: &WizardView, with_ids: bool) -> fmt::Result {
    if view.guardians.is_empty() {
        return writeln!(f, "Guardians: none yet");
    }
    writeln!(f, "Guardians ({}):", view.guardians.len())?;
    for (index, guardian) in view.guardians.iter().enumerate() {
        write!(f, "  {}. {}", index + 1, guardian.address.short())?;
        if with_ids {
            write!(f, "  id {}", guardian.id)?;
        }
        writeln!(f)?;
    }
    Ok(())
}

/// Deposit ceilings, so the limit is known before a deposit is refused.
fn available(f: &mut Formatter<'_>, view: &WizardView) -> fmt::Result {
    if view.available.is_empty() {
        return Ok(());
    }
    writeln!(f, "Available to deposit (`deposit <asset> max` for all):")?;
    for balance in &view.available {
        writeln!(
            f,
            "  {:<5} {:>12}  ${}",
            balance.symbol.ticker(),
            balance.amount.to_string(),
            balance.usd_value
        )?;
    }
    Ok(())
}

fn ledger(f: &mut Formatter<'_>, view: &WizardView) -> fmt::Result {
    if view.assets.is_empty() {
        writeln!(f, "Vault: empty")?;
    } else {
        writeln!(f, "Vault:")?;
        for asset in &view.assets {
            writeln!(
                f,
                "  {:<5} {:>12}  ${}",
                asset.symbol.ticker(),
                asset.balance.to_string(),
                asset.usd_value
            )?;
        }
    }
    writeln!(f, "Total value: ${}", view.total_value)?;
    if view.deposit_in_flight {
        writeln!(f, "Deposit in progress...")?;
    }
    Ok(())
}

fn will_record(
    f: &mut Formatter<'_>,
    view: &WizardView,
    status: PassingVerificationStatus,
) -> fmt::Result {
    let record = &view.will_record;
    writeln!(
        f,
        "Will of {} ({})",
        record.testator_name,
        record.testator_address.short()
    )?;
    writeln!(f, "Vault value: {}", record.vault_value)?;
    writeln!(f, "Created: {}", record.created_date)?;
    writeln!(
        f,
        "Verification progress: {}/{} guardians",
        record.verified_count(),
        record.guardians.len()
    )?;
    for guardian in &record.guardians {
        let mark = if guardian.verified { "verified" } else { "pending" };
        writeln!(f, "  {} {} [{mark}]", guardian.name, guardian.address.short())?;
    }
    match status {
        PassingVerificationStatus::Pending => writeln!(f, "`verify` to attest the passing."),
        PassingVerificationStatus::Verifying => writeln!(f, "Verifying..."),
        PassingVerificationStatus::Verified => writeln!(f, "You have verified the passing."),
        PassingVerificationStatus::Failed => writeln!(f, "Verification failed. `verify` to retry."),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bw_app::AvailableBalance;
    use bw_core::{
        AssetSymbol, Guardian, GuardianId, TokenAmount, UsdValue, VaultAsset, WalletAddress,
        WillGuardian, WillRecord,
    };

    fn address(s: &str) -> WalletAddress {
        WalletAddress::parse(s).unwrap()
    }

    fn base_view(state: WizardState) -> WizardView {
        WizardView {
            state,
            connected_wallet: None,
            guardians: Vec::new(),
            assets: Vec::new(),
            total_value: UsdValue::ZERO,
            available: Vec::new(),
            verification_methods: vec![VerificationMethod::Guardian],
            deposit_in_flight: false,
            will_record: WillRecord {
                testator_address: address("0x742d35Cc6432C8Cf6a58130ac2C03c8ad5E8b0b0"),
                testator_name: "John Doe".to_string(),
                guardians: vec![
                    WillGuardian {
                        address: address("0x69Dc7349edAF67e2b104f815DAa9c2C25402EeC8"),
                        name: "Primary Guardian".to_string(),
                        verified: true,
                    },
                    WillGuardian {
                        address: address("0x8bD14205255920F9c39020Ba206041907331afc3"),
                        name: "Secondary Guardian".to_string(),
                        verified: false,
                    },
                ],
                vault_value: "$15,750.00".to_string(),
                created_date: "2024-03-15".to_string(),
            },
        }
    }

    #[test]
    fn guardians_step_lists_ids_for_removal() {
        let mut view = base_view(WizardState::Guardians);
        view.guardians.push(Guardian {
            id: GuardianId::from("1700000000000-abc123xyz"),
            address: address("0x742d35Cc6432C8Cf6a58130ac2C03c8ad5E8b0b0"),
        });

        let text = super::view(&view);

        assert!(text.contains("Step 2/4: Guardians"));
        assert!(text.contains("0x742d...b0b0"));
        assert!(text.contains("id 1700000000000-abc123xyz"));
        assert!(text.contains("Wallet: not connected"));
    }

    #[test]
    fn vault_step_shows_balances_and_total() {
        let mut view = base_view(WizardState::Vault);
        view.assets.push(VaultAsset {
            symbol: AssetSymbol::Eth,
            name: "Ethereum".to_string(),
            balance: TokenAmount::parse("1.5").unwrap(),
            usd_value: UsdValue::from_dollars(4800),
        });
        view.total_value = UsdValue::from_dollars(4800);
        view.deposit_in_flight = true;

        let text = super::view(&view);

        assert!(text.contains("ETH"));
        assert!(text.contains("1.5"));
        assert!(text.contains("Total value: $4800.00"));
        assert!(text.contains("Deposit in progress..."));
    }

    #[test]
    fn vault_step_shows_deposit_ceilings() {
        let mut view = base_view(WizardState::Vault);
        view.available = vec![
            AvailableBalance {
                symbol: AssetSymbol::Eth,
                amount: TokenAmount::parse("2.0").unwrap(),
                usd_value: UsdValue::from_dollars(6400),
            },
            AvailableBalance {
                symbol: AssetSymbol::Usdc,
                amount: TokenAmount::parse("1250.50").unwrap(),
                usd_value: UsdValue::from_cents(125050),
            },
        ];

        let text = super::view(&view);

        assert!(text.contains("Available to deposit (`deposit <asset> max` for all):"));
        assert!(text.contains("$6400.00"));
        assert!(text.contains("1250.5"));
        assert!(text.contains("$1250.50"));
    }

    #[test]
    fn review_step_hides_deposit_ceilings() {
        let mut view = base_view(WizardState::Review {
            deploy: DeployStatus::Ready,
        });
        view.available = vec![AvailableBalance {
            symbol: AssetSymbol::Eth,
            amount: TokenAmount::parse("2.0").unwrap(),
            usd_value: UsdValue::from_dollars(6400),
        }];

        let text = super::view(&view);

        assert!(!text.contains("Available to deposit"));
        assert!(text.contains("Ready to deploy."));
    }

    #[test]
    fn guardian_panel_shows_progress() {
        let view = base_view(WizardState::GuardianRoleView {
            verification: PassingVerificationStatus::Pending,
        });

        let text = super::view(&view);

        assert!(text.contains("Will of John Doe (0x742d...b0b0)"));
        assert!(text.contains("Verification progress: 1/2 guardians"));
        assert!(text.contains("Primary Guardian 0x69Dc...EeC8 [verified]"));
    }

    #[test]
    fn verification_step_marks_selected_methods() {
        let text = super::view(&base_view(WizardState::Verification));
        assert!(text.contains("[x] Guardian verification (required)"));
        assert!(text.contains("[ ] Activity heartbeat"));
    }
}
