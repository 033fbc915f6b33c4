//! # Dependency Injection
//!
//! Turns the raw [`AppConfig`] facts into domain values and assembles the
//! orchestrator from infra adapters. This is the only place that depends on
//! bw-app and bw-infra together.
//!
//! Invalid values are logged and replaced with the demo setup; a bad config
//! never stops the session from starting.

use std::fmt::Display;
use std::str::FromStr;
use std::sync::Arc;

use tracing::{debug, warn};

use bw_app::{DeployWill, ShareDeployment, VerifyPassing, WizardOrchestrator};
use bw_core::config::{AppConfig, GuardianViewConfig};
use bw_core::ports::{
    BalancePort, ClockPort, ContractAddressPort, SettlementPort, SharePort, WalletPort,
    WizardEventPort,
};
use bw_core::{PriceTable, TokenAmount, UsdValue, WalletAddress, WillGuardian, WillRecord};
use bw_infra::{
    RandomContractAddress, SettlementDelays, SimulatedWallet, StaticBalances, SystemClock,
    TokioSettlement,
};

use crate::adapters::{LoggingWizardEventSink, TerminalShareTarget};
use crate::bootstrap::runtime::AppRuntime;

/// Typed settings for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuntimeSettings {
    /// `None` means no wallet is connected.
    pub wallet_address: Option<WalletAddress>,
    pub approve_signatures: bool,
    pub eth_balance: TokenAmount,
    pub usdc_balance: TokenAmount,
    pub prices: PriceTable,
    pub delays: SettlementDelays,
    pub compose_url: String,
    pub will_record: WillRecord,
}

fn parse_or_demo<T>(field: &str, raw: &str, demo: &str) -> T
where
    T: FromStr + Default,
    T::Err: Display,
{
    if raw.trim().is_empty() {
        debug!(field, "not configured, using demo value");
    } else {
        match raw.parse::<T>() {
            Ok(value) => return value,
            Err(err) => warn!(field, value = raw, error = %err, "invalid config value, using demo value"),
        }
    }
    demo.parse::<T>().unwrap_or_default()
}

fn delay_or_demo(field: &str, raw: Option<u64>, demo: Option<u64>) -> u64 {
    raw.unwrap_or_else(|| {
        debug!(field, "not configured, using demo delay");
        demo.unwrap_or_default()
    })
}

fn resolve_wallet(raw: &str, demo: &str) -> Option<WalletAddress> {
    if raw.trim().is_empty() {
        debug!("no wallet configured; running disconnected");
        return None;
    }
    match WalletAddress::parse(raw) {
        Ok(address) => Some(address),
        Err(err) => {
            warn!(value = raw, error = %err, "invalid wallet address, using demo wallet");
            WalletAddress::parse(demo).ok()
        }
    }
}

fn resolve_will_record(raw: &GuardianViewConfig) -> Option<WillRecord> {
    let testator_address = match WalletAddress::parse(&raw.testator_address) {
        Ok(address) => address,
        Err(err) => {
            if !raw.testator_address.is_empty() {
                warn!(value = %raw.testator_address, error = %err, "invalid testator address");
            }
            return None;
        }
    };

    let guardians = raw
        .guardians
        .iter()
        .filter_map(|entry| match WalletAddress::parse(&entry.address) {
            Ok(address) => Some(WillGuardian {
                address,
                name: entry.name.clone(),
                verified: entry.verified,
            }),
            Err(err) => {
                warn!(value = %entry.address, error = %err, "skipping invalid guardian entry");
                None
            }
        })
        .collect();

    Some(WillRecord {
        testator_address,
        testator_name: raw.testator_name.clone(),
        guardians,
        vault_value: raw.vault_value.clone(),
        created_date: raw.created_date.clone(),
    })
}

/// Convert configuration facts into typed settings, falling back to the demo
/// setup wherever a value is missing or invalid. An explicit zero delay
/// settles immediately.
pub fn resolve_settings(config: &AppConfig) -> anyhow::Result<RuntimeSettings> {
    let demo = AppConfig::with_demo_defaults();

    let compose_url = if config.share.compose_url.trim().is_empty() {
        demo.share.compose_url.clone()
    } else {
        config.share.compose_url.clone()
    };

    let will_record = resolve_will_record(&config.guardian_view)
        .or_else(|| {
            debug!("guardian view not configured, using demo will");
            resolve_will_record(&demo.guardian_view)
        })
        .ok_or_else(|| anyhow::anyhow!("no valid will record for the guardian view"))?;

    Ok(RuntimeSettings {
        wallet_address: resolve_wallet(&config.wallet.address, &demo.wallet.address),
        approve_signatures: config.wallet.approve_signatures,
        eth_balance: parse_or_demo("balances.eth", &config.balances.eth, &demo.balances.eth),
        usdc_balance: parse_or_demo("balances.usdc", &config.balances.usdc, &demo.balances.usdc),
        prices: PriceTable {
            eth: parse_or_demo::<UsdValue>(
                "pricing.eth_usd",
                &config.pricing.eth_usd,
                &demo.pricing.eth_usd,
            ),
            usdc: parse_or_demo::<UsdValue>(
                "pricing.usdc_usd",
                &config.pricing.usdc_usd,
                &demo.pricing.usdc_usd,
            ),
        },
        delays: SettlementDelays::from_millis(
            delay_or_demo("timing.deposit_ms", config.timing.deposit_ms, demo.timing.deposit_ms),
            delay_or_demo(
                "timing.deployment_ms",
                config.timing.deployment_ms,
                demo.timing.deployment_ms,
            ),
            delay_or_demo(
                "timing.verification_ms",
                config.timing.verification_ms,
                demo.timing.verification_ms,
            ),
        ),
        compose_url,
        will_record,
    })
}

/// Assemble the orchestrator and its adapters.
pub fn build_runtime(settings: RuntimeSettings) -> AppRuntime {
    let wallet = Arc::new(SimulatedWallet::new(
        settings.wallet_address.clone(),
        settings.approve_signatures,
    ));
    let wallet_port: Arc<dyn WalletPort> = wallet.clone();
    let balances: Arc<dyn BalancePort> = Arc::new(StaticBalances::new(
        settings.eth_balance,
        settings.usdc_balance,
    ));
    let settlement: Arc<dyn SettlementPort> = Arc::new(TokioSettlement::new(settings.delays));
    let clock: Arc<dyn ClockPort> = Arc::new(SystemClock);
    let contract_addresses: Arc<dyn ContractAddressPort> = Arc::new(RandomContractAddress);
    let share: Arc<dyn SharePort> = Arc::new(TerminalShareTarget);
    let event_port: Arc<dyn WizardEventPort> = Arc::new(LoggingWizardEventSink);

    let deploy_will = Arc::new(DeployWill::new(
        wallet_port.clone(),
        settlement.clone(),
        contract_addresses,
    ));
    let share_deployment = Arc::new(ShareDeployment::new(share, settings.compose_url));
    let verify_passing = Arc::new(VerifyPassing::new(settlement.clone()));

    let orchestrator = WizardOrchestrator::new(
        settings.will_record,
        settings.prices,
        wallet_port,
        balances,
        settlement,
        clock,
        event_port,
        deploy_will,
        share_deployment,
        verify_passing,
    );

    AppRuntime::new(Arc::new(orchestrator), wallet)
}

#[cfg(test)]
mod tests {
    use super::*;
    use bw_core::config::GuardianEntryConfig;

    #[test]
    fn demo_config_resolves_without_fallbacks() {
        let settings = resolve_settings(&AppConfig::with_demo_defaults()).unwrap();

        assert_eq!(
            settings.wallet_address,
            Some(WalletAddress::parse("0x69Dc7349edAF67e2b104f815DAa9c2C25402EeC8").unwrap())
        );
        assert!(settings.approve_signatures);
        assert_eq!(settings.eth_balance, TokenAmount::parse("2.0").unwrap());
        assert_eq!(settings.usdc_balance, TokenAmount::parse("1250.50").unwrap());
        assert_eq!(settings.prices, PriceTable::default());
        assert_eq!(settings.will_record.testator_name, "John Doe");
        assert_eq!(settings.will_record.guardians.len(), 2);
    }

    #[test]
    fn empty_config_falls_back_to_demo_values_and_disconnects_wallet() {
        let settings = resolve_settings(&AppConfig::empty()).unwrap();

        assert_eq!(settings.wallet_address, None);
        assert!(!settings.approve_signatures);
        assert_eq!(settings.eth_balance, TokenAmount::parse("2.0").unwrap());
        assert_eq!(settings.compose_url, "https://base.org/compose");
        assert_eq!(settings.delays, SettlementDelays::from_millis(2000, 2000, 3000));
        assert_eq!(settings.will_record.testator_name, "John Doe");
    }

    #[test]
    fn only_explicit_zero_delays_settle_immediately() {
        let mut config = AppConfig::with_demo_defaults();
        config.timing.deposit_ms = Some(0);
        config.timing.deployment_ms = None;

        let settings = resolve_settings(&config).unwrap();

        assert_eq!(settings.delays, SettlementDelays::from_millis(0, 2000, 3000));
    }

    #[test]
    fn invalid_values_are_replaced() {
        let mut config = AppConfig::with_demo_defaults();
        config.wallet.address = "not-an-address".to_string();
        config.balances.usdc = "-4".to_string();
        config.pricing.eth_usd = "lots".to_string();

        let settings = resolve_settings(&config).unwrap();

        assert_eq!(
            settings.wallet_address,
            Some(WalletAddress::parse("0x69Dc7349edAF67e2b104f815DAa9c2C25402EeC8").unwrap())
        );
        assert_eq!(settings.usdc_balance, TokenAmount::parse("1250.50").unwrap());
        assert_eq!(settings.prices.eth, UsdValue::from_dollars(3200));
    }

    #[test]
    fn invalid_guardian_entries_are_skipped() {
        let mut config = AppConfig::with_demo_defaults();
        config.guardian_view.guardians.push(GuardianEntryConfig {
            address: "0x123".to_string(),
            name: "Broken".to_string(),
            verified: false,
        });

        let settings = resolve_settings(&config).unwrap();

        assert_eq!(settings.will_record.guardians.len(), 2);
        assert!(settings
            .will_record
            .guardians
            .iter()
            .all(|g| g.name != "Broken"));
    }

    #[tokio::test]
    async fn build_runtime_starts_at_role_selection() {
        let runtime = build_runtime(resolve_settings(&AppConfig::with_demo_defaults()).unwrap());

        assert_eq!(
            runtime.orchestrator().get_state().await,
            bw_core::WizardState::RoleUnselected
        );
        assert!(runtime.wallet().approves());
    }
}
