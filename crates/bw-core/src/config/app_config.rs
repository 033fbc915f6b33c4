/// Application configuration DTO (pure data, no logic)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub wallet: WalletConfig,
    pub balances: BalancesConfig,
    pub pricing: PricingConfig,
    pub timing: TimingConfig,
    pub share: ShareConfig,
    pub guardian_view: GuardianViewConfig,
}

/// Simulated wallet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WalletConfig {
    /// Connected account (empty means disconnected)
    pub address: String,
    /// Whether signature requests are approved
    pub approve_signatures: bool,
}

/// Available wallet balances, as decimal strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BalancesConfig {
    pub eth: String,
    pub usdc: String,
}

/// USD prices, as decimal strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PricingConfig {
    pub eth_usd: String,
    pub usdc_usd: String,
}

/// Simulated settlement latencies in milliseconds.
///
/// `None` means the key was absent; an explicit `0` settles immediately.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimingConfig {
    pub deposit_ms: Option<u64>,
    pub deployment_ms: Option<u64>,
    pub verification_ms: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShareConfig {
    /// Base of the web compose URL used when no native composer exists
    pub compose_url: String,
}

/// The will a guardian sees in the guardian view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuardianViewConfig {
    pub testator_address: String,
    pub testator_name: String,
    pub vault_value: String,
    pub created_date: String,
    pub guardians: Vec<GuardianEntryConfig>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuardianEntryConfig {
    pub address: String,
    pub name: String,
    pub verified: bool,
}

fn str_at(value: &toml::Value, section: &str, key: &str) -> String {
    value
        .get(section)
        .and_then(|s| s.get(key))
        .and_then(|v| v.as_str())
        .unwrap_or("")
        .to_string()
}

fn u64_at(value: &toml::Value, section: &str, key: &str) -> Option<u64> {
    value
        .get(section)
        .and_then(|s| s.get(key))
        .and_then(|v| v.as_integer())
        .map(|v| v.max(0) as u64)
}

fn bool_at(value: &toml::Value, section: &str, key: &str) -> bool {
    value
        .get(section)
        .and_then(|s| s.get(key))
        .and_then(|v| v.as_bool())
        .unwrap_or(false)
}

impl AppConfig {
    /// Create AppConfig from a TOML value.
    ///
    /// This method must NOT validate or fill in defaults. Missing keys become
    /// empty strings, `None` delays and `false`.
    pub fn from_toml(toml_value: &toml::Value) -> anyhow::Result<Self> {
        let guardians = toml_value
            .get("guardian_view")
            .and_then(|g| g.get("guardians"))
            .and_then(|v| v.as_array())
            .map(|entries| {
                entries
                    .iter()
                    .map(|entry| GuardianEntryConfig {
                        address: entry
                            .get("address")
                            .and_then(|v| v.as_str())
                            .unwrap_or("")
                            .to_string(),
                        name: entry
                            .get("name")
                            .and_then(|v| v.as_str())
                            .unwrap_or("")
                            .to_string(),
                        verified: entry
                            .get("verified")
                            .and_then(|v| v.as_bool())
                            .unwrap_or(false),
                    })
                    .collect()
            })
            .unwrap_or_default();

        Ok(Self {
            wallet: WalletConfig {
                address: str_at(toml_value, "wallet", "address"),
                approve_signatures: bool_at(toml_value, "wallet", "approve_signatures"),
            },
            balances: BalancesConfig {
                eth: str_at(toml_value, "balances", "eth"),
                usdc: str_at(toml_value, "balances", "usdc"),
            },
            pricing: PricingConfig {
                eth_usd: str_at(toml_value, "pricing", "eth_usd"),
                usdc_usd: str_at(toml_value, "pricing", "usdc_usd"),
            },
            timing: TimingConfig {
                deposit_ms: u64_at(toml_value, "timing", "deposit_ms"),
                deployment_ms: u64_at(toml_value, "timing", "deployment_ms"),
                verification_ms: u64_at(toml_value, "timing", "verification_ms"),
            },
            share: ShareConfig {
                compose_url: str_at(toml_value, "share", "compose_url"),
            },
            guardian_view: GuardianViewConfig {
                testator_address: str_at(toml_value, "guardian_view", "testator_address"),
                testator_name: str_at(toml_value, "guardian_view", "testator_name"),
                vault_value: str_at(toml_value, "guardian_view", "vault_value"),
                created_date: str_at(toml_value, "guardian_view", "created_date"),
                guardians,
            },
        })
    }

    /// Create empty AppConfig (all empty/zero values)
    pub fn empty() -> Self {
        Self {
            wallet: WalletConfig {
                address: String::new(),
                approve_signatures: false,
            },
            balances: BalancesConfig {
                eth: String::new(),
                usdc: String::new(),
            },
            pricing: PricingConfig {
                eth_usd: String::new(),
                usdc_usd: String::new(),
            },
            timing: TimingConfig {
                deposit_ms: None,
                deployment_ms: None,
                verification_ms: None,
            },
            share: ShareConfig {
                compose_url: String::new(),
            },
            guardian_view: GuardianViewConfig {
                testator_address: String::new(),
                testator_name: String::new(),
                vault_value: String::new(),
                created_date: String::new(),
                guardians: Vec::new(),
            },
        }
    }

    /// The demo setup used when no configuration file exists.
    pub fn with_demo_defaults() -> Self {
        Self {
            wallet: WalletConfig {
                address: "0x69Dc7349edAF67e2b104f815DAa9c2C25402EeC8".to_string(),
                approve_signatures: true,
            },
            balances: BalancesConfig {
                eth: "2.0".to_string(),
                usdc: "1250.50".to_string(),
            },
            pricing: PricingConfig {
                eth_usd: "3200".to_string(),
                usdc_usd: "1".to_string(),
            },
            timing: TimingConfig {
                deposit_ms: Some(2000),
                deployment_ms: Some(2000),
                verification_ms: Some(3000),
            },
            share: ShareConfig {
                compose_url: "https://base.org/compose".to_string(),
            },
            guardian_view: GuardianViewConfig {
                testator_address: "0x742d35Cc6432C8Cf6a58130ac2C03c8ad5E8b0b0".to_string(),
                testator_name: "John Doe".to_string(),
                vault_value: "$15,750.00".to_string(),
                created_date: "2024-03-15".to_string(),
                guardians: vec![
                    GuardianEntryConfig {
                        address: "0x69Dc7349edAF67e2b104f815DAa9c2C25402EeC8".to_string(),
                        name: "Primary Guardian".to_string(),
                        verified: false,
                    },
                    GuardianEntryConfig {
                        address: "0x8bD14205255920F9c39020Ba206041907331afc3".to_string(),
                        name: "Secondary Guardian".to_string(),
                        verified: false,
                    },
                ],
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use toml::Value;

    #[test]
    fn test_from_toml_reads_every_section() {
        let toml_str = r#"
            [wallet]
            address = "0x0000000000000000000000000000000000000001"
            approve_signatures = true

            [balances]
            eth = "5"
            usdc = "10.25"

            [pricing]
            eth_usd = "2500"
            usdc_usd = "1"

            [timing]
            deposit_ms = 10
            deployment_ms = 20
            verification_ms = 30

            [share]
            compose_url = "https://example.org/compose"

            [guardian_view]
            testator_address = "0x742d35Cc6432C8Cf6a58130ac2C03c8ad5E8b0b0"
            testator_name = "Jane"
            vault_value = "$1.00"
            created_date = "2025-01-01"

            [[guardian_view.guardians]]
            address = "0x0000000000000000000000000000000000000001"
            name = "Only Guardian"
            verified = true
        "#;
        let toml_value: Value = toml::from_str(toml_str).unwrap();

        let config = AppConfig::from_toml(&toml_value).unwrap();

        assert!(config.wallet.approve_signatures);
        assert_eq!(config.balances.usdc, "10.25");
        assert_eq!(config.pricing.eth_usd, "2500");
        assert_eq!(config.timing.verification_ms, Some(30));
        assert_eq!(config.share.compose_url, "https://example.org/compose");
        assert_eq!(config.guardian_view.testator_name, "Jane");
        assert_eq!(config.guardian_view.guardians.len(), 1);
        assert!(config.guardian_view.guardians[0].verified);
    }

    #[test]
    fn test_from_toml_returns_empty_values_when_missing() {
        let toml_value: Value = toml::from_str("[wallet]\n").unwrap();

        let config = AppConfig::from_toml(&toml_value).unwrap();

        // Empty values are valid facts
        assert_eq!(config, AppConfig::empty());
    }

    #[test]
    fn test_from_toml_does_not_validate_addresses_or_amounts() {
        let toml_str = r#"
            [wallet]
            address = "not-an-address"

            [balances]
            eth = "-3"
        "#;
        let toml_value: Value = toml::from_str(toml_str).unwrap();

        let config = AppConfig::from_toml(&toml_value).unwrap();

        assert_eq!(config.wallet.address, "not-an-address");
        assert_eq!(config.balances.eth, "-3");
    }

    #[test]
    fn test_negative_delays_are_read_as_zero() {
        let toml_value: Value = toml::from_str("[timing]\ndeposit_ms = -5\n").unwrap();

        let config = AppConfig::from_toml(&toml_value).unwrap();

        assert_eq!(config.timing.deposit_ms, Some(0));
    }

    #[test]
    fn test_missing_delays_are_absent_not_zero() {
        let toml_value: Value = toml::from_str("[timing]\ndeposit_ms = 0\n").unwrap();

        let config = AppConfig::from_toml(&toml_value).unwrap();

        assert_eq!(config.timing.deposit_ms, Some(0));
        assert_eq!(config.timing.deployment_ms, None);
        assert_eq!(config.timing.verification_ms, None);
    }

    #[test]
    fn test_demo_defaults_match_the_demo_wallet() {
        let config = AppConfig::with_demo_defaults();

        assert_eq!(config.balances.eth, "2.0");
        assert_eq!(config.balances.usdc, "1250.50");
        assert_eq!(config.timing.deposit_ms, Some(2000));
        assert_eq!(config.guardian_view.guardians.len(), 2);
    }
}
