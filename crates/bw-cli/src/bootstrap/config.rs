//! # Configuration Loader
//!
//! Reads TOML from disk and maps it onto the [`AppConfig`] DTO. Values are
//! accepted as they are; turning them into domain values is done by
//! [`crate::bootstrap::wiring::resolve_settings`].

use std::path::{Path, PathBuf};

use anyhow::Context;
use bw_core::config::AppConfig;
use tracing::info;

const CONFIG_DIR_NAME: &str = "basewill";
const CONFIG_FILE_NAME: &str = "config.toml";

/// Load configuration from a TOML file
///
/// **NO validation is performed**:
/// - Empty strings are valid (they are facts)
/// - Missing sections result in empty values (facts)
///
/// # Errors
///
/// Returns error if the file cannot be read or is not valid TOML.
pub fn load_config(config_path: PathBuf) -> anyhow::Result<AppConfig> {
    let content = std::fs::read_to_string(&config_path)
        .with_context(|| format!("Failed to read config file: {}", config_path.display()))?;
    let toml_value: toml::Value =
        toml::from_str(&content).context("Failed to parse config as TOML")?;
    AppConfig::from_toml(&toml_value)
}

/// `<config dir>/basewill/config.toml`, when the platform has a config dir.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
}

/// Pick the configuration for this run.
///
/// An explicit path must load. Otherwise the default path is used when the
/// file exists, and the demo setup when it does not.
pub fn resolve_config(explicit: Option<PathBuf>) -> anyhow::Result<AppConfig> {
    if let Some(path) = explicit {
        return load_config(path);
    }
    resolve_from_default(default_config_path().as_deref())
}

fn resolve_from_default(path: Option<&Path>) -> anyhow::Result<AppConfig> {
    match path {
        Some(path) if path.exists() => {
            info!(path = %path.display(), "loading config");
            load_config(path.to_path_buf())
        }
        _ => {
            info!("no config file found, using demo defaults");
            Ok(AppConfig::with_demo_defaults())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_load_config_reads_valid_toml() {
        let toml_content = r#"
            [wallet]
            address = "0x742d35Cc6432C8Cf6a58130ac2C03c8ad5E8b0b0"
            approve_signatures = true

            [balances]
            eth = "4.5"

            [timing]
            deposit_ms = 250
        "#;

        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(toml_content.as_bytes()).unwrap();

        let config = load_config(temp_file.path().to_path_buf()).unwrap();

        assert_eq!(config.wallet.address, "0x742d35Cc6432C8Cf6a58130ac2C03c8ad5E8b0b0");
        assert!(config.wallet.approve_signatures);
        assert_eq!(config.balances.eth, "4.5");
        assert_eq!(config.balances.usdc, "");
        assert_eq!(config.timing.deposit_ms, Some(250));
        assert_eq!(config.timing.deployment_ms, None);
    }

    #[test]
    fn test_load_config_returns_parse_error_on_invalid_toml() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(b"[wallet\naddress = ").unwrap();

        let err = load_config(temp_file.path().to_path_buf()).unwrap_err();

        assert!(err.to_string().contains("Failed to parse config as TOML"));
    }

    #[test]
    fn test_load_config_returns_io_error_on_file_not_found() {
        let result = load_config(PathBuf::from("/this/path/does/not/exist/config.toml"));

        let err = result.unwrap_err();
        assert!(
            err.to_string().contains("Failed to read config file"),
            "Expected IO error message, got: {}",
            err
        );
    }

    #[test]
    fn test_missing_default_file_falls_back_to_demo() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("config.toml");

        let config = resolve_from_default(Some(&missing)).unwrap();

        assert_eq!(config, AppConfig::with_demo_defaults());
    }

    #[test]
    fn test_explicit_path_must_exist() {
        let result = resolve_config(Some(PathBuf::from("/this/path/does/not/exist.toml")));
        assert!(result.is_err());
    }
}
