//! Configuration management
//!
//! Reads the banlist and notifier settings from a TOML file:
//!
//! ```toml
//! [ban_allowlist]
//! ip_addresses = ["10.0.0.5", "2001:db8::1"]
//!
//! [notifier]
//! ban_url = "http://192.168.3.164:7775/ban"
//! kill_url = "http://192.168.3.164:7776/kill"
//! timeout_secs = 10
//! accept_invalid_certs = true
//! ```
//!
//! Unknown top-level tables are ignored so the file can be shared with other
//! host components.
//!
//! Created: 2026-10-17

use crate::error::ConfigError;
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;

/// Default ban endpoint
pub const DEFAULT_BAN_URL: &str = "http://192.168.3.164:7775/ban";

/// Default kill endpoint
pub const DEFAULT_KILL_URL: &str = "http://192.168.3.164:7776/kill";

/// Top-level TOML configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub ban_allowlist: Option<BanAllowlistConfig>,
    #[serde(default)]
    pub notifier: NotifierConfig,
}

/// `[ban_allowlist]` block
#[derive(Debug, Clone, Deserialize)]
pub struct BanAllowlistConfig {
    pub ip_addresses: OneOrMany,
}

/// A list of strings, or a single string coerced to a one-element list
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum OneOrMany {
    One(String),
    Many(Vec<String>),
}

impl OneOrMany {
    pub fn into_vec(self) -> Vec<String> {
        match self {
            OneOrMany::One(s) => vec![s],
            OneOrMany::Many(v) => v,
        }
    }
}

/// `[notifier]` block
#[derive(Debug, Clone, Deserialize)]
pub struct NotifierConfig {
    #[serde(default = "default_ban_url")]
    pub ban_url: String,
    #[serde(default = "default_kill_url")]
    pub kill_url: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    /// Skip TLS certificate verification on outbound notifications
    #[serde(default = "default_true")]
    pub accept_invalid_certs: bool,
}

fn default_ban_url() -> String { DEFAULT_BAN_URL.to_string() }
fn default_kill_url() -> String { DEFAULT_KILL_URL.to_string() }
fn default_timeout_secs() -> u64 { 10 }
fn default_true() -> bool { true }

impl Default for NotifierConfig {
    fn default() -> Self {
        Self {
            ban_url: default_ban_url(),
            kill_url: default_kill_url(),
            timeout_secs: default_timeout_secs(),
            accept_invalid_certs: true,
        }
    }
}

impl NotifierConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    /// Parse and validate configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Configured banlist entries, in file order. Empty when the block is absent.
    pub fn ip_addresses(&self) -> Vec<String> {
        self.ban_allowlist
            .as_ref()
            .map(|b| b.ip_addresses.clone().into_vec())
            .unwrap_or_default()
    }

    fn validate(&self) -> Result<(), ConfigError> {
        validate_url("ban", &self.notifier.ban_url)?;
        validate_url("kill", &self.notifier.kill_url)?;
        if self.notifier.timeout_secs == 0 {
            return Err(ConfigError::ZeroTimeout);
        }
        Ok(())
    }
}

fn validate_url(name: &'static str, url: &str) -> Result<(), ConfigError> {
    let parsed = reqwest::Url::parse(url).map_err(|e| ConfigError::InvalidEndpoint {
        name,
        url: url.to_string(),
        reason: e.to_string(),
    })?;
    match parsed.scheme() {
        "http" | "https" => Ok(()),
        other => Err(ConfigError::InvalidEndpoint {
            name,
            url: url.to_string(),
            reason: format!("unsupported scheme '{}'", other),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_list() {
        let config = Config::from_toml_str(
            r#"
            [ban_allowlist]
            ip_addresses = ["10.0.0.5", "2001:db8::1"]
            "#,
        )
        .unwrap();
        assert_eq!(config.ip_addresses(), vec!["10.0.0.5", "2001:db8::1"]);
        assert_eq!(config.notifier.ban_url, DEFAULT_BAN_URL);
        assert_eq!(config.notifier.kill_url, DEFAULT_KILL_URL);
        assert!(config.notifier.accept_invalid_certs);
        assert_eq!(config.notifier.timeout(), Duration::from_secs(10));
    }

    #[test]
    fn test_single_value_coerced_to_list() {
        let config = Config::from_toml_str(
            r#"
            [ban_allowlist]
            ip_addresses = "10.0.0.5"
            "#,
        )
        .unwrap();
        assert_eq!(config.ip_addresses(), vec!["10.0.0.5"]);
    }

    #[test]
    fn test_missing_block_is_empty_banlist() {
        let config = Config::from_toml_str("[http]\nip_ban_enabled = true\n").unwrap();
        assert!(config.ip_addresses().is_empty());
    }

    #[test]
    fn test_ip_addresses_required_in_block() {
        let err = Config::from_toml_str("[ban_allowlist]\n").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_notifier_overrides() {
        let config = Config::from_toml_str(
            r#"
            [ban_allowlist]
            ip_addresses = []

            [notifier]
            ban_url = "https://firewall.lan:8443/ban"
            timeout_secs = 3
            accept_invalid_certs = false
            "#,
        )
        .unwrap();
        assert!(config.ip_addresses().is_empty());
        assert_eq!(config.notifier.ban_url, "https://firewall.lan:8443/ban");
        assert_eq!(config.notifier.kill_url, DEFAULT_KILL_URL);
        assert_eq!(config.notifier.timeout_secs, 3);
        assert!(!config.notifier.accept_invalid_certs);
    }

    #[test]
    fn test_invalid_endpoint_rejected() {
        let err = Config::from_toml_str(
            r#"
            [notifier]
            kill_url = "ftp://192.168.3.164/kill"
            "#,
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidEndpoint { name: "kill", .. }));
    }

    #[test]
    fn test_zero_timeout_rejected() {
        let err = Config::from_toml_str("[notifier]\ntimeout_secs = 0\n").unwrap_err();
        assert!(matches!(err, ConfigError::ZeroTimeout));

        let ok = Config::from_toml_str("[notifier]\ntimeout_secs = 1\n").unwrap();
        assert_eq!(ok.notifier.timeout(), Duration::from_secs(1));
    }

    #[test]
    fn test_load_missing_file() {
        let err = Config::load("/nonexistent/ban_allowlist.toml").unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }
}
