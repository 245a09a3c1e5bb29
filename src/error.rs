//! Error types
//!
//! Library errors are typed; the binary wraps them in `anyhow` with context.
//!
//! Created: 2026-10-17

use std::net::IpAddr;
use std::path::PathBuf;
use thiserror::Error;

/// Failure loading or validating the TOML configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid {name} endpoint url '{url}': {reason}")]
    InvalidEndpoint {
        name: &'static str,
        url: String,
        reason: String,
    },

    #[error("notifier timeout_secs must be greater than zero")]
    ZeroTimeout,
}

/// Failure delivering a single notification
#[derive(Debug, Error)]
pub enum NotifyError {
    #[error("failed to build http client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("{url} returned status {status}")]
    Status { url: String, status: u16 },
}

/// Failure raised by the underlying ban manager
#[derive(Debug, Error)]
pub enum BanError {
    #[error("ban manager rejected {ip}: {reason}")]
    Rejected { ip: IpAddr, reason: String },
}
