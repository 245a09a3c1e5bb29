//! Ban Notifications
//!
//! When a banlisted address is banned, two endpoints are told about it:
//! the ban endpoint receives `{"ban":"<ip>"}` and the kill endpoint
//! receives `{"kill":"<ip>"}`. Both requests run concurrently and both are
//! awaited; one failing never cancels the other.
//!
//! Created: 2026-10-17

pub mod http;

pub use http::HttpNotifier;

use crate::config::NotifierConfig;
use crate::error::NotifyError;
use async_trait::async_trait;
use serde_json::{Map, Value};
use std::fmt;
use std::net::IpAddr;
use tracing::{error, info};

/// Which endpoint a notification is for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NotificationKind {
    Ban,
    Kill,
}

impl NotificationKind {
    /// JSON key used in the request body
    pub fn key(&self) -> &'static str {
        match self {
            NotificationKind::Ban => "ban",
            NotificationKind::Kill => "kill",
        }
    }
}

impl fmt::Display for NotificationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

/// A single outbound notification
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub ip: IpAddr,
}

impl Notification {
    pub fn new(kind: NotificationKind, ip: IpAddr) -> Self {
        Self { kind, ip }
    }

    /// Request body, e.g. `{"ban":"10.0.0.5"}`
    pub fn body(&self) -> String {
        let mut body = Map::new();
        body.insert(self.kind.key().to_string(), Value::String(self.ip.to_string()));
        Value::Object(body).to_string()
    }
}

/// Notifier trait - delivers one notification to one URL
#[async_trait]
pub trait Notifier: Send + Sync {
    async fn send(&self, url: &str, notification: &Notification) -> Result<(), NotifyError>;
}

/// Result of one dispatch round
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DispatchReport {
    pub ban_sent: bool,
    pub kill_sent: bool,
}

impl DispatchReport {
    pub fn all_sent(&self) -> bool {
        self.ban_sent && self.kill_sent
    }
}

/// Sends the ban/kill pair for an address
pub struct NotificationDispatcher<N> {
    notifier: N,
    ban_url: String,
    kill_url: String,
}

impl NotificationDispatcher<HttpNotifier> {
    /// Build an HTTP dispatcher from config
    pub fn from_config(config: &NotifierConfig) -> Result<Self, NotifyError> {
        let notifier = HttpNotifier::new(config.timeout(), config.accept_invalid_certs)?;
        Ok(Self::new(notifier, config.ban_url.clone(), config.kill_url.clone()))
    }
}

impl<N: Notifier> NotificationDispatcher<N> {
    pub fn new(notifier: N, ban_url: impl Into<String>, kill_url: impl Into<String>) -> Self {
        Self {
            notifier,
            ban_url: ban_url.into(),
            kill_url: kill_url.into(),
        }
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    /// Send both notifications for `ip` concurrently. Failures are logged,
    /// never returned.
    pub async fn dispatch(&self, ip: IpAddr) -> DispatchReport {
        info!("Sending ban notification for IP: {}", ip);

        let ban = Notification::new(NotificationKind::Ban, ip);
        let kill = Notification::new(NotificationKind::Kill, ip);

        let (ban_result, kill_result) = futures::join!(
            self.notifier.send(&self.ban_url, &ban),
            self.notifier.send(&self.kill_url, &kill),
        );

        DispatchReport {
            ban_sent: log_outcome(&ban, &self.ban_url, ban_result),
            kill_sent: log_outcome(&kill, &self.kill_url, kill_result),
        }
    }
}

fn log_outcome(notification: &Notification, url: &str, result: Result<(), NotifyError>) -> bool {
    match result {
        Ok(()) => {
            info!("{} notification for IP {} delivered to {}", notification.kind, notification.ip, url);
            true
        }
        Err(e) => {
            error!(
                "Failed to send {} notification for IP {}: {}",
                notification.kind, notification.ip, e
            );
            false
        }
    }
}
