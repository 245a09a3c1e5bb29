//! Ban Allowlist Library
//!
//! Filters host IP bans against a configured banlist. Banlisted addresses are
//! passed to the host ban manager and announced to the ban and kill
//! endpoints; all other ban requests are dropped.
//!
//! Created: 2026-10-17

pub mod config;
pub mod error;
pub mod filters;
pub mod notify;
pub mod setup;
pub mod sink;

// Re-export commonly used types
pub use config::Config;
pub use error::{BanError, ConfigError, NotifyError};
pub use filters::{BanFilter, Banlist};
pub use notify::{HttpNotifier, Notification, NotificationDispatcher, NotificationKind, Notifier};
pub use setup::{setup, setup_with, SetupOutcome};
pub use sink::{BanRecord, BanSink, MemoryBanManager};
