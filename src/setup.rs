//! Integration setup
//!
//! Decides, once at startup, whether ban requests are filtered:
//! - no ban manager: warn and do nothing
//! - empty banlist: the ban manager is used unwrapped
//! - otherwise: the ban manager is wrapped in a `BanFilter`
//!
//! None of these outcomes is an error.
//!
//! Created: 2026-10-17

use crate::config::Config;
use crate::filters::{BanFilter, Banlist};
use crate::notify::{NotificationDispatcher, Notifier};
use crate::sink::BanSink;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// What setup installed
pub enum SetupOutcome<S, N> {
    /// Host has no ban manager; nothing installed
    NoBanManager,
    /// Banlist empty; ban manager left as-is
    Passthrough(S),
    /// Ban manager wrapped by the filter
    Filtered(BanFilter<S, N>),
}

impl<S, N> SetupOutcome<S, N> {
    /// Was the filter installed?
    pub fn is_filtered(&self) -> bool {
        matches!(self, SetupOutcome::Filtered(_))
    }
}

impl<S: BanSink + 'static, N: Notifier + 'static> SetupOutcome<S, N> {
    /// The sink the host should route ban requests to from now on
    pub fn into_sink(self) -> Option<Arc<dyn BanSink>> {
        match self {
            SetupOutcome::NoBanManager => None,
            SetupOutcome::Passthrough(sink) => Some(Arc::new(sink)),
            SetupOutcome::Filtered(filter) => Some(Arc::new(filter)),
        }
    }
}

/// Install the filter around `ban_manager` if there is anything to filter for.
/// `dispatcher` is dropped unless the filter is installed.
pub fn setup_with<S, N>(
    ban_manager: Option<S>,
    banlist: Banlist,
    dispatcher: NotificationDispatcher<N>,
) -> SetupOutcome<S, N>
where
    S: BanSink,
    N: Notifier,
{
    let Some(ban_manager) = ban_manager else {
        warn!("Can't find ban manager. Ban allowlist requires IP banning to be enabled on the host, so disabling.");
        return SetupOutcome::NoBanManager;
    };
    debug!("Ban manager found");

    if banlist.is_empty() {
        info!("No IPs provided to ban");
        return SetupOutcome::Passthrough(ban_manager);
    }

    info!("Custom banning IPs: {:?}", banlist.addresses());
    SetupOutcome::Filtered(BanFilter::new(ban_manager, Arc::new(banlist), dispatcher))
}

/// Setup with the banlist from a loaded config
pub fn setup<S: BanSink, N: Notifier>(
    ban_manager: Option<S>,
    config: &Config,
    dispatcher: NotificationDispatcher<N>,
) -> SetupOutcome<S, N> {
    setup_with(ban_manager, Banlist::new(config.ip_addresses()), dispatcher)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notify::testing::RecordingNotifier;
    use crate::notify::HttpNotifier;
    use crate::sink::MemoryBanManager;
    use std::net::IpAddr;

    fn recording() -> NotificationDispatcher<RecordingNotifier> {
        NotificationDispatcher::new(
            RecordingNotifier::default(),
            "http://127.0.0.1:7775/ban",
            "http://127.0.0.1:7776/kill",
        )
    }

    #[test]
    fn test_no_ban_manager() {
        let outcome = setup_with::<MemoryBanManager, _>(
            None,
            Banlist::new(vec!["10.0.0.5".to_string()]),
            recording(),
        );
        assert!(matches!(outcome, SetupOutcome::NoBanManager));
        assert!(outcome.into_sink().is_none());
    }

    #[tokio::test]
    async fn test_empty_banlist_passes_bans_through() {
        let manager = Arc::new(MemoryBanManager::new());
        let outcome = setup_with(Some(manager.clone()), Banlist::default(), recording());
        assert!(!outcome.is_filtered());

        let sink = outcome.into_sink().unwrap();
        let ip: IpAddr = "10.0.0.9".parse().unwrap();
        sink.add_ban(ip).await.unwrap();
        assert!(manager.is_banned(&ip).await);
    }

    #[tokio::test]
    async fn test_filter_installed() {
        let manager = Arc::new(MemoryBanManager::new());
        let outcome = setup_with(
            Some(manager.clone()),
            Banlist::new(vec!["10.0.0.5".to_string()]),
            recording(),
        );
        assert!(outcome.is_filtered());

        let sink = outcome.into_sink().unwrap();
        sink.add_ban("10.0.0.9".parse().unwrap()).await.unwrap();
        sink.add_ban("10.0.0.5".parse().unwrap()).await.unwrap();

        let bans = manager.bans().await;
        assert_eq!(bans.len(), 1);
        assert_eq!(bans[0].ip, "10.0.0.5".parse::<IpAddr>().unwrap());
    }

    #[test]
    fn test_setup_from_config() {
        let config = Config::from_toml_str(
            r#"
            [ban_allowlist]
            ip_addresses = ["10.0.0.5"]
            "#,
        )
        .unwrap();
        let outcome = setup(Some(MemoryBanManager::new()), &config, recording());
        assert!(outcome.is_filtered());

        let empty = setup(Some(MemoryBanManager::new()), &Config::default(), recording());
        assert!(matches!(empty, SetupOutcome::Passthrough(_)));

        let missing = setup::<MemoryBanManager, _>(None, &config, recording());
        assert!(matches!(missing, SetupOutcome::NoBanManager));
    }

    #[test]
    fn test_setup_with_http_dispatcher_is_infallible() {
        let config = Config::from_toml_str(
            r#"
            [ban_allowlist]
            ip_addresses = ["10.0.0.5", "2001:db8::1"]
            "#,
        )
        .unwrap();
        let dispatcher = NotificationDispatcher::from_config(&config.notifier).unwrap();
        let outcome: SetupOutcome<MemoryBanManager, HttpNotifier> =
            setup(Some(MemoryBanManager::new()), &config, dispatcher);
        assert!(outcome.is_filtered());
    }
}
