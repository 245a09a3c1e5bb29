//! Ban Filter (decorator)
//!
//! Wraps the host ban sink. Only banlisted addresses reach the inner sink;
//! each of those then triggers the ban/kill notification pair. Everything
//! else is logged and dropped.
//!
//! Created: 2026-10-17

use super::Banlist;
use crate::error::BanError;
use crate::notify::{NotificationDispatcher, Notifier};
use crate::sink::BanSink;
use async_trait::async_trait;
use std::net::IpAddr;
use std::sync::Arc;
use tracing::{info, warn};

pub struct BanFilter<S, N> {
    inner: S,
    banlist: Arc<Banlist>,
    dispatcher: NotificationDispatcher<N>,
}

impl<S, N> BanFilter<S, N> {
    pub fn new(inner: S, banlist: Arc<Banlist>, dispatcher: NotificationDispatcher<N>) -> Self {
        Self { inner, banlist, dispatcher }
    }

    pub fn banlist(&self) -> &Banlist {
        &self.banlist
    }

    /// The wrapped ban sink
    pub fn inner(&self) -> &S {
        &self.inner
    }

    pub fn dispatcher(&self) -> &NotificationDispatcher<N> {
        &self.dispatcher
    }
}

#[async_trait]
impl<S: BanSink, N: Notifier> BanSink for BanFilter<S, N> {
    /// Forward a banlisted address to the inner sink, then notify.
    /// An inner sink error is returned as-is and nothing is sent.
    async fn add_ban(&self, ip: IpAddr) -> Result<(), BanError> {
        if !self.banlist.contains(&ip) {
            info!("IP {} is not in the banlist", ip);
            return Ok(());
        }

        info!("Custom banning IP {}", ip);
        self.inner.add_ban(ip).await?;
        let report = self.dispatcher.dispatch(ip).await;
        if !report.all_sent() {
            warn!("IP {} banned but not every endpoint was notified: {:?}", ip, report);
        }
        Ok(())
    }
}
