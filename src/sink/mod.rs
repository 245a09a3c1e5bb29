//! Ban Sink
//!
//! The capability the host's ban manager exposes to this crate: insert a ban
//! for an address. `BanFilter` decorates any implementation of it.
//!
//! Created: 2026-10-17

pub mod memory;

pub use memory::{BanRecord, MemoryBanManager};

use crate::error::BanError;
use async_trait::async_trait;
use std::net::IpAddr;
use std::sync::Arc;

/// BanSink trait - ban insertion entry point
#[async_trait]
pub trait BanSink: Send + Sync {
    /// Insert a ban for this address
    async fn add_ban(&self, ip: IpAddr) -> Result<(), BanError>;
}

#[async_trait]
impl<T: BanSink + ?Sized> BanSink for Arc<T> {
    async fn add_ban(&self, ip: IpAddr) -> Result<(), BanError> {
        (**self).add_ban(ip).await
    }
}
