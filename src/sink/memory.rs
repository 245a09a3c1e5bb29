//! In-memory ban manager
//!
//! Stand-in for the host ban manager, used by the CLI and by tests. Bans are
//! kept for the process lifetime; re-banning an address keeps the first record.
//!
//! Created: 2026-10-17

use super::BanSink;
use crate::error::BanError;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::net::IpAddr;
use tokio::sync::RwLock;
use tracing::info;

/// A single ban entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BanRecord {
    pub ip: IpAddr,
    pub banned_at: DateTime<Utc>,
}

#[derive(Debug, Default)]
pub struct MemoryBanManager {
    bans: RwLock<HashMap<IpAddr, BanRecord>>,
}

impl MemoryBanManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn is_banned(&self, ip: &IpAddr) -> bool {
        self.bans.read().await.contains_key(ip)
    }

    /// All bans, oldest first
    pub async fn bans(&self) -> Vec<BanRecord> {
        let mut records: Vec<BanRecord> = self.bans.read().await.values().cloned().collect();
        records.sort_by_key(|r| (r.banned_at, r.ip));
        records
    }

    pub async fn len(&self) -> usize {
        self.bans.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.bans.read().await.is_empty()
    }
}

#[async_trait]
impl BanSink for MemoryBanManager {
    async fn add_ban(&self, ip: IpAddr) -> Result<(), BanError> {
        let mut bans = self.bans.write().await;
        if bans.contains_key(&ip) {
            return Ok(());
        }
        info!("Banned IP {}", ip);
        bans.insert(ip, BanRecord { ip, banned_at: Utc::now() });
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_and_query() {
        let manager = MemoryBanManager::new();
        let ip: IpAddr = "10.0.0.5".parse().unwrap();

        tokio_test::block_on(async {
            assert!(manager.is_empty().await);
            tokio_test::assert_ok!(manager.add_ban(ip).await);
            assert!(manager.is_banned(&ip).await);
            assert!(!manager.is_banned(&"10.0.0.6".parse().unwrap()).await);
            assert_eq!(manager.len().await, 1);
        });
    }

    #[tokio::test]
    async fn test_reban_keeps_first_record() {
        let manager = MemoryBanManager::new();
        let ip: IpAddr = "2001:db8::1".parse().unwrap();

        manager.add_ban(ip).await.unwrap();
        let first = manager.bans().await[0].clone();
        manager.add_ban(ip).await.unwrap();

        let bans = manager.bans().await;
        assert_eq!(bans.len(), 1);
        assert_eq!(bans[0], first);
    }
}
