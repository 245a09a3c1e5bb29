//! Static Banlist
//!
//! Addresses eligible for banning. Built once from config at startup and
//! read-only afterwards. Candidates are matched by exact string comparison
//! against the canonical `IpAddr` display form, so entries must be written
//! canonically (e.g. `2001:db8::1`, not `2001:0db8:0:0:0:0:0:1`).
//!
//! Created: 2026-10-17

use std::collections::HashSet;
use std::net::IpAddr;
use tracing::{debug, warn};

// ---------------------------------------------------------------------------
// Banlist
// ---------------------------------------------------------------------------

/// Ordered banlist with a lookup set built at load time.
#[derive(Debug, Clone, Default)]
pub struct Banlist {
    /// Entries in config order (retained for logging)
    entries: Vec<String>,
    /// Entries for membership tests
    lookup: HashSet<String>,
}

impl Banlist {
    /// Build from configured entries, kept verbatim.
    pub fn new(entries: Vec<String>) -> Self {
        for entry in &entries {
            match entry.parse::<IpAddr>() {
                Ok(ip) if ip.to_string() != *entry => warn!(
                    "Banlist entry '{}' is not canonical and will never match (use '{}')",
                    entry, ip
                ),
                Ok(_) => {}
                Err(_) => warn!("Banlist entry '{}' is not an IP address", entry),
            }
        }

        let lookup = entries.iter().cloned().collect();
        Self { entries, lookup }
    }

    /// Is this address on the banlist?
    pub fn contains(&self, ip: &IpAddr) -> bool {
        let hit = self.lookup.contains(&ip.to_string());
        debug!("Banlist: {} {}", ip, if hit { "matched" } else { "not listed" });
        hit
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Entries in config order
    pub fn addresses(&self) -> &[String] {
        &self.entries
    }
}

impl From<Vec<String>> for Banlist {
    fn from(entries: Vec<String>) -> Self {
        Self::new(entries)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
