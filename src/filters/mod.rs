//! Ban filtering
//!
//! Banlist membership and the `BanFilter` decorator that gates a ban sink.
//!
//! Created: 2026-10-17

pub mod banlist;
pub mod interceptor;

pub use banlist::Banlist;
pub use interceptor::BanFilter;
