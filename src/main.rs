//! Ban Allowlist CLI
//!
//! Loads the config, runs setup against an in-memory ban manager and pushes
//! ban requests through it. Useful to check a banlist and the notification
//! endpoints before deploying.
//!
//! Usage:
//!   ban-allowlist --config ban_allowlist.toml check
//!   ban-allowlist --config ban_allowlist.toml ban 10.0.0.5 10.0.0.9
//!   ban-allowlist --no-ban-manager ban 10.0.0.5
//!
//! Created: 2026-10-17

use anyhow::{Context, Result};
use ban_allowlist::{
    setup, BanSink, Banlist, Config, MemoryBanManager, NotificationDispatcher, SetupOutcome,
};
use clap::{Parser, Subcommand};
use std::net::IpAddr;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::{fmt, EnvFilter};

/// Ban Allowlist - filter IP bans and notify ban/kill endpoints
#[derive(Parser)]
#[command(name = "ban-allowlist")]
struct Args {
    /// Path to the TOML config file
    #[arg(short, long, env = "BAN_ALLOWLIST_CONFIG", default_value = "ban_allowlist.toml")]
    config: PathBuf,

    /// Run as if the host had IP banning disabled
    #[arg(long)]
    no_ban_manager: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Validate the config and print the banlist and endpoints
    Check,
    /// Submit ban requests for these addresses
    Ban {
        #[arg(required = true)]
        ips: Vec<IpAddr>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();

    // Initialize logging
    fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let args = Args::parse();

    let config = Config::load(&args.config)
        .with_context(|| format!("Failed to load config: {}", args.config.display()))?;
    info!("Config file: {}", args.config.display());

    match args.command {
        Command::Check => check(&config),
        Command::Ban { ips } => ban(&config, args.no_ban_manager, ips).await,
    }
}

fn check(config: &Config) -> Result<()> {
    let banlist = Banlist::new(config.ip_addresses());

    println!("Banlist ({} entries):", banlist.len());
    for ip in banlist.addresses() {
        println!("  {}", ip);
    }
    println!("Ban endpoint:  {}", config.notifier.ban_url);
    println!("Kill endpoint: {}", config.notifier.kill_url);
    println!("Timeout:       {}s", config.notifier.timeout_secs);
    println!(
        "TLS verify:    {}",
        if config.notifier.accept_invalid_certs { "disabled" } else { "enabled" }
    );
    Ok(())
}

async fn ban(config: &Config, no_ban_manager: bool, ips: Vec<IpAddr>) -> Result<()> {
    let manager = Arc::new(MemoryBanManager::new());
    let host_manager = if no_ban_manager { None } else { Some(manager.clone()) };

    let dispatcher = NotificationDispatcher::from_config(&config.notifier)
        .context("Failed to build notification client")?;
    let outcome = setup(host_manager, config, dispatcher);
    if let SetupOutcome::Filtered(filter) = &outcome {
        info!("Ban filter installed for {} addresses", filter.banlist().len());
    }

    let Some(sink) = outcome.into_sink() else {
        warn!("No ban manager, {} ban requests ignored", ips.len());
        return Ok(());
    };

    for ip in ips {
        sink.add_ban(ip)
            .await
            .with_context(|| format!("Ban manager failed for {}", ip))?;
    }

    let bans = manager.bans().await;
    println!("Banned ({}):", bans.len());
    for record in bans {
        println!("  {:<40} {}", record.ip, record.banned_at.to_rfc3339());
    }
    Ok(())
}
