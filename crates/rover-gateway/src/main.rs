//! Rover gateway — entry point.
//!
//! This binary accepts WebSocket connections from clients, parses each JSON
//! request frame, runs the rover simulation via `rover-core`, and replies
//! with the outcome.  All simulation logic lives in the core; this process
//! is transport plumbing only.
//!
//! # Usage
//!
//! ```text
//! rover-gateway [OPTIONS]
//!
//! Options:
//!   --port <PORT>   WebSocket listener port [default: 24900]
//!   --bind <ADDR>   IP address to bind to [default: 0.0.0.0]
//! ```
//!
//! # Environment variable overrides
//!
//! CLI args take precedence when both are present.
//!
//! | Variable             | Default   | Description             |
//! |----------------------|-----------|-------------------------|
//! | `ROVER_GATEWAY_PORT` | `24900`   | WebSocket listener port |
//! | `ROVER_GATEWAY_BIND` | `0.0.0.0` | Listener bind address   |
//!
//! The log level is controlled by `RUST_LOG` (e.g. `RUST_LOG=debug`), with
//! `info` as the fallback.

use std::net::SocketAddr;
use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc,
};

use anyhow::Context;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use rover_gateway::domain::GatewayConfig;
use rover_gateway::infrastructure::run_server;

// ── CLI argument definitions ──────────────────────────────────────────────────

/// Rover instruction service gateway.
///
/// Accepts JSON-over-WebSocket requests, validates and simulates them
/// through the rover core, and replies with the final position or the
/// validation failure reason.
#[derive(Debug, Parser)]
#[command(
    name = "rover-gateway",
    about = "JSON-over-WebSocket gateway for the rover instruction service",
    version
)]
struct Cli {
    /// TCP port for the WebSocket server to listen on.
    #[arg(long, default_value_t = 24900, env = "ROVER_GATEWAY_PORT")]
    port: u16,

    /// IP address to bind the WebSocket server to.
    ///
    /// Use `0.0.0.0` to accept connections from any network interface, or
    /// `127.0.0.1` to accept only local connections.
    #[arg(long, default_value = "0.0.0.0", env = "ROVER_GATEWAY_BIND")]
    bind: String,
}

impl Cli {
    /// Converts the parsed CLI arguments into a [`GatewayConfig`].
    ///
    /// # Errors
    ///
    /// Returns an error if `--bind` is not a valid IP address.
    fn into_gateway_config(self) -> anyhow::Result<GatewayConfig> {
        let bind_addr: SocketAddr = format!("{}:{}", self.bind, self.port)
            .parse()
            .with_context(|| format!("invalid bind address: '{}:{}'", self.bind, self.port))?;

        Ok(GatewayConfig { bind_addr })
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialise structured logging.  Level is overridden by `RUST_LOG`.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let config = cli.into_gateway_config()?;

    info!("rover gateway starting on {}", config.bind_addr);

    // Shutdown flag shared with the accept loop.  The Ctrl-C handler clears
    // it; the accept loop polls it every 200 ms.
    let running = Arc::new(AtomicBool::new(true));
    let running_clone = Arc::clone(&running);

    tokio::spawn(async move {
        match tokio::signal::ctrl_c().await {
            Ok(()) => {
                info!("received Ctrl+C — initiating graceful shutdown");
                running_clone.store(false, Ordering::Relaxed);
            }
            Err(e) => {
                tracing::error!("failed to listen for Ctrl+C signal: {e}");
            }
        }
    });

    run_server(config, running).await?;

    info!("rover gateway stopped");
    Ok(())
}

// ── Tests ─────────────────────────────────────────────────────────────────────
