//! Gateway configuration types.
//!
//! [`GatewayConfig`] is the single source of truth for all runtime settings.
//! It is populated from CLI arguments (preferred for production) or from
//! defaults (useful for local development and tests).
//!
//! Keeping configuration as a plain struct — no global state, no environment
//! variable reads inside the domain — makes the gateway easy to embed in
//! tests; the binary entry point is responsible for populating it from CLI
//! args or environment variables.

use std::net::SocketAddr;

/// All runtime configuration for the WebSocket gateway.
///
/// Build this struct once at startup and share it across session tasks.
///
/// # Example
///
/// ```rust
/// use rover_gateway::domain::GatewayConfig;
///
/// // Defaults are suitable for local development:
/// let cfg = GatewayConfig::default();
/// assert_eq!(cfg.bind_addr.port(), 24900);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GatewayConfig {
    /// The address and port the WebSocket server binds to.
    ///
    /// `0.0.0.0` accepts connections from any network interface (LAN +
    /// localhost).  Set to `127.0.0.1` to accept only local connections.
    pub bind_addr: SocketAddr,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            // Safe to unwrap: a compile-time-known valid socket address string.
            bind_addr: "0.0.0.0:24900".parse().unwrap(),
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
