//! rover-gateway library crate.
//!
//! A thin JSON-over-WebSocket gateway for the rover instruction service.
//! The gateway owns transport concerns only — request extraction, outcome
//! classification, serialization — and delegates every piece of real logic
//! to `rover-core`.
//!
//! # Architecture
//!
//! ```text
//! Client (JSON over WebSocket)
//!         ↕
//! [rover-gateway]
//!   ├── domain/           Pure types: JSON message enums, GatewayConfig
//!   ├── application/      Dispatch: request → rover-core → response
//!   └── infrastructure/
//!         └── ws_server/  WebSocket accept loop (tokio-tungstenite)
//!         ↕
//! rover-core  (pure, synchronous simulation)
//! ```
//!
//! # Layer rules
//!
//! - `domain` has no external dependencies (no I/O, no async, no frameworks).
//! - `application` depends on `domain` and `rover-core` only.
//! - `infrastructure` depends on all other layers plus `tokio` and
//!   `tungstenite`.
//!
//! Separating *what the gateway does* (domain + application) from *how it
//! does it* (infrastructure) keeps the dispatch logic testable without a
//! real network and leaves the transport swappable without touching it.

/// Domain layer: pure protocol and configuration types (no I/O).
pub mod domain;

/// Application layer: request dispatch logic.
pub mod application;

/// Infrastructure layer: the WebSocket server.
pub mod infrastructure;
