//! Infrastructure layer for rover-gateway.
//!
//! Everything that touches the network lives here, behind the pure
//! application and domain layers.

pub mod ws_server;

pub use ws_server::run_server;
