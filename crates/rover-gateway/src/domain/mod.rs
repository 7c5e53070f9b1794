//! Domain layer for rover-gateway.
//!
//! Pure types with no dependencies on I/O, networking, or async runtimes:
//! the JSON message enums that define the client-facing protocol and the
//! gateway's runtime configuration.  Anything that can block, fail due to
//! external state, or read the environment lives in the infrastructure
//! layer instead.

pub mod config;
pub mod messages;

// Re-export the most commonly needed types at the domain module boundary
// so callers can write `domain::GatewayConfig` instead of the longer path.
pub use config::GatewayConfig;
pub use messages::{RoverRequest, RoverResponse};
