//! Request dispatch: the translation layer between the wire protocol and
//! the core.
//!
//! [`handle_request`] is a pure, total function — every request maps to
//! exactly one response, validation failures included.  It owns the
//! outcome-to-status classification (the WebSocket analog of an HTTP
//! 200/400 split); the core owns everything else.  No I/O, no async, no
//! state, which keeps it unit-testable without a socket in sight.

use crate::domain::messages::{RoverRequest, RoverResponse};

/// Maps one client request to its response.
///
/// Mission requests are handed to [`rover_core::process_instructions`]
/// verbatim; the core's success outcome becomes [`RoverResponse::Completed`]
/// and any validation error becomes [`RoverResponse::Invalid`] carrying the
/// core's message text unchanged.
///
/// # Example
///
/// ```rust
/// use rover_gateway::application::handle_request;
/// use rover_gateway::domain::{RoverRequest, RoverResponse};
///
/// let response = handle_request(RoverRequest::Ping { token: 42 });
/// assert_eq!(response, RoverResponse::Pong { token: 42 });
/// ```
pub fn handle_request(request: RoverRequest) -> RoverResponse {
    match request {
        RoverRequest::ProcessInstructions {
            initial_position,
            instructions,
            max_coordinate_x,
            max_coordinate_y,
        } => match rover_core::process_instructions(
            &initial_position,
            &instructions,
            max_coordinate_x,
            max_coordinate_y,
        ) {
            Ok(outcome) => RoverResponse::Completed {
                message: outcome.message(),
                position: outcome.position,
            },
            Err(error) => RoverResponse::Invalid {
                message: error.to_string(),
            },
        },

        RoverRequest::Ping { token } => RoverResponse::Pong { token },
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
