//! JSON message types for the client-facing WebSocket protocol.
//!
//! The gateway speaks a small request/response protocol: the client submits
//! a mission (starting position, instruction string, grid bounds) as one
//! JSON text frame and receives exactly one JSON text frame back.
//!
//! # JSON discriminant
//!
//! Every message is a JSON object with a `"type"` field that identifies the
//! variant; all other fields are flattened into the same object.  For
//! example:
//!
//! ```json
//! {"type":"ProcessInstructions","initial_position":"1 2 N",
//!  "instructions":"LMLMLMLMM","max_coordinate_x":5,"max_coordinate_y":5}
//! ```
//!
//! Serde's `#[serde(tag = "type")]` attribute handles this automatically.
//!
//! # Why separate request and response enums?
//!
//! The two directions carry different information: clients *send* missions
//! and liveness probes, the gateway *sends* outcomes.  Two distinct enums
//! make it a compile-time error to send a response where a request belongs,
//! and vice versa.

use rover_core::Position;
use serde::{Deserialize, Serialize};

// ── Client → Gateway messages ─────────────────────────────────────────────────

/// All messages a client can send to the gateway over WebSocket.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum RoverRequest {
    /// Client submits a rover mission for simulation.
    ///
    /// All four fields are required.  The position and instruction strings
    /// are passed to the core verbatim — normalization (separator collapsing,
    /// uppercasing) is the core's job, not the client's.
    ProcessInstructions {
        /// Raw starting position, e.g. `"1 2 N"`.
        initial_position: String,
        /// Raw instruction string over the L/R/M alphabet, e.g. `"LMLMLMLMM"`.
        instructions: String,
        /// Largest valid x coordinate of the grid (inclusive).
        max_coordinate_x: i32,
        /// Largest valid y coordinate of the grid (inclusive).
        max_coordinate_y: i32,
    },

    /// Application-level liveness probe.
    ///
    /// Distinct from the WebSocket protocol-level ping/pong, which
    /// tokio-tungstenite handles automatically.
    Ping {
        /// Echo token — returned unchanged in the `Pong` reply.
        token: u64,
    },
}

// ── Gateway → Client messages ─────────────────────────────────────────────────

/// All messages the gateway sends back to a client.
///
/// `Completed` and `Invalid` carry the outcome classification that an HTTP
/// transport would express as 200 vs. 400; the message text comes straight
/// from the core and is safe to show to end users.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum RoverResponse {
    /// The mission validated and was simulated to completion.
    Completed {
        /// Canonical result message, e.g. `"Final position: 1 3 N"`.
        message: String,
        /// The final rover state in structured form.
        position: Position,
    },

    /// The request failed validation; nothing was simulated.
    Invalid {
        /// The deterministic client-visible reason.
        message: String,
    },

    /// Reply to a [`RoverRequest::Ping`] carrying the same token.
    Pong {
        /// Echo token from the corresponding `Ping`.
        token: u64,
    },
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use rover_core::Orientation;

    // ── RoverRequest serialization ────────────────────────────────────────────

    #[test]
    fn test_process_instructions_serializes_with_type_discriminant() {
        // Arrange
        let request = RoverRequest::ProcessInstructions {
            initial_position: "1 2 N".to_string(),
            instructions: "LMLMLMLMM".to_string(),
            max_coordinate_x: 5,
            max_coordinate_y: 5,
        };

        // Act
        let json = serde_json::to_string(&request).unwrap();

        // Assert: the `"type"` field must be present and equal to the variant name
        assert!(json.contains(r#""type":"ProcessInstructions""#));
        assert!(json.contains(r#""initial_position":"1 2 N""#));
        assert!(json.contains(r#""max_coordinate_x":5"#));
    }

    #[test]
    fn test_process_instructions_deserializes_from_client_json() {
        // Arrange: simulate what a client would send
        let json = r#"{
            "type": "ProcessInstructions",
            "initial_position": "4 4 E",
            "instructions": "MM",
            "max_coordinate_x": 5,
            "max_coordinate_y": 5
        }"#;

        // Act
        let request: RoverRequest = serde_json::from_str(json).unwrap();

        // Assert
        match request {
            RoverRequest::ProcessInstructions {
                initial_position,
                instructions,
                max_coordinate_x,
                max_coordinate_y,
            } => {
                assert_eq!(initial_position, "4 4 E");
                assert_eq!(instructions, "MM");
                assert_eq!((max_coordinate_x, max_coordinate_y), (5, 5));
            }
            other => panic!("expected ProcessInstructions, got {other:?}"),
        }
    }

    #[test]
    fn test_request_round_trips() {
        let original = RoverRequest::ProcessInstructions {
            initial_position: "0 0 N".to_string(),
            instructions: "L".to_string(),
            max_coordinate_x: 5,
            max_coordinate_y: 5,
        };
        let json = serde_json::to_string(&original).unwrap();
        let decoded: RoverRequest = serde_json::from_str(&json).unwrap();
        assert_eq!(original, decoded);
    }

    #[test]
    fn test_ping_round_trips() {
        let original = RoverRequest::Ping { token: 0xDEAD_BEEF };
        let json = serde_json::to_string(&original).unwrap();
        let decoded: RoverRequest = serde_json::from_str(&json).unwrap();
        assert_eq!(original, decoded);
    }

    // ── RoverResponse serialization ───────────────────────────────────────────

    #[test]
    fn test_completed_response_round_trips() {
        let original = RoverResponse::Completed {
            message: "Final position: 1 3 N".to_string(),
            position: Position::new(1, 3, Orientation::North),
        };
        let json = serde_json::to_string(&original).unwrap();
        let decoded: RoverResponse = serde_json::from_str(&json).unwrap();
        assert_eq!(original, decoded);
    }

    #[test]
    fn test_completed_response_embeds_the_structured_position() {
        let response = RoverResponse::Completed {
            message: "Final position: 5 4 E".to_string(),
            position: Position::new(5, 4, Orientation::East),
        };
        let json = serde_json::to_string(&response).unwrap();
        assert!(json.contains(r#""position":{"x":5,"y":4,"orientation":"E"}"#));
    }

    #[test]
    fn test_invalid_response_round_trips() {
        let original = RoverResponse::Invalid {
            message: "The X and Y coordinates must be integers.".to_string(),
        };
        let json = serde_json::to_string(&original).unwrap();
        let decoded: RoverResponse = serde_json::from_str(&json).unwrap();
        assert_eq!(original, decoded);
    }

    #[test]
    fn test_pong_round_trips() {
        let original = RoverResponse::Pong { token: 7 };
        let json = serde_json::to_string(&original).unwrap();
        let decoded: RoverResponse = serde_json::from_str(&json).unwrap();
        assert_eq!(original, decoded);
    }

    // ── Malformed input ───────────────────────────────────────────────────────

    #[test]
    fn test_unknown_request_type_returns_error() {
        let json = r#"{"type":"LaunchRocket","fuel":100}"#;
        let result: Result<RoverRequest, _> = serde_json::from_str(json);
        assert!(result.is_err(), "unknown type must produce a deserialization error");
    }

    #[test]
    fn test_missing_type_field_returns_error() {
        let json = r#"{"initial_position":"1 2 N","instructions":"M"}"#;
        let result: Result<RoverRequest, _> = serde_json::from_str(json);
        assert!(result.is_err(), "missing 'type' field must produce a deserialization error");
    }

    #[test]
    fn test_missing_bounds_field_returns_error() {
        // All four mission fields are required; serde rejects partial requests.
        let json = r#"{
            "type": "ProcessInstructions",
            "initial_position": "1 2 N",
            "instructions": "M",
            "max_coordinate_x": 5
        }"#;
        let result: Result<RoverRequest, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }
}
