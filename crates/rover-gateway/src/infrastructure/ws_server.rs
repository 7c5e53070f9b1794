//! WebSocket server: accept loop and per-session request handling.
//!
//! This module is responsible for:
//!
//! 1. Binding a TCP listener on the configured address.
//! 2. Accepting incoming TCP connections and upgrading them to WebSocket
//!    sessions.
//! 3. Running each session's frame loop: read a JSON text frame, parse it
//!    into a [`RoverRequest`], dispatch it, and write the JSON response.
//! 4. Gracefully shutting down when the `running` flag is cleared.
//!
//! Each session runs in its own Tokio task, so one slow client never blocks
//! others.  Because the core computation is pure and synchronous, a session
//! needs no channels or split streams — it strictly alternates read and
//! write on the same stream.

use std::net::SocketAddr;
use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc,
};
use std::time::Duration;

use anyhow::Context;
use futures_util::{SinkExt, StreamExt};
use tokio::net::{TcpListener, TcpStream};
use tokio::time::timeout;
use tokio_tungstenite::{
    accept_async,
    tungstenite::{Error as WsError, Message as WsMessage},
};
use tracing::{debug, error, info, warn};

use crate::application::handle_request;
use crate::domain::config::GatewayConfig;
use crate::domain::messages::{RoverRequest, RoverResponse};

// ── Public API ────────────────────────────────────────────────────────────────

/// Runs the main WebSocket accept loop until `running` is set to `false`.
///
/// Binds a TCP listener on `config.bind_addr` and accepts incoming
/// connections in a loop, handing each one to a dedicated Tokio task.
///
/// # Errors
///
/// Returns an error if the TCP listener cannot be bound (e.g., the port is
/// already in use or the process lacks permission to bind).
pub async fn run_server(config: GatewayConfig, running: Arc<AtomicBool>) -> anyhow::Result<()> {
    let listener = TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("failed to bind WebSocket listener on {}", config.bind_addr))?;

    info!("rover gateway listening on {}", config.bind_addr);

    loop {
        // Check the shutdown flag before each accept attempt.
        if !running.load(Ordering::Relaxed) {
            info!("shutdown flag set; stopping accept loop");
            break;
        }

        // A short timeout on accept() lets the loop poll the `running` flag
        // even when no clients are connecting.
        let accept_result = timeout(Duration::from_millis(200), listener.accept()).await;

        match accept_result {
            Ok(Ok((stream, peer_addr))) => {
                info!("new client connection from {peer_addr}");
                tokio::spawn(async move {
                    handle_client_session(stream, peer_addr).await;
                });
            }
            Ok(Err(e)) => {
                // Transient accept error (e.g., too many open file descriptors).
                // Log it and keep serving rather than crashing the gateway.
                error!("accept error: {e}");
            }
            Err(_) => {
                // Timeout — no new connection in the last 200 ms.
                // Loop back to check the `running` flag.
            }
        }
    }

    Ok(())
}

// ── Per-session handler ───────────────────────────────────────────────────────

/// Top-level handler for a single client session.
///
/// Wraps [`run_session`] and logs the outcome.  The outer/inner function
/// pair lets `run_session` use `?` for clean error propagation while errors
/// are logged in exactly one place.
async fn handle_client_session(raw_stream: TcpStream, peer_addr: SocketAddr) {
    match run_session(raw_stream, peer_addr).await {
        Ok(()) => info!("session {peer_addr} closed normally"),
        Err(e) => warn!("session {peer_addr} closed with error: {e:#}"),
    }
}

/// Runs the complete lifecycle of one client session.
///
/// Completes the WebSocket handshake, then serves request frames until the
/// client disconnects.  A malformed frame is answered with a
/// [`RoverResponse::Invalid`] and the session stays open — one bad message
/// never tears down the connection.
///
/// # Errors
///
/// Returns an error if the WebSocket handshake fails or a response frame
/// cannot be written.
async fn run_session(raw_stream: TcpStream, peer_addr: SocketAddr) -> anyhow::Result<()> {
    // `accept_async` performs the HTTP Upgrade handshake; afterwards the
    // stream speaks WebSocket frames.
    let mut ws_stream = accept_async(raw_stream)
        .await
        .with_context(|| format!("WebSocket handshake failed with {peer_addr}"))?;

    info!("WebSocket session established: {peer_addr}");

    loop {
        // `next()` returns `None` when the stream is closed.
        let ws_msg = match ws_stream.next().await {
            Some(Ok(msg)) => msg,
            Some(Err(WsError::ConnectionClosed | WsError::Protocol(_))) => {
                debug!("session {peer_addr}: WebSocket closed normally");
                break;
            }
            Some(Err(e)) => {
                warn!("session {peer_addr}: WebSocket error: {e}");
                break;
            }
            None => {
                debug!("session {peer_addr}: client stream ended");
                break;
            }
        };

        match ws_msg {
            WsMessage::Text(json_str) => {
                let response = match serde_json::from_str::<RoverRequest>(&json_str) {
                    Ok(request) => {
                        debug!(
                            "session {peer_addr}: dispatching {}",
                            request_type_name(&request)
                        );
                        handle_request(request)
                    }
                    Err(e) => {
                        // Answer malformed frames instead of dropping them so
                        // the client always learns why nothing happened.
                        warn!("session {peer_addr}: invalid JSON from client: {e}");
                        RoverResponse::Invalid {
                            message: format!("Malformed request: {e}."),
                        }
                    }
                };

                let json_reply = serde_json::to_string(&response)
                    .context("response serialization cannot fail for these types")?;
                ws_stream
                    .send(WsMessage::Text(json_reply))
                    .await
                    .with_context(|| format!("session {peer_addr}: failed to send response"))?;
            }

            WsMessage::Binary(_) => {
                // The client-facing protocol is JSON-only.
                warn!("session {peer_addr}: unexpected binary WebSocket frame (ignored)");
            }

            WsMessage::Ping(data) => {
                // Protocol-level ping; tokio-tungstenite queues the Pong reply
                // automatically on the next write.
                debug!("session {peer_addr}: WebSocket ping ({} bytes)", data.len());
            }

            WsMessage::Pong(_) => {
                debug!("session {peer_addr}: WebSocket pong received");
            }

            WsMessage::Close(_) => {
                debug!("session {peer_addr}: WebSocket Close frame received");
                break;
            }

            WsMessage::Frame(_) => {
                debug!("session {peer_addr}: raw frame (ignored)");
            }
        }
    }

    Ok(())
}

// ── Helper ────────────────────────────────────────────────────────────────────

/// Returns a short type-name string for a [`RoverRequest`] variant, for use
/// in debug log lines without echoing the full payload.
fn request_type_name(request: &RoverRequest) -> &'static str {
    match request {
        RoverRequest::ProcessInstructions { .. } => "ProcessInstructions",
        RoverRequest::Ping { .. } => "Ping",
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_type_name_process_instructions() {
        let request = RoverRequest::ProcessInstructions {
            initial_position: "1 2 N".to_string(),
            instructions: "M".to_string(),
            max_coordinate_x: 5,
            max_coordinate_y: 5,
        };
        assert_eq!(request_type_name(&request), "ProcessInstructions");
    }

    #[test]
    fn test_request_type_name_ping() {
        let request = RoverRequest::Ping { token: 1 };
        assert_eq!(request_type_name(&request), "Ping");
    }
}
