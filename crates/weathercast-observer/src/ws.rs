//! `WebSocket` handler for the live weather feed.
//!
//! Clients connect to `GET /weather/live` and receive one JSON-encoded
//! [`WeatherRecord`](weathercast_types::WeatherRecord) frame for every
//! successful create or update. The connection is bidirectional: a ping
//! is answered with a pong carrying the identical payload, and any data
//! frame the peer sends is echoed back verbatim -- a loop-back path
//! independent of the record pushes.
//!
//! Each connection registers in the [`ObserverRegistry`] on upgrade and
//! removes itself on its terminal transition (close frame, peer
//! disconnect, or transport failure). A push addressed to a connection
//! that is going away is simply dropped.
//!
//! [`ObserverRegistry`]: crate::registry::ObserverRegistry

use std::sync::Arc;

use axum::extract::ws::{Message, WebSocket};
use axum::extract::{State, WebSocketUpgrade};
use axum::response::IntoResponse;
use tokio::sync::mpsc;
use tracing::debug;

use crate::state::AppState;

/// Upgrade an HTTP request to a `WebSocket` connection and join the live
/// feed.
///
/// # Route
///
/// `GET /weather/live`
pub async fn weather_live(
    ws: WebSocketUpgrade,
    State(state): State<Arc<AppState>>,
) -> impl IntoResponse {
    ws.on_upgrade(|socket| handle_socket(socket, state))
}

/// Drive one live connection from upgrade to close.
///
/// The socket task owns both halves of the conversation: it drains the
/// outbound queue the notifier feeds, and it answers the peer's control
/// and data frames. Deregistration happens exactly once, on exit.
async fn handle_socket(mut socket: WebSocket, state: Arc<AppState>) {
    let (sender, mut outbound) = mpsc::unbounded_channel();
    let id = state.observers.register(sender).await;
    debug!(observer = %id, "live observer connected");

    loop {
        tokio::select! {
            // A committed record pushed by the notifier.
            frame = outbound.recv() => {
                match frame {
                    Some(json) => {
                        if socket.send(Message::Text(json.into())).await.is_err() {
                            debug!(observer = %id, "live observer disconnected (push failed)");
                            break;
                        }
                    }
                    // The registry entry is gone; nothing more to forward.
                    None => break,
                }
            }
            // A frame from the peer.
            msg = socket.recv() => {
                match msg {
                    Some(Ok(Message::Ping(payload))) => {
                        if socket.send(Message::Pong(payload)).await.is_err() {
                            debug!(observer = %id, "live observer disconnected (pong failed)");
                            break;
                        }
                    }
                    // Echo data frames back verbatim to the same peer.
                    Some(Ok(Message::Text(text))) => {
                        if socket.send(Message::Text(text)).await.is_err() {
                            debug!(observer = %id, "live observer disconnected (echo failed)");
                            break;
                        }
                    }
                    Some(Ok(Message::Binary(bytes))) => {
                        if socket.send(Message::Binary(bytes)).await.is_err() {
                            debug!(observer = %id, "live observer disconnected (echo failed)");
                            break;
                        }
                    }
                    Some(Ok(Message::Close(_))) | None => {
                        debug!(observer = %id, "live observer closed");
                        break;
                    }
                    Some(Ok(Message::Pong(_))) => {
                        // Unsolicited pongs carry no obligation.
                    }
                    Some(Err(err)) => {
                        debug!(observer = %id, "live observer transport error: {err}");
                        break;
                    }
                }
            }
        }
    }

    let _ = state.observers.deregister(id).await;
    debug!(observer = %id, "live observer deregistered");
}
