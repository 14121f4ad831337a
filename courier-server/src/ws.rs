//! Websocket document feed.
//!
//! A connected client is subscribed to its own user document and receives
//! the full JSON snapshot on connect and after every committed write.
//! Inbound frames other than close are ignored; the socket is a one-way
//! feed. Presence (`last_seen`) is stamped on connect and on disconnect.

use crate::AppState;

use courier_core::UserDocument;
use courier_store::StoreError;

use std::panic::Location;

use axum::{
    extract::{
        State,
        ws::{Message, WebSocket, WebSocketUpgrade},
    },
    http::{HeaderMap, StatusCode},
    response::Response,
};
use chrono::Utc;
use error_location::ErrorLocation;
use futures::{
    SinkExt, StreamExt,
    stream::{SplitSink, SplitStream},
};
use thiserror::Error;
use uuid::Uuid;

#[derive(Error, Debug)]
pub enum WsError {
    #[error("Store error: {source} {location}")]
    Store {
        source: StoreError,
        location: ErrorLocation,
    },

    #[error("Socket send failed: {source} {location}")]
    Send {
        source: axum::Error,
        location: ErrorLocation,
    },

    #[error("Snapshot serialization failed: {source} {location}")]
    Serialize {
        source: serde_json::Error,
        location: ErrorLocation,
    },
}

impl From<StoreError> for WsError {
    #[track_caller]
    fn from(source: StoreError) -> Self {
        Self::Store {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<serde_json::Error> for WsError {
    #[track_caller]
    fn from(source: serde_json::Error) -> Self {
        Self::Serialize {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

/// WebSocket upgrade handler
pub async fn handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    ws: WebSocketUpgrade,
) -> Result<Response, StatusCode> {
    let user_id = authenticate(&headers, &state)?;
    log::debug!("WebSocket upgrade request from user {}", user_id);

    Ok(ws.on_upgrade(move |socket| handle_socket(socket, user_id, state)))
}

/// Extract the principal for the session, mirroring the REST extractor
fn authenticate(headers: &HeaderMap, state: &AppState) -> Result<Uuid, StatusCode> {
    if let Some(ref validator) = state.jwt_validator {
        let header = headers.get("authorization").and_then(|h| h.to_str().ok());
        let claims = validator.validate_header(header).map_err(|e| {
            log::warn!("JWT validation failed: {}", e);
            StatusCode::UNAUTHORIZED
        })?;
        return claims.user_id().map_err(|e| {
            log::warn!("JWT subject rejected: {}", e);
            StatusCode::UNAUTHORIZED
        });
    }

    // Single-user mode: honor X-User-Id, else the configured principal
    if let Some(raw) = headers.get("x-user-id").and_then(|h| h.to_str().ok()) {
        return Uuid::parse_str(raw).map_err(|_| {
            log::warn!("Invalid UUID in X-User-Id header: {}", raw);
            StatusCode::BAD_REQUEST
        });
    }

    Ok(state.anonymous_user_id)
}

/// Handle the connection lifecycle after upgrade
async fn handle_socket(socket: WebSocket, user_id: Uuid, state: AppState) {
    log::info!("WebSocket session established for user {}", user_id);
    state.metrics.session_established();

    if let Err(e) = stream_snapshots(socket, user_id, &state).await {
        log::error!("WebSocket session for user {} failed: {}", user_id, e);
        state.metrics.error_occurred("websocket");
    }

    // Stamp presence on the way out; the watcher pushes it to any
    // remaining subscribers.
    if let Err(e) = state.users.update_last_seen(user_id, Utc::now()).await {
        log::error!("Failed to stamp last_seen for user {}: {}", user_id, e);
    }

    state.metrics.session_closed();
    log::info!("WebSocket session closed for user {}", user_id);
}

async fn stream_snapshots(
    socket: WebSocket,
    user_id: Uuid,
    state: &AppState,
) -> Result<(), WsError> {
    state.users.update_last_seen(user_id, Utc::now()).await?;

    let mut rx = state.users.watch(user_id).await?;
    let (mut sender, mut receiver) = socket.split();

    // Initial snapshot straight away
    let snapshot = rx.borrow_and_update().clone();
    send_snapshot(&mut sender, &snapshot).await?;
    state.metrics.snapshot_sent();

    loop {
        tokio::select! {
            changed = rx.changed() => {
                if changed.is_err() {
                    log::debug!("Watch channel closed for user {}", user_id);
                    break;
                }
                let snapshot = rx.borrow_and_update().clone();
                send_snapshot(&mut sender, &snapshot).await?;
                state.metrics.snapshot_sent();
            }
            closed = wait_for_close(&mut receiver) => {
                if let Err(e) = closed {
                    return Err(WsError::Send {
                        source: e,
                        location: ErrorLocation::from(Location::caller()),
                    });
                }
                log::debug!("Client closed websocket for user {}", user_id);
                break;
            }
        }
    }

    Ok(())
}

async fn send_snapshot(
    sender: &mut SplitSink<WebSocket, Message>,
    snapshot: &Option<UserDocument>,
) -> Result<(), WsError> {
    let text = serde_json::to_string(snapshot)?;
    sender
        .send(Message::Text(text.into()))
        .await
        .map_err(|e| WsError::Send {
            source: e,
            location: ErrorLocation::from(Location::caller()),
        })
}

/// Drain inbound frames until the client closes or the stream errors
async fn wait_for_close(receiver: &mut SplitStream<WebSocket>) -> Result<(), axum::Error> {
    while let Some(frame) = receiver.next().await {
        match frame {
            Ok(Message::Close(_)) => return Ok(()),
            Ok(_) => {}
            Err(e) => return Err(e),
        }
    }
    Ok(())
}
