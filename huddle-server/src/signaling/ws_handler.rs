use std::sync::Arc;

use axum::extract::ws::rejection::WebSocketUpgradeRejection;
use axum::extract::ws::{Message, WebSocket, WebSocketUpgrade};
use axum::extract::{Path, State};
use axum::response::{IntoResponse, Response};
use futures::{SinkExt, StreamExt};
use tokio::sync::mpsc;
use tracing::{debug, error, info, warn};

use huddle_core::{Envelope, EnvelopeKind, PeerId, RoomId};

use crate::api::ApiError;
use crate::registry::{PeerHandle, RoomSession};
use crate::server::AppState;

/// GET /api/v1/ws/{id}: admission gate, then the signaling session.
///
/// The room must already exist in the directory; unknown rooms are turned
/// away before the handshake so a bad URL never costs a socket.
pub async fn ws_handler(
    ws: Result<WebSocketUpgrade, WebSocketUpgradeRejection>,
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Response {
    let room_id: RoomId = match id.parse() {
        Ok(room_id) => room_id,
        Err(_) => return ApiError::InvalidRoomId.into_response(),
    };

    match state.directory.room_exists(room_id).await {
        Ok(true) => {}
        Ok(false) => return ApiError::RoomNotFound.into_response(),
        Err(err) => {
            error!("room existence check for {}: {}", room_id, err);
            return ApiError::Directory.into_response();
        }
    }

    let Ok(ws) = ws else {
        return ApiError::UpgradeFailed.into_response();
    };

    ws.on_upgrade(move |socket| handle_socket(socket, room_id, state))
        .into_response()
}

/// One peer's whole stay in a room: join, forward signals, leave.
///
/// All writes to this socket funnel through an unbounded queue drained by a
/// single writer task, so frames from concurrent senders interleave whole
/// and arrive in queue order. Reads stay with this task.
async fn handle_socket(socket: WebSocket, room_id: RoomId, state: AppState) {
    let peer_id = PeerId::new();
    let (mut sink, mut stream) = socket.split();
    let (tx, mut rx) = mpsc::unbounded_channel::<Message>();

    let writer = tokio::spawn(async move {
        while let Some(frame) = rx.recv().await {
            if sink.send(frame).await.is_err() {
                break;
            }
        }
        let _ = sink.close().await;
    });

    let handle = PeerHandle::new(tx);
    let (session, snapshot) = state.registry.join(room_id, peer_id, handle.clone());
    info!("peer {} joined room {}", peer_id, room_id);

    // The joiner hears who it is and who is here before anyone can address
    // it; both frames go through its own queue ahead of any signal.
    if handle.send(&Envelope::welcome(peer_id)).is_err()
        || handle
            .send(&Envelope::existing_peers(snapshot.existing))
            .is_err()
    {
        warn!("peer {} went away during its own join", peer_id);
    }

    let announcement = Envelope::new_peer(peer_id);
    for (member, recipient) in snapshot.recipients {
        if let Err(err) = recipient.send(&announcement) {
            warn!(
                "announcing {} to {} in room {}: {}",
                peer_id, member, room_id, err
            );
        }
    }

    // Forward loop. Any read failure, including a frame that does not
    // parse, ends the stay; everything else is one lock-free lookup and a
    // queue push per signal.
    while let Some(Ok(frame)) = stream.next().await {
        match frame {
            Message::Text(text) => match serde_json::from_str::<Envelope>(&text) {
                Ok(envelope) => forward(&session, peer_id, envelope),
                Err(err) => {
                    debug!("malformed frame from {}: {}", peer_id, err);
                    break;
                }
            },
            Message::Close(_) => break,
            // Binary frames and ping/pong are transport noise here.
            _ => {}
        }
    }

    leave(&state, &session, room_id, peer_id);

    // With the membership entry gone, the last queue senders drop as the
    // farewell fan-out finishes; the writer drains what is queued, closes
    // the socket once, and exits.
    drop(handle);
    let _ = writer.await;
}

/// Deliver one client envelope, if it is a well-addressed signal.
///
/// Everything that cannot be delivered is dropped without comment: wrong
/// type, missing or empty destination, a destination that is not a peer id,
/// a peer that already left, and the sender addressing itself.
fn forward(session: &RoomSession, peer_id: PeerId, envelope: Envelope) {
    if envelope.kind != EnvelopeKind::Signal {
        return;
    }
    let Some(to) = envelope.to.as_deref() else {
        return;
    };
    let Ok(to) = to.parse::<PeerId>() else {
        return;
    };
    if to == peer_id {
        return;
    }
    let Some(recipient) = session.handle_of(&to) else {
        return;
    };

    let forwarded = Envelope::signal(peer_id, to, envelope.payload);
    if let Err(err) = recipient.send(&forwarded) {
        warn!("forwarding signal from {} to {}: {}", peer_id, to, err);
    }
}

/// Publish the departure, then retire the session if this was the last
/// member out.
fn leave(state: &AppState, session: &Arc<RoomSession>, room_id: RoomId, peer_id: PeerId) {
    let snapshot = session.depart(&peer_id);

    let farewell = Envelope::peer_left(peer_id);
    for (member, recipient) in snapshot.recipients {
        if let Err(err) = recipient.send(&farewell) {
            warn!(
                "farewell for {} to {} in room {}: {}",
                peer_id, member, room_id, err
            );
        }
    }

    if snapshot.empty {
        state.registry.retire(&room_id, session);
    }
    info!("peer {} left room {}", peer_id, room_id);
}
