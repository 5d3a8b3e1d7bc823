use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

use axum::extract::ws::Message;
use thiserror::Error;
use tokio::sync::mpsc;

use huddle_core::{Envelope, PeerId};

/// Failure to hand a frame to a peer's writer task.
#[derive(Debug, Error)]
pub enum ForwardError {
    #[error("encode frame: {0}")]
    Encode(#[from] serde_json::Error),
    #[error("peer connection closed")]
    Closed,
}

/// Write half of one peer's socket.
///
/// Cloned freely by whoever needs to reach the peer; the paired receiver is
/// drained by a single writer task owned by the peer's own handler, so
/// frames queued here reach the socket in queue order.
#[derive(Debug, Clone)]
pub struct PeerHandle {
    tx: mpsc::UnboundedSender<Message>,
}

impl PeerHandle {
    pub fn new(tx: mpsc::UnboundedSender<Message>) -> Self {
        Self { tx }
    }

    /// Serialize and queue one frame. Queueing never blocks; it fails only
    /// once the owning handler has torn its writer task down.
    pub fn send(&self, envelope: &Envelope) -> Result<(), ForwardError> {
        let json = serde_json::to_string(envelope)?;
        self.tx
            .send(Message::Text(json.into()))
            .map_err(|_| ForwardError::Closed)
    }
}

/// What a join must announce: the peers that were already present, and the
/// handles to tell about the newcomer.
pub struct JoinSnapshot {
    pub existing: Vec<PeerId>,
    pub recipients: Vec<(PeerId, PeerHandle)>,
}

/// What a departure must announce, plus whether the room emptied out.
pub struct LeaveSnapshot {
    pub recipients: Vec<(PeerId, PeerHandle)>,
    pub empty: bool,
}

/// Per-room membership: peer id to connection handle.
///
/// The mutex guards only the map. Callers take a snapshot under the guard
/// and perform every send after releasing it, so a slow peer never stalls
/// lookups for the rest of the room.
pub struct RoomSession {
    members: Mutex<HashMap<PeerId, PeerHandle>>,
}

impl RoomSession {
    pub(crate) fn new() -> Self {
        Self {
            members: Mutex::new(HashMap::new()),
        }
    }

    // The map carries no multi-step invariant, so a holder that panicked
    // mid-insert left nothing half-applied; keep serving the inner value.
    fn members(&self) -> MutexGuard<'_, HashMap<PeerId, PeerHandle>> {
        self.members.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Insert the joiner and snapshot the membership it must announce to.
    pub fn admit(&self, peer_id: PeerId, handle: PeerHandle) -> JoinSnapshot {
        let mut members = self.members();
        let existing = members.keys().copied().collect();
        let recipients = members
            .iter()
            .map(|(id, handle)| (*id, handle.clone()))
            .collect();
        members.insert(peer_id, handle);

        JoinSnapshot {
            existing,
            recipients,
        }
    }

    /// Remove the leaver and snapshot who must hear about it.
    pub fn depart(&self, peer_id: &PeerId) -> LeaveSnapshot {
        let mut members = self.members();
        members.remove(peer_id);
        let recipients = members
            .iter()
            .map(|(id, handle)| (*id, handle.clone()))
            .collect();
        let empty = members.is_empty();

        LeaveSnapshot { recipients, empty }
    }

    /// Copy of the handle for `peer_id`, if currently a member.
    pub fn handle_of(&self, peer_id: &PeerId) -> Option<PeerHandle> {
        self.members().get(peer_id).cloned()
    }

    pub fn len(&self) -> usize {
        self.members().len()
    }

    pub fn is_empty(&self) -> bool {
        self.members().is_empty()
    }
}
