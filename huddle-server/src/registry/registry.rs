use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tracing::{debug, info};

use huddle_core::{PeerId, RoomId};

use super::session::{JoinSnapshot, PeerHandle, RoomSession};

/// Process-wide map of live rooms.
///
/// One instance is created at startup and shared by every connection
/// handler; tests construct their own, so nothing here is a hidden
/// singleton. Lock order is always registry first, then session, and
/// neither lock is ever held across I/O.
pub struct RoomRegistry {
    rooms: Mutex<HashMap<RoomId, Arc<RoomSession>>>,
}

impl RoomRegistry {
    pub fn new() -> Self {
        Self {
            rooms: Mutex::new(HashMap::new()),
        }
    }

    // Same poisoning stance as the session map: single-key operations
    // cannot be observed half-applied.
    fn rooms(&self) -> MutexGuard<'_, HashMap<RoomId, Arc<RoomSession>>> {
        self.rooms.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Enter `room_id` as `peer_id`, creating the session on first join.
    ///
    /// The member insert happens while the registry lock is still held
    /// (registry, then session), so a concurrent retirement can never
    /// observe a session that has been handed out but not yet joined.
    /// Without that, a last-leave racing a fresh join could delete the
    /// session between the lookup and the insert, stranding the joiner in
    /// a room no longer reachable through the registry.
    pub fn join(
        &self,
        room_id: RoomId,
        peer_id: PeerId,
        handle: PeerHandle,
    ) -> (Arc<RoomSession>, JoinSnapshot) {
        let mut rooms = self.rooms();
        let session = rooms
            .entry(room_id)
            .or_insert_with(|| {
                info!("creating session for room {}", room_id);
                Arc::new(RoomSession::new())
            })
            .clone();
        let snapshot = session.admit(peer_id, handle);

        (session, snapshot)
    }

    /// Drop the registry entry for `room_id` if `session` is still the
    /// registered session for that room and nobody has re-joined it.
    ///
    /// Both conditions are re-checked under the registry lock: the caller's
    /// emptiness observation is stale by the time it gets here, and the
    /// entry itself may already belong to a successor session. A lost race
    /// either way is a no-op. A removed session is never re-inserted; the
    /// next arrival for the same room id gets a fresh one.
    pub fn retire(&self, room_id: &RoomId, session: &Arc<RoomSession>) {
        let mut rooms = self.rooms();
        let Some(current) = rooms.get(room_id) else {
            return;
        };
        if !Arc::ptr_eq(current, session) {
            debug!("retirement of room {} lost to a successor session", room_id);
            return;
        }
        if session.is_empty() {
            rooms.remove(room_id);
            info!("retired empty session for room {}", room_id);
        }
    }

    /// Number of live sessions.
    pub fn len(&self) -> usize {
        self.rooms().len()
    }

    pub fn is_empty(&self) -> bool {
        self.rooms().is_empty()
    }

    pub fn contains(&self, room_id: &RoomId) -> bool {
        self.rooms().contains_key(room_id)
    }
}

impl Default for RoomRegistry {
    fn default() -> Self {
        Self::new()
    }
}
