use std::collections::HashSet;
use std::sync::{Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;

use huddle_core::RoomId;

use super::{DirectoryError, RoomDirectory};

/// In-memory directory with the same contract as the Postgres one. Used by
/// tests and useful for running the hub without a database.
#[derive(Debug, Default)]
pub struct InMemoryDirectory {
    rooms: Mutex<HashSet<RoomId>>,
}

impl InMemoryDirectory {
    fn rooms(&self) -> MutexGuard<'_, HashSet<RoomId>> {
        self.rooms.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[async_trait]
impl RoomDirectory for InMemoryDirectory {
    async fn create_room_by_id(&self, id: RoomId) -> Result<(), DirectoryError> {
        if !self.rooms().insert(id) {
            return Err(DirectoryError::NotInserted);
        }
        Ok(())
    }

    async fn delete_room_by_id(&self, id: RoomId) -> Result<(), DirectoryError> {
        if !self.rooms().remove(&id) {
            return Err(DirectoryError::NotDeleted);
        }
        Ok(())
    }

    async fn room_exists(&self, id: RoomId) -> Result<bool, DirectoryError> {
        Ok(self.rooms().contains(&id))
    }
}
