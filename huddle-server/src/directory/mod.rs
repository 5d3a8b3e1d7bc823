use async_trait::async_trait;
use thiserror::Error;

use huddle_core::RoomId;

mod memory;
mod postgres;

pub use memory::*;
pub use postgres::*;

/// Failure talking to or updating the room directory.
#[derive(Debug, Error)]
pub enum DirectoryError {
    #[error("room was not inserted")]
    NotInserted,
    #[error("room was not deleted")]
    NotDeleted,
    #[error("backend error: {0}")]
    Backend(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl From<sqlx::Error> for DirectoryError {
    fn from(err: sqlx::Error) -> Self {
        Self::Backend(Box::new(err))
    }
}

/// The persistent record of which room ids may host sessions.
///
/// The hub consults this store on every admission and never caches the
/// answer; it does not own the store's lifecycle. Implementations are
/// interchangeable, which is what lets tests swap the Postgres one for an
/// in-memory double.
#[async_trait]
pub trait RoomDirectory: Send + Sync {
    /// Record `id`. Fails if no row was inserted.
    async fn create_room_by_id(&self, id: RoomId) -> Result<(), DirectoryError>;

    /// Remove `id`. Fails if no row was deleted.
    async fn delete_room_by_id(&self, id: RoomId) -> Result<(), DirectoryError>;

    /// Existence predicate for `id`.
    async fn room_exists(&self, id: RoomId) -> Result<bool, DirectoryError>;
}
