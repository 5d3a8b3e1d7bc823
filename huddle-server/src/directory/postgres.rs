use async_trait::async_trait;
use sqlx::PgPool;

use huddle_core::RoomId;

use super::{DirectoryError, RoomDirectory};

/// Room directory backed by the `rooms` table.
pub struct PgDirectory {
    pool: PgPool,
}

impl PgDirectory {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RoomDirectory for PgDirectory {
    async fn create_room_by_id(&self, id: RoomId) -> Result<(), DirectoryError> {
        let result = sqlx::query("insert into rooms (id) values ($1)")
            .bind(id.0)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() != 1 {
            return Err(DirectoryError::NotInserted);
        }
        Ok(())
    }

    async fn delete_room_by_id(&self, id: RoomId) -> Result<(), DirectoryError> {
        let result = sqlx::query("delete from rooms where id = $1")
            .bind(id.0)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DirectoryError::NotDeleted);
        }
        Ok(())
    }

    async fn room_exists(&self, id: RoomId) -> Result<bool, DirectoryError> {
        let exists: bool =
            sqlx::query_scalar("select exists (select 1 from rooms where id = $1)")
                .bind(id.0)
                .fetch_one(&self.pool)
                .await?;

        Ok(exists)
    }
}
