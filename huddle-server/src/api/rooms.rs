use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;
use tracing::error;

use huddle_core::RoomId;

use crate::api::ApiError;
use crate::server::AppState;

#[derive(Debug, Serialize)]
pub struct CreatedRoom {
    pub room_id: RoomId,
}

/// POST /api/v1/rooms: mint a room id and record it in the directory.
pub async fn create_room(State(state): State<AppState>) -> Result<Json<CreatedRoom>, ApiError> {
    let room_id = RoomId::new();
    state
        .directory
        .create_room_by_id(room_id)
        .await
        .map_err(|err| {
            error!("create room: {}", err);
            ApiError::Internal
        })?;

    Ok(Json(CreatedRoom { room_id }))
}

/// DELETE /api/v1/rooms/{id}: drop the room record. Live sessions are not
/// torn down; their peers just can't be joined by newcomers anymore.
pub async fn delete_room(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let room_id: RoomId = id.parse().map_err(|_| ApiError::InvalidRoomId)?;
    state
        .directory
        .delete_room_by_id(room_id)
        .await
        .map_err(|err| {
            error!("delete room {}: {}", room_id, err);
            ApiError::Internal
        })?;

    Ok(StatusCode::NO_CONTENT)
}
