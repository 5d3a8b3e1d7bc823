use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

/// Body of every non-2xx REST response.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub detail: String,
}

/// Client-facing failures. The display string is the `detail` the client
/// sees, so keep these short and stable.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("invalid room ID")]
    InvalidRoomId,
    #[error("room not found")]
    RoomNotFound,
    #[error("db error")]
    Directory,
    #[error("ws upgrade failed")]
    UpgradeFailed,
    #[error("something wrong")]
    Internal,
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            Self::InvalidRoomId => StatusCode::BAD_REQUEST,
            Self::RoomNotFound => StatusCode::NOT_FOUND,
            Self::Directory | Self::UpgradeFailed | Self::Internal => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            detail: self.to_string(),
        };
        (self.status(), Json(body)).into_response()
    }
}
