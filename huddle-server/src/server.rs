use std::sync::Arc;
use std::time::Duration;

use axum::routing::{delete, get, post};
use axum::Router;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::api::{create_room, delete_room, get_info};
use crate::directory::RoomDirectory;
use crate::registry::RoomRegistry;
use crate::signaling::ws_handler;

/// Everything a handler needs, created once at startup (or per test) and
/// cloned into each request. No hidden globals.
#[derive(Clone)]
pub struct AppState {
    pub registry: Arc<RoomRegistry>,
    pub directory: Arc<dyn RoomDirectory>,
}

impl AppState {
    pub fn new(directory: Arc<dyn RoomDirectory>) -> Self {
        Self {
            registry: Arc::new(RoomRegistry::new()),
            directory,
        }
    }
}

/// Assemble the full router.
///
/// The REST routes get permissive CORS, a request timeout, and panic
/// recovery. The WebSocket route gets none of those: a signaling
/// connection lives as long as the peer does, and a timeout or a recovery
/// wrapper would cut it short.
pub fn router(state: AppState, request_timeout: Duration) -> Router {
    let rest = Router::new()
        .route("/api/v1/info", get(get_info))
        .route("/api/v1/rooms", post(create_room))
        .route("/api/v1/rooms/{id}", delete(delete_room))
        .layer(CatchPanicLayer::new())
        .layer(TimeoutLayer::new(request_timeout))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        );

    let ws = Router::new().route("/api/v1/ws/{id}", get(ws_handler));

    rest.merge(ws)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
