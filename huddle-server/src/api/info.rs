use axum::Json;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct Info {
    pub version: &'static str,
}

/// GET /api/v1/info: build version, handy for smoke checks.
pub async fn get_info() -> Json<Info> {
    Json(Info {
        version: env!("CARGO_PKG_VERSION"),
    })
}
