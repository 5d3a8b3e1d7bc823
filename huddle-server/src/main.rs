use std::sync::Arc;

use anyhow::Context;
use axum::extract::Request;
use axum::ServiceExt;
use clap::Parser;
use sqlx::postgres::PgPoolOptions;
use tower::Layer;
use tower_http::normalize_path::NormalizePathLayer;
use tracing::info;
use tracing_subscriber::EnvFilter;

use huddle_server::config::{Cli, Config};
use huddle_server::directory::PgDirectory;
use huddle_server::{router, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let config = Config::load(&cli.config)?;

    let pool = PgPoolOptions::new()
        .connect(&config.postgres.url())
        .await
        .context("connect to postgres")?;

    let state = AppState::new(Arc::new(PgDirectory::new(pool)));
    let app = NormalizePathLayer::trim_trailing_slash()
        .layer(router(state, config.server.request_timeout()));

    let addr = config.server.addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("bind {addr}"))?;
    info!("signaling hub listening on {}", addr);

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .await
        .context("serve")
}
