use anyhow::Context;
use clap::Parser;
use sqlx::postgres::PgPoolOptions;
use tracing::info;

use huddle_server::config::{Cli, Config};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().init();

    let cli = Cli::parse();
    let config = Config::load(&cli.config)?;

    let pool = PgPoolOptions::new()
        .connect(&config.postgres.url())
        .await
        .context("connect to postgres")?;

    sqlx::migrate!()
        .run(&pool)
        .await
        .context("apply migrations")?;

    info!("migrations applied");
    Ok(())
}
