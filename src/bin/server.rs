use anyhow::Context;
use trivia_api::config::get_configuration;
use trivia_api::db;
use trivia_api::server::run_server;
use trivia_api::telemetry::init_tracing;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();
    let settings = get_configuration().context("Failed to read configuration")?;

    let path = settings.database.path.display().to_string();
    let pool = db::establish_connection(&path, settings.database.create_if_missing)
        .await
        .with_context(|| format!("Cannot connect to DB at {path}"))?;

    tracing::info!("Running db migrations...");
    db::run_migrations(&pool)
        .await
        .context("Failed to run migrations")?;

    run_server(pool, &settings.application.address()).await
}
