use anyhow::Context;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use trivia_api::db::{self, transfer};
use trivia_api::telemetry::init_tracing;

#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
struct Cli {
    /// Database path
    db_path: PathBuf,
    #[clap(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Replace the question bank with categories.csv and questions.csv from a directory
    Import { path: PathBuf },
    /// Write the question bank to categories.csv and questions.csv in a directory
    Export { path: PathBuf },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();
    let cli = Cli::parse();
    let db_path = cli.db_path.display().to_string();
    let pool = db::establish_connection(&db_path, true)
        .await
        .with_context(|| format!("Cannot connect to DB at {db_path}"))?;
    db::run_migrations(&pool)
        .await
        .context("Failed to run migrations")?;
    match cli.command {
        Commands::Export { path } => transfer::export_data(&pool, &path)
            .await
            .context("Cannot export"),
        Commands::Import { path } => transfer::import_data(&pool, &path)
            .await
            .context("Cannot import"),
    }
}
