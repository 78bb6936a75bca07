//! Partsmith Application CLI

use std::{fs, path::PathBuf, process::ExitCode};

use clap::{Args, Parser, Subcommand};
use partsmith_app::{
    database::{self, Db},
    domain::catalog::CatalogStores,
    seed::CatalogSeed,
};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "partsmith-app", about = "Partsmith CLI", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Apply pending database migrations
    Migrate(DatabaseArgs),

    /// Load hardware drafts from a JSON document
    Seed(SeedArgs),
}

#[derive(Debug, Args)]
struct DatabaseArgs {
    /// PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL")]
    database_url: String,
}

#[derive(Debug, Args)]
struct SeedArgs {
    /// Seed document with one array per hardware category
    #[arg(long)]
    file: PathBuf,

    #[command(flatten)]
    database: DatabaseArgs,
}

#[tokio::main]
pub async fn main() -> ExitCode {
    let _env = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .compact()
        .init();

    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            error!("{message}");

            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<(), String> {
    match cli.command {
        Commands::Migrate(args) => migrate(args).await,
        Commands::Seed(args) => seed(args).await,
    }
}

async fn migrate(args: DatabaseArgs) -> Result<(), String> {
    let pool = database::connect(&args.database_url)
        .await
        .map_err(|error| format!("failed to connect to database: {error}"))?;

    database::migrate(&pool)
        .await
        .map_err(|error| format!("failed to run migrations: {error}"))?;

    info!("migrations applied");

    Ok(())
}

async fn seed(args: SeedArgs) -> Result<(), String> {
    let document = fs::read_to_string(&args.file)
        .map_err(|error| format!("failed to read {}: {error}", args.file.display()))?;

    let seed = CatalogSeed::from_json(&document).map_err(|error| format!("{error}"))?;

    let pool = database::connect(&args.database.database_url)
        .await
        .map_err(|error| format!("failed to connect to database: {error}"))?;

    let stores = CatalogStores::postgres(&Db::new(pool));

    let created = seed
        .load(&stores)
        .await
        .map_err(|error| format!("failed to seed catalog: {error}"))?;

    info!(created, "catalog seeded");

    Ok(())
}
