//! Database Config

use clap::Args;

/// Database settings.
#[derive(Debug, Args)]
pub struct DatabaseConfig {
    /// `PostgreSQL` connection string; the catalog is kept in memory when omitted
    #[arg(long, env = "DATABASE_URL")]
    pub database_url: Option<String>,
}
