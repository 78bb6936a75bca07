//! Database test utilities and shared infrastructure

use sqlx::{Connection, PgConnection, PgPool};
use testcontainers::{ContainerAsync, ImageExt, runners::AsyncRunner};
use testcontainers_modules::postgres::Postgres as PostgresImage;
use tokio::sync::OnceCell;
use uuid::Uuid;

use crate::database;

const USER: &str = "partsmith_test";
const PASSWORD: &str = "partsmith_test_password";

/// Shared PostgreSQL container that starts once and is reused across all tests
static POSTGRES_CONTAINER: OnceCell<ContainerAsync<PostgresImage>> = OnceCell::const_new();

async fn init_postgres_container() -> ContainerAsync<PostgresImage> {
    PostgresImage::default()
        .with_user(USER)
        .with_password(PASSWORD)
        .with_db_name("partsmith_test")
        .with_env_var("POSTGRES_INITDB_ARGS", "--auth-host=trust")
        .start()
        .await
        .expect("Failed to start PostgreSQL container")
}

/// An isolated, migrated database inside the shared container.
///
/// Every test gets its own database, so no cleanup between tests is needed.
/// Databases disappear with the container.
#[derive(Debug, Clone)]
pub(crate) struct TestDb {
    pool: PgPool,
}

impl TestDb {
    /// Create a uniquely named database and run migrations on it.
    pub(crate) async fn new() -> Self {
        let container = POSTGRES_CONTAINER
            .get_or_init(init_postgres_container)
            .await;

        let port = container
            .get_host_port_ipv4(5432)
            .await
            .expect("Failed to get container port");

        let host = std::env::var("TESTCONTAINERS_HOST_OVERRIDE")
            .unwrap_or_else(|_| "localhost".to_string());

        let name = format!("partsmith_test_{}", Uuid::now_v7().simple());

        let mut conn =
            PgConnection::connect(&format!("postgresql://{USER}:{PASSWORD}@{host}:{port}/postgres"))
                .await
                .expect("Failed to connect to postgres database");

        sqlx::query(&format!("CREATE DATABASE \"{name}\""))
            .execute(&mut conn)
            .await
            .expect("Failed to create test database");

        conn.close()
            .await
            .expect("Failed to close admin connection");

        let pool = database::connect(&format!(
            "postgresql://{USER}:{PASSWORD}@{host}:{port}/{name}"
        ))
        .await
        .expect("Failed to create pool for database");

        database::migrate(&pool)
            .await
            .expect("Failed to run migrations on database");

        Self { pool }
    }

    /// Returns the connection pool for this test database.
    pub(crate) fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    #[ignore = "requires a Docker daemon"]
    async fn migrations_create_catalog_table() {
        let test_db = TestDb::new().await;

        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM catalog_items")
            .fetch_one(test_db.pool())
            .await
            .expect("Failed to query catalog_items");

        assert_eq!(count, 0);
    }
}
