//! Test helpers for integration tests
//!
//! Provides database handles with controlled pool geometry so tests can
//! observe acquisition, release, and the concurrency bound.

use pgline_common::DatabaseConfig;
use pgline_db::Database;

/// Connection URL for the test database, if one is configured
///
/// `TEST_DATABASE_URL` wins over `DATABASE_URL` so tests can point at a
/// throwaway database while the usual one stays untouched.
pub fn test_database_url() -> Option<String> {
    let _ = dotenvy::dotenv();
    std::env::var("TEST_DATABASE_URL")
        .or_else(|_| std::env::var("DATABASE_URL"))
        .ok()
}

/// Connect with default test pool geometry (small, fast timeouts)
pub async fn test_database() -> Option<Database> {
    test_database_with(5, 5).await
}

/// Connect with explicit pool bounds
///
/// Returns `None` when no test database is configured, letting callers skip.
pub async fn test_database_with(max_connections: u32, acquire_timeout_secs: u64) -> Option<Database> {
    let url = test_database_url()?;
    let config = DatabaseConfig {
        url: Some(url),
        max_connections,
        min_connections: 0,
        acquire_timeout_secs,
        ..Default::default()
    };
    Database::connect(&config).await.ok()
}
