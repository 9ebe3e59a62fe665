//! PostgreSQL connection pool management
//!
//! The pool is a process-scoped resource: created once at startup, shared by
//! cloning, and closed explicitly at shutdown.

use pgline_common::{DatabaseConfig, DbError, DbResult};
use sqlx::postgres::{PgPool, PgPoolOptions};

/// Create a new PostgreSQL connection pool
///
/// The pool establishes connections lazily; a slot is only filled when a
/// caller needs it and none is idle.
///
/// # Errors
/// Returns `DbError::Connect` if the pool cannot be created or the initial
/// connection handshake fails.
pub async fn create_pool(config: &DatabaseConfig) -> DbResult<PgPool> {
    let options = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .min_connections(config.min_connections)
        .acquire_timeout(config.acquire_timeout())
        .idle_timeout(config.idle_timeout())
        .max_lifetime(config.max_lifetime());

    let pool = match &config.url {
        Some(url) => options.connect(url).await,
        None => options.connect_with(config.connect_options()).await,
    }
    .map_err(|e| {
        tracing::error!(error = %e, endpoint = %config.endpoint(), "Failed to create database pool");
        DbError::Connect(e.to_string())
    })?;

    tracing::info!(
        endpoint = %config.endpoint(),
        max_connections = config.max_connections,
        min_connections = config.min_connections,
        "Database connection pool created"
    );

    Ok(pool)
}

/// Create a connection pool from environment variables
///
/// # Errors
/// Returns `DbError::Config` if required variables are missing and
/// `DbError::Connect` if the pool cannot be created.
pub async fn create_pool_from_env() -> DbResult<PgPool> {
    let config = DatabaseConfig::from_env()?;
    create_pool(&config).await
}

/// Managed handle to the PostgreSQL connection pool
///
/// Cloning is cheap: all clones share the same underlying pool.
#[derive(Clone)]
pub struct Database {
    pool: PgPool,
}

impl std::fmt::Debug for Database {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Database")
            .field("size", &self.pool.size())
            .field("idle", &self.pool.num_idle())
            .finish()
    }
}

impl Database {
    /// Connect to the database with the given configuration
    ///
    /// # Errors
    /// Returns `DbError::Connect` if the pool cannot be created.
    pub async fn connect(config: &DatabaseConfig) -> DbResult<Self> {
        let pool = create_pool(config).await?;
        Ok(Self { pool })
    }

    /// Connect using configuration from environment variables
    ///
    /// # Errors
    /// Returns `DbError::Config` if required variables are missing and
    /// `DbError::Connect` if the pool cannot be created.
    pub async fn connect_from_env() -> DbResult<Self> {
        let pool = create_pool_from_env().await?;
        Ok(Self { pool })
    }

    /// Wrap an existing pool
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Get a reference to the underlying pool
    #[must_use]
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Current number of connections in the pool (in use + idle)
    #[must_use]
    pub fn size(&self) -> u32 {
        self.pool.size()
    }

    /// Number of idle connections in the pool
    #[must_use]
    pub fn num_idle(&self) -> usize {
        self.pool.num_idle()
    }

    /// Check that the database answers a trivial query
    ///
    /// # Errors
    /// Returns `DbError::Query` if the round trip fails.
    pub async fn health_check(&self) -> DbResult<()> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "Database health check failed");
                DbError::Query(e.to_string())
            })?;

        tracing::debug!("Database health check passed");
        Ok(())
    }

    /// Close the connection pool gracefully
    ///
    /// Called during shutdown so all connections are released before the
    /// process exits. Operations issued after this point fail with an
    /// acquire error.
    pub async fn close(&self) {
        tracing::info!("Closing database connection pool");
        self.pool.close().await;
    }

    /// Whether the pool has been closed
    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.pool.is_closed()
    }
}
