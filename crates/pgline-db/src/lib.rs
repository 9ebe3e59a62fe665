//! # pgline-db
//!
//! PostgreSQL connection pool wrapper built on SQLx.
//!
//! ## Overview
//!
//! This crate provides the single entry point for talking to PostgreSQL:
//!
//! - Connection pool lifecycle (connect at startup, close at shutdown)
//! - Parameterized query execution with positional (`$1`..`$n`) parameters
//! - Closure-based transactions with guaranteed commit-or-rollback
//! - Health checks and pool observability
//!
//! Connection acquisition and release are fully abstracted: every operation
//! returns its connection to the pool whether it succeeds or fails. There is
//! no retry policy, no backoff, and no error classification; failures are
//! logged and surface to the caller as opaque errors.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use pgline_common::DatabaseConfig;
//! use pgline_db::{params, Database, Row};
//!
//! async fn example() -> pgline_common::DbResult<()> {
//!     let config = DatabaseConfig::from_env()?;
//!     let db = Database::connect(&config).await?;
//!
//!     let rows = db
//!         .query("SELECT id, email FROM accounts WHERE active = $1", &params![true])
//!         .await?;
//!     for row in &rows {
//!         let email: String = row.try_get("email").map_err(pgline_common::DbError::query)?;
//!         tracing::info!(email, "active account");
//!     }
//!
//!     db.close().await;
//!     Ok(())
//! }
//! ```

pub mod params;
pub mod pool;

mod error;
mod query;
mod transaction;

// Re-export commonly used types
pub use params::SqlParam;
pub use pool::{create_pool, create_pool_from_env, Database, PgPool};

// Re-export the row types callers need to project results
pub use sqlx::postgres::PgRow;
pub use sqlx::Row;
