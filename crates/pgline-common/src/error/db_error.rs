//! Database error types
//!
//! Unified error handling for pool and query operations.

use crate::config::ConfigError;
use std::fmt;

/// Error type for database operations
///
/// Deliberately coarse: callers get "database operation failed" shapes with
/// the driver message attached, and nothing else. Failures are not
/// classified as transient or permanent and are never retried here.
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    // Lifecycle errors
    #[error("Failed to connect to database: {0}")]
    Connect(String),

    #[error("Failed to acquire connection from pool: {0}")]
    Acquire(String),

    // Statement errors
    #[error("Query failed: {0}")]
    Query(String),

    // Transaction errors
    #[error("Transaction failed: {0}")]
    Transaction(String),

    // Configuration errors
    #[error(transparent)]
    Config(#[from] ConfigError),

    // Internal errors
    #[error("Internal database error")]
    Internal(#[source] anyhow::Error),
}

impl DbError {
    /// Stable code for structured log fields
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::Connect(_) => "CONNECT_FAILED",
            Self::Acquire(_) => "ACQUIRE_FAILED",
            Self::Query(_) => "QUERY_FAILED",
            Self::Transaction(_) => "TRANSACTION_FAILED",
            Self::Config(_) => "CONFIG_ERROR",
            Self::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Create a query error
    #[must_use]
    pub fn query(msg: impl fmt::Display) -> Self {
        Self::Query(msg.to_string())
    }

    /// Create a transaction error
    #[must_use]
    pub fn transaction(msg: impl fmt::Display) -> Self {
        Self::Transaction(msg.to_string())
    }

    /// Create an internal error from any error
    pub fn internal(err: impl Into<anyhow::Error>) -> Self {
        Self::Internal(err.into())
    }
}

/// Result type alias for database operations
pub type DbResult<T> = Result<T, DbError>;
