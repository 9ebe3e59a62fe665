//! Error handling utilities
//!
//! Maps driver errors onto the coarse [`DbError`] taxonomy. Pool exhaustion
//! surfaces as an acquire failure; everything else stays opaque.

use pgline_common::DbError;
use sqlx::Error as SqlxError;

/// Convert a sqlx error from statement execution to a `DbError`
pub(crate) fn map_query_error(e: SqlxError) -> DbError {
    match e {
        SqlxError::PoolTimedOut => {
            DbError::Acquire("timed out waiting for a pool connection".to_string())
        }
        SqlxError::PoolClosed => DbError::Acquire("connection pool is closed".to_string()),
        _ => DbError::Query(e.to_string()),
    }
}

/// Convert a sqlx error from transaction control (begin/commit/rollback)
pub(crate) fn map_tx_error(e: SqlxError) -> DbError {
    match e {
        SqlxError::PoolTimedOut => {
            DbError::Acquire("timed out waiting for a pool connection".to_string())
        }
        SqlxError::PoolClosed => DbError::Acquire("connection pool is closed".to_string()),
        _ => DbError::Transaction(e.to_string()),
    }
}
