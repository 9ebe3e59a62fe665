//! Parameterized query execution
//!
//! Every method acquires a connection from the pool for the duration of the
//! call and releases it when the call returns, on success and on failure
//! alike. Failures are logged and re-raised as opaque [`pgline_common::DbError`]s.

use sqlx::postgres::PgRow;
use tracing::instrument;

use pgline_common::DbResult;

use crate::error::map_query_error;
use crate::params::{bind_all, SqlParam};
use crate::pool::Database;

impl Database {
    /// Execute a statement and fetch all result rows
    #[instrument(skip(self, params))]
    pub async fn query(&self, statement: &str, params: &[SqlParam]) -> DbResult<Vec<PgRow>> {
        bind_all(sqlx::query(statement), params)
            .fetch_all(self.pool())
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "Query failed");
                map_query_error(e)
            })
    }

    /// Execute a statement that must return exactly one row
    #[instrument(skip(self, params))]
    pub async fn query_one(&self, statement: &str, params: &[SqlParam]) -> DbResult<PgRow> {
        bind_all(sqlx::query(statement), params)
            .fetch_one(self.pool())
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "Query failed");
                map_query_error(e)
            })
    }

    /// Execute a statement that returns at most one row
    #[instrument(skip(self, params))]
    pub async fn query_optional(
        &self,
        statement: &str,
        params: &[SqlParam],
    ) -> DbResult<Option<PgRow>> {
        bind_all(sqlx::query(statement), params)
            .fetch_optional(self.pool())
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "Query failed");
                map_query_error(e)
            })
    }

    /// Execute a statement and return the number of rows affected
    #[instrument(skip(self, params))]
    pub async fn execute(&self, statement: &str, params: &[SqlParam]) -> DbResult<u64> {
        bind_all(sqlx::query(statement), params)
            .execute(self.pool())
            .await
            .map(|result| result.rows_affected())
            .map_err(|e| {
                tracing::error!(error = %e, "Statement failed");
                map_query_error(e)
            })
    }
}
