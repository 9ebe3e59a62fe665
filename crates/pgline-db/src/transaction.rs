//! Closure-based transactions
//!
//! A transaction holds one dedicated connection from begin to commit or
//! rollback. The closure API guarantees that exactly one of the two is
//! issued per invocation.

use futures::future::BoxFuture;
use sqlx::{PgConnection, Postgres, Transaction};

use pgline_common::{DbError, DbResult};

use crate::error::map_tx_error;
use crate::pool::Database;

impl Database {
    /// Run a unit of work inside a transaction
    ///
    /// Acquires a dedicated connection, issues a begin, and runs `work` with
    /// it. On `Ok` the transaction is committed; on `Err` it is rolled back
    /// and the error is returned unchanged. The connection goes back to the
    /// pool on every path.
    ///
    /// ```rust,ignore
    /// let moved = db
    ///     .transaction(|conn| {
    ///         Box::pin(async move {
    ///             sqlx::query("UPDATE accounts SET balance = balance - $1 WHERE id = $2")
    ///                 .bind(100i64)
    ///                 .bind(from)
    ///                 .execute(&mut *conn)
    ///                 .await
    ///                 .map_err(|e| DbError::Query(e.to_string()))?;
    ///             sqlx::query("UPDATE accounts SET balance = balance + $1 WHERE id = $2")
    ///                 .bind(100i64)
    ///                 .bind(to)
    ///                 .execute(&mut *conn)
    ///                 .await
    ///                 .map_err(|e| DbError::Query(e.to_string()))?;
    ///             Ok(100i64)
    ///         })
    ///     })
    ///     .await?;
    /// ```
    ///
    /// # Errors
    /// Returns the closure's error after rollback, or `DbError::Transaction`
    /// if the commit itself fails.
    pub async fn transaction<T, F>(&self, work: F) -> DbResult<T>
    where
        T: Send,
        F: for<'c> FnOnce(&'c mut PgConnection) -> BoxFuture<'c, DbResult<T>> + Send,
    {
        let mut tx = self.begin().await?;

        match work(&mut tx).await {
            Ok(value) => {
                tx.commit().await.map_err(|e| {
                    tracing::error!(error = %e, "Transaction commit failed");
                    DbError::Transaction(e.to_string())
                })?;
                Ok(value)
            }
            Err(err) => {
                // The work failed; the rollback outcome is logged but the
                // caller gets the original error.
                if let Err(rollback_err) = tx.rollback().await {
                    tracing::error!(error = %rollback_err, "Transaction rollback failed");
                }
                tracing::warn!(error = %err, "Transaction rolled back");
                Err(err)
            }
        }
    }

    /// Begin a transaction for manual control
    ///
    /// Prefer [`Database::transaction`]; with a manual transaction the
    /// caller is responsible for issuing commit or rollback. Dropping the
    /// returned value without committing rolls the transaction back.
    ///
    /// # Errors
    /// Returns `DbError::Acquire` if no connection becomes available within
    /// the acquire timeout.
    pub async fn begin(&self) -> DbResult<Transaction<'static, Postgres>> {
        self.pool().begin().await.map_err(|e| {
            tracing::error!(error = %e, "Failed to begin transaction");
            map_tx_error(e)
        })
    }
}
