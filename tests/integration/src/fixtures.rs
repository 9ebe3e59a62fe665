//! Test fixtures and data generators
//!
//! Provides uniquely named probe tables so tests running in parallel (and
//! across repeated runs) never collide.

use anyhow::Result;
use pgline_db::{Database, Row};
use std::sync::atomic::{AtomicU64, Ordering};

/// Counter for unique test data
static COUNTER: AtomicU64 = AtomicU64::new(1);

/// Get a unique suffix for test data
pub fn unique_suffix() -> u64 {
    COUNTER.fetch_add(1, Ordering::SeqCst)
}

/// A uniquely named table name, stable for the lifetime of one test
pub fn unique_table(prefix: &str) -> String {
    format!("{}_{}_{}", prefix, std::process::id(), unique_suffix())
}

/// Create a two-column probe table
///
/// Regular (non-temporary) table: transactions and verification queries run
/// on different pool connections, so the table must be visible to all of
/// them.
pub async fn create_probe_table(db: &Database, table: &str) -> Result<()> {
    db.execute(
        &format!("CREATE TABLE IF NOT EXISTS {table} (id bigint PRIMARY KEY, label text)"),
        &[],
    )
    .await?;
    Ok(())
}

/// Drop a probe table, ignoring errors so cleanup never masks a test failure
pub async fn drop_probe_table(db: &Database, table: &str) {
    let _ = db.execute(&format!("DROP TABLE IF EXISTS {table}"), &[]).await;
}

/// Count the rows currently visible in a probe table
pub async fn count_rows(db: &Database, table: &str) -> Result<i64> {
    let row = db
        .query_one(&format!("SELECT count(*) AS n FROM {table}"), &[])
        .await?;
    Ok(row.try_get("n")?)
}
