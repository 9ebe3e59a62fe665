//! Pool lifecycle properties
//!
//! These tests require a running PostgreSQL database. Set `TEST_DATABASE_URL`
//! (or `DATABASE_URL`) before running; each test skips itself otherwise.

use std::time::Duration;

use integration_tests::{test_database, test_database_with};
use pgline_common::DbError;
use pgline_db::params;

#[tokio::test]
async fn query_always_returns_connection_to_pool() {
    let Some(db) = test_database().await else {
        eprintln!("Skipping test: no test database configured");
        return;
    };

    db.health_check().await.expect("health check failed");
    let size_before = db.size();

    for i in 0..20i64 {
        if i % 5 == 0 {
            // Failing statements must release their connection too
            let result = db.query("SELECT no_such_column FROM no_such_table", &[]).await;
            assert!(result.is_err());
        } else {
            db.query("SELECT $1::bigint AS n", &params![i])
                .await
                .expect("query failed");
        }
    }

    // Give the pool a moment to check the last connection back in
    tokio::time::sleep(Duration::from_millis(50)).await;

    assert_eq!(db.size(), size_before);
    assert_eq!(db.num_idle() as u32, db.size());
}

#[tokio::test]
async fn pool_never_exceeds_max_connections() {
    let Some(db) = test_database_with(3, 10).await else {
        eprintln!("Skipping test: no test database configured");
        return;
    };

    let tasks: Vec<_> = (0..10)
        .map(|_| {
            let db = db.clone();
            tokio::spawn(async move {
                db.query("SELECT pg_sleep(0.2)", &[]).await.expect("query failed");
            })
        })
        .collect();

    // Sample the pool while the burst is in flight
    let mut peak = 0;
    for _ in 0..10 {
        peak = peak.max(db.size());
        tokio::time::sleep(Duration::from_millis(50)).await;
    }

    for task in tasks {
        task.await.expect("task panicked");
    }

    assert!(peak <= 3, "pool grew to {peak} connections");
    assert!(db.size() <= 3);
}

#[tokio::test]
async fn exhausted_pool_surfaces_acquire_error() {
    let Some(db) = test_database_with(1, 1).await else {
        eprintln!("Skipping test: no test database configured");
        return;
    };

    // A manual transaction pins the only connection
    let tx = db.begin().await.expect("begin failed");

    let err = db
        .query("SELECT 1", &[])
        .await
        .expect_err("expected the acquire to time out");
    assert!(matches!(err, DbError::Acquire(_)), "got {err:?}");

    drop(tx);
}

#[tokio::test]
async fn closed_pool_rejects_new_work() {
    let Some(db) = test_database().await else {
        eprintln!("Skipping test: no test database configured");
        return;
    };

    db.health_check().await.expect("health check failed");
    db.close().await;
    assert!(db.is_closed());

    let err = db
        .query("SELECT 1", &[])
        .await
        .expect_err("expected the closed pool to reject the query");
    assert!(matches!(err, DbError::Acquire(_)), "got {err:?}");
}
