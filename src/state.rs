//! # Application State
//!
//! This module defines the shared state that's accessible to all request handlers.
//! In Axum, state is how you share resources (here, the database pool)
//! across handlers without a global.
//!
//! ## The State Pattern
//! 1. Create a connection pool once at startup
//! 2. Store it in AppState
//! 3. Axum clones the state into each request (cheap: the pool is a handle)

use crate::config::Config;
use anyhow::Result;
use sqlx::sqlite::{SqlitePool, SqlitePoolOptions};

/// Shared application state
///
/// `SqlitePool` is already a clone-able, thread-safe handle to a pool of
/// connections, so `AppState` derives `Clone` and needs no `Arc` or locks.
/// Concurrent requests rely on the pool and SQLite for isolation.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool
    pub db: SqlitePool,
}

impl AppState {
    /// Initialize application state
    ///
    /// Connects to the database named by `config.database_url` and runs
    /// migrations.
    ///
    /// # Errors
    /// Returns an error if the database is unreachable or a migration fails.
    /// Both are fatal at startup; there is no retry.
    pub async fn new(config: &Config) -> Result<Self> {
        let db = SqlitePoolOptions::new()
            .max_connections(config.max_connections)
            .connect(&config.database_url)
            .await?;

        Self::from_pool(db).await
    }

    /// Wrap an existing pool, creating the `products` table if needed
    ///
    /// The `sqlx::migrate!` macro embeds migrations from ./migrations at
    /// compile time; already-applied migrations are skipped.
    pub async fn from_pool(db: SqlitePool) -> Result<Self> {
        sqlx::migrate!("./migrations").run(&db).await?;

        Ok(AppState { db })
    }

    /// Close every pooled connection, waiting for checked-out ones to return
    pub async fn close(&self) {
        self.db.close().await;
    }
}
