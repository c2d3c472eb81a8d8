//! # Configuration Management
//!
//! This module handles loading configuration from environment variables.
//! Configuration comes from the environment (12-factor style), with an
//! optional `.env` file for local development.
//!
//! ## Environment Variables
//! - `DATABASE_URL`: SQLite connection string (default: `sqlite:products.db?mode=rwc`)
//! - `DATABASE_MAX_CONNECTIONS`: Pool size upper bound (default: 5)
//! - `HOST`: Server bind address (default: 0.0.0.0)
//! - `PORT`: Server port (default: 8080)

use anyhow::{Context, Result};
use std::env;

const DEFAULT_DATABASE_URL: &str = "sqlite:products.db?mode=rwc";
const DEFAULT_MAX_CONNECTIONS: u32 = 5;
const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8080;

/// Application configuration
///
/// Holds every value needed to start the server. All fields are public for
/// easy access from `main` and `AppState`.
#[derive(Debug, Clone)]
pub struct Config {
    /// Server host/IP address to bind to
    /// Examples: "127.0.0.1" (localhost only), "0.0.0.0" (all interfaces)
    pub host: String,

    /// Server port number
    pub port: u16,

    /// Database connection URL
    /// Format: "sqlite:filename.db?mode=rwc"
    /// The "mode=rwc" means: read, write, create if not exists
    pub database_url: String,

    /// Maximum number of pooled database connections
    pub max_connections: u32,
}

impl Config {
    /// Load configuration from the process environment
    ///
    /// Loads `.env` first if it exists (dotenvy doesn't error if the file
    /// is missing), then reads each variable, falling back to defaults.
    ///
    /// ## Example .env file
    /// ```text
    /// DATABASE_URL=sqlite:products.db?mode=rwc
    /// HOST=127.0.0.1
    /// PORT=8080
    /// ```
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable lookup
    ///
    /// `from_env` delegates here with `std::env::var`; tests pass a closure
    /// over a fixed map instead of mutating the process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = match lookup("PORT") {
            Some(raw) => raw
                .parse()
                .with_context(|| format!("PORT must be a valid port number, got '{raw}'"))?,
            None => DEFAULT_PORT,
        };

        let max_connections = match lookup("DATABASE_MAX_CONNECTIONS") {
            Some(raw) => raw
                .parse::<u32>()
                .ok()
                .filter(|n| *n > 0)
                .with_context(|| {
                    format!("DATABASE_MAX_CONNECTIONS must be a positive integer, got '{raw}'")
                })?,
            None => DEFAULT_MAX_CONNECTIONS,
        };

        Ok(Config {
            host: lookup("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port,
            database_url: lookup("DATABASE_URL")
                .unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string()),
            max_connections,
        })
    }

    /// Get the socket address to bind the server to
    ///
    /// Example: "0.0.0.0:8080", the format `tokio::net::TcpListener::bind()` takes.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
