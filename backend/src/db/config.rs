//! Dataset connection configuration and environment variable handling.

use std::env;

/// Dataset opened when `DATABASE_URL` is not set.
pub const DEFAULT_DATABASE_URL: &str = "Resources/hawaii.sqlite";

/// Configuration for opening the SQLite dataset.
#[derive(Debug, Clone)]
pub struct SqliteConfig {
    /// Dataset path or `sqlite://` URL
    pub database_url: String,
    /// Maximum number of connections in the pool
    pub max_pool_size: u32,
    /// Connection timeout in seconds
    pub connection_timeout_sec: u64,
    /// Open the dataset with `mode=ro`
    pub read_only: bool,
}

impl Default for SqliteConfig {
    fn default() -> Self {
        Self {
            database_url: String::new(),
            max_pool_size: 8,
            connection_timeout_sec: 30,
            read_only: true,
        }
    }
}

impl SqliteConfig {
    /// Create configuration from environment variables.
    ///
    /// # Environment Variables
    /// - `DATABASE_URL`: Dataset path (default: [`DEFAULT_DATABASE_URL`])
    /// - `SQLITE_POOL_MAX`: Maximum pool size (default: 8)
    /// - `SQLITE_CONN_TIMEOUT_SEC`: Connection timeout in seconds (default: 30)
    /// - `SQLITE_READ_ONLY`: `true`/`false` (default: true)
    pub fn from_env() -> Result<Self, String> {
        let database_url = match env::var("DATABASE_URL") {
            Ok(url) if url.trim().is_empty() => {
                return Err("DATABASE_URL is set but empty".to_string())
            }
            Ok(url) => url,
            Err(_) => DEFAULT_DATABASE_URL.to_string(),
        };

        let max_pool_size = env::var("SQLITE_POOL_MAX")
            .ok()
            .and_then(|v| v.parse::<u32>().ok())
            .unwrap_or(8);

        let connection_timeout_sec = env::var("SQLITE_CONN_TIMEOUT_SEC")
            .ok()
            .and_then(|v| v.parse::<u64>().ok())
            .unwrap_or(30);

        let read_only = env::var("SQLITE_READ_ONLY")
            .ok()
            .and_then(|v| v.parse::<bool>().ok())
            .unwrap_or(true);

        Ok(Self {
            database_url,
            max_pool_size,
            connection_timeout_sec,
            read_only,
        })
    }

    /// Create a new configuration with a database URL.
    pub fn with_url(database_url: impl Into<String>) -> Self {
        Self {
            database_url: database_url.into(),
            ..Default::default()
        }
    }

    /// Connection string handed to SQLite.
    ///
    /// Strips a `sqlite:` scheme and, in read-only mode, rewrites the path as a
    /// `file:` URI carrying `mode=ro`. Explicit `file:` URIs pass through.
    pub fn connection_url(&self) -> String {
        let raw = self.database_url.trim();
        if raw.starts_with("file:") {
            return raw.to_string();
        }
        let path = raw
            .strip_prefix("sqlite://")
            .or_else(|| raw.strip_prefix("sqlite:"))
            .unwrap_or(raw);
        if self.read_only && path != ":memory:" {
            format!("file:{}?mode=ro", path)
        } else {
            path.to_string()
        }
    }
}
