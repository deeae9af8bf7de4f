//! Repository factory for dependency injection.
//!
//! This module provides utilities for creating and configuring repository instances
//! based on runtime configuration.

use std::path::Path;
use std::str::FromStr;
use std::sync::Arc;

use super::config::SqliteConfig;
use super::repo_config::RepositoryConfig;
use super::repositories::LocalRepository;
#[cfg(feature = "sqlite-repo")]
use super::repositories::SqliteRepository;
use super::repository::{ClimateRepository, RepositoryError, RepositoryResult};

/// Repository type configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RepositoryType {
    /// SQLite + Diesel implementation
    Sqlite,
    /// In-memory local repository
    Local,
}

impl FromStr for RepositoryType {
    type Err = String;

    /// Parse repository type from string ("sqlite", "sqlite3", "local", "memory").
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "sqlite" | "sqlite3" => Ok(Self::Sqlite),
            "local" | "memory" => Ok(Self::Local),
            _ => Err(format!("Unknown repository type: {}", s)),
        }
    }
}

impl RepositoryType {
    /// Get repository type from environment variable.
    ///
    /// Reads `REPOSITORY_TYPE`. The in-memory backend is only chosen when asked
    /// for explicitly; anything else, including an unset or unknown value,
    /// selects SQLite.
    pub fn from_env() -> Self {
        match std::env::var("REPOSITORY_TYPE") {
            Ok(val) => val.parse().unwrap_or_else(|e| {
                log::warn!("{}, using sqlite", e);
                Self::Sqlite
            }),
            Err(_) => Self::Sqlite,
        }
    }
}

/// Repository factory for creating repository instances.
///
/// # Example
/// ```ignore
/// use climate_api::db::{RepositoryFactory, SqliteConfig};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let repo = RepositoryFactory::create_sqlite(&SqliteConfig::with_url("hawaii.sqlite")).await?;
///     let local = RepositoryFactory::create_local();
///     Ok(())
/// }
/// ```
pub struct RepositoryFactory;

impl RepositoryFactory {
    /// Create a repository instance based on type.
    ///
    /// # Arguments
    /// * `repo_type` - Type of repository to create
    /// * `sqlite_config` - Dataset configuration (required for SQLite)
    pub async fn create(
        repo_type: RepositoryType,
        sqlite_config: Option<&SqliteConfig>,
    ) -> RepositoryResult<Arc<dyn ClimateRepository>> {
        match repo_type {
            RepositoryType::Sqlite => {
                let config = sqlite_config.ok_or_else(|| {
                    RepositoryError::configuration("SQLite repository requires SqliteConfig")
                })?;
                Self::create_sqlite(config).await
            }
            RepositoryType::Local => Ok(Self::create_local()),
        }
    }

    /// Open the SQLite dataset.
    ///
    /// Building the pool opens connections, so it runs on the blocking pool.
    #[cfg(feature = "sqlite-repo")]
    pub async fn create_sqlite(
        config: &SqliteConfig,
    ) -> RepositoryResult<Arc<dyn ClimateRepository>> {
        let config = config.clone();
        let repo = tokio::task::spawn_blocking(move || SqliteRepository::new(config))
            .await
            .map_err(|e| RepositoryError::internal(format!("Task join error: {}", e)))??;
        Ok(Arc::new(repo))
    }

    #[cfg(not(feature = "sqlite-repo"))]
    pub async fn create_sqlite(
        _config: &SqliteConfig,
    ) -> RepositoryResult<Arc<dyn ClimateRepository>> {
        Err(RepositoryError::configuration(
            "SQLite repository feature not enabled",
        ))
    }

    /// Create an empty in-memory local repository.
    pub fn create_local() -> Arc<dyn ClimateRepository> {
        Arc::new(LocalRepository::new())
    }

    /// Create repository from environment configuration.
    ///
    /// Reads `REPOSITORY_TYPE` to determine which repository to create,
    /// and `SqliteConfig::from_env` for the SQLite settings.
    pub async fn from_env() -> RepositoryResult<Arc<dyn ClimateRepository>> {
        match RepositoryType::from_env() {
            RepositoryType::Sqlite => {
                let config = SqliteConfig::from_env().map_err(RepositoryError::configuration)?;
                Self::create_sqlite(&config).await
            }
            RepositoryType::Local => Ok(Self::create_local()),
        }
    }

    /// Create repository from a TOML configuration file.
    pub async fn from_config_file<P: AsRef<Path>>(
        config_path: P,
    ) -> RepositoryResult<Arc<dyn ClimateRepository>> {
        let config = RepositoryConfig::from_file(config_path)?;
        Self::from_repository_config(&config).await
    }

    /// Create repository from a RepositoryConfig instance.
    pub async fn from_repository_config(
        config: &RepositoryConfig,
    ) -> RepositoryResult<Arc<dyn ClimateRepository>> {
        let repo_type = config.repository_type().map_err(|e| {
            RepositoryError::configuration(format!("Invalid repository type: {}", e))
        })?;
        let sqlite_config = config.to_sqlite_config()?;
        Self::create(repo_type, sqlite_config.as_ref()).await
    }
}
