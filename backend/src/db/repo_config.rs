//! Repository configuration file support.
//!
//! This module provides utilities for reading repository configuration from
//! TOML configuration files.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::str::FromStr;

use super::config::SqliteConfig;
use super::factory::RepositoryType;
use super::repository::RepositoryError;

/// Repository configuration from file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RepositoryConfig {
    pub repository: RepositorySettings,
    #[serde(default)]
    pub sqlite: SqliteSettings,
}

/// Repository type settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RepositorySettings {
    #[serde(rename = "type")]
    pub repo_type: String,
}

/// SQLite connection settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SqliteSettings {
    #[serde(default)]
    pub database_url: String,
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout: u64,
    #[serde(default = "default_read_only")]
    pub read_only: bool,
}

impl Default for SqliteSettings {
    fn default() -> Self {
        Self {
            database_url: String::new(),
            max_connections: default_max_connections(),
            connect_timeout: default_connect_timeout(),
            read_only: default_read_only(),
        }
    }
}

fn default_max_connections() -> u32 {
    8
}

fn default_connect_timeout() -> u64 {
    30
}

fn default_read_only() -> bool {
    true
}

impl RepositoryConfig {
    /// Load repository configuration from a TOML file.
    ///
    /// # Arguments
    /// * `path` - Path to the configuration file
    ///
    /// # Returns
    /// * `Ok(RepositoryConfig)` if successful
    /// * `Err(RepositoryError)` if file cannot be read or parsed
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, RepositoryError> {
        let content = fs::read_to_string(path.as_ref()).map_err(|e| {
            RepositoryError::configuration(format!("Failed to read config file: {}", e))
        })?;

        Self::from_toml(&content)
    }

    /// Parse repository configuration from TOML text.
    pub fn from_toml(content: &str) -> Result<Self, RepositoryError> {
        toml::from_str(content).map_err(|e| {
            RepositoryError::configuration(format!("Failed to parse config file: {}", e))
        })
    }

    /// Get the repository type from configuration.
    pub fn repository_type(&self) -> Result<RepositoryType, String> {
        RepositoryType::from_str(&self.repository.repo_type)
    }

    /// Convert to SqliteConfig if this is a SQLite configuration.
    pub fn to_sqlite_config(&self) -> Result<Option<SqliteConfig>, RepositoryError> {
        let repo_type = self.repository_type().map_err(|e| {
            RepositoryError::configuration(format!("Invalid repository type: {}", e))
        })?;

        if repo_type != RepositoryType::Sqlite {
            return Ok(None);
        }

        if self.sqlite.database_url.trim().is_empty() {
            return Err(RepositoryError::configuration(
                "SQLite repository requires 'sqlite.database_url' setting",
            ));
        }

        Ok(Some(SqliteConfig {
            database_url: self.sqlite.database_url.clone(),
            max_pool_size: self.sqlite.max_connections,
            connection_timeout_sec: self.sqlite.connect_timeout,
            read_only: self.sqlite.read_only,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_local_config() {
        let toml = r#"
[repository]
type = "local"
"#;

        let config = RepositoryConfig::from_toml(toml).unwrap();
        assert_eq!(config.repository.repo_type, "local");
        assert_eq!(config.repository_type().unwrap(), RepositoryType::Local);
        assert!(config.to_sqlite_config().unwrap().is_none());
    }

    #[test]
    fn test_parse_sqlite_config() {
        let toml = r#"
[repository]
type = "sqlite"

[sqlite]
database_url = "Resources/hawaii.sqlite"
max_connections = 4
connect_timeout = 5
read_only = false
"#;

        let config = RepositoryConfig::from_toml(toml).unwrap();
        assert_eq!(config.repository_type().unwrap(), RepositoryType::Sqlite);

        let sqlite = config.to_sqlite_config().unwrap().unwrap();
        assert_eq!(sqlite.database_url, "Resources/hawaii.sqlite");
        assert_eq!(sqlite.max_pool_size, 4);
        assert_eq!(sqlite.connection_timeout_sec, 5);
        assert!(!sqlite.read_only);
    }

    #[test]
    fn test_sqlite_settings_defaults() {
        let toml = r#"
[repository]
type = "sqlite"

[sqlite]
database_url = "hawaii.sqlite"
"#;

        let sqlite = RepositoryConfig::from_toml(toml)
            .unwrap()
            .to_sqlite_config()
            .unwrap()
            .unwrap();
        assert_eq!(sqlite.max_pool_size, 8);
        assert_eq!(sqlite.connection_timeout_sec, 30);
        assert!(sqlite.read_only);
    }

    #[test]
    fn test_sqlite_requires_database_url() {
        let toml = r#"
[repository]
type = "sqlite"
"#;

        let config = RepositoryConfig::from_toml(toml).unwrap();
        assert!(config.to_sqlite_config().is_err());
    }

    #[test]
    fn test_invalid_toml_is_configuration_error() {
        let err = RepositoryConfig::from_toml("[repository").unwrap_err();
        assert!(matches!(err, RepositoryError::ConfigurationError { .. }));
    }

    #[test]
    fn test_from_file_missing() {
        let err = RepositoryConfig::from_file("/nonexistent/repository.toml").unwrap_err();
        assert!(err.to_string().contains("Failed to read config file"));
    }
}
