//! Database module for the climate dataset.
//!
//! This module provides read access to the `station` and `measurement` tables
//! via the Repository pattern, so the SQLite backend and the in-memory one can
//! be swapped easily.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │  HTTP handlers                                          │
//! └───────────────────┬─────────────────────────────────────┘
//!                     │
//! ┌───────────────────▼─────────────────────────────────────┐
//! │  Service Layer (services.rs)                            │
//! │  - Reference date (latest observation - 365 days)       │
//! │  - Fixed-station temperature query                      │
//! └───────────────────┬─────────────────────────────────────┘
//!                     │
//! ┌───────────────────▼─────────────────────────────────────┐
//! │  Repository Trait (repository/) - Abstract Interface    │
//! └───────────────────┬─────────────────────────────────────┘
//!                     │
//!     ┌───────────────┴──────────────┐
//!     │  SqliteRepository (Diesel)   │
//!     │  LocalRepository (in-memory) │
//!     └──────────────────────────────┘
//! ```
//!
//! # Recommended Usage
//!
//! ```ignore
//! use climate_api::db::{services, RepositoryFactory};
//!
//! async fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let repo = RepositoryFactory::from_env().await?;
//!     let stations = services::list_stations(repo.as_ref()).await?;
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod factory;
pub mod repo_config;
pub mod repositories;
pub mod repository;
pub mod services;

pub use config::{SqliteConfig, DEFAULT_DATABASE_URL};
pub use factory::{RepositoryFactory, RepositoryType};
pub use repo_config::RepositoryConfig;
pub use repositories::LocalRepository;
#[cfg(feature = "sqlite-repo")]
pub use repositories::SqliteRepository;
pub use repository::{ClimateRepository, ErrorContext, RepositoryError, RepositoryResult};

pub use services::{
    health_check, list_precipitation, list_stations, list_temperature_observations,
    resolve_reference_date, temperature_summary,
};
