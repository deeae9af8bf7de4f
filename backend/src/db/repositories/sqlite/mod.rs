//! SQLite repository implementation using Diesel.
//!
//! This module implements [`ClimateRepository`] against the climate dataset
//! file (`station` and `measurement` tables).
//!
//! ## Features
//!
//! - Connection pooling with r2d2
//! - One pooled connection per operation, returned to the pool on every exit path
//! - Read-only opening of the dataset (`mode=ro`)
//!
//! Configuration lives in [`SqliteConfig`].

use async_trait::async_trait;
use diesel::dsl::{avg, max, min};
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};
use diesel::sql_query;
use diesel::sqlite::SqliteConnection;
use std::time::Duration;
use tokio::task;

use crate::api::{DateRange, PrecipitationRecord, TemperatureObservation, TemperatureSummary};
use crate::db::config::SqliteConfig;
use crate::db::repository::{ClimateRepository, ErrorContext, RepositoryError, RepositoryResult};
use crate::models::ObservationDate;

mod models;
mod schema;

use models::{PrecipitationRow, TemperatureRow};
use schema::{measurement, station};

type SqlitePool = Pool<ConnectionManager<SqliteConnection>>;

/// Diesel-backed repository for the SQLite dataset.
#[derive(Clone)]
pub struct SqliteRepository {
    pool: SqlitePool,
    config: SqliteConfig,
}

impl std::fmt::Debug for SqliteRepository {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SqliteRepository")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl SqliteRepository {
    /// Open the dataset and build the connection pool.
    ///
    /// # Returns
    /// * `Ok(SqliteRepository)` on success
    /// * `Err(RepositoryError::ConnectionError)` if the file cannot be opened
    pub fn new(config: SqliteConfig) -> RepositoryResult<Self> {
        if config.database_url.trim().is_empty() {
            return Err(RepositoryError::configuration(
                "SQLite repository requires a database_url",
            ));
        }

        let manager = ConnectionManager::<SqliteConnection>::new(config.connection_url());

        let pool = Pool::builder()
            .max_size(config.max_pool_size)
            .connection_timeout(Duration::from_secs(config.connection_timeout_sec))
            .test_on_check_out(true)
            .build(manager)
            .map_err(|e| {
                RepositoryError::connection_with_context(
                    e.to_string(),
                    ErrorContext::new("create_pool")
                        .with_details(format!("database_url={}", config.database_url)),
                )
            })?;

        log::info!(
            "Opened SQLite dataset {} (pool size {}, read_only={})",
            config.database_url,
            config.max_pool_size,
            config.read_only
        );

        Ok(Self { pool, config })
    }

    pub fn config(&self) -> &SqliteConfig {
        &self.config
    }

    /// Run `f` on a pooled connection inside the blocking thread pool.
    ///
    /// The connection guard lives only for the closure call, so it goes back
    /// to the pool whether `f` succeeds or fails.
    async fn with_conn<T, F>(&self, operation: &'static str, f: F) -> RepositoryResult<T>
    where
        T: Send + 'static,
        F: FnOnce(&mut SqliteConnection) -> RepositoryResult<T> + Send + 'static,
    {
        let pool = self.pool.clone();

        task::spawn_blocking(move || {
            let mut conn = pool.get().map_err(|e| {
                RepositoryError::connection_with_context(
                    e.to_string(),
                    ErrorContext::new(operation).with_details("pool checkout"),
                )
            })?;
            log::debug!("{}: connection checked out", operation);
            f(&mut conn).map_err(|e| e.with_operation(operation))
        })
        .await
        .map_err(|e| {
            RepositoryError::internal_with_context(
                format!("Task join error: {}", e),
                ErrorContext::new("spawn_blocking").with_details(operation),
            )
        })?
    }
}

#[async_trait]
impl ClimateRepository for SqliteRepository {
    async fn health_check(&self) -> RepositoryResult<bool> {
        self.with_conn("health_check", |conn| {
            sql_query("SELECT 1").execute(conn)?;
            Ok(true)
        })
        .await
    }

    async fn latest_observation_date(&self) -> RepositoryResult<Option<String>> {
        self.with_conn("latest_observation_date", |conn| {
            let latest = measurement::table
                .select(max(measurement::date))
                .get_result::<Option<String>>(conn)?;
            Ok(latest)
        })
        .await
    }

    async fn station_codes(&self) -> RepositoryResult<Vec<String>> {
        self.with_conn("station_codes", |conn| {
            let codes = station::table
                .select(station::code)
                .order(station::id.asc())
                .load::<String>(conn)?;
            Ok(codes)
        })
        .await
    }

    async fn precipitation_since(
        &self,
        since: ObservationDate,
    ) -> RepositoryResult<Vec<PrecipitationRecord>> {
        let since = since.to_string();
        self.with_conn("precipitation_since", move |conn| {
            let rows = measurement::table
                .filter(measurement::date.ge(since))
                .order(measurement::id.asc())
                .select(PrecipitationRow::as_select())
                .load(conn)?;
            Ok(rows.into_iter().map(Into::into).collect())
        })
        .await
    }

    async fn temperature_observations(
        &self,
        station: &str,
        since: ObservationDate,
    ) -> RepositoryResult<Vec<TemperatureObservation>> {
        let station = station.to_string();
        let since = since.to_string();
        self.with_conn("temperature_observations", move |conn| {
            let rows = measurement::table
                .filter(measurement::station.eq(station))
                .filter(measurement::date.ge(since))
                .order(measurement::id.asc())
                .select(TemperatureRow::as_select())
                .load(conn)?;
            Ok(rows.into_iter().map(Into::into).collect())
        })
        .await
    }

    async fn temperature_summary(&self, range: DateRange) -> RepositoryResult<TemperatureSummary> {
        let start = range.start.to_string();
        let end = range.end.map(|d| d.to_string());
        self.with_conn("temperature_summary", move |conn| {
            let mut query = measurement::table
                .select((
                    min(measurement::tobs),
                    avg(measurement::tobs),
                    max(measurement::tobs),
                ))
                .filter(measurement::date.ge(start))
                .into_boxed();
            if let Some(end) = end {
                query = query.filter(measurement::date.le(end));
            }
            let (lowest, mean, highest) =
                query.get_result::<(Option<f64>, Option<f64>, Option<f64>)>(conn)?;
            Ok(TemperatureSummary::new(lowest, mean, highest))
        })
        .await
    }
}
