//! Repository trait for abstracting dataset access.
//!
//! The trait defines the read operations the query service needs, allowing
//! the SQLite implementation and the in-memory one to be swapped via
//! dependency injection.

use async_trait::async_trait;

use crate::api::{DateRange, PrecipitationRecord, TemperatureObservation, TemperatureSummary};
use crate::models::ObservationDate;

pub mod error;

pub use error::{ErrorContext, RepositoryError, RepositoryResult};

/// Read-only access to the `station` and `measurement` tables.
///
/// Sequences come back in table order (ascending primary key).
///
/// # Thread Safety
/// Implementations must be `Send + Sync` so one instance can be shared by all
/// request handlers.
#[async_trait]
pub trait ClimateRepository: Send + Sync {
    /// Check if the dataset is reachable.
    ///
    /// # Returns
    /// - `Ok(true)` if a trivial query succeeds
    /// - `Ok(false)` if the backend reports itself unhealthy without an error
    /// - `Err(RepositoryError)` if the check itself failed
    async fn health_check(&self) -> RepositoryResult<bool>;

    /// Raw `max(measurement.date)`, `None` when the table is empty.
    async fn latest_observation_date(&self) -> RepositoryResult<Option<String>>;

    /// Every station code.
    async fn station_codes(&self) -> RepositoryResult<Vec<String>>;

    /// `(date, prcp)` for every measurement with `date >= since`.
    async fn precipitation_since(
        &self,
        since: ObservationDate,
    ) -> RepositoryResult<Vec<PrecipitationRecord>>;

    /// `(date, tobs)` for one station with `date >= since`.
    async fn temperature_observations(
        &self,
        station: &str,
        since: ObservationDate,
    ) -> RepositoryResult<Vec<TemperatureObservation>>;

    /// Min/avg/max of `tobs` over the rows inside `range`.
    ///
    /// An empty match is not an error; it yields [`TemperatureSummary::empty`].
    async fn temperature_summary(&self, range: DateRange) -> RepositoryResult<TemperatureSummary>;
}
