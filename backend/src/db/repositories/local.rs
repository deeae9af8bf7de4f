//! In-memory local repository implementation.
//!
//! This module provides a local implementation of [`ClimateRepository`]
//! suitable for unit testing and local development. Rows live in plain `Vec`s
//! in insertion order, which stands in for table order.

use async_trait::async_trait;
use std::sync::{Arc, RwLock, RwLockReadGuard};

use crate::api::{DateRange, PrecipitationRecord, TemperatureObservation, TemperatureSummary};
use crate::db::repository::{ClimateRepository, ErrorContext, RepositoryError, RepositoryResult};
use crate::models::{Measurement, ObservationDate, Station};

/// In-memory local repository.
///
/// # Example
/// ```
/// use climate_api::db::repositories::LocalRepository;
/// use climate_api::models::{Measurement, Station};
///
/// let repo = LocalRepository::new();
/// repo.add_station(Station::new("USC00519281", "WAIHEE 837.5, HI US", 21.45167, -157.84889, 32.9));
/// repo.add_measurement(Measurement::new("USC00519281", "2017-08-18", Some(0.06), 79.0));
/// assert_eq!(repo.measurement_count(), 1);
/// ```
#[derive(Clone, Default)]
pub struct LocalRepository {
    data: Arc<RwLock<LocalData>>,
}

#[derive(Default)]
struct LocalData {
    stations: Vec<Station>,
    measurements: Vec<Measurement>,
    is_unhealthy: bool,
}

impl LocalRepository {
    /// Create a new empty local repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a repository pre-populated with the given rows.
    pub fn with_data(stations: Vec<Station>, measurements: Vec<Measurement>) -> Self {
        let repo = Self::new();
        {
            let mut data = repo.data.write().unwrap_or_else(|e| e.into_inner());
            data.stations = stations;
            data.measurements = measurements;
        }
        repo
    }

    /// Append a station row.
    pub fn add_station(&self, station: Station) {
        let mut data = self.data.write().unwrap_or_else(|e| e.into_inner());
        data.stations.push(station);
    }

    /// Append a measurement row.
    pub fn add_measurement(&self, measurement: Measurement) {
        let mut data = self.data.write().unwrap_or_else(|e| e.into_inner());
        data.measurements.push(measurement);
    }

    pub fn measurement_count(&self) -> usize {
        self.data.read().map(|d| d.measurements.len()).unwrap_or(0)
    }

    /// Make `health_check` report the dataset as down.
    pub fn set_unhealthy(&self, unhealthy: bool) {
        let mut data = self.data.write().unwrap_or_else(|e| e.into_inner());
        data.is_unhealthy = unhealthy;
    }

    fn read(&self, operation: &str) -> RepositoryResult<RwLockReadGuard<'_, LocalData>> {
        self.data.read().map_err(|e| {
            RepositoryError::internal_with_context(
                format!("Lock poisoned: {}", e),
                ErrorContext::new(operation),
            )
        })
    }
}

#[async_trait]
impl ClimateRepository for LocalRepository {
    async fn health_check(&self) -> RepositoryResult<bool> {
        Ok(!self.read("health_check")?.is_unhealthy)
    }

    async fn latest_observation_date(&self) -> RepositoryResult<Option<String>> {
        let data = self.read("latest_observation_date")?;
        Ok(data.measurements.iter().map(|m| m.date.clone()).max())
    }

    async fn station_codes(&self) -> RepositoryResult<Vec<String>> {
        let data = self.read("station_codes")?;
        Ok(data.stations.iter().map(|s| s.station.clone()).collect())
    }

    async fn precipitation_since(
        &self,
        since: ObservationDate,
    ) -> RepositoryResult<Vec<PrecipitationRecord>> {
        let data = self.read("precipitation_since")?;
        let range = DateRange::from_start(since);
        Ok(data
            .measurements
            .iter()
            .filter(|m| range.contains(&m.date))
            .map(|m| PrecipitationRecord {
                date: m.date.clone(),
                prcp: m.prcp,
            })
            .collect())
    }

    async fn temperature_observations(
        &self,
        station: &str,
        since: ObservationDate,
    ) -> RepositoryResult<Vec<TemperatureObservation>> {
        let data = self.read("temperature_observations")?;
        let range = DateRange::from_start(since);
        Ok(data
            .measurements
            .iter()
            .filter(|m| m.station == station && range.contains(&m.date))
            .map(|m| TemperatureObservation {
                date: m.date.clone(),
                tobs: m.tobs,
            })
            .collect())
    }

    async fn temperature_summary(&self, range: DateRange) -> RepositoryResult<TemperatureSummary> {
        let data = self.read("temperature_summary")?;
        Ok(TemperatureSummary::from_temperatures(
            data.measurements
                .iter()
                .filter(|m| range.contains(&m.date))
                .map(|m| m.tobs),
        ))
    }
}
