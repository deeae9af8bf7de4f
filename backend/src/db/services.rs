//! Query service: the operations behind each API route.
//!
//! Functions here work with any [`ClimateRepository`] and hold the logic that
//! is not a single query, namely the trailing one-year window.

use crate::api::{
    DateRange, PrecipitationRecord, TemperatureObservation, TemperatureSummary,
    MOST_ACTIVE_STATION,
};
use crate::db::repository::{ClimateRepository, ErrorContext, RepositoryError, RepositoryResult};
use crate::models::ObservationDate;

/// Check if the dataset is reachable.
pub async fn health_check(repo: &dyn ClimateRepository) -> RepositoryResult<bool> {
    repo.health_check().await
}

/// Latest observation date minus 365 days.
///
/// # Errors
/// `DataError` when the measurement table is empty or its latest date is not
/// `YYYY-MM-DD`.
pub async fn resolve_reference_date(
    repo: &dyn ClimateRepository,
) -> RepositoryResult<ObservationDate> {
    let context = || ErrorContext::new("resolve_reference_date").with_entity("measurement");

    let latest = repo.latest_observation_date().await?.ok_or_else(|| {
        RepositoryError::data_with_context("measurement table is empty", context())
    })?;

    let latest = ObservationDate::parse(&latest)
        .map_err(|e| RepositoryError::data_with_context(e.to_string(), context()))?;

    let reference = latest.one_year_before().ok_or_else(|| {
        RepositoryError::data_with_context(
            format!("no date one year before {}", latest),
            context(),
        )
    })?;

    log::debug!("Reference date {} (latest observation {})", reference, latest);
    Ok(reference)
}

/// Precipitation for the trailing year.
pub async fn list_precipitation(
    repo: &dyn ClimateRepository,
) -> RepositoryResult<Vec<PrecipitationRecord>> {
    let since = resolve_reference_date(repo).await?;
    repo.precipitation_since(since).await
}

/// All station codes.
pub async fn list_stations(repo: &dyn ClimateRepository) -> RepositoryResult<Vec<String>> {
    repo.station_codes().await
}

/// Temperature observations of [`MOST_ACTIVE_STATION`] for the trailing year.
pub async fn list_temperature_observations(
    repo: &dyn ClimateRepository,
) -> RepositoryResult<Vec<TemperatureObservation>> {
    let since = resolve_reference_date(repo).await?;
    repo.temperature_observations(MOST_ACTIVE_STATION, since)
        .await
}

/// `[min, avg, max]` temperature over `range`.
pub async fn temperature_summary(
    repo: &dyn ClimateRepository,
    range: DateRange,
) -> RepositoryResult<TemperatureSummary> {
    repo.temperature_summary(range).await
}
