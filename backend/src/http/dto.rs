//! Data Transfer Objects for the HTTP API.
//!
//! The data endpoints serialize the types in [`crate::api`] directly; only
//! the service-level responses live here.

use serde::{Deserialize, Serialize};

pub use crate::api::{PrecipitationRecord, TemperatureObservation, TemperatureSummary};

/// Version segment of every data route.
pub const API_VERSION: &str = "v1.0";

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Status of the service
    pub status: String,
    /// Version of the API
    pub version: String,
    /// Dataset connection status
    pub database: String,
}
