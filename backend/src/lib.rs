//! # Climate API Backend
//!
//! Read-only JSON API over a climate-observation dataset: weather stations
//! plus their daily precipitation and temperature readings.
//!
//! ## Architecture
//!
//! The crate is organized into several logical modules:
//!
//! - [`api`]: Response types shared by the service and HTTP layers
//! - [`models`]: Station and measurement entities, observation dates
//! - [`db`]: Repository pattern, SQLite and in-memory backends, query services
//! - [`http`]: Axum-based HTTP server and request handlers
//!
//! ## Routes
//!
//! | Path | Response |
//! |---|---|
//! | `/` | HTML index |
//! | `/api/v1.0/precipitation` | `[{"date", "prcp"}]` for the trailing year |
//! | `/api/v1.0/stations` | station codes |
//! | `/api/v1.0/tobs` | `[{"date", "tobs"}]` of station `USC00519281` for the trailing year |
//! | `/api/v1.0/{start}` | `[min, avg, max]` temperature from `start` |
//! | `/api/v1.0/{start}/{end}` | `[min, avg, max]` temperature in `[start, end]` |

pub mod api;
pub mod db;
pub mod models;

#[cfg(feature = "http-server")]
pub mod http;
