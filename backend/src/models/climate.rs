use serde::{Deserialize, Serialize};

/// A weather-reporting location.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Station {
    /// Station code, e.g. `USC00519281`
    pub station: String,
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub elevation: f64,
}

impl Station {
    pub fn new(
        station: impl Into<String>,
        name: impl Into<String>,
        latitude: f64,
        longitude: f64,
        elevation: f64,
    ) -> Self {
        Self {
            station: station.into(),
            name: name.into(),
            latitude,
            longitude,
            elevation,
        }
    }
}

/// One daily observation row.
///
/// `date` is kept in its stored `YYYY-MM-DD` text form; range filters compare
/// it as text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Measurement {
    pub station: String,
    pub date: String,
    /// Precipitation, missing on days the gauge did not report
    pub prcp: Option<f64>,
    /// Temperature at observation time
    pub tobs: f64,
}

impl Measurement {
    pub fn new(
        station: impl Into<String>,
        date: impl Into<String>,
        prcp: Option<f64>,
        tobs: f64,
    ) -> Self {
        Self {
            station: station.into(),
            date: date.into(),
            prcp,
            tobs,
        }
    }
}
