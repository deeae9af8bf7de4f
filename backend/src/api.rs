//! Public API surface for the climate backend.
//!
//! This file consolidates the response types for the HTTP API. Field names
//! match the JSON keys clients already rely on (`date`, `prcp`, `tobs`).

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::models::{DateParseError, ObservationDate};

/// Code of the station served by `/api/v1.0/tobs`.
pub const MOST_ACTIVE_STATION: &str = "USC00519281";

/// One precipitation reading in the trailing-year window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PrecipitationRecord {
    pub date: String,
    /// `null` when the gauge did not report
    pub prcp: Option<f64>,
}

/// One temperature reading for a single station.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TemperatureObservation {
    pub date: String,
    pub tobs: f64,
}

/// Min/avg/max of `tobs` over a date range.
///
/// All three are `None` when the range matched no rows. On the wire the
/// summary is the positional array `[min, avg, max]`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TemperatureSummary {
    pub min: Option<f64>,
    pub avg: Option<f64>,
    pub max: Option<f64>,
}

impl TemperatureSummary {
    pub fn new(min: Option<f64>, avg: Option<f64>, max: Option<f64>) -> Self {
        Self { min, avg, max }
    }

    /// Summary over an empty set of rows.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Fold a sequence of temperatures the way SQL `MIN`/`AVG`/`MAX` do.
    pub fn from_temperatures<I: IntoIterator<Item = f64>>(values: I) -> Self {
        let mut count = 0usize;
        let mut sum = 0.0;
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        for value in values {
            count += 1;
            sum += value;
            min = min.min(value);
            max = max.max(value);
        }
        if count == 0 {
            return Self::empty();
        }
        Self::new(Some(min), Some(sum / count as f64), Some(max))
    }

    pub fn is_empty(&self) -> bool {
        self.min.is_none() && self.avg.is_none() && self.max.is_none()
    }
}

impl Serialize for TemperatureSummary {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        (self.min, self.avg, self.max).serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for TemperatureSummary {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let (min, avg, max) = <(Option<f64>, Option<f64>, Option<f64>)>::deserialize(deserializer)?;
        Ok(Self { min, avg, max })
    }
}

/// Inclusive date bounds for a temperature summary. `end` is open when absent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub start: ObservationDate,
    pub end: Option<ObservationDate>,
}

impl DateRange {
    pub fn new(start: ObservationDate, end: Option<ObservationDate>) -> Self {
        Self { start, end }
    }

    /// Range starting at `start` with no upper bound.
    pub fn from_start(start: ObservationDate) -> Self {
        Self { start, end: None }
    }

    /// Parse path segments. Both must be `YYYY-MM-DD`; `start > end` is allowed.
    pub fn parse(start: &str, end: Option<&str>) -> Result<Self, DateParseError> {
        let start = ObservationDate::parse(start)?;
        let end = end.map(ObservationDate::parse).transpose()?;
        Ok(Self { start, end })
    }

    /// Text-compare a stored `YYYY-MM-DD` value against the bounds.
    pub fn contains(&self, date: &str) -> bool {
        if date < self.start.to_string().as_str() {
            return false;
        }
        match self.end {
            Some(end) => date <= end.to_string().as_str(),
            None => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_serializes_positionally() {
        let summary = TemperatureSummary::new(Some(54.0), Some(71.5), Some(85.0));
        assert_eq!(serde_json::to_string(&summary).unwrap(), "[54.0,71.5,85.0]");
    }

    #[test]
    fn test_empty_summary_serializes_as_nulls() {
        let json = serde_json::to_string(&TemperatureSummary::empty()).unwrap();
        assert_eq!(json, "[null,null,null]");
    }

    #[test]
    fn test_summary_deserializes_from_array() {
        let summary: TemperatureSummary = serde_json::from_str("[60.0,65.0,70.0]").unwrap();
        assert_eq!(summary.min, Some(60.0));
        assert_eq!(summary.avg, Some(65.0));
        assert_eq!(summary.max, Some(70.0));
    }

    #[test]
    fn test_summary_from_temperatures() {
        let summary = TemperatureSummary::from_temperatures([70.0, 62.0, 78.0]);
        assert_eq!(summary, TemperatureSummary::new(Some(62.0), Some(70.0), Some(78.0)));
        assert!(TemperatureSummary::from_temperatures(Vec::new()).is_empty());
    }

    #[test]
    fn test_precipitation_record_keeps_null() {
        let record = PrecipitationRecord {
            date: "2017-01-01".to_string(),
            prcp: None,
        };
        assert_eq!(
            serde_json::to_string(&record).unwrap(),
            r#"{"date":"2017-01-01","prcp":null}"#
        );
    }

    #[test]
    fn test_date_range_parse() {
        let range = DateRange::parse("2017-01-01", Some("2017-01-31")).unwrap();
        assert_eq!(range.start.to_string(), "2017-01-01");
        assert_eq!(range.end.unwrap().to_string(), "2017-01-31");

        assert!(DateRange::parse("2017-01-01", None).unwrap().end.is_none());
        assert!(DateRange::parse("Jan 1", None).is_err());
        assert!(DateRange::parse("2017-01-01", Some("later")).is_err());
    }

    #[test]
    fn test_date_range_contains_is_inclusive() {
        let range = DateRange::parse("2017-01-10", Some("2017-01-12")).unwrap();
        assert!(!range.contains("2017-01-09"));
        assert!(range.contains("2017-01-10"));
        assert!(range.contains("2017-01-12"));
        assert!(!range.contains("2017-01-13"));

        let open = DateRange::parse("2017-01-10", None).unwrap();
        assert!(open.contains("2099-12-31"));
    }

    #[test]
    fn test_inverted_range_matches_nothing() {
        let range = DateRange::parse("2017-02-01", Some("2017-01-01")).unwrap();
        assert!(!range.contains("2017-01-15"));
    }
}
