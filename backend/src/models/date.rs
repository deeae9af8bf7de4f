use chrono::{Days, NaiveDate};
use serde::*;
use std::fmt;
use std::str::FromStr;

/// Storage format of `measurement.date`.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Length of the trailing window used by the "last 12 months" queries.
pub const ONE_YEAR_DAYS: u64 = 365;

/// Error returned when a string is not a `YYYY-MM-DD` calendar date.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("'{input}' is not a valid YYYY-MM-DD date")]
pub struct DateParseError {
    pub input: String,
}

/// A calendar date as stored in the measurement table.
///
/// Displays and serializes as `YYYY-MM-DD`, so the string form compares the
/// same way the stored text column does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ObservationDate(NaiveDate);

impl ObservationDate {
    pub fn new(date: NaiveDate) -> Self {
        Self(date)
    }

    /// Strict parse: exactly ten characters, zero-padded.
    pub fn parse(value: &str) -> Result<Self, DateParseError> {
        let err = || DateParseError {
            input: value.to_string(),
        };
        // chrono accepts "2017-8-3" for %m/%d, which would break text ordering
        if value.len() != 10 {
            return Err(err());
        }
        NaiveDate::parse_from_str(value, DATE_FORMAT)
            .map(Self)
            .map_err(|_| err())
    }

    pub fn value(&self) -> NaiveDate {
        self.0
    }

    /// The date 365 days earlier.
    pub fn one_year_before(&self) -> Option<Self> {
        self.0.checked_sub_days(Days::new(ONE_YEAR_DAYS)).map(Self)
    }
}

impl fmt::Display for ObservationDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(DATE_FORMAT))
    }
}

impl FromStr for ObservationDate {
    type Err = DateParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<NaiveDate> for ObservationDate {
    fn from(date: NaiveDate) -> Self {
        Self(date)
    }
}

impl Serialize for ObservationDate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for ObservationDate {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Self::parse(&raw).map_err(de::Error::custom)
    }
}
