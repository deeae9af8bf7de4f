use diesel::prelude::*;

use super::schema::measurement;
use crate::api::{PrecipitationRecord, TemperatureObservation};

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = measurement)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct PrecipitationRow {
    pub date: String,
    pub prcp: Option<f64>,
}

impl From<PrecipitationRow> for PrecipitationRecord {
    fn from(row: PrecipitationRow) -> Self {
        Self {
            date: row.date,
            prcp: row.prcp,
        }
    }
}

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = measurement)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct TemperatureRow {
    pub date: String,
    pub tobs: f64,
}

impl From<TemperatureRow> for TemperatureObservation {
    fn from(row: TemperatureRow) -> Self {
        Self {
            date: row.date,
            tobs: row.tobs,
        }
    }
}
