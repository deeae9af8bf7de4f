#![allow(dead_code)]

use std::collections::HashSet;
use std::sync::Mutex;

use climate_api::db::LocalRepository;
use climate_api::models::{Measurement, Station};

static ENV_LOCK: Mutex<()> = Mutex::new(());

/// Runs `f` with environment variables temporarily modified.
///
/// This is panic-safe (restores variables on unwind) and also serializes access to
/// process-global env vars to avoid flaky tests when Rust runs tests in parallel.
///
/// `changes` is a list of `(key, value)` pairs:
/// - `Some(v)` sets the variable to `v`
/// - `None` removes the variable
pub fn with_scoped_env<F, R>(changes: &[(&str, Option<&str>)], f: F) -> R
where
    F: FnOnce() -> R,
{
    let _lock = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
    let _guard = ScopedEnv::new(changes);
    f()
}

struct ScopedEnv {
    snapshot: Vec<(String, Option<String>)>,
}

impl ScopedEnv {
    fn new(changes: &[(&str, Option<&str>)]) -> Self {
        let keys: HashSet<&str> = changes.iter().map(|(k, _)| *k).collect();
        let snapshot = keys
            .into_iter()
            .map(|k| (k.to_string(), std::env::var(k).ok()))
            .collect::<Vec<_>>();

        for (k, v) in changes {
            match v {
                Some(val) => std::env::set_var(k, val),
                None => std::env::remove_var(k),
            }
        }

        Self { snapshot }
    }
}

impl Drop for ScopedEnv {
    fn drop(&mut self) {
        for (k, v) in self.snapshot.drain(..) {
            match v {
                Some(val) => std::env::set_var(&k, val),
                None => std::env::remove_var(&k),
            }
        }
    }
}

pub const WAIKIKI: &str = "USC00519397";
pub const KANEOHE: &str = "USC00513117";
pub const WAIHEE: &str = "USC00519281";

pub fn stations() -> Vec<Station> {
    vec![
        Station::new(WAIKIKI, "WAIKIKI 717.2, HI US", 21.2716, -157.8168, 3.0),
        Station::new(KANEOHE, "KANEOHE 838.1, HI US", 21.4234, -157.8015, 14.6),
        Station::new(WAIHEE, "WAIHEE 837.5, HI US", 21.45167, -157.84889, 32.9),
    ]
}

/// Measurements in table order. Latest date is 2017-08-23, so the trailing
/// year starts at 2016-08-23.
pub fn measurements() -> Vec<Measurement> {
    vec![
        Measurement::new(WAIKIKI, "2010-01-01", Some(0.08), 65.0),
        Measurement::new(WAIHEE, "2010-01-01", Some(0.15), 70.0),
        Measurement::new(WAIKIKI, "2016-08-22", Some(0.40), 80.0),
        Measurement::new(WAIHEE, "2016-08-22", Some(2.05), 78.0),
        Measurement::new(WAIKIKI, "2016-08-23", Some(0.0), 81.0),
        Measurement::new(KANEOHE, "2016-08-23", None, 76.0),
        Measurement::new(WAIHEE, "2016-08-23", Some(1.79), 77.0),
        Measurement::new(WAIHEE, "2017-02-14", Some(0.0), 62.0),
        Measurement::new(KANEOHE, "2017-08-18", Some(0.06), 79.0),
        Measurement::new(WAIHEE, "2017-08-18", None, 79.0),
        Measurement::new(WAIKIKI, "2017-08-23", Some(0.0), 81.0),
        Measurement::new(KANEOHE, "2017-08-23", Some(0.45), 82.0),
    ]
}

pub fn hawaii_repository() -> LocalRepository {
    LocalRepository::with_data(stations(), measurements())
}

/// Write the same rows into a SQLite file laid out like the climate dataset.
#[cfg(feature = "sqlite-repo")]
pub fn write_sqlite_fixture(path: &std::path::Path) {
    use diesel::connection::SimpleConnection;
    use diesel::prelude::*;

    let mut sql = String::from(
        "CREATE TABLE station (
            id INTEGER PRIMARY KEY,
            station TEXT NOT NULL,
            name TEXT NOT NULL,
            latitude REAL NOT NULL,
            longitude REAL NOT NULL,
            elevation REAL NOT NULL
        );
        CREATE TABLE measurement (
            id INTEGER PRIMARY KEY,
            station TEXT NOT NULL,
            date TEXT NOT NULL,
            prcp REAL,
            tobs REAL NOT NULL
        );
        CREATE INDEX measurement_date ON measurement (date DESC);\n",
    );
    for s in stations() {
        sql.push_str(&format!(
            "INSERT INTO station (station, name, latitude, longitude, elevation) VALUES ('{}', '{}', {}, {}, {});\n",
            s.station, s.name, s.latitude, s.longitude, s.elevation
        ));
    }
    for m in measurements() {
        let prcp = m.prcp.map(|p| p.to_string()).unwrap_or_else(|| "NULL".to_string());
        sql.push_str(&format!(
            "INSERT INTO measurement (station, date, prcp, tobs) VALUES ('{}', '{}', {}, {});\n",
            m.station, m.date, prcp, m.tobs
        ));
    }

    let url = path.to_str().expect("utf-8 fixture path");
    let mut conn = SqliteConnection::establish(url).expect("create fixture database");
    conn.batch_execute(&sql).expect("populate fixture database");
}

/// Issue a GET against the router and collect status, content type and body.
#[cfg(feature = "http-server")]
pub async fn get(router: axum::Router, uri: &str) -> (axum::http::StatusCode, String, String) {
    use axum::body::Body;
    use axum::http::{header, Request};
    use tower::ServiceExt;

    let request = Request::builder()
        .uri(uri)
        .body(Body::empty())
        .expect("valid request");
    let response = router.oneshot(request).await.expect("infallible router");

    let status = response.status();
    let content_type = response
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("readable body");
    (status, content_type, String::from_utf8(bytes.to_vec()).expect("utf-8 body"))
}
