//! Tests for the repository error taxonomy as seen by callers.

mod support;

use climate_api::db::repository::{ErrorContext, RepositoryError, RepositoryResult};
use climate_api::db::{resolve_reference_date, LocalRepository};
use climate_api::models::Measurement;

#[test]
fn test_error_context_default() {
    let ctx = ErrorContext::default();
    assert!(ctx.operation.is_none());
    assert!(ctx.entity.is_none());
    assert!(ctx.details.is_none());
}

#[test]
fn test_repository_error_connection_with_context() {
    let ctx = ErrorContext::new("open_pool").with_entity("dataset");
    let err = RepositoryError::connection_with_context("unable to open database file", ctx);
    let err_str = err.to_string();
    assert!(err_str.contains("Connection error"));
    assert!(err_str.contains("unable to open database file"));
    assert!(err_str.contains("operation=open_pool"));
    assert!(err_str.contains("entity=dataset"));
}

#[test]
fn test_with_operation_keeps_entity_and_details() {
    let ctx = ErrorContext::new("first")
        .with_entity("measurement")
        .with_details("start=2017-01-01");
    let err = RepositoryError::query_with_context("boom", ctx).with_operation("second");

    let ctx = err.context();
    assert_eq!(ctx.operation.as_deref(), Some("second"));
    assert_eq!(ctx.entity.as_deref(), Some("measurement"));
    assert_eq!(ctx.details.as_deref(), Some("start=2017-01-01"));
}

#[test]
fn test_repository_error_debug() {
    let err = RepositoryError::internal("join failed");
    let debug_str = format!("{:?}", err);
    assert!(debug_str.contains("InternalError"));
}

#[test]
fn test_repository_result_err() {
    let result: RepositoryResult<i32> = Err(RepositoryError::data("empty"));
    assert!(matches!(result, Err(RepositoryError::DataError { .. })));
}

#[tokio::test]
async fn test_reference_date_on_empty_table_is_data_error() {
    let repo = LocalRepository::new();
    let err = resolve_reference_date(&repo).await.unwrap_err();

    assert!(matches!(err, RepositoryError::DataError { .. }));
    assert_eq!(err.code(), "DATA_ERROR");
    assert_eq!(
        err.context().operation.as_deref(),
        Some("resolve_reference_date")
    );
    assert_eq!(err.context().entity.as_deref(), Some("measurement"));
}

#[tokio::test]
async fn test_reference_date_on_malformed_date_is_data_error() {
    let repo = LocalRepository::new();
    repo.add_measurement(Measurement::new(support::WAIKIKI, "08/23/2017", None, 80.0));

    let err = resolve_reference_date(&repo).await.unwrap_err();
    assert!(matches!(err, RepositoryError::DataError { .. }));
    assert!(err.to_string().contains("08/23/2017"));
}

#[cfg(feature = "sqlite-repo")]
mod diesel_conversions {
    use super::*;
    use diesel::result::{DatabaseErrorKind, Error as DieselError};

    #[test]
    fn test_database_error_becomes_query_error() {
        let err: RepositoryError = DieselError::DatabaseError(
            DatabaseErrorKind::Unknown,
            Box::new("no such table: measurement".to_string()),
        )
        .into();

        assert!(matches!(err, RepositoryError::QueryError { .. }));
        assert!(err.to_string().contains("no such table: measurement"));
        assert!(err
            .context()
            .details
            .as_deref()
            .is_some_and(|d| d.contains("Unknown")));
    }

    #[test]
    fn test_not_found_becomes_query_error() {
        let err: RepositoryError = DieselError::NotFound.into();
        assert_eq!(err.code(), "QUERY_ERROR");
    }
}
