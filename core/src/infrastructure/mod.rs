use crate::domain::common::CoreError;

pub mod account;
pub mod message;

/// Translate a driver error into the core error kind, logging the statement
/// and the driver-reported code before the original error is dropped. Nothing
/// above the adapter layer ever sees a raw `sqlx::Error`.
pub(crate) fn translate_db_error(err: sqlx::Error, sql: &str) -> CoreError {
    let code = err
        .as_database_error()
        .and_then(|db| db.code())
        .map(|code| code.into_owned());

    tracing::error!(sql, code = code.as_deref(), error = %err, "database statement failed");

    CoreError::DatabaseError {
        msg: err.to_string(),
    }
}
