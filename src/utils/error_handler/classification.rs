// Maps every failure kind to a status code and a client-safe message

use std::collections::HashMap;

use axum::http::StatusCode;
use once_cell::sync::Lazy;

use super::app_error::{AppError, PersistenceError};
use super::problem::ProblemDetails;

// ! SQL Server error numbers. Other engines translate their own codes into
// ! these when building a `DatabaseFailure` (see `From<sqlx::Error>`).
pub const SQL_TIMEOUT: i32 = -2;
pub const SQL_NOT_NULL_VIOLATION: i32 = 515;
pub const SQL_FOREIGN_KEY_VIOLATION: i32 = 547;
pub const SQL_DUPLICATE_KEY: i32 = 2601;
pub const SQL_UNIQUE_CONSTRAINT: i32 = 2627;

pub const MSG_DUPLICATE_RECORD: &str = "ya existe un registro con estos datos";
pub const MSG_RECORD_IN_USE: &str = "No se puede eliminar el registro porque está siendo utilizado";
pub const MSG_MISSING_DATA: &str = "Faltan datos requeridos";
pub const MSG_DB_TIMEOUT: &str = "La operación tardó demasiado tiempo";
pub const MSG_DB_ERROR: &str = "Error de base de datos";

const STATUS_TITLES: [(u16, &str); 7] = [
    (400, "Bad Request"),
    (401, "Unauthorized"),
    (403, "Forbidden"),
    (404, "Not Found"),
    (409, "Conflict"),
    (422, "Unprocessable Entity"),
    (500, "Internal Server Error"),
];

static DATABASE_ERRORS: Lazy<HashMap<i32, (StatusCode, &'static str)>> = Lazy::new(|| {
    HashMap::from([
        (SQL_DUPLICATE_KEY, (StatusCode::CONFLICT, MSG_DUPLICATE_RECORD)),
        (SQL_UNIQUE_CONSTRAINT, (StatusCode::CONFLICT, MSG_DUPLICATE_RECORD)),
        (SQL_FOREIGN_KEY_VIOLATION, (StatusCode::CONFLICT, MSG_RECORD_IN_USE)),
        (SQL_NOT_NULL_VIOLATION, (StatusCode::BAD_REQUEST, MSG_MISSING_DATA)),
        (SQL_TIMEOUT, (StatusCode::REQUEST_TIMEOUT, MSG_DB_TIMEOUT)),
    ])
});

/// Title for a status code; anything outside the table is "Error".
pub fn title_for(status: StatusCode) -> &'static str {
    STATUS_TITLES
        .iter()
        .find(|(code, _)| *code == status.as_u16())
        .map(|(_, title)| *title)
        .unwrap_or("Error")
}

/// Status and generic message for a database vendor error number.
pub fn database_mapping(number: i32) -> (StatusCode, &'static str) {
    DATABASE_ERRORS
        .get(&number)
        .copied()
        .unwrap_or((StatusCode::INTERNAL_SERVER_ERROR, MSG_DB_ERROR))
}

/// Classifies a failure into the problem document sent to the client.
///
/// Domain errors keep their own status and message; persistence failures
/// that wrap a database error are reduced to the vendor-code table; the
/// standard categories get their conventional statuses and everything
/// else is a 500 carrying the error's own message.
pub fn classify(err: &AppError) -> ProblemDetails {
    match err {
        AppError::Domain(domain) => {
            ProblemDetails::new(domain.status(), domain.to_string()).with_errors(domain.details())
        }
        AppError::Persistence(PersistenceError { source: Some(db), .. }) => {
            let (status, message) = database_mapping(db.number);
            ProblemDetails::new(status, message)
        }
        AppError::Persistence(unwrapped) => {
            ProblemDetails::new(StatusCode::INTERNAL_SERVER_ERROR, unwrapped.to_string())
        }
        AppError::BadArgument(message) => ProblemDetails::new(StatusCode::BAD_REQUEST, message.clone()),
        AppError::UnauthorizedAccess(message) => ProblemDetails::new(StatusCode::UNAUTHORIZED, message.clone()),
        AppError::NotFound(message) => ProblemDetails::new(StatusCode::NOT_FOUND, message.clone()),
        AppError::InvalidState(message) => ProblemDetails::new(StatusCode::CONFLICT, message.clone()),
        AppError::Unexpected(inner) => ProblemDetails::new(StatusCode::INTERNAL_SERVER_ERROR, inner.to_string()),
    }
}
