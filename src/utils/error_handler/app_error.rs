// Top-level error type returned by handlers

use std::backtrace::{Backtrace, BacktraceStatus};
use std::error::Error as StdError;
use std::fmt::Write;

use axum::{
    extract::rejection::{PathRejection, QueryRejection},
    response::{IntoResponse, Response},
};
use thiserror::Error;

use super::classification::{classify, SQL_FOREIGN_KEY_VIOLATION, SQL_NOT_NULL_VIOLATION, SQL_TIMEOUT, SQL_UNIQUE_CONSTRAINT};
use super::domain_error::DomainError;
use super::problem::{ProblemDetails, ProblemReport};

// PostgreSQL SQLSTATE for a cancelled statement (statement_timeout)
const PG_QUERY_CANCELED: &str = "57014";
const UNMAPPED_DATABASE_ERROR: i32 = 0;

/// Error raised by the database engine, identified by its vendor number.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("database error {number}: {message}")]
pub struct DatabaseFailure {
    pub number: i32,
    pub message: String,
}

impl DatabaseFailure {
    pub fn new(number: i32, message: impl Into<String>) -> Self {
        Self {
            number,
            message: message.into(),
        }
    }
}

/// Generic failure of the persistence layer, usually wrapping the
/// engine error that caused it.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct PersistenceError {
    pub message: String,
    pub source: Option<DatabaseFailure>,
}

impl PersistenceError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            source: None,
        }
    }

    pub fn wrapping(message: impl Into<String>, failure: DatabaseFailure) -> Self {
        Self {
            message: message.into(),
            source: Some(failure),
        }
    }
}

/// Everything a handler can fail with. The error middleware turns each
/// variant into a problem document; see `classification::classify`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error(transparent)]
    Persistence(#[from] PersistenceError),

    /// Malformed input that never reached business rules.
    #[error("{0}")]
    BadArgument(String),

    #[error("{0}")]
    UnauthorizedAccess(String),

    #[error("{0}")]
    NotFound(String),

    /// Operation not allowed in the current state of the resource.
    #[error("{0}")]
    InvalidState(String),

    #[error(transparent)]
    Unexpected(#[from] anyhow::Error),
}

pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    /// Full server-side description: error chain plus a backtrace when
    /// capturing is enabled (`RUST_BACKTRACE`).
    pub fn diagnostics(&self) -> String {
        if let AppError::Unexpected(inner) = self {
            return format!("{inner:?}");
        }

        let mut text: String = self.to_string();
        let mut source: Option<&dyn StdError> = self.source();
        while let Some(cause) = source {
            let _ = write!(text, "\n  caused by: {cause}");
            source = cause.source();
        }

        let backtrace: Backtrace = Backtrace::capture();
        if backtrace.status() == BacktraceStatus::Captured {
            let _ = write!(text, "\nbacktrace:\n{backtrace}");
        }
        text
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let problem: ProblemDetails = classify(&self);
        ProblemReport::new(problem, self.diagnostics()).into_response()
    }
}

impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        const WRAPPER: &str = "An error occurred while executing the database command";

        match err {
            sqlx::Error::RowNotFound => AppError::NotFound("No se encontró el registro solicitado".to_owned()),
            sqlx::Error::PoolTimedOut => {
                PersistenceError::wrapping(WRAPPER, DatabaseFailure::new(SQL_TIMEOUT, "pool timed out")).into()
            }
            sqlx::Error::Database(db) => {
                let number: i32 = vendor_number(db.as_ref());
                PersistenceError::wrapping(WRAPPER, DatabaseFailure::new(number, db.message())).into()
            }
            other => PersistenceError::wrapping(WRAPPER, DatabaseFailure::new(UNMAPPED_DATABASE_ERROR, other.to_string())).into(),
        }
    }
}

/// Translates a driver error into the SQL Server number the
/// classification table is keyed on.
fn vendor_number(db: &dyn sqlx::error::DatabaseError) -> i32 {
    use sqlx::error::ErrorKind;

    match db.kind() {
        ErrorKind::UniqueViolation => SQL_UNIQUE_CONSTRAINT,
        ErrorKind::ForeignKeyViolation => SQL_FOREIGN_KEY_VIOLATION,
        ErrorKind::NotNullViolation => SQL_NOT_NULL_VIOLATION,
        _ => match db.code().as_deref() {
            Some(PG_QUERY_CANCELED) => SQL_TIMEOUT,
            Some(code) => code.parse().unwrap_or(UNMAPPED_DATABASE_ERROR),
            None => UNMAPPED_DATABASE_ERROR,
        },
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        AppError::BadArgument(rejection.body_text())
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        AppError::BadArgument(rejection.body_text())
    }
}
