// Error taxonomy, classification and the problem+json middleware

pub mod app_error;
pub mod classification;
pub mod domain_error;
#[allow(clippy::module_inception)]
pub mod error_handler;
pub mod problem;

pub use app_error::{AppError, AppResult, DatabaseFailure, PersistenceError};
pub use classification::{classify, database_mapping, title_for};
pub use domain_error::DomainError;
pub use error_handler::{find_cause, handle_global_error, handle_panic, problem_responder};
pub use problem::{ProblemDetails, ProblemReport, PROBLEM_JSON};
