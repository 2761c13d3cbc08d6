// Fallback for unmatched routes

use axum::http::Uri;

use crate::utils::error_handler::AppError;

/// Unknown routes are reported as a not-found problem
pub async fn fallback_handler(uri: Uri) -> AppError {
    AppError::NotFound(format!("La ruta '{}' no existe", uri.path()))
}
