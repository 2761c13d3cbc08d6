// Expected, business-rule failures raised by handlers

use std::collections::BTreeMap;
use std::fmt::Display;

use axum::http::StatusCode;
use serde_json::{json, Value};
use thiserror::Error;

pub const DEFAULT_VALIDATION_MESSAGE: &str = "Se produjeron uno o más errores de validación";
pub const DEFAULT_UNAUTHORIZED_MESSAGE: &str = "No autorizado para realizar esta acción";

/// Errors the caller can act on. Each variant knows its HTTP status;
/// the error middleware reports message and status verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// 422, optionally with messages per offending field.
    #[error("{message}")]
    Validation {
        message: String,
        errors: BTreeMap<String, Vec<String>>,
    },

    /// 404
    #[error("{resource} con ID '{id}' no fue encontrado")]
    NotFound { resource: String, id: String },

    /// 409
    #[error("{message}")]
    Duplicate { message: String },

    /// 401
    #[error("{message}")]
    Unauthorized { message: String },
}

impl DomainError {
    /// Free-form validation failure without field details.
    pub fn validation(message: impl Into<String>) -> Self {
        DomainError::Validation {
            message: message.into(),
            errors: BTreeMap::new(),
        }
    }

    /// Validation failure grouped by field; repeated fields accumulate.
    pub fn invalid_fields<I, K, V>(fields: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut errors: BTreeMap<String, Vec<String>> = BTreeMap::new();
        for (field, message) in fields {
            errors.entry(field.into()).or_default().push(message.into());
        }
        DomainError::Validation {
            message: DEFAULT_VALIDATION_MESSAGE.to_owned(),
            errors,
        }
    }

    pub fn not_found(resource: impl Into<String>, id: impl Display) -> Self {
        DomainError::NotFound {
            resource: resource.into(),
            id: id.to_string(),
        }
    }

    pub fn duplicate(resource: impl Display, field: impl Display, value: impl Display) -> Self {
        DomainError::Duplicate {
            message: format!("{resource} con {field} '{value}' ya existe"),
        }
    }

    pub fn duplicate_message(message: impl Into<String>) -> Self {
        DomainError::Duplicate { message: message.into() }
    }

    pub fn unauthorized() -> Self {
        DomainError::Unauthorized {
            message: DEFAULT_UNAUTHORIZED_MESSAGE.to_owned(),
        }
    }

    pub fn unauthorized_with(message: impl Into<String>) -> Self {
        DomainError::Unauthorized { message: message.into() }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            DomainError::Validation { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            DomainError::NotFound { .. } => StatusCode::NOT_FOUND,
            DomainError::Duplicate { .. } => StatusCode::CONFLICT,
            DomainError::Unauthorized { .. } => StatusCode::UNAUTHORIZED,
        }
    }

    /// Structured payload reported under `errors`, when there is one.
    pub fn details(&self) -> Option<Value> {
        match self {
            DomainError::Validation { errors, .. } if !errors.is_empty() => Some(json!(errors)),
            _ => None,
        }
    }
}
