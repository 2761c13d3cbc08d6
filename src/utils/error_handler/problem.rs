// Problem document returned for every failed request

use axum::{
    body::Body,
    http::{header::CONTENT_TYPE, HeaderValue, Response, StatusCode},
    response::IntoResponse,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::classification::title_for;

pub const PROBLEM_JSON: &str = "application/problem+json";

/// Client-safe error body: `{status, title, detail, instance, errors?}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProblemDetails {
    pub status: u16,
    pub title: String,
    pub detail: String,
    pub instance: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<Value>,
}

impl ProblemDetails {
    /// Title comes from the status lookup; instance is filled in by the
    /// error middleware once the request path is known.
    pub fn new(status: StatusCode, detail: impl Into<String>) -> Self {
        Self {
            status: status.as_u16(),
            title: title_for(status).to_owned(),
            detail: detail.into(),
            instance: String::new(),
            errors: None,
        }
    }

    pub fn with_errors(mut self, errors: Option<Value>) -> Self {
        self.errors = errors;
        self
    }

    pub fn with_instance(mut self, instance: impl Into<String>) -> Self {
        self.instance = instance.into();
        self
    }

    pub fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(self.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }

    /// Builds the `application/problem+json` response for this document.
    pub fn to_response(&self) -> Response<Body> {
        let json_body: Vec<u8> = serde_json::to_vec(self).unwrap_or_else(|_| b"{}".to_vec());
        let mut response: Response<Body> = Response::new(Body::from(json_body));
        *response.status_mut() = self.status_code();
        response
            .headers_mut()
            .insert(CONTENT_TYPE, HeaderValue::from_static(PROBLEM_JSON));
        response
    }
}

/// A classified failure travelling up to the error middleware in the
/// response extensions. `diagnostics` is for the server log only.
#[derive(Debug, Clone)]
pub struct ProblemReport {
    pub problem: ProblemDetails,
    pub diagnostics: String,
}

impl ProblemReport {
    pub fn new(problem: ProblemDetails, diagnostics: impl Into<String>) -> Self {
        Self {
            problem,
            diagnostics: diagnostics.into(),
        }
    }
}

impl IntoResponse for ProblemReport {
    fn into_response(self) -> axum::response::Response {
        let mut response: Response<Body> = self.problem.to_response();
        response.extensions_mut().insert(self);
        response
    }
}
