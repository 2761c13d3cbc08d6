// Unified success envelope for API responses
// Provides HandlerResponse struct and middleware for standardizing successful responses

use axum::{
    body::Body,
    http::{header::CONTENT_TYPE, response::Parts, HeaderValue, Request, Response, StatusCode},
    middleware::Next,
    response::IntoResponse,
    Json,
};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::{debug, error};

use crate::utils::utils::to_two_space_indented_json;

/// Standard JSON envelope for successful API responses
#[derive(Serialize, Deserialize)]
pub struct ResponseFormat {
    pub status: String,          // HTTP status text (e.g. "OK", "CREATED")
    pub code: u16,               // HTTP status code
    pub data: serde_json::Value, // Response payload
    pub messages: Vec<String>,   // Informational messages
    pub date: String,            // ISO timestamp
}

/// Convenience struct for building responses in handlers
#[derive(Debug, Clone)]
pub struct HandlerResponse {
    pub status_code: StatusCode,
    pub data: serde_json::Value,
    pub messages: Vec<String>,
}

impl HandlerResponse {
    /// Creates a new response with specified status code
    pub fn new(status_code: StatusCode) -> Self {
        Self {
            status_code,
            data: serde_json::Value::Null,
            messages: Vec::new(),
        }
    }

    /// Adds JSON data payload to the response
    pub fn data(mut self, data: serde_json::Value) -> Self {
        self.data = data;
        self
    }

    /// Adds an informational message to the response
    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.messages.push(message.into());
        self
    }
}

impl IntoResponse for HandlerResponse {
    fn into_response(self) -> axum::response::Response {
        let mut response: Response<Body> = Json(json!({
            "data": self.data,
            "messages": self.messages
        }))
        .into_response();

        *response.status_mut() = self.status_code;

        // Store HandlerResponse in extensions for middleware processing
        response.extensions_mut().insert(self);
        response
    }
}

/// "Not Found" -> "NOT_FOUND"
fn status_label(status: StatusCode) -> String {
    status
        .canonical_reason()
        .unwrap_or("UNKNOWN STATUS")
        .to_uppercase()
        .replace(' ', "_")
}

/// Logs the formatted response with proper JSON indentation
fn log_formatted_response(wrapped: &ResponseFormat) {
    match to_two_space_indented_json(wrapped) {
        Ok(spaced_json) => debug!("\nFinal response:\n{}", spaced_json),
        Err(err) => error!("Failed to format response JSON: {:?}", err),
    }
}

/// Builds the final response with JSON content type
fn build_final_response(mut parts: Parts, wrapped: &ResponseFormat) -> Response<Body> {
    let json_body: Vec<u8> = serde_json::to_vec(wrapped).unwrap_or_else(|_| b"{}".to_vec());

    parts.headers.remove(axum::http::header::CONTENT_LENGTH);
    parts
        .headers
        .insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

    Response::from_parts(parts, Body::from(json_body))
}

/// Middleware that wraps handler output in the standard ResponseFormat structure.
/// Responses that did not come from a `HandlerResponse` pass through untouched.
pub async fn response_wrapper(req: Request<Body>, next: Next) -> Response<Body> {
    let response: Response<Body> = next.run(req).await;

    let Some(handler_response) = response.extensions().get::<HandlerResponse>().cloned() else {
        return response;
    };
    let (parts, _) = response.into_parts();

    let wrapped: ResponseFormat = ResponseFormat {
        status: status_label(parts.status),
        code: parts.status.as_u16(),
        data: handler_response.data,
        messages: handler_response.messages,
        date: Utc::now().to_rfc3339(),
    };

    log_formatted_response(&wrapped);

    build_final_response(parts, &wrapped)
}
