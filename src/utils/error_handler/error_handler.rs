// Outermost error handling for the HTTP pipeline

use std::any::Any;
use std::error::Error;

use axum::{
    body::Body,
    http::{Request, Response, StatusCode},
    middleware::Next,
    response::IntoResponse,
    BoxError,
};
use http_body_util::{BodyExt, LengthLimitError};
use tower::timeout::error::Elapsed;
use tracing::error;

use crate::api::middleware::request_context::RequestContext;
use super::classification::MSG_DB_TIMEOUT;
use super::problem::{ProblemDetails, ProblemReport};

const MSG_BODY_TOO_LARGE: &str = "El cuerpo de la solicitud es demasiado grande";
const MSG_INTERNAL: &str = "Error interno del servidor";

/// Maps errors raised by tower layers (timeouts, body limits) to problems
pub async fn handle_global_error(err: BoxError) -> ProblemReport {
    // 413 if the body was too large
    if find_cause::<LengthLimitError>(&*err).is_some() || err.is::<LengthLimitError>() {
        return ProblemReport::new(
            ProblemDetails::new(StatusCode::PAYLOAD_TOO_LARGE, MSG_BODY_TOO_LARGE),
            format!("request body rejected: {err}"),
        );
    }

    // 408 if the request took too long
    if err.is::<Elapsed>() {
        return ProblemReport::new(
            ProblemDetails::new(StatusCode::REQUEST_TIMEOUT, MSG_DB_TIMEOUT),
            format!("request timed out: {err}"),
        );
    }

    // Otherwise, 500 with the raw message
    ProblemReport::new(
        ProblemDetails::new(StatusCode::INTERNAL_SERVER_ERROR, err.to_string()),
        format!("unhandled layer error: {err:?}"),
    )
}

/// Turns a panicking handler into a classified 500
pub fn handle_panic(payload: Box<dyn Any + Send + 'static>) -> Response<Body> {
    let message: String = payload
        .downcast_ref::<String>()
        .cloned()
        .or_else(|| payload.downcast_ref::<&str>().map(|s: &&str| (*s).to_owned()))
        .unwrap_or_else(|| "unknown panic payload".to_owned());

    ProblemReport::new(
        ProblemDetails::new(StatusCode::INTERNAL_SERVER_ERROR, MSG_INTERNAL),
        format!("handler panicked: {message}"),
    )
    .into_response()
}

/// Helper function to find specific error type in error chain
pub fn find_cause<T: Error + 'static>(err: &dyn Error) -> Option<&T> {
    let mut source: Option<&dyn Error> = err.source();

    while let Some(s) = source {
        if let Some(typed) = s.downcast_ref::<T>() {
            return Some(typed);
        }
        source = s.source();
    }

    None
}

/// Middleware that turns every failed response into `application/problem+json`.
///
/// Classified failures arrive as a `ProblemReport` in the response
/// extensions. Error responses produced elsewhere (extractor rejections,
/// method mismatches) are wrapped with their body text as the detail.
/// Each failure is logged at error level with its full diagnostics; the
/// client only ever sees the problem document.
pub async fn problem_responder(req: Request<Body>, next: Next) -> Response<Body> {
    let instance: String = req.uri().path().to_owned();
    let request_id: Option<String> = req
        .extensions()
        .get::<RequestContext>()
        .map(|ctx: &RequestContext| ctx.request_id.to_string());

    let response: Response<Body> = next.run(req).await;

    let report: ProblemReport = match response.extensions().get::<ProblemReport>() {
        Some(report) => report.clone(),
        None if response.status().is_client_error() || response.status().is_server_error() => {
            unclassified_report(response).await
        }
        None => return response,
    };

    let problem: ProblemDetails = report.problem.with_instance(instance);

    error!(
        request_id = request_id.as_deref().unwrap_or("-"),
        instance = %problem.instance,
        status = problem.status,
        detail = %problem.detail,
        "Request failed\n{}",
        report.diagnostics
    );

    problem.to_response()
}

/// Wraps an error response that was not produced by an `AppError`
async fn unclassified_report(response: Response<Body>) -> ProblemReport {
    let status: StatusCode = response.status();
    let (_, body) = response.into_parts();

    let text: String = match body.collect().await {
        Ok(collected) => String::from_utf8_lossy(&collected.to_bytes()).trim().to_owned(),
        Err(err) => {
            error!("Failed to read error response body: {:?}", err);
            String::new()
        }
    };

    // Body-limit rejections from extractors read like the layer error
    let detail: String = match status {
        StatusCode::PAYLOAD_TOO_LARGE => MSG_BODY_TOO_LARGE.to_owned(),
        _ if text.is_empty() => status.canonical_reason().unwrap_or("Error").to_owned(),
        _ => text.clone(),
    };

    ProblemReport::new(
        ProblemDetails::new(status, detail),
        format!("unclassified {status} response: {text}"),
    )
}
