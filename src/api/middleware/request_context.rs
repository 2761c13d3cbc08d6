// Request id, span and completion log for every request

use std::time::{Duration, Instant};

use axum::{
    body::Body,
    http::{HeaderValue, Request, Response},
    middleware::Next,
};
use tracing::{info, info_span, Instrument, Span};
use uuid::Uuid;

/// Header carrying the request id back to the caller
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Per-request context stored in request extensions
#[derive(Debug, Clone, Copy)]
pub struct RequestContext {
    pub request_id: Uuid,
    pub started_at: Instant,
}

impl RequestContext {
    pub fn elapsed(&self) -> Duration {
        self.started_at.elapsed()
    }
}

/// Outermost middleware: tags the request with an id, runs the rest of the
/// stack inside a span carrying that id, and logs the completed request.
pub async fn request_context_middleware(mut request: Request<Body>, next: Next) -> Response<Body> {
    let context: RequestContext = RequestContext {
        request_id: Uuid::new_v4(),
        started_at: Instant::now(),
    };

    let span: Span = info_span!(
        "request",
        request_id = %context.request_id,
        method = %request.method(),
        path = %request.uri().path(),
    );

    request.extensions_mut().insert(context);

    let mut response: Response<Body> = next.run(request).instrument(span.clone()).await;

    if let Ok(value) = HeaderValue::from_str(&context.request_id.to_string()) {
        response.headers_mut().insert(REQUEST_ID_HEADER, value);
    }

    span.in_scope(|| {
        info!(
            status = response.status().as_u16(),
            elapsed_ms = context.elapsed().as_millis() as u64,
            "Request completed"
        );
    });

    response
}
