// Application server configuration and setup

use std::time::Duration;

use anyhow::Result;
use axum::{error_handling::HandleErrorLayer, extract::DefaultBodyLimit, middleware::from_fn, Router};
use listenfd::ListenFd;
use tokio::{net::TcpListener, signal};
use tower::{timeout::TimeoutLayer, ServiceBuilder};
use tower_http::catch_panic::CatchPanicLayer;
use tracing::{error, info};

use crate::api::{
    balances::balance_routes, fallback::fallback_handler, middleware::request_context_middleware,
    status::status_routes, zones::zone_routes,
};
use crate::config::{environment::EnvironmentVariables, state::AppState};
use crate::utils::{
    error_handler::{handle_global_error, handle_panic, problem_responder},
    response_handler::response_wrapper,
};

/// Every route group served by the API
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(status_routes())
        .merge(balance_routes())
        .merge(zone_routes())
        // Add new routes here
        .fallback(fallback_handler)
}

/// Wraps `routes` in the middleware stack and binds the state.
///
/// Outermost first: request context, problem responder (turns every failure
/// into `application/problem+json`), success envelope, panic catcher, layer
/// error mapping, timeout, body limit.
pub fn with_middleware(routes: Router<AppState>, state: AppState) -> Router {
    let env: &EnvironmentVariables = &state.environment;

    routes
        .layer(
            ServiceBuilder::new()
                .layer(from_fn(request_context_middleware))
                .layer(from_fn(problem_responder))
                .layer(from_fn(response_wrapper))
                .layer(CatchPanicLayer::custom(handle_panic))
                .layer(HandleErrorLayer::new(handle_global_error))
                .layer(TimeoutLayer::new(Duration::from_secs(env.default_timeout_seconds)))
                .layer(DefaultBodyLimit::max(env.max_request_body_size)),
        )
        .with_state(state)
}

/// Creates the application router with all middleware layers
pub fn create_app(state: AppState) -> Router {
    with_middleware(api_routes(), state)
}

/// Sets up the TCP listener from environment or binds to new address
pub async fn setup_listener(env: &EnvironmentVariables) -> Result<TcpListener> {
    let mut listenfd: ListenFd = ListenFd::from_env();

    let listener: TcpListener = match listenfd.take_tcp_listener(0)? {
        Some(std_listener) => {
            std_listener.set_nonblocking(true)?;
            TcpListener::from_std(std_listener)?
        }
        None => {
            let addr: String = format!("{}:{}", env.host, env.port);
            TcpListener::bind(&addr).await?
        }
    };

    Ok(listener)
}

/// Handles graceful shutdown signals (Ctrl+C and TERM)
pub async fn shutdown_signal(state: AppState) {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            error!("Failed to listen for Ctrl+C: {}", err);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(err) => {
                error!("Failed to install TERM handler: {}", err);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("Shutting down via Ctrl+C"),
        _ = terminate => info!("Shutting down via TERM signal"),
    }

    // Gracefully close database connections
    state.shutdown().await;
}
