// Service entry point

use anyhow::Result;
use axum::{serve, Router};
use tokio::net::TcpListener;
use tracing::info;

use lottery_backoffice::config::{environment::EnvironmentVariables, state::AppState};
use lottery_backoffice::core::{logging::init_tracing, server};

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();

    let environment: EnvironmentVariables = EnvironmentVariables::instance()?.clone();
    let state: AppState = AppState::new(environment);

    let app: Router = server::create_app(state.clone());
    let listener: TcpListener = server::setup_listener(&state.environment).await?;

    info!(
        "Server listening on {}://{} ({} environment, {} data)",
        state.environment.protocol,
        listener.local_addr()?,
        state.environment.environment,
        state.balances.source_name()
    );

    serve(listener, app)
        .with_graceful_shutdown(server::shutdown_signal(state))
        .await?;

    Ok(())
}
