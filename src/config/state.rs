// Application state shared by every handler

use std::sync::Arc;

use crate::config::environment::{DataSource, EnvironmentVariables};
use crate::database::{BalanceRepository, DatabaseService};

#[derive(Debug, Clone)]
pub struct AppState {
    pub environment: Arc<EnvironmentVariables>,
    pub balances: BalanceRepository,
}

impl AppState {
    /// Wires the row source selected by `DATA_SOURCE`.
    /// The PostgreSQL pool connects lazily on first use.
    pub fn new(environment: EnvironmentVariables) -> Self {
        let environment: Arc<EnvironmentVariables> = Arc::new(environment);

        let balances: BalanceRepository = match environment.data_source {
            DataSource::Postgres => BalanceRepository::Postgres(DatabaseService::new(environment.clone())),
            DataSource::Fixtures => BalanceRepository::fixtures(),
        };

        Self { environment, balances }
    }

    /// Gracefully shutdown all database connections
    pub async fn shutdown(&self) {
        self.balances.shutdown().await;
    }
}
