// Library root for the lottery back-office API

pub mod api;
pub mod config;
pub mod core;
pub mod database;
pub mod models;
pub mod table;
pub mod utils;

pub use crate::config::environment::EnvironmentVariables;
pub use crate::config::state::AppState;
pub use crate::core::server::{create_app, with_middleware};
pub use crate::database::{BalanceRepository, DatabaseService};
