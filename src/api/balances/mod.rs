pub mod handler;
pub mod query;
pub mod routes;

pub use routes::balance_routes;
