pub mod handler;
pub mod routes;

pub use routes::zone_routes;
