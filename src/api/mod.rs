// HTTP surface: route groups, request middleware and the fallback

pub mod balances;
pub mod fallback;
pub mod middleware;
pub mod status;
pub mod zones;
