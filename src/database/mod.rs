pub mod balance_repository;
pub mod fixtures;
pub mod postgres_service;

pub use balance_repository::BalanceRepository;
pub use fixtures::Fixtures;
pub use postgres_service::DatabaseService;
