// Row source for the balance screens

use std::sync::Arc;

use tracing::{debug, instrument};

use super::fixtures::Fixtures;
use super::postgres_service::DatabaseService;
use crate::models::{BankBalance, BettingPoolBalance, Zone, ZoneBalance};
use crate::utils::error_handler::AppResult;

const BETTING_POOL_BALANCES_SQL: &str = r#"
    SELECT id, numero, nombre, usuarios, referencia, zona, balance, prestamos
    FROM betting_pool_balances
    ORDER BY numero
"#;

const BETTING_POOL_BALANCE_SQL: &str = r#"
    SELECT id, numero, nombre, usuarios, referencia, zona, balance, prestamos
    FROM betting_pool_balances
    WHERE id = $1
"#;

const BANK_BALANCES_SQL: &str = r#"
    SELECT id, nombre, codigo, zona, balance
    FROM bank_balances
    ORDER BY nombre
"#;

const ZONE_BALANCES_SQL: &str = r#"
    SELECT id, zona, bancas, venta, premios, comisiones, balance
    FROM zone_balances
    ORDER BY zona
"#;

const ZONE_SQL: &str = r#"
    SELECT id, name, is_active
    FROM zones
    WHERE id = $1
"#;

/// Fetches complete row sets; filtering, sorting and paging happen in the
/// table pipeline afterwards.
#[derive(Clone, Debug)]
pub enum BalanceRepository {
    Postgres(DatabaseService),
    Fixtures(Arc<Fixtures>),
}

impl BalanceRepository {
    pub fn fixtures() -> Self {
        BalanceRepository::Fixtures(Arc::new(Fixtures::default()))
    }

    pub fn source_name(&self) -> &'static str {
        match self {
            BalanceRepository::Postgres(_) => "postgres",
            BalanceRepository::Fixtures(_) => "fixtures",
        }
    }

    #[instrument(skip(self), fields(source = self.source_name()))]
    pub async fn betting_pool_balances(&self) -> AppResult<Vec<BettingPoolBalance>> {
        let rows: Vec<BettingPoolBalance> = match self {
            BalanceRepository::Postgres(db) => {
                sqlx::query_as::<_, BettingPoolBalance>(BETTING_POOL_BALANCES_SQL)
                    .fetch_all(db.pool())
                    .await?
            }
            BalanceRepository::Fixtures(fixtures) => fixtures.betting_pools.clone(),
        };
        debug!("Loaded {} betting pool balances", rows.len());
        Ok(rows)
    }

    #[instrument(skip(self), fields(source = self.source_name()))]
    pub async fn betting_pool_balance(&self, id: i32) -> AppResult<Option<BettingPoolBalance>> {
        match self {
            BalanceRepository::Postgres(db) => Ok(sqlx::query_as::<_, BettingPoolBalance>(BETTING_POOL_BALANCE_SQL)
                .bind(id)
                .fetch_optional(db.pool())
                .await?),
            BalanceRepository::Fixtures(fixtures) => {
                Ok(fixtures.betting_pools.iter().find(|row| row.id == id).cloned())
            }
        }
    }

    #[instrument(skip(self), fields(source = self.source_name()))]
    pub async fn bank_balances(&self) -> AppResult<Vec<BankBalance>> {
        let rows: Vec<BankBalance> = match self {
            BalanceRepository::Postgres(db) => {
                sqlx::query_as::<_, BankBalance>(BANK_BALANCES_SQL)
                    .fetch_all(db.pool())
                    .await?
            }
            BalanceRepository::Fixtures(fixtures) => fixtures.banks.clone(),
        };
        debug!("Loaded {} bank balances", rows.len());
        Ok(rows)
    }

    #[instrument(skip(self), fields(source = self.source_name()))]
    pub async fn zone_balances(&self) -> AppResult<Vec<ZoneBalance>> {
        let rows: Vec<ZoneBalance> = match self {
            BalanceRepository::Postgres(db) => {
                sqlx::query_as::<_, ZoneBalance>(ZONE_BALANCES_SQL)
                    .fetch_all(db.pool())
                    .await?
            }
            BalanceRepository::Fixtures(fixtures) => fixtures.zone_balances.clone(),
        };
        debug!("Loaded {} zone balances", rows.len());
        Ok(rows)
    }

    #[instrument(skip(self), fields(source = self.source_name()))]
    pub async fn zone(&self, id: i32) -> AppResult<Option<Zone>> {
        match self {
            BalanceRepository::Postgres(db) => Ok(sqlx::query_as::<_, Zone>(ZONE_SQL)
                .bind(id)
                .fetch_optional(db.pool())
                .await?),
            BalanceRepository::Fixtures(fixtures) => Ok(fixtures.zones.iter().find(|zone| zone.id == id).cloned()),
        }
    }

    /// Reachability of the backing store; fixtures are always available.
    pub async fn health_check(&self) -> AppResult<()> {
        match self {
            BalanceRepository::Postgres(db) => db.health_check().await,
            BalanceRepository::Fixtures(_) => Ok(()),
        }
    }

    pub async fn shutdown(&self) {
        if let BalanceRepository::Postgres(db) = self {
            db.shutdown().await;
        }
    }
}
