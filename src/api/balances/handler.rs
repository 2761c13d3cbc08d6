// Balance screen handlers

use axum::{
    extract::{
        rejection::{PathRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
};
use serde_json::json;
use tracing::{debug, instrument};

use super::query::BalanceParams;
use crate::config::state::AppState;
use crate::models::{
    BalanceType, BankBalance, BettingPoolBalance, ZoneBalance, BANK_COLUMNS, BETTING_POOL_COLUMNS, ZONE_COLUMNS,
};
use crate::table::{self, TablePage, TableQueryState, TableView};
use crate::utils::error_handler::{AppError, DomainError};
use crate::utils::response_handler::HandlerResponse;

/// Betting-pool balances after the zone and sign pre-filters and the table pipeline
#[instrument(name = "betting_pool_balances", skip_all)]
pub async fn betting_pool_balances_handler(
    State(state): State<AppState>,
    params: Result<Query<BalanceParams>, QueryRejection>,
) -> Result<HandlerResponse, AppError> {
    let Query(params) = params?;
    let table_state: TableQueryState =
        params.table_state(BETTING_POOL_COLUMNS, state.environment.default_page_size)?;
    let balance_type: BalanceType = params.balance_type().map_err(DomainError::validation)?;
    let zones: Vec<String> = params.zones();

    let rows: Vec<BettingPoolBalance> = state
        .balances
        .betting_pool_balances()
        .await?
        .into_iter()
        .filter(|row: &BettingPoolBalance| zones.is_empty() || zones.iter().any(|z: &String| z == &row.zona))
        .filter(|row: &BettingPoolBalance| balance_type.accepts(row.balance))
        .collect();

    let view: TableView<'_, BettingPoolBalance> = table::run(&rows, BETTING_POOL_COLUMNS, &table_state);
    debug!(
        "Betting pools: {} fetched, {} after filter, page {}/{}",
        view.total_count,
        view.filtered_count,
        table_state.page_index(),
        view.page_count
    );
    let page: TablePage<'_, BettingPoolBalance> = TablePage::new(view, BETTING_POOL_COLUMNS, &table_state);

    Ok(HandlerResponse::new(StatusCode::OK)
        .data(json!(page))
        .message(page.summary.clone()))
}

/// Zone balances through the table pipeline
#[instrument(name = "zone_balances", skip_all)]
pub async fn zone_balances_handler(
    State(state): State<AppState>,
    params: Result<Query<BalanceParams>, QueryRejection>,
) -> Result<HandlerResponse, AppError> {
    let Query(params) = params?;
    let table_state: TableQueryState = params.table_state(ZONE_COLUMNS, state.environment.default_page_size)?;

    let rows: Vec<ZoneBalance> = state.balances.zone_balances().await?;

    let view: TableView<'_, ZoneBalance> = table::run(&rows, ZONE_COLUMNS, &table_state);
    let page: TablePage<'_, ZoneBalance> = TablePage::new(view, ZONE_COLUMNS, &table_state);

    Ok(HandlerResponse::new(StatusCode::OK)
        .data(json!(page))
        .message(page.summary.clone()))
}

/// Bank balances through the table pipeline
#[instrument(name = "bank_balances", skip_all)]
pub async fn bank_balances_handler(
    State(state): State<AppState>,
    params: Result<Query<BalanceParams>, QueryRejection>,
) -> Result<HandlerResponse, AppError> {
    let Query(params) = params?;
    let table_state: TableQueryState = params.table_state(BANK_COLUMNS, state.environment.default_page_size)?;

    let rows: Vec<BankBalance> = state.balances.bank_balances().await?;

    let view: TableView<'_, BankBalance> = table::run(&rows, BANK_COLUMNS, &table_state);
    let page: TablePage<'_, BankBalance> = TablePage::new(view, BANK_COLUMNS, &table_state);

    Ok(HandlerResponse::new(StatusCode::OK)
        .data(json!(page))
        .message(page.summary.clone()))
}

/// Single betting-pool balance
#[instrument(name = "betting_pool_balance", skip(state))]
pub async fn betting_pool_balance_handler(
    State(state): State<AppState>,
    id: Result<Path<i32>, PathRejection>,
) -> Result<HandlerResponse, AppError> {
    let Path(id) = id?;

    let row: BettingPoolBalance = state
        .balances
        .betting_pool_balance(id)
        .await?
        .ok_or_else(|| DomainError::not_found("Banca", id))?;

    Ok(HandlerResponse::new(StatusCode::OK).data(json!(row)))
}
