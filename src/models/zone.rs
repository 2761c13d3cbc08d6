// Zones group betting pools for reporting and limits

use serde::Serialize;
use sqlx::FromRow;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, FromRow)]
pub struct Zone {
    pub id: i32,
    pub name: String,
    pub is_active: bool,
}
