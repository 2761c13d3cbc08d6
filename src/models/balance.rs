// Balance rows shown on the back-office balance screens

use rust_decimal::Decimal;
use serde::Serialize;
use sqlx::FromRow;

use crate::table::{Align, Cell, Column, TableRow};

/// Running balance of one betting pool (banca).
#[derive(Debug, Clone, PartialEq, Serialize, FromRow)]
pub struct BettingPoolBalance {
    pub id: i32,
    pub numero: i32,
    pub nombre: String,
    pub usuarios: String,
    pub referencia: String,
    pub zona: String,
    pub balance: Decimal,
    pub prestamos: Decimal,
}

pub const BETTING_POOL_COLUMNS: &[Column] = &[
    Column::text("numero", "Número"),
    Column::text("nombre", "Nombre"),
    Column::text("usuarios", "Usuarios"),
    Column::text("referencia", "Referencia"),
    Column::text("zona", "Zona"),
    Column::currency("balance", "Balance"),
    Column::currency("prestamos", "Préstamos"),
];

impl TableRow for BettingPoolBalance {
    fn cell(&self, key: &str) -> Cell<'_> {
        match key {
            "id" => Cell::number(self.id),
            "numero" => Cell::number(self.numero),
            "nombre" => Cell::text(&self.nombre),
            "usuarios" => Cell::text(&self.usuarios),
            "referencia" => Cell::text(&self.referencia),
            "zona" => Cell::text(&self.zona),
            "balance" => Cell::Number(self.balance),
            "prestamos" => Cell::Number(self.prestamos),
            _ => Cell::Null,
        }
    }

    fn search_keys(&self) -> Vec<&str> {
        vec!["id", "numero", "nombre", "usuarios", "referencia", "zona", "balance", "prestamos"]
    }
}

/// Aggregated figures of a zone for the selected period.
#[derive(Debug, Clone, PartialEq, Serialize, FromRow)]
pub struct ZoneBalance {
    pub id: i32,
    pub zona: String,
    pub bancas: i32,
    pub venta: Decimal,
    pub premios: Decimal,
    pub comisiones: Decimal,
    pub balance: Decimal,
}

pub const ZONE_COLUMNS: &[Column] = &[
    Column::text("zona", "Zona"),
    Column::text("bancas", "Bancas").aligned(Align::Right),
    Column::currency("venta", "Venta"),
    Column::currency("premios", "Premios"),
    Column::currency("comisiones", "Comisiones"),
    Column::currency("balance", "Balance"),
];

impl TableRow for ZoneBalance {
    fn cell(&self, key: &str) -> Cell<'_> {
        match key {
            "id" => Cell::number(self.id),
            "zona" => Cell::text(&self.zona),
            "bancas" => Cell::number(self.bancas),
            "venta" => Cell::Number(self.venta),
            "premios" => Cell::Number(self.premios),
            "comisiones" => Cell::Number(self.comisiones),
            "balance" => Cell::Number(self.balance),
            _ => Cell::Null,
        }
    }

    fn search_keys(&self) -> Vec<&str> {
        vec!["id", "zona", "bancas", "venta", "premios", "comisiones", "balance"]
    }
}

/// Balance held with a bank, as shown on the bank balance screen.
#[derive(Debug, Clone, PartialEq, Serialize, FromRow)]
pub struct BankBalance {
    pub id: i32,
    pub nombre: String,
    pub codigo: String,
    pub zona: String,
    pub balance: Decimal,
}

pub const BANK_COLUMNS: &[Column] = &[
    Column::text("nombre", "Nombre"),
    Column::text("codigo", "Código"),
    Column::text("zona", "Zona"),
    Column::currency("balance", "Balance"),
];

impl TableRow for BankBalance {
    fn cell(&self, key: &str) -> Cell<'_> {
        match key {
            "id" => Cell::number(self.id),
            "nombre" => Cell::text(&self.nombre),
            "codigo" => Cell::text(&self.codigo),
            "zona" => Cell::text(&self.zona),
            "balance" => Cell::Number(self.balance),
            _ => Cell::Null,
        }
    }

    fn search_keys(&self) -> Vec<&str> {
        vec!["id", "nombre", "codigo", "zona", "balance"]
    }
}

/// Sign filter offered on the betting-pool balance screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BalanceType {
    #[default]
    All,
    Positive,
    Negative,
}

impl BalanceType {
    pub fn accepts(self, balance: Decimal) -> bool {
        match self {
            BalanceType::All => true,
            BalanceType::Positive => balance > Decimal::ZERO,
            BalanceType::Negative => balance < Decimal::ZERO,
        }
    }
}
