// Built-in sample data served when DATA_SOURCE=fixtures

use rust_decimal::Decimal;

use crate::models::{BankBalance, BettingPoolBalance, Zone, ZoneBalance};

#[derive(Debug, Clone)]
pub struct Fixtures {
    pub betting_pools: Vec<BettingPoolBalance>,
    pub banks: Vec<BankBalance>,
    pub zone_balances: Vec<ZoneBalance>,
    pub zones: Vec<Zone>,
}

// Cents to Decimal, keeps the tables below readable
fn money(cents: i64) -> Decimal {
    Decimal::new(cents, 2)
}

fn pool(id: i32, numero: i32, nombre: &str, referencia: &str, zona: &str, balance: i64, prestamos: i64) -> BettingPoolBalance {
    BettingPoolBalance {
        id,
        numero,
        nombre: nombre.to_owned(),
        usuarios: format!("{numero:03}"),
        referencia: referencia.to_owned(),
        zona: zona.to_owned(),
        balance: money(balance),
        prestamos: money(prestamos),
    }
}

fn bank(id: i32, nombre: &str, codigo: &str, zona: &str, balance: i64) -> BankBalance {
    BankBalance {
        id,
        nombre: nombre.to_owned(),
        codigo: codigo.to_owned(),
        zona: zona.to_owned(),
        balance: money(balance),
    }
}

fn zone_balance(id: i32, zona: &str, bancas: i32, venta: i64, premios: i64, comisiones: i64) -> ZoneBalance {
    ZoneBalance {
        id,
        zona: zona.to_owned(),
        bancas,
        venta: money(venta),
        premios: money(premios),
        comisiones: money(comisiones),
        balance: money(venta - premios - comisiones),
    }
}

impl Default for Fixtures {
    fn default() -> Self {
        let betting_pools: Vec<BettingPoolBalance> = vec![
            pool(1, 1, "LA CENTRAL 01", "GILBERTO ISLA GORDA TL", "GRUPO GILBERTO TL", 11266, 0),
            pool(2, 10, "LA CENTRAL 10", "GILBERTO TL", "GRUPO GILBERTO TL", 44761, 0),
            pool(3, 16, "LA CENTRAL 16", "CHINO TL", "GRUPO KENDRICK TL", 147636, 0),
            pool(4, 63, "LA CENTRAL 63", "NELL TL", "GRUPO KENDRICK TL", 74492, 0),
            pool(5, 101, "LA CENTRAL 101", "FELO TL", "GRUPO KENDRICK TL", 105200, 0),
            pool(6, 119, "LA CENTRAL 119", "EUDDY (GF)", "GRUPO GUYANA (DANI)", 0, 0),
            pool(7, 135, "LA CENTRAL 135", "MORENA D (GF)", "GRUPO GUYANA (DANI)", 49840, 0),
            pool(8, 150, "LA CENTRAL 150", "DANNY (GF)", "GRUPO GUYANA (DANI)", 14123, 0),
            pool(9, 186, "CARIBBEAN 186", "BOB BALATA GF)", "GRUPO GUYANA (OMAR)", -59506, 10000),
            pool(10, 198, "CARIBBEAN 198", "LISSET (GF)", "GRUPO GUYANA (OMAR)", 70086, 0),
        ];

        let banks: Vec<BankBalance> = vec![
            bank(1, "BANCO POPULAR", "BP001", "ZONA NORTE", 1525050),
            bank(2, "BANCO BHD LEON", "BHD002", "ZONA NORTE", 873025),
            bank(3, "BANCO RESERVAS", "BR003", "ZONA SUR", -245000),
            bank(4, "BANCO SANTA CRUZ", "BSC004", "ZONA SUR", 1210075),
            bank(5, "BANCO CARIBE", "BC005", "ZONA ESTE", 568030),
            bank(6, "BANCO PROMERICA", "BPR006", "ZONA ESTE", -89045),
            bank(7, "BANCO LOPEZ DE HARO", "BLH007", "ZONA OESTE", 2234080),
            bank(8, "BANCO VIMENCA", "BV008", "ZONA OESTE", 0),
        ];

        // Balance = venta - premios - comisiones
        let zone_balances: Vec<ZoneBalance> = vec![
            zone_balance(1, "GRUPO GILBERTO TL", 2, 980000, 765000, 58800),
            zone_balance(2, "GRUPO KENDRICK TL", 3, 1250000, 1420000, 75000),
            zone_balance(3, "GRUPO GUYANA (DANI)", 3, 450000, 423000, 27000),
            zone_balance(4, "GRUPO GUYANA (OMAR)", 2, 1520000, 1105000, 91200),
            zone_balance(5, "GRUPO CARIBE", 1, 210000, 180000, 12600),
        ];

        let zones: Vec<Zone> = zone_balances
            .iter()
            .map(|z: &ZoneBalance| Zone {
                id: z.id,
                name: z.zona.clone(),
                is_active: z.bancas > 0,
            })
            .collect();

        Self {
            betting_pools,
            banks,
            zone_balances,
            zones,
        }
    }
}
