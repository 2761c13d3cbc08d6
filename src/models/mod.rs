// Row types served by the API and the column layouts of their list screens

pub mod balance;
pub mod zone;

pub use balance::{
    BalanceType, BankBalance, BettingPoolBalance, ZoneBalance, BANK_COLUMNS, BETTING_POOL_COLUMNS, ZONE_COLUMNS,
};
pub use zone::Zone;
