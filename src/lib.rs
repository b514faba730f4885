pub mod api;
pub mod config;
pub mod db;
pub mod domain;
pub mod engine;
pub mod error;

pub use config::Config;
pub use db::{init_db, Repository};
pub use domain::{
    days_to_expiry, parse_option_symbol, Decimal, InstrumentKind, ParsedOptionSymbol,
    PremiumDirection, TradeRecord, TradeRole, TradeRow, TradeSide,
};
pub use engine::{
    contract_multiplier, open_positions, settle, OpenPosition, PositionKey, SettlementResult,
};
pub use error::AppError;
