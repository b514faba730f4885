//! Domain types for the trade settlement journal.
//!
//! This module provides:
//! - Lossless numeric handling via the Decimal wrapper
//! - Instrument/side/premium primitives
//! - TradeRow and its persisted TradeRecord envelope
//! - Option-contract ticker parsing and days-to-expiry

pub mod decimal;
pub mod option_symbol;
pub mod primitives;
pub mod trade;

pub use decimal::Decimal;
pub use option_symbol::{
    days_to_expiry, is_option_symbol, parse_option_symbol, ParsedOptionSymbol,
};
pub use primitives::{InstrumentKind, OptionRight, PremiumDirection, TradeRole, TradeSide};
pub use trade::{TradeRecord, TradeRow};
