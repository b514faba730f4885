//! Pure computation engine for trade settlement.
//!
//! Everything here is synchronous and side-effect free: rows in, realized
//! PnL and open positions out. Persistence and presentation live in the
//! `db` and `api` modules.

pub mod key;
pub mod multiplier;
pub mod normalize;
pub mod open_positions;
pub mod settlement;

pub use key::PositionKey;
pub use multiplier::{contract_multiplier, futures_root};
pub use normalize::{effective_kind, NormalizedRow, DEFAULT_STRATEGY};
pub use open_positions::{open_positions, OpenPosition};
pub use settlement::{settle, Lot, LotMatch, SettlementResult};
