//! Position keys: the attribute tuple an entry and an exit must share to
//! be eligible to net against each other.

use crate::domain::{InstrumentKind, PremiumDirection, TradeSide};
use crate::engine::NormalizedRow;

/// Structural grouping key for lot matching.
///
/// Deliberately strict: a long debit call and a short debit call on the
/// same contract are different keys and never match, so a sign error
/// cannot masquerade as a netting operation. The strategy tag is
/// informational and excluded. Both `settle` and `open_positions` build
/// keys through this type.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PositionKey {
    pub ticker: String,
    pub kind: InstrumentKind,
    pub side: TradeSide,
    pub premium: PremiumDirection,
}

impl PositionKey {
    pub fn for_row(row: &NormalizedRow) -> PositionKey {
        PositionKey {
            ticker: row.ticker.clone(),
            kind: row.kind,
            side: row.side,
            premium: row.premium,
        }
    }
}
