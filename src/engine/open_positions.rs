//! Open-position aggregation: remaining open quantity per key, used by
//! the exit-entry UI to pre-fill close quantities.

use std::collections::HashMap;

use crate::domain::{Decimal, TradeRow};
use crate::engine::{NormalizedRow, PositionKey};

/// Derived open quantity for one position key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpenPosition {
    pub key: PositionKey,
    pub entry_quantity: Decimal,
    pub exit_quantity: Decimal,
    /// `max(0, entry_quantity - exit_quantity)`.
    pub remaining_quantity: Decimal,
}

/// Aggregate remaining open quantity per key over the same normalized
/// rows the settlement engine sees, using the identical key function.
///
/// Positions are returned in first-entry order, filtered to strictly
/// positive remaining quantity. Exits for keys with no entries cannot
/// leave anything open and are ignored.
pub fn open_positions(entries: &[TradeRow], exits: &[TradeRow]) -> Vec<OpenPosition> {
    let mut order: Vec<PositionKey> = Vec::new();
    let mut totals: HashMap<PositionKey, (Decimal, Decimal)> = HashMap::new();

    for entry in entries {
        let Some(row) = NormalizedRow::from_row(entry) else {
            continue;
        };
        let key = PositionKey::for_row(&row);
        let slot = totals.entry(key.clone()).or_insert_with(|| {
            order.push(key);
            (Decimal::zero(), Decimal::zero())
        });
        slot.0 = slot.0 + row.quantity;
    }

    for exit in exits {
        let Some(row) = NormalizedRow::from_row(exit) else {
            continue;
        };
        if let Some(slot) = totals.get_mut(&PositionKey::for_row(&row)) {
            slot.1 = slot.1 + row.quantity;
        }
    }

    order
        .into_iter()
        .filter_map(|key| {
            let (entry_quantity, exit_quantity) = totals.remove(&key)?;
            let diff = entry_quantity - exit_quantity;
            let remaining_quantity = if diff.is_positive() {
                diff
            } else {
                Decimal::zero()
            };
            remaining_quantity.is_positive().then_some(OpenPosition {
                key,
                entry_quantity,
                exit_quantity,
                remaining_quantity,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{InstrumentKind, TradeSide};

    fn d(s: &str) -> Decimal {
        Decimal::from_str_canonical(s).unwrap()
    }

    fn entry(ticker: &str, qty: &str) -> TradeRow {
        TradeRow {
            ticker: ticker.to_string(),
            kind: InstrumentKind::Equity,
            side: TradeSide::Long,
            premium: None,
            strategy: None,
            price: d("10"),
            quantity: d(qty),
            executed_at: String::new(),
            days_to_expiry: None,
            expiry: None,
        }
    }

    #[test]
    fn test_partial_close_leaves_remainder() {
        let entries = vec![entry("AAPL", "100")];
        let exits = vec![entry("AAPL", "40")];
        let open = open_positions(&entries, &exits);
        assert_eq!(open.len(), 1);
        assert_eq!(open[0].entry_quantity, d("100"));
        assert_eq!(open[0].exit_quantity, d("40"));
        assert_eq!(open[0].remaining_quantity, d("60"));
    }

    #[test]
    fn test_fully_closed_position_is_filtered() {
        let entries = vec![entry("AAPL", "100")];
        let exits = vec![entry("AAPL", "100")];
        assert!(open_positions(&entries, &exits).is_empty());
    }

    #[test]
    fn test_over_closed_position_floors_at_zero() {
        let entries = vec![entry("AAPL", "100")];
        let exits = vec![entry("AAPL", "150")];
        assert!(open_positions(&entries, &exits).is_empty());
    }

    #[test]
    fn test_first_entry_ordering() {
        let entries = vec![entry("MSFT", "10"), entry("AAPL", "20"), entry("MSFT", "5")];
        let open = open_positions(&entries, &[]);
        assert_eq!(open.len(), 2);
        assert_eq!(open[0].key.ticker, "MSFT");
        assert_eq!(open[0].entry_quantity, d("15"));
        assert_eq!(open[1].key.ticker, "AAPL");
    }

    #[test]
    fn test_exit_without_entry_is_ignored() {
        let exits = vec![entry("AAPL", "10")];
        assert!(open_positions(&[], &exits).is_empty());
    }
}
