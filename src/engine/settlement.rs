//! FIFO settlement: match exits against previously opened lots and
//! produce realized PnL.
//!
//! Pure and synchronous. Every invocation allocates its own lot queues
//! and discards them on return, so identical inputs always produce an
//! identical result and concurrent callers need no coordination.

use std::collections::{HashMap, VecDeque};

use crate::domain::{Decimal, InstrumentKind, PremiumDirection, TradeRow, TradeSide};
use crate::engine::{contract_multiplier, NormalizedRow, PositionKey};

/// An open quantity at a specific entry price, owned by the FIFO queue
/// for its key. Lots never outlive a single `settle` call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lot {
    pub price: Decimal,
    pub remaining: Decimal,
}

/// One entry-lot-to-exit match, for the audit trail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LotMatch {
    pub key: PositionKey,
    pub entry_price: Decimal,
    pub exit_price: Decimal,
    pub quantity: Decimal,
    pub pnl: Decimal,
}

/// Output of one settlement run. The realized total is the contract;
/// the rest is a non-fatal diagnostic channel (skips and clamps never
/// change the number, but callers may want to surface them).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SettlementResult {
    pub realized_pnl: Decimal,
    pub matches: Vec<LotMatch>,
    /// Rows dropped by normalization (empty ticker or non-positive
    /// quantity), across both entries and exits.
    pub skipped_rows: usize,
    /// Exit quantity that found no open lot to close against.
    pub unmatched_exit_quantity: Decimal,
}

/// Compute realized PnL for one account/day.
///
/// Entries open lots in input order; exits consume lots head-first in
/// input order. Never errors: malformed rows are skipped in isolation,
/// exits with no matching lots contribute zero, and exit quantity beyond
/// the available open quantity is dropped.
pub fn settle(entries: &[TradeRow], exits: &[TradeRow]) -> SettlementResult {
    let mut result = SettlementResult::default();
    let mut queues: HashMap<PositionKey, VecDeque<Lot>> = HashMap::new();

    for entry in entries {
        let Some(row) = NormalizedRow::from_row(entry) else {
            result.skipped_rows += 1;
            continue;
        };
        queues
            .entry(PositionKey::for_row(&row))
            .or_default()
            .push_back(Lot {
                price: row.price,
                remaining: row.quantity,
            });
    }

    for exit in exits {
        let Some(row) = NormalizedRow::from_row(exit) else {
            result.skipped_rows += 1;
            continue;
        };
        let key = PositionKey::for_row(&row);

        let Some(queue) = queues.get_mut(&key) else {
            // Nothing to realize against; intentional zero contribution.
            result.unmatched_exit_quantity =
                result.unmatched_exit_quantity + row.quantity;
            continue;
        };

        let multiplier = contract_multiplier(row.kind, &row.ticker);
        let sign = pnl_sign(&row);

        let mut unmatched = row.quantity;
        while unmatched.is_positive() {
            let Some(head) = queue.front_mut() else {
                break;
            };
            let closed = head.remaining.min(unmatched);

            let mut pnl = (row.price - head.price) * closed * multiplier;
            if sign < 0 {
                pnl = -pnl;
            }
            result.realized_pnl = result.realized_pnl + pnl;
            result.matches.push(LotMatch {
                key: key.clone(),
                entry_price: head.price,
                exit_price: row.price,
                quantity: closed,
                pnl,
            });

            head.remaining = head.remaining - closed;
            unmatched = unmatched - closed;
            if !head.remaining.is_positive() {
                queue.pop_front();
            }
        }

        // Whatever is left exceeds the open quantity for this key and is
        // dropped without affecting any other key.
        result.unmatched_exit_quantity = result.unmatched_exit_quantity + unmatched;
    }

    result
}

/// Profit-sign convention.
///
/// Credit option positions profit when the exit price is lower than the
/// entry price, so they flip to -1; debit/none options stay +1. For
/// every non-option kind the side decides: short -1, long +1.
fn pnl_sign(row: &NormalizedRow) -> i32 {
    match row.kind {
        InstrumentKind::Option => match row.premium {
            PremiumDirection::Credit => -1,
            _ => 1,
        },
        _ => match row.side {
            TradeSide::Short => -1,
            TradeSide::Long => 1,
        },
    }
}
