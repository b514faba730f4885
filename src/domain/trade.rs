//! Trade row types: the engine-boundary execution record and its
//! persisted envelope.

use crate::domain::{Decimal, InstrumentKind, PremiumDirection, TradeRole, TradeSide};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single logged execution as the settlement engine sees it.
///
/// Rows arrive from several differently-shaped sources (manual entry,
/// imports, broker sync); this is the one strict record they are coerced
/// into at the boundary. The engine never mutates a row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TradeRow {
    /// Raw ticker as supplied by the user or import source.
    pub ticker: String,
    /// Declared instrument kind; reconciled against the ticker by the
    /// normalizer.
    pub kind: InstrumentKind,
    pub side: TradeSide,
    /// Declared premium direction. Absent means "use the default for the
    /// effective kind" (debit for options, none otherwise).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub premium: Option<PremiumDirection>,
    /// Informational option-strategy tag; never affects matching or sign.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub strategy: Option<String>,
    pub price: Decimal,
    pub quantity: Decimal,
    /// Informational timestamp label, e.g. "09:32" or an ISO instant.
    #[serde(default)]
    pub executed_at: String,
    /// Precomputed days-to-expiry, if known at logging time.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub days_to_expiry: Option<i64>,
    /// Option expiry date, if the ticker parsed as an option contract.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expiry: Option<NaiveDate>,
}

/// A trade row as stored in the journal: scoped to one account and one
/// trading day, tagged entry or exit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TradeRecord {
    pub id: Uuid,
    pub account: String,
    pub day: NaiveDate,
    pub role: TradeRole,
    #[serde(flatten)]
    pub row: TradeRow,
}

impl TradeRecord {
    pub fn new(account: String, day: NaiveDate, role: TradeRole, row: TradeRow) -> Self {
        TradeRecord {
            id: Uuid::new_v4(),
            account,
            day,
            role,
            row,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_row() -> TradeRow {
        TradeRow {
            ticker: "SPXW251121C6565".to_string(),
            kind: InstrumentKind::Option,
            side: TradeSide::Long,
            premium: Some(PremiumDirection::Debit),
            strategy: None,
            price: Decimal::from_str_canonical("10.00").unwrap(),
            quantity: Decimal::from_i64(2),
            executed_at: "09:32".to_string(),
            days_to_expiry: Some(21),
            expiry: NaiveDate::from_ymd_opt(2025, 11, 21),
        }
    }

    #[test]
    fn test_row_serialization_roundtrip() {
        let row = sample_row();
        let json = serde_json::to_string(&row).unwrap();
        let back: TradeRow = serde_json::from_str(&json).unwrap();
        assert_eq!(row, back);
    }

    #[test]
    fn test_optional_fields_default() {
        let json = r#"{
            "ticker": "AAPL",
            "kind": "equity",
            "side": "long",
            "price": 187.25,
            "quantity": 100
        }"#;
        let row: TradeRow = serde_json::from_str(json).unwrap();
        assert_eq!(row.premium, None);
        assert_eq!(row.strategy, None);
        assert_eq!(row.executed_at, "");
        assert_eq!(row.days_to_expiry, None);
        assert_eq!(row.expiry, None);
    }

    #[test]
    fn test_record_ids_are_unique() {
        let day = NaiveDate::from_ymd_opt(2025, 11, 21).unwrap();
        let a = TradeRecord::new("acct".to_string(), day, TradeRole::Entry, sample_row());
        let b = TradeRecord::new("acct".to_string(), day, TradeRole::Entry, sample_row());
        assert_ne!(a.id, b.id);
    }
}
