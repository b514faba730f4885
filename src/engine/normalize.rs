//! Instrument normalization: the one place where loose declared fields
//! are coerced into the strict shape the settlement engine consumes.

use crate::domain::{
    is_option_symbol, Decimal, InstrumentKind, PremiumDirection, TradeRow, TradeSide,
};

/// Default strategy tag when none was declared.
pub const DEFAULT_STRATEGY: &str = "single";

/// A trade row after normalization: effective kind resolved, premium
/// direction and strategy defaulted, ticker canonicalized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedRow {
    /// Trimmed, upper-cased ticker.
    pub ticker: String,
    /// Effective instrument kind after reconciling the declared kind
    /// against what the ticker text actually parses as.
    pub kind: InstrumentKind,
    pub side: TradeSide,
    pub premium: PremiumDirection,
    /// Informational only; never used for matching or sign.
    pub strategy: String,
    pub price: Decimal,
    pub quantity: Decimal,
}

impl NormalizedRow {
    /// Normalize one row, or return `None` if the row cannot participate
    /// in settlement (empty ticker, or non-positive quantity).
    ///
    /// Rules:
    /// - declared `option` whose ticker does not parse as an option
    ///   contract downgrades to `equity` (mistagged stock tickers);
    /// - for effective options, an absent declared premium direction
    ///   defaults to debit; for every other kind the premium direction is
    ///   forced to none regardless of what was declared;
    /// - an absent strategy tag defaults to "single".
    pub fn from_row(row: &TradeRow) -> Option<NormalizedRow> {
        let ticker = row.ticker.trim().to_uppercase();
        if ticker.is_empty() || !row.quantity.is_positive() {
            return None;
        }

        let kind = effective_kind(row.kind, &ticker);

        let premium = match kind {
            InstrumentKind::Option => row.premium.unwrap_or(PremiumDirection::Debit),
            _ => PremiumDirection::None,
        };

        let strategy = row
            .strategy
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .unwrap_or(DEFAULT_STRATEGY)
            .to_string();

        Some(NormalizedRow {
            ticker,
            kind,
            side: row.side,
            premium,
            strategy,
            price: row.price,
            quantity: row.quantity,
        })
    }
}

/// Reconcile a declared instrument kind against the ticker text.
pub fn effective_kind(declared: InstrumentKind, ticker: &str) -> InstrumentKind {
    match declared {
        InstrumentKind::Option if !is_option_symbol(ticker) => InstrumentKind::Equity,
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::TradeSide;

    fn row(ticker: &str, kind: InstrumentKind) -> TradeRow {
        TradeRow {
            ticker: ticker.to_string(),
            kind,
            side: TradeSide::Long,
            premium: None,
            strategy: None,
            price: Decimal::from_i64(10),
            quantity: Decimal::from_i64(1),
            executed_at: String::new(),
            days_to_expiry: None,
            expiry: None,
        }
    }

    #[test]
    fn test_mistagged_option_downgrades_to_equity() {
        let normalized = NormalizedRow::from_row(&row("AAPL", InstrumentKind::Option)).unwrap();
        assert_eq!(normalized.kind, InstrumentKind::Equity);
        assert_eq!(normalized.premium, PremiumDirection::None);
    }

    #[test]
    fn test_real_option_keeps_kind_and_defaults_debit() {
        let normalized =
            NormalizedRow::from_row(&row("SPXW251121C6565", InstrumentKind::Option)).unwrap();
        assert_eq!(normalized.kind, InstrumentKind::Option);
        assert_eq!(normalized.premium, PremiumDirection::Debit);
    }

    #[test]
    fn test_declared_credit_survives_for_options() {
        let mut r = row("SPXW251121C6565", InstrumentKind::Option);
        r.premium = Some(PremiumDirection::Credit);
        let normalized = NormalizedRow::from_row(&r).unwrap();
        assert_eq!(normalized.premium, PremiumDirection::Credit);
    }

    #[test]
    fn test_non_option_premium_forced_to_none() {
        let mut r = row("ES1225", InstrumentKind::Future);
        r.premium = Some(PremiumDirection::Credit);
        let normalized = NormalizedRow::from_row(&r).unwrap();
        assert_eq!(normalized.premium, PremiumDirection::None);
    }

    #[test]
    fn test_strategy_defaults_to_single() {
        let normalized = NormalizedRow::from_row(&row("AAPL", InstrumentKind::Equity)).unwrap();
        assert_eq!(normalized.strategy, "single");

        let mut tagged = row("AAPL", InstrumentKind::Equity);
        tagged.strategy = Some("vertical".to_string());
        let normalized = NormalizedRow::from_row(&tagged).unwrap();
        assert_eq!(normalized.strategy, "vertical");
    }

    #[test]
    fn test_ticker_is_trimmed_and_uppercased() {
        let normalized = NormalizedRow::from_row(&row("  aapl ", InstrumentKind::Equity)).unwrap();
        assert_eq!(normalized.ticker, "AAPL");
    }

    #[test]
    fn test_empty_ticker_skipped() {
        assert!(NormalizedRow::from_row(&row("   ", InstrumentKind::Equity)).is_none());
    }

    #[test]
    fn test_non_positive_quantity_skipped() {
        let mut r = row("AAPL", InstrumentKind::Equity);
        r.quantity = Decimal::zero();
        assert!(NormalizedRow::from_row(&r).is_none());

        r.quantity = Decimal::from_i64(-5);
        assert!(NormalizedRow::from_row(&r).is_none());
    }
}
