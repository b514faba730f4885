//! Contract multiplier resolution: the cash value of a one-unit price
//! move for a given instrument.

use crate::domain::{Decimal, InstrumentKind};
use regex::Regex;
use std::sync::OnceLock;

/// Resolve the strictly positive scaling factor for (effective kind,
/// ticker). Options use the standard 100 contract size; futures look up a
/// per-root point value; everything else is 1. Never fails: unknown
/// futures roots degrade to 1.
pub fn contract_multiplier(kind: InstrumentKind, ticker: &str) -> Decimal {
    match kind {
        InstrumentKind::Option => Decimal::hundred(),
        InstrumentKind::Future => futures_point_value(&futures_root(ticker)),
        _ => Decimal::one(),
    }
}

fn month_code_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    // Root, then one of the twelve delivery-month codes, then a 1-4 digit
    // year. The root must end in a letter so the month code is not eaten.
    RE.get_or_init(|| {
        Regex::new(r"^([A-Z0-9]*[A-Z])([FGHJKMNQUVXZ])(\d{1,4})$")
            .expect("futures month-code pattern is valid")
    })
}

/// Extract the futures root from a ticker like `ESZ25`, `/MNQH6` or
/// `ES1225`.
///
/// Tries the trailing month-code shape first; otherwise takes the leading
/// letter run (so `ES1225` resolves to `ES`), falling back to the whole
/// leading alphanumeric run for digit-leading tickers. Known ambiguity: a
/// root whose last letter doubles as a month code can mis-split for some
/// broker conventions.
pub fn futures_root(ticker: &str) -> String {
    let body = ticker.trim().trim_start_matches('/');

    if let Some(caps) = month_code_pattern().captures(body) {
        return caps[1].to_string();
    }

    let letters: String = body.chars().take_while(|c| c.is_ascii_alphabetic()).collect();
    if !letters.is_empty() {
        return letters;
    }

    body.chars()
        .take_while(|c| c.is_ascii_alphanumeric())
        .collect()
}

/// Fixed point-value table for recognized futures roots. CME equity
/// index, metal and energy contracts plus their micro counterparts.
fn futures_point_value(root: &str) -> Decimal {
    let value = match root {
        "ES" => 50,
        "MES" => 5,
        "NQ" => 20,
        "MNQ" => 2,
        "YM" => 5,
        "RTY" => 50,
        "M2K" => 5,
        "GC" => 100,
        "MGC" => 10,
        "SI" => 5000,
        "SIL" => 1000,
        "CL" => 1000,
        "MCL" => 100,
        "NG" => 10000,
        "MYM" => {
            return Decimal::from_str_canonical("0.5").expect("0.5 is a valid decimal");
        }
        _ => 1,
    };
    Decimal::from_i64(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_option_multiplier_is_100() {
        assert_eq!(
            contract_multiplier(InstrumentKind::Option, "SPXW251121C6565"),
            Decimal::hundred()
        );
    }

    #[test]
    fn test_equity_and_others_are_1() {
        assert_eq!(
            contract_multiplier(InstrumentKind::Equity, "AAPL"),
            Decimal::one()
        );
        assert_eq!(
            contract_multiplier(InstrumentKind::Crypto, "BTCUSD"),
            Decimal::one()
        );
        assert_eq!(
            contract_multiplier(InstrumentKind::Forex, "EURUSD"),
            Decimal::one()
        );
    }

    #[test]
    fn test_root_from_month_code_ticker() {
        assert_eq!(futures_root("ESZ25"), "ES");
        assert_eq!(futures_root("MNQH6"), "MNQ");
        assert_eq!(futures_root("/GCM2025"), "GC");
        assert_eq!(futures_root("M2KZ25"), "M2K");
    }

    #[test]
    fn test_root_from_digit_suffix_ticker() {
        // No month code: "1225" is a plain numeric suffix, the root is
        // the leading letter run.
        assert_eq!(futures_root("ES1225"), "ES");
        assert_eq!(futures_root("/NQ0326"), "NQ");
    }

    #[test]
    fn test_root_bare_symbol() {
        assert_eq!(futures_root("ES"), "ES");
        assert_eq!(futures_root("/RTY"), "RTY");
    }

    #[test]
    fn test_futures_multipliers() {
        let cases = [
            ("ES1225", 50),
            ("ESZ25", 50),
            ("MESZ25", 5),
            ("NQZ25", 20),
            ("MNQZ25", 2),
            ("CLF26", 1000),
            ("GCZ25", 100),
        ];
        for (ticker, expected) in cases {
            assert_eq!(
                contract_multiplier(InstrumentKind::Future, ticker),
                Decimal::from_i64(expected),
                "wrong multiplier for {}",
                ticker
            );
        }
    }

    #[test]
    fn test_micro_dow_fractional_multiplier() {
        assert_eq!(
            contract_multiplier(InstrumentKind::Future, "MYMZ25"),
            Decimal::from_str_canonical("0.5").unwrap()
        );
    }

    #[test]
    fn test_unknown_root_defaults_to_1() {
        assert_eq!(
            contract_multiplier(InstrumentKind::Future, "XYZZ25"),
            Decimal::one()
        );
        assert_eq!(
            contract_multiplier(InstrumentKind::Future, ""),
            Decimal::one()
        );
    }
}
