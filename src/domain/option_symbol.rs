//! Option-contract ticker classification and parsing, plus the
//! days-to-expiry calculator.
//!
//! Recognized shape: `ROOT` (letters, e.g. `SPXW`) + `YYMMDD` + `C`/`P` +
//! strike (integer or decimal), e.g. `SPXW251121C6565` or
//! `AAPL260116P172.5`. Anything else is "not an option"; parsing never
//! errors.

use crate::domain::{Decimal, OptionRight};
use chrono::NaiveDate;
use regex::Regex;
use std::sync::OnceLock;

/// Structured fields recovered from an option-contract ticker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedOptionSymbol {
    pub root: String,
    pub expiry: NaiveDate,
    pub right: OptionRight,
    pub strike: Decimal,
}

fn option_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^([A-Z]+)(\d{2})(\d{2})(\d{2})([CP])(\d+(?:\.\d+)?)$")
            .expect("option symbol pattern is valid")
    })
}

/// Strip leading punctuation (e.g. `.SPXW...`, `/ES`) so shape matching
/// only ever sees the alphanumeric body.
pub fn strip_leading_punctuation(ticker: &str) -> &str {
    ticker.trim_start_matches(|c: char| !c.is_ascii_alphanumeric())
}

/// Attempt to parse an uppercased ticker as an option contract.
///
/// Returns `None` for any non-matching shape, including impossible
/// calendar dates (month 13, Feb 30). Two-digit years map to 2000-2099;
/// later centuries are not representable in this convention.
pub fn parse_option_symbol(ticker: &str) -> Option<ParsedOptionSymbol> {
    let body = strip_leading_punctuation(ticker);
    let caps = option_pattern().captures(body)?;

    let year = 2000 + caps[2].parse::<i32>().ok()?;
    let month = caps[3].parse::<u32>().ok()?;
    let day = caps[4].parse::<u32>().ok()?;
    let expiry = NaiveDate::from_ymd_opt(year, month, day)?;

    let right = match &caps[5] {
        "C" => OptionRight::Call,
        _ => OptionRight::Put,
    };
    let strike = Decimal::from_str_canonical(&caps[6]).ok()?;

    Some(ParsedOptionSymbol {
        root: caps[1].to_string(),
        expiry,
        right,
        strike,
    })
}

/// Whether the ticker denotes an option contract.
pub fn is_option_symbol(ticker: &str) -> bool {
    parse_option_symbol(ticker).is_some()
}

/// Whole-day count from trade date to expiry.
///
/// Both arguments are plain calendar dates, so the difference is a
/// midnight-to-midnight day count with no wall-clock or DST exposure.
/// Same-day expiry yields 0; an expiry before the trade date is a data
/// inconsistency and yields `None` rather than a negative count.
pub fn days_to_expiry(trade_date: NaiveDate, expiry: NaiveDate) -> Option<i64> {
    let days = expiry.signed_duration_since(trade_date).num_days();
    (days >= 0).then_some(days)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_parse_call() {
        let parsed = parse_option_symbol("SPXW251121C6565").expect("should parse");
        assert_eq!(parsed.root, "SPXW");
        assert_eq!(parsed.expiry, date(2025, 11, 21));
        assert_eq!(parsed.right, OptionRight::Call);
        assert_eq!(parsed.strike, Decimal::from_i64(6565));
    }

    #[test]
    fn test_parse_put_with_decimal_strike() {
        let parsed = parse_option_symbol("AAPL260116P172.5").expect("should parse");
        assert_eq!(parsed.root, "AAPL");
        assert_eq!(parsed.expiry, date(2026, 1, 16));
        assert_eq!(parsed.right, OptionRight::Put);
        assert_eq!(
            parsed.strike,
            Decimal::from_str_canonical("172.5").unwrap()
        );
    }

    #[test]
    fn test_leading_punctuation_is_stripped() {
        assert!(is_option_symbol(".SPXW251121C6565"));
        assert_eq!(strip_leading_punctuation("/ESZ25"), "ESZ25");
        assert_eq!(strip_leading_punctuation("AAPL"), "AAPL");
    }

    #[test]
    fn test_plain_ticker_is_not_an_option() {
        assert!(parse_option_symbol("AAPL").is_none());
        assert!(parse_option_symbol("ES1225").is_none());
        assert!(parse_option_symbol("").is_none());
    }

    #[test]
    fn test_impossible_date_is_not_an_option() {
        // Month 13 matches the digit shape but is not a calendar date.
        assert!(parse_option_symbol("SPXW251321C6565").is_none());
        // Feb 30.
        assert!(parse_option_symbol("SPXW250230C6565").is_none());
    }

    #[test]
    fn test_missing_right_or_strike_is_not_an_option() {
        assert!(parse_option_symbol("SPXW251121").is_none());
        assert!(parse_option_symbol("SPXW251121C").is_none());
        assert!(parse_option_symbol("SPXW251121X6565").is_none());
    }

    #[test]
    fn test_dte_same_day_is_zero() {
        let d = date(2025, 11, 21);
        assert_eq!(days_to_expiry(d, d), Some(0));
    }

    #[test]
    fn test_dte_positive() {
        assert_eq!(
            days_to_expiry(date(2025, 11, 1), date(2025, 11, 21)),
            Some(20)
        );
    }

    #[test]
    fn test_dte_expiry_before_trade_is_unknown() {
        assert_eq!(days_to_expiry(date(2025, 11, 22), date(2025, 11, 21)), None);
    }
}
