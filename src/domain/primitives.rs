//! Domain primitives: instrument kind, trade side, premium direction.

use serde::{Deserialize, Serialize};

/// User-declared instrument classification for a trade row.
///
/// The declared kind is advisory: the normalizer may downgrade a declared
/// `Option` to `Equity` when the ticker does not parse as an option
/// contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InstrumentKind {
    Equity,
    Option,
    Future,
    Crypto,
    Forex,
    Other,
}

impl InstrumentKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            InstrumentKind::Equity => "equity",
            InstrumentKind::Option => "option",
            InstrumentKind::Future => "future",
            InstrumentKind::Crypto => "crypto",
            InstrumentKind::Forex => "forex",
            InstrumentKind::Other => "other",
        }
    }

    /// Lenient parse for values read back from storage.
    /// Unknown strings fall back to `Other`.
    pub fn parse_lenient(s: &str) -> Self {
        match s {
            "equity" => InstrumentKind::Equity,
            "option" => InstrumentKind::Option,
            "future" => InstrumentKind::Future,
            "crypto" => InstrumentKind::Crypto,
            "forex" => InstrumentKind::Forex,
            _ => InstrumentKind::Other,
        }
    }
}

impl std::fmt::Display for InstrumentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Trade side: Long or Short.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TradeSide {
    Long,
    Short,
}

impl TradeSide {
    /// Signed multiplier for this side (+1 long, -1 short).
    pub fn sign(&self) -> i32 {
        match self {
            TradeSide::Long => 1,
            TradeSide::Short => -1,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TradeSide::Long => "long",
            TradeSide::Short => "short",
        }
    }

    /// Lenient parse for values read back from storage.
    /// Unknown strings fall back to `Long`.
    pub fn parse_lenient(s: &str) -> Self {
        match s {
            "short" => TradeSide::Short,
            _ => TradeSide::Long,
        }
    }
}

impl std::fmt::Display for TradeSide {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Premium direction for option positions: whether premium was paid
/// (debit) or received (credit) at entry. Credit flips the profit sign.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PremiumDirection {
    None,
    Debit,
    Credit,
}

impl PremiumDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            PremiumDirection::None => "none",
            PremiumDirection::Debit => "debit",
            PremiumDirection::Credit => "credit",
        }
    }

    /// Lenient parse for values read back from storage.
    /// Unknown strings fall back to `None`.
    pub fn parse_lenient(s: &str) -> Self {
        match s {
            "debit" => PremiumDirection::Debit,
            "credit" => PremiumDirection::Credit,
            _ => PremiumDirection::None,
        }
    }
}

impl std::fmt::Display for PremiumDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Call or put indicator parsed from an option ticker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OptionRight {
    Call,
    Put,
}

impl std::fmt::Display for OptionRight {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OptionRight::Call => write!(f, "call"),
            OptionRight::Put => write!(f, "put"),
        }
    }
}

/// Whether a logged row opens (entry) or closes (exit) a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TradeRole {
    Entry,
    Exit,
}

impl TradeRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            TradeRole::Entry => "entry",
            TradeRole::Exit => "exit",
        }
    }

    /// Lenient parse for values read back from storage.
    /// Unknown strings fall back to `Entry`.
    pub fn parse_lenient(s: &str) -> Self {
        match s {
            "exit" => TradeRole::Exit,
            _ => TradeRole::Entry,
        }
    }
}

impl std::fmt::Display for TradeRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
