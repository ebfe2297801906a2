use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::constants::delimiters::CANONICAL;
use crate::error::NormalizeError;

/// A normalized pair, rendered as `BASE_QUOTE`.
///
/// Both sides are non-empty and contain no underscore, so the rendered form
/// always has exactly one.
///
/// Serialized as the rendered string; deserializing goes through `FromStr`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CanonicalPair {
    pub base: String,
    pub quote: String,
}

impl CanonicalPair {
    /// `None` when either side is empty or contains `_`.
    pub fn new(base: impl Into<String>, quote: impl Into<String>) -> Option<Self> {
        let base = base.into();
        let quote = quote.into();
        if !is_valid_side(&base) || !is_valid_side(&quote) {
            return None;
        }
        Some(Self { base, quote })
    }
}

fn is_valid_side(side: &str) -> bool {
    !side.is_empty() && !side.contains(CANONICAL)
}

impl fmt::Display for CanonicalPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.base, CANONICAL, self.quote)
    }
}

impl FromStr for CanonicalPair {
    type Err = NormalizeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.to_uppercase();
        upper
            .split_once(CANONICAL)
            .and_then(|(base, quote)| Self::new(base, quote))
            .ok_or_else(|| NormalizeError::MalformedPair { pair: s.to_string() })
    }
}

impl TryFrom<String> for CanonicalPair {
    type Error = NormalizeError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<CanonicalPair> for String {
    fn from(pair: CanonicalPair) -> Self {
        pair.to_string()
    }
}

/// Outcome of an exchange-specific split.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PairSplit {
    /// The exchange convention identified both sides (not yet symbol-normalized).
    Split { base: String, quote: String },
    /// The convention does not apply; hand the pair to the generic parser.
    Fallback,
    /// The convention applies but the pair does not fit it.
    NoMatch,
}

impl PairSplit {
    pub fn split(base: impl Into<String>, quote: impl Into<String>) -> Self {
        PairSplit::Split {
            base: base.into(),
            quote: quote.into(),
        }
    }

    /// `Split` when both sides are non-empty, `Fallback` otherwise.
    pub fn or_fallback(pair: Option<(&str, &str)>) -> Self {
        match pair {
            Some((base, quote)) if !base.is_empty() && !quote.is_empty() => {
                PairSplit::split(base, quote)
            }
            _ => PairSplit::Fallback,
        }
    }
}
