//! Per-exchange naming conventions and the table that dispatches to them.

pub mod factory;
pub mod traits;
pub mod types;

pub mod symbols;

pub mod bitfinex;
pub mod bitmex;
pub mod bitstamp;
pub mod huobi;
pub mod kraken;
pub mod newdex;
pub mod okex;
pub mod quote_first;

pub use factory::{rules_for, supported_exchanges};
pub use traits::ExchangeRules;
pub use types::{CanonicalPair, PairSplit};

#[cfg(test)]
mod types_tests;
