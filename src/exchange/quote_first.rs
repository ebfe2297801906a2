//! Exchanges that list the quote currency first.

use super::{symbols::split_exact, traits::ExchangeRules, types::PairSplit};

/// Split on `delim` and swap the segments into base-then-quote order.
fn split_reversed(raw_pair: &str, delim: char) -> PairSplit {
    PairSplit::or_fallback(split_exact(raw_pair, delim).map(|(quote, base)| (base, quote)))
}

/// Poloniex lists the quote first: `BTC_ETH` is ETH priced in BTC.
pub struct Poloniex;

impl ExchangeRules for Poloniex {
    fn name(&self) -> &'static str {
        crate::constants::exchanges::POLONIEX
    }

    fn split_pair(&self, raw_pair: &str) -> PairSplit {
        split_reversed(raw_pair, '_')
    }
}

/// Upbit lists the quote first: `KRW-BTC` is BTC priced in KRW.
pub struct Upbit;

impl ExchangeRules for Upbit {
    fn name(&self) -> &'static str {
        crate::constants::exchanges::UPBIT
    }

    fn split_pair(&self, raw_pair: &str) -> PairSplit {
        split_reversed(raw_pair, '-')
    }
}
