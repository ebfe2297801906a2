use super::{symbols::split_exact, traits::ExchangeRules, types::PairSplit};
use crate::constants::exchanges::{OKEX, OKEX_SPOT};

/// OKEx spot pairs are `BASE-QUOTE`.
pub struct OkexSpot;

impl ExchangeRules for OkexSpot {
    fn name(&self) -> &'static str {
        OKEX_SPOT
    }

    fn matches(&self, exchange: &str) -> bool {
        exchange == OKEX_SPOT || exchange == OKEX
    }

    fn split_pair(&self, raw_pair: &str) -> PairSplit {
        PairSplit::or_fallback(split_exact(raw_pair, '-'))
    }
}
