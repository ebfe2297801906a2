use crate::config::NormalizerOptions;

use super::{
    symbols::split_tail,
    traits::ExchangeRules,
    types::PairSplit,
};

/// BitMEX still names bitcoin by its ISO-style code
const BITCOIN: &str = "XBT";

/// Length of a futures expiry code such as `Z20` (month letter + year)
const EXPIRY_CODE_LEN: usize = 3;

pub struct BitMex;

/// Drop a trailing expiry code (`ETHH21` -> `ETH`).
fn strip_expiry(raw_pair: &str) -> &str {
    let is_dated = split_tail(raw_pair, 2)
        .map(|(_, year)| year.chars().all(|c| c.is_ascii_digit()))
        .unwrap_or(false);

    if is_dated {
        split_tail(raw_pair, EXPIRY_CODE_LEN)
            .map(|(contract, _)| contract)
            .unwrap_or("")
    } else {
        raw_pair
    }
}

impl ExchangeRules for BitMex {
    fn name(&self) -> &'static str {
        crate::constants::exchanges::BITMEX
    }

    fn split_pair(&self, raw_pair: &str) -> PairSplit {
        let contract = strip_expiry(raw_pair);

        if let Some(base) = contract.strip_suffix("USD") {
            return PairSplit::or_fallback(Some((base, "USD")));
        }
        if let Some(base) = contract.strip_suffix("USDT") {
            return PairSplit::or_fallback(Some((base, "USDT")));
        }

        // Bare contracts are settled in bitcoin, except bitcoin itself
        let quote = if contract == BITCOIN { "USD" } else { BITCOIN };
        PairSplit::or_fallback(Some((contract, quote)))
    }

    fn normalize_symbol(&self, symbol: String, _options: &NormalizerOptions) -> String {
        if symbol == BITCOIN {
            "BTC".to_string()
        } else {
            symbol
        }
    }
}
