use crate::config::NormalizerOptions;

use super::{
    symbols::{segment_count, split_exact},
    traits::ExchangeRules,
    types::PairSplit,
};

/// Newdex and WhaleEx (both EOS exchanges) list the MYKEY token as `KEY`.
fn rename_key(symbol: String) -> String {
    if symbol == "KEY" {
        "MYKEY".to_string()
    } else {
        symbol
    }
}

/// Newdex pairs are either `contract-base-quote` or `base_quote`.
pub struct Newdex;

impl ExchangeRules for Newdex {
    fn name(&self) -> &'static str {
        crate::constants::exchanges::NEWDEX
    }

    fn split_pair(&self, raw_pair: &str) -> PairSplit {
        if segment_count(raw_pair, '-') == 3 {
            let mut segments = raw_pair.split('-').skip(1);
            return match (segments.next(), segments.next()) {
                (Some(base), Some(quote)) => PairSplit::or_fallback(Some((base, quote))),
                _ => PairSplit::NoMatch,
            };
        }
        match split_exact(raw_pair, '_') {
            Some(pair) => PairSplit::or_fallback(Some(pair)),
            None => PairSplit::NoMatch,
        }
    }

    fn normalize_symbol(&self, symbol: String, _options: &NormalizerOptions) -> String {
        rename_key(symbol)
    }
}

pub struct WhaleEx;

impl ExchangeRules for WhaleEx {
    fn name(&self) -> &'static str {
        crate::constants::exchanges::WHALEEX
    }

    fn normalize_symbol(&self, symbol: String, _options: &NormalizerOptions) -> String {
        rename_key(symbol)
    }
}
