use std::collections::HashMap;
use std::sync::LazyLock;

use crate::config::NormalizerOptions;

use super::{
    symbols::{split_exact, split_tail},
    traits::ExchangeRules,
    types::PairSplit,
};

/// Suffix Bitfinex appends to currencies of derivative markets
const FUTURES_SUFFIX: &str = "F0";

/// Bitfinex tickers that differ from the common name.
/// See https://api-pub.bitfinex.com/v2/conf/pub:map:currency:sym
static ALIASES: LazyLock<HashMap<&'static str, &'static str>> = LazyLock::new(|| {
    HashMap::from([
        ("AAA", "TESTAAA"),
        ("ABS", "ABYSS"),
        ("AIO", "AION"),
        ("ALG", "ALGO"),
        ("AMP", "AMPL"),
        ("ATO", "ATOM"),
        ("BAB", "BCH"),
        ("BBB", "TESTBBB"),
        ("CNHT", "CNHT"),
        ("CSX", "CS"),
        ("CTX", "CTXC"),
        ("DAD", "EDGE"),
        ("DAT", "DATA"),
        ("DOG", "MDOGE"),
        ("DRN", "DRGN"),
        ("DSH", "DASH"),
        ("DTX", "DT"),
        ("EDO", "PNT"),
        ("EUS", "EURS"),
        ("EUT", "EURT"),
        ("GSD", "GUSD"),
        ("IOS", "IOST"),
        ("IOT", "IOTA"),
        ("LBT", "LBTC"),
        ("MIT", "MITH"),
        ("MNA", "MANA"),
        ("NCA", "NCASH"),
        ("OMN", "OMNI"),
        ("PAS", "PASS"),
        ("POY", "POLY"),
        ("QSH", "QASH"),
        ("QTM", "QTUM"),
        ("RBT", "RBTC"),
        ("REP", "REP2"),
        ("SCR", "XD"),
        ("SNG", "SNGLS"),
        ("SPK", "SPANK"),
        ("STJ", "STORJ"),
        ("TSD", "TUSD"),
        ("UDC", "USDC"),
        ("USK", "USDK"),
        ("UST", "USDT"),
        ("UTN", "UTNP"),
        ("VSY", "VSYS"),
        ("WBT", "WBTC"),
        ("XAUT", "XAUT"),
        ("XCH", "XCHF"),
        ("YGG", "YEED"),
        ("YYW", "YOYOW"),
    ])
});

/// Bitfinex quotes are three characters unless the pair is colon-delimited
/// (`tXAUT:USD`, `tETHF0:USTF0`).
const DEFAULT_QUOTE_LEN: usize = 3;

pub struct Bitfinex;

impl ExchangeRules for Bitfinex {
    fn name(&self) -> &'static str {
        crate::constants::exchanges::BITFINEX
    }

    fn split_pair(&self, raw_pair: &str) -> PairSplit {
        if raw_pair.contains(':') {
            return PairSplit::or_fallback(split_exact(raw_pair, ':'));
        }
        PairSplit::or_fallback(split_tail(raw_pair, DEFAULT_QUOTE_LEN))
    }

    fn normalize_symbol(&self, symbol: String, options: &NormalizerOptions) -> String {
        let stripped = symbol.strip_suffix(FUTURES_SUFFIX).unwrap_or(&symbol);
        let symbol = ALIASES
            .get(stripped)
            .map(|s| s.to_string())
            .unwrap_or_else(|| stripped.to_string());

        if !options.bitfinex_extra_renames {
            return symbol;
        }
        match symbol.as_str() {
            "HOT" => "HYDRO".to_string(),
            "ORS" => "ORSGROUP".to_string(),
            _ => symbol,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn normalize(symbol: &str) -> String {
        Bitfinex.normalize_symbol(symbol.to_string(), &NormalizerOptions::default())
    }

    #[test]
    fn test_split_fixed_quote() {
        assert_eq!(Bitfinex.split_pair("IOTUSD"), PairSplit::split("IOT", "USD"));
        assert_eq!(Bitfinex.split_pair("TESTBTCUSD"), PairSplit::split("TESTBTC", "USD"));
    }

    #[test]
    fn test_split_colon() {
        assert_eq!(Bitfinex.split_pair("XAUT:USD"), PairSplit::split("XAUT", "USD"));
        assert_eq!(Bitfinex.split_pair("ETHF0:USTF0"), PairSplit::split("ETHF0", "USTF0"));
    }

    #[test]
    fn test_split_too_short_falls_back() {
        assert_eq!(Bitfinex.split_pair("USD"), PairSplit::Fallback);
        assert_eq!(Bitfinex.split_pair("A:B:C"), PairSplit::Fallback);
    }

    #[test]
    fn test_alias_table() {
        assert_eq!(normalize("IOT"), "IOTA");
        assert_eq!(normalize("UST"), "USDT");
        assert_eq!(normalize("XCH"), "XCHF");
        assert_eq!(normalize("DSH"), "DASH");
        assert_eq!(normalize("BTC"), "BTC");
    }

    #[test]
    fn test_futures_suffix_stripped_before_lookup() {
        assert_eq!(normalize("USTF0"), "USDT");
        assert_eq!(normalize("BTCF0"), "BTC");
    }

    #[test]
    fn test_extra_renames() {
        assert_eq!(normalize("HOT"), "HYDRO");
        assert_eq!(normalize("ORS"), "ORSGROUP");

        let legacy = NormalizerOptions {
            bitfinex_extra_renames: false,
        };
        assert_eq!(Bitfinex.normalize_symbol("HOT".to_string(), &legacy), "HOT");
        assert_eq!(Bitfinex.normalize_symbol("ORS".to_string(), &legacy), "ORS");
        assert_eq!(Bitfinex.normalize_symbol("IOT".to_string(), &legacy), "IOTA");
    }
}
