use crate::config::NormalizerOptions;

use super::{
    symbols::{char_len, split_tail},
    traits::ExchangeRules,
    types::PairSplit,
};

/// Quote currencies Kraken lists spot markets in
const QUOTE_SYMBOLS: &[&str] = &[
    "AUD", "BTC", "ETH", "EUR", "USD", "CAD", "CHF", "DAI", "GBP", "JPY", "USDC", "USDT",
];

/// Siacoin: the only two-letter base Kraken lists
const TWO_LETTER_BASE: &str = "SC";

/// Kraken asset code to common ticker.
///
/// Legacy assets carry an `X` (crypto) or `Z` (fiat) prefix on a
/// three-letter code, and bitcoin/dogecoin use their ISO-style names.
/// See https://support.kraken.com/hc/en-us/articles/360001185506
pub(crate) fn currency_code(asset: &str) -> String {
    let code = if char_len(asset) > 3 && (asset.starts_with('X') || asset.starts_with('Z')) {
        &asset[1..]
    } else {
        asset
    };

    match code {
        "XBT" => "BTC".to_string(),
        "XDG" => "DOGE".to_string(),
        other => other.to_string(),
    }
}

fn is_quote(symbol: &str) -> bool {
    QUOTE_SYMBOLS.contains(&symbol)
}

/// Take the last `quote_len` characters as the quote, normalizing both sides.
fn split_at_quote(raw_pair: &str, quote_len: usize) -> Option<(String, String)> {
    split_tail(raw_pair, quote_len).map(|(base, quote)| (currency_code(base), currency_code(quote)))
}

pub struct Kraken;

impl ExchangeRules for Kraken {
    fn name(&self) -> &'static str {
        crate::constants::exchanges::KRAKEN
    }

    fn split_pair(&self, raw_pair: &str) -> PairSplit {
        // Four-character quotes first (XXBTZUSD), then three (ICXETH)
        let candidate = match split_at_quote(raw_pair, 4) {
            Some((base, quote))
                if is_quote(&quote) && !(char_len(&base) == 2 && base != TWO_LETTER_BASE) =>
            {
                Some((base, quote))
            }
            _ => split_at_quote(raw_pair, 3),
        };

        match candidate {
            Some((base, quote)) if is_quote(&quote) => {
                if base.is_empty() {
                    PairSplit::Fallback
                } else {
                    PairSplit::Split { base, quote }
                }
            }
            _ => PairSplit::NoMatch,
        }
    }

    fn normalize_symbol(&self, symbol: String, _options: &NormalizerOptions) -> String {
        currency_code(&symbol)
    }
}
