//! Pair and symbol normalization
//!
//! A raw pair is first offered to the rules of its exchange; when those do
//! not apply it goes through the generic parser. Both halves then get the
//! exchange's symbol renames and are joined as `BASE_QUOTE`.

use tracing::{debug, trace};

use crate::config::NormalizerOptions;
use crate::constants::{
    delimiters::{ALTERNATES, CANONICAL},
    quote_symbols,
};
use crate::error::NormalizeError;
use crate::exchange::{
    rules_for,
    symbols::{owned_pair, split_exact, split_tail},
    CanonicalPair, PairSplit,
};

/// Normalizer carrying the options that select between rule variants.
#[derive(Clone, Debug, Default)]
pub struct PairNormalizer {
    options: NormalizerOptions,
}

impl PairNormalizer {
    pub fn new(options: NormalizerOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &NormalizerOptions {
        &self.options
    }

    /// Canonical ticker for `symbol` as spelled on `exchange`.
    pub fn normalize_symbol(&self, symbol: &str, exchange: &str) -> Result<String, NormalizeError> {
        check_exchange(exchange)?;
        Ok(self.apply_symbol_rules(symbol, exchange))
    }

    /// Parse `raw_pair` into its canonical parts. `Ok(None)` when it cannot be parsed.
    pub fn parse_pair(
        &self,
        raw_pair: &str,
        exchange: &str,
    ) -> Result<Option<CanonicalPair>, NormalizeError> {
        check_exchange(exchange)?;
        let raw_pair = raw_pair.to_uppercase();

        let split = rules_for(exchange)
            .map(|rules| rules.split_pair(&raw_pair))
            .unwrap_or(PairSplit::Fallback);
        trace!("[PAIR] {} on {}: {:?}", raw_pair, exchange, split);

        let (base, quote) = match split {
            PairSplit::Split { base, quote } => (base, quote),
            PairSplit::Fallback => match default_split_pair(&raw_pair) {
                Some(parts) => parts,
                None => {
                    debug!("[PAIR] {} on {}: no quote symbol recognised", raw_pair, exchange);
                    return Ok(None);
                }
            },
            PairSplit::NoMatch => {
                debug!("[PAIR] {} does not fit {} conventions", raw_pair, exchange);
                return Ok(None);
            }
        };

        let base = self.apply_symbol_rules(&base, exchange);
        let quote = self.apply_symbol_rules(&quote, exchange);
        let pair = CanonicalPair::new(base, quote);
        if pair.is_none() {
            debug!("[PAIR] {} on {}: normalized to an empty side", raw_pair, exchange);
        }
        Ok(pair)
    }

    /// Canonical `BASE_QUOTE` form of `raw_pair`. `Ok(None)` when it cannot be parsed.
    pub fn normalize_pair(
        &self,
        raw_pair: &str,
        exchange: &str,
    ) -> Result<Option<String>, NormalizeError> {
        Ok(self
            .parse_pair(raw_pair, exchange)?
            .map(|pair| pair.to_string()))
    }

    fn apply_symbol_rules(&self, symbol: &str, exchange: &str) -> String {
        let symbol = symbol.to_uppercase();
        match rules_for(exchange) {
            Some(rules) => rules.normalize_symbol(symbol, &self.options),
            None => symbol,
        }
    }
}

fn check_exchange(exchange: &str) -> Result<(), NormalizeError> {
    if exchange.is_empty() {
        return Err(NormalizeError::empty_exchange());
    }
    Ok(())
}

/// Normalize a currency symbol with the default options.
pub fn normalize_symbol(symbol: &str, exchange: &str) -> Result<String, NormalizeError> {
    PairNormalizer::default().normalize_symbol(symbol, exchange)
}

/// Normalize a trading pair with the default options.
pub fn normalize_pair(raw_pair: &str, exchange: &str) -> Result<Option<String>, NormalizeError> {
    PairNormalizer::default().normalize_pair(raw_pair, exchange)
}

/// Exchange-agnostic parse of `raw_pair` into `BASE_QUOTE`.
///
/// Delimited pairs (`_`, then `-`, `:`, `/`) must have exactly two segments.
/// Undelimited pairs are split at the longest known quote suffix, trying
/// lengths 5, 4, 3 and 2 in turn. A base ending in a quote ticker can be
/// split wrongly; that is inherent to the heuristic.
pub fn default_normalize_pair(raw_pair: &str) -> Option<String> {
    default_split_pair(&raw_pair.to_uppercase())
        .map(|(base, quote)| format!("{}{}{}", base, CANONICAL, quote))
}

/// `raw_pair` must already be upper-case.
fn default_split_pair(raw_pair: &str) -> Option<(String, String)> {
    if raw_pair.contains(CANONICAL) {
        return split_exact(raw_pair, CANONICAL).and_then(|(base, quote)| owned_pair(base, quote));
    }

    if let Some(delim) = ALTERNATES.iter().copied().find(|d| raw_pair.contains(*d)) {
        return split_exact(raw_pair, delim).and_then(|(base, quote)| owned_pair(base, quote));
    }

    quote_symbols::SUFFIX_LENGTHS
        .iter()
        .filter_map(|&len| split_tail(raw_pair, len))
        .find(|(_, quote)| quote_symbols::is_known(quote))
        .and_then(|(base, quote)| owned_pair(base, quote))
}
