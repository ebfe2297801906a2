use crate::config::NormalizerOptions;

use super::types::PairSplit;

/// Naming conventions of one exchange.
///
/// Implementors are stateless unit structs held in a static dispatch table,
/// so every method is a pure function of its arguments.
pub trait ExchangeRules: Send + Sync {
    fn name(&self) -> &'static str;

    /// Whether this rule set serves `exchange`. Names are case-sensitive.
    fn matches(&self, exchange: &str) -> bool {
        exchange == self.name()
    }

    /// Split an upper-cased raw pair into raw base and quote symbols.
    fn split_pair(&self, _raw_pair: &str) -> PairSplit {
        PairSplit::Fallback
    }

    /// Rewrite an upper-cased symbol into its canonical ticker.
    fn normalize_symbol(&self, symbol: String, _options: &NormalizerOptions) -> String {
        symbol
    }
}
