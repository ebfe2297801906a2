use super::{symbols::split_head, traits::ExchangeRules, types::PairSplit};

/// Bitstamp's undelimited pairs (`btcusd`, `ethbtc`) always lead with a
/// three-letter base.
const BASE_LEN: usize = 3;

pub struct Bitstamp;

impl ExchangeRules for Bitstamp {
    fn name(&self) -> &'static str {
        crate::constants::exchanges::BITSTAMP
    }

    fn split_pair(&self, raw_pair: &str) -> PairSplit {
        if raw_pair.contains('/') || raw_pair.contains('_') {
            return PairSplit::Fallback;
        }
        PairSplit::or_fallback(split_head(raw_pair, BASE_LEN))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_base_length() {
        assert_eq!(Bitstamp.split_pair("BTCUSD"), PairSplit::split("BTC", "USD"));
        assert_eq!(Bitstamp.split_pair("ETHUSDC"), PairSplit::split("ETH", "USDC"));
    }

    #[test]
    fn test_delimited_pairs_fall_back() {
        assert_eq!(Bitstamp.split_pair("BTC/USD"), PairSplit::Fallback);
        assert_eq!(Bitstamp.split_pair("BTC_USD"), PairSplit::Fallback);
    }

    #[test]
    fn test_base_only_falls_back() {
        assert_eq!(Bitstamp.split_pair("BTC"), PairSplit::Fallback);
        assert_eq!(Bitstamp.split_pair("BT"), PairSplit::Fallback);
    }
}
