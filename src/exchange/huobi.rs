use crate::config::NormalizerOptions;

use super::traits::ExchangeRules;

/// Huobi pairs are undelimited and go through the generic suffix parser;
/// only the HOT ticker needs renaming.
pub struct Huobi;

impl ExchangeRules for Huobi {
    fn name(&self) -> &'static str {
        crate::constants::exchanges::HUOBI
    }

    fn normalize_symbol(&self, symbol: String, _options: &NormalizerOptions) -> String {
        if symbol == "HOT" {
            "HYDRO".to_string()
        } else {
            symbol
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::exchange::types::PairSplit;

    #[test]
    fn test_hot_rename() {
        let options = NormalizerOptions::default();
        assert_eq!(Huobi.normalize_symbol("HOT".to_string(), &options), "HYDRO");
        assert_eq!(Huobi.normalize_symbol("HT".to_string(), &options), "HT");
    }

    #[test]
    fn test_no_specific_split() {
        assert_eq!(Huobi.split_pair("BTCUSDT"), PairSplit::Fallback);
    }
}
