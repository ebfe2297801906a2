//! Unit tests for canonical pair and split result types.

#[cfg(test)]
mod types_tests {
    use crate::error::NormalizeError;
    use crate::exchange::types::*;

    // ============= CanonicalPair Tests =============

    #[test]
    fn test_canonical_pair_display() {
        let pair = CanonicalPair::new("BTC", "USDT").unwrap();
        assert_eq!(pair.to_string(), "BTC_USDT");
    }

    #[test]
    fn test_canonical_pair_rejects_empty_side() {
        assert!(CanonicalPair::new("", "USD").is_none());
        assert!(CanonicalPair::new("BTC", "").is_none());
    }

    #[test]
    fn test_canonical_pair_rejects_underscore() {
        assert!(CanonicalPair::new("BTC_X", "USD").is_none());
        assert!(CanonicalPair::new("BTC", "US_D").is_none());
    }

    #[test]
    fn test_canonical_pair_from_str() {
        let pair: CanonicalPair = "eth_btc".parse().unwrap();
        assert_eq!(pair.base, "ETH");
        assert_eq!(pair.quote, "BTC");
    }

    #[test]
    fn test_canonical_pair_from_str_malformed() {
        for input in ["ETHBTC", "ETH_", "_BTC", "A_B_C", ""] {
            let result: Result<CanonicalPair, _> = input.parse();
            assert_eq!(
                result,
                Err(NormalizeError::MalformedPair {
                    pair: input.to_string()
                }),
                "input {:?}",
                input
            );
        }
    }

    #[test]
    fn test_canonical_pair_serialization() {
        let pair = CanonicalPair::new("EOS", "USDT").unwrap();
        let json = serde_json::to_string(&pair).unwrap();
        assert_eq!(json, r#""EOS_USDT""#);

        let back: CanonicalPair = serde_json::from_str(&json).unwrap();
        assert_eq!(back, pair);

        let lower: CanonicalPair = serde_json::from_str(r#""eos_usdt""#).unwrap();
        assert_eq!(lower, pair);
    }

    #[test]
    fn test_canonical_pair_deserialize_keeps_invariant() {
        // Field-wise input cannot smuggle in an empty or underscored side
        assert!(serde_json::from_str::<CanonicalPair>(r#"{"base":"","quote":"A_B"}"#).is_err());
        assert!(serde_json::from_str::<CanonicalPair>(r#"{"base":"EOS","quote":"USDT"}"#).is_err());

        for input in [r#""_A_B""#, r#""A_B_C""#, r#""ETH_""#, r#""ETHBTC""#, r#""""#] {
            assert!(
                serde_json::from_str::<CanonicalPair>(input).is_err(),
                "input {}",
                input
            );
        }
    }

    // ============= PairSplit Tests =============

    #[test]
    fn test_or_fallback_with_both_sides() {
        assert_eq!(
            PairSplit::or_fallback(Some(("BTC", "USD"))),
            PairSplit::Split {
                base: "BTC".to_string(),
                quote: "USD".to_string()
            }
        );
    }

    #[test]
    fn test_or_fallback_with_missing_side() {
        assert_eq!(PairSplit::or_fallback(None), PairSplit::Fallback);
        assert_eq!(PairSplit::or_fallback(Some(("", "USD"))), PairSplit::Fallback);
        assert_eq!(PairSplit::or_fallback(Some(("BTC", ""))), PairSplit::Fallback);
    }
}
