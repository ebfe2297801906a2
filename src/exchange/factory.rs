use super::{
    bitfinex::Bitfinex,
    bitmex::BitMex,
    bitstamp::Bitstamp,
    huobi::Huobi,
    kraken::Kraken,
    newdex::{Newdex, WhaleEx},
    okex::OkexSpot,
    quote_first::{Poloniex, Upbit},
    traits::ExchangeRules,
};

/// Every exchange with its own conventions. Exchanges not listed here are
/// handled entirely by the generic parser.
static RULES: &[&dyn ExchangeRules] = &[
    &Bitfinex, &BitMex, &Bitstamp, &Huobi, &Kraken, &Newdex, &OkexSpot, &Poloniex, &Upbit,
    &WhaleEx,
];

/// Look up the rule set serving `exchange`, if any.
pub fn rules_for(exchange: &str) -> Option<&'static dyn ExchangeRules> {
    RULES.iter().copied().find(|rules| rules.matches(exchange))
}

/// Names of the exchanges carrying specific rules.
pub fn supported_exchanges() -> Vec<&'static str> {
    RULES.iter().map(|rules| rules.name()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_by_name() {
        assert_eq!(rules_for("Kraken").map(|r| r.name()), Some("Kraken"));
        assert_eq!(rules_for("OKEx").map(|r| r.name()), Some("OKEx_Spot"));
        assert!(rules_for("Binance").is_none());
        assert!(rules_for("kraken").is_none());
    }

    #[test]
    fn test_every_listed_exchange_resolves_to_itself() {
        for name in supported_exchanges() {
            assert_eq!(rules_for(name).map(|r| r.name()), Some(name));
        }
        assert_eq!(supported_exchanges().len(), 10);
    }
}
