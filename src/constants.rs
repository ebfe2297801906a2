//! Static symbol lists and names shared across the crate
//!
//! Everything here is fixed at compile time; the exchange rule modules keep
//! their own alias tables next to the code that reads them.

/// Quote currencies recognised by the generic suffix parser
pub mod quote_symbols {
    /// Known quote tickers, matched against the tail of undelimited pairs
    pub const ALL: &[&str] = &[
        "BNB", "BTC", "BKRW", "BUSD", "CAD", "CHF", "CNHT", "CUSD", "DAI", "EOS", "EOSDT", "ETH",
        "EUR", "EUSD", "GBP", "HT", "HUSD", "IDRT", "JPY", "MX", "NGN", "OKB", "PAX", "PAXE",
        "RUB", "TRX", "TRY", "TUSD", "UAH", "USD", "USDC", "USDE", "USDK", "USDS", "USDT", "USN",
        "XCHF", "XLM", "XRP", "ZAR", "ZIG",
    ];

    /// Suffix lengths tried by the suffix parser, longest first
    pub const SUFFIX_LENGTHS: [usize; 4] = [5, 4, 3, 2];

    pub fn is_known(symbol: &str) -> bool {
        ALL.contains(&symbol)
    }
}

/// Delimiters understood by the generic parser, in priority order
pub mod delimiters {
    pub const CANONICAL: char = '_';

    /// Checked after `_`, in this order
    pub const ALTERNATES: [char; 3] = ['-', ':', '/'];
}

/// Exchange names
pub mod exchanges {
    pub const BITFINEX: &str = "Bitfinex";
    pub const BITMEX: &str = "BitMEX";
    pub const BITSTAMP: &str = "Bitstamp";
    pub const HUOBI: &str = "Huobi";
    pub const KRAKEN: &str = "Kraken";
    pub const NEWDEX: &str = "Newdex";
    pub const OKEX_SPOT: &str = "OKEx_Spot";
    /// Short name used by older callers for the same spot market
    pub const OKEX: &str = "OKEx";
    pub const POLONIEX: &str = "Poloniex";
    pub const UPBIT: &str = "Upbit";
    pub const WHALEEX: &str = "WhaleEx";

    /// Values accepted by the command line `--exchange` flag
    pub const CLI_CHOICES: &[&str] = &[
        "Biki",
        "Binance",
        BITFINEX,
        BITMEX,
        BITSTAMP,
        "Coinbase",
        "Coincheck",
        HUOBI,
        KRAKEN,
        "MXC",
        NEWDEX,
        OKEX_SPOT,
        POLONIEX,
        UPBIT,
        WHALEEX,
        "Zaif",
        "ZB",
        "bitFlyer",
    ];
}

/// Configuration file and environment variable names
pub mod config {
    pub const DEFAULT_CONFIG_PATH: &str = "crypto_pair.yaml";
    pub const CONFIG_PATH_ENV: &str = "CRYPTO_PAIR_CONFIG";
    pub const EXCHANGE_ENV: &str = "CRYPTO_PAIR_EXCHANGE";
    pub const LOG_LEVEL_ENV: &str = "CRYPTO_PAIR_LOG";
    pub const DEFAULT_LOG_LEVEL: &str = "warn";
}
