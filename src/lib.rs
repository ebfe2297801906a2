//! crypto_pair - Canonical names for cryptocurrency trading pairs
//!
//! Exchanges spell the same market differently (`XXBTZUSD`, `tBTCUSD`,
//! `USDT_BTC`, `KRW-BTC`). This library maps such raw pairs to one form,
//! `BASE_QUOTE`, and maps exchange-specific tickers to their common names.
//!
//! ```
//! use crypto_pair::normalize_pair;
//!
//! assert_eq!(normalize_pair("XXBTZUSD", "Kraken").unwrap().as_deref(), Some("BTC_USD"));
//! assert_eq!(normalize_pair("BTC_ETH", "Poloniex").unwrap().as_deref(), Some("ETH_BTC"));
//! ```

pub mod config;
pub mod constants;
pub mod error;
pub mod exchange;
pub mod normalize;

// Re-export commonly used types
pub use config::{AppConfig, NormalizerOptions};
pub use error::{ConfigError, NormalizeError};
pub use exchange::{supported_exchanges, CanonicalPair};
pub use normalize::{default_normalize_pair, normalize_pair, normalize_symbol, PairNormalizer};
