//! Character-aware string helpers for splitting raw pairs.
//!
//! Lengths are counted in characters, never bytes, so a stray multi-byte
//! character in a raw pair cannot cause a slice on a non-boundary.

/// Split `s` on `delim` when it yields exactly two segments.
pub fn split_exact(s: &str, delim: char) -> Option<(&str, &str)> {
    let mut parts = s.split(delim);
    let first = parts.next()?;
    let second = parts.next()?;
    if parts.next().is_some() {
        return None;
    }
    Some((first, second))
}

/// Number of segments `s` splits into on `delim`.
pub fn segment_count(s: &str, delim: char) -> usize {
    s.split(delim).count()
}

/// Split off the last `n` characters. `None` when `s` is shorter than `n`.
pub fn split_tail(s: &str, n: usize) -> Option<(&str, &str)> {
    let len = char_len(s);
    if n > len {
        return None;
    }
    Some(s.split_at(byte_offset(s, len - n)))
}

/// Split after the first `n` characters. `None` when `s` is shorter than `n`.
pub fn split_head(s: &str, n: usize) -> Option<(&str, &str)> {
    if n > char_len(s) {
        return None;
    }
    Some(s.split_at(byte_offset(s, n)))
}

pub fn char_len(s: &str) -> usize {
    s.chars().count()
}

fn byte_offset(s: &str, chars: usize) -> usize {
    s.char_indices().nth(chars).map(|(i, _)| i).unwrap_or(s.len())
}

/// Own both halves, rejecting an empty side.
pub fn owned_pair(base: &str, quote: &str) -> Option<(String, String)> {
    if base.is_empty() || quote.is_empty() {
        return None;
    }
    Some((base.to_string(), quote.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_exact() {
        assert_eq!(split_exact("BTC_USD", '_'), Some(("BTC", "USD")));
        assert_eq!(split_exact("BTC_", '_'), Some(("BTC", "")));
        assert_eq!(split_exact("A_B_C", '_'), None);
        assert_eq!(split_exact("BTCUSD", '_'), None);
    }

    #[test]
    fn test_split_tail() {
        assert_eq!(split_tail("XXBTZUSD", 4), Some(("XXBT", "ZUSD")));
        assert_eq!(split_tail("USD", 3), Some(("", "USD")));
        assert_eq!(split_tail("US", 3), None);
    }

    #[test]
    fn test_split_head() {
        assert_eq!(split_head("BTCUSD", 3), Some(("BTC", "USD")));
        assert_eq!(split_head("BT", 3), None);
    }

    #[test]
    fn test_multibyte_does_not_panic() {
        assert_eq!(split_tail("ÉTHBTC", 3), Some(("ÉTH", "BTC")));
        assert_eq!(split_head("ÉTHBTC", 3), Some(("ÉTH", "BTC")));
        assert_eq!(char_len("ÉTH"), 3);
    }

    #[test]
    fn test_owned_pair_rejects_empty() {
        assert_eq!(owned_pair("BTC", "USD"), Some(("BTC".to_string(), "USD".to_string())));
        assert_eq!(owned_pair("", "USD"), None);
        assert_eq!(owned_pair("BTC", ""), None);
    }
}
