//! Small utility helpers for JSON extraction, text shaping, and time formatting.
//!
//! The functions in this module are intentionally lightweight. They are used
//! by the feed loader, the UI, and the logging setup, and they implement the
//! "missing field means neutral value" policy in one place.

use serde_json::Value;

/// What: Extract a string value from a JSON object by key, defaulting to empty string.
///
/// Inputs:
/// - `v`: JSON value to extract from.
/// - `key`: Key to look up in the JSON object.
///
/// Output:
/// - Returns the string value if found, or an empty string if the key is missing or not a string.
#[must_use]
pub fn s(v: &Value, key: &str) -> String {
    v.get(key)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_owned()
}

/// What: Extract the first available string from a list of candidate keys.
///
/// Inputs:
/// - `v`: JSON value to extract from.
/// - `keys`: Array of candidate keys to try in order.
///
/// Output:
/// - Returns `Some(String)` for the first key that maps to a JSON string, or `None` if none match.
#[must_use]
pub fn ss(v: &Value, keys: &[&str]) -> Option<String> {
    for k in keys {
        if let Some(s) = v.get(*k).and_then(|x| x.as_str()) {
            return Some(s.to_owned());
        }
    }
    None
}

/// What: Extract a signed 64-bit integer by key, accepting numeric or string representations.
///
/// Inputs:
/// - `v`: JSON value to extract from.
/// - `key`: Key to look up.
///
/// Output:
/// - Returns `Some(i64)` when the value is a JSON integer or a string that parses as one.
#[must_use]
pub fn i64_of(v: &Value, key: &str) -> Option<i64> {
    let n = v.get(key)?;
    if let Some(i) = n.as_i64() {
        return Some(i);
    }
    if let Some(s) = n.as_str()
        && let Ok(p) = s.parse::<i64>()
    {
        return Some(p);
    }
    None
}

/// What: Extract an unsigned 32-bit integer by key, accepting numeric or string representations.
///
/// Inputs:
/// - `v`: JSON value to extract from.
/// - `key`: Key to look up.
///
/// Output:
/// - Returns `Some(u32)` when the value converts without loss; `None` otherwise.
#[must_use]
pub fn u32_of(v: &Value, key: &str) -> Option<u32> {
    let n = v.get(key)?;
    if let Some(u) = n.as_u64()
        && let Ok(u) = u32::try_from(u)
    {
        return Some(u);
    }
    if let Some(s) = n.as_str()
        && let Ok(p) = s.parse::<u32>()
    {
        return Some(p);
    }
    None
}

/// What: Shorten a string to at most `n` characters, appending an ellipsis when cut.
///
/// Inputs:
/// - `input`: Source text.
/// - `n`: Maximum number of characters to keep, including the ellipsis.
///
/// Output:
/// - The original string when it fits, otherwise the first `n - 1` characters plus `…`.
///
/// Details:
/// - Operates on `char` boundaries, never on raw bytes.
#[must_use]
pub fn truncate(input: &str, n: usize) -> String {
    if n == 0 {
        return String::new();
    }
    let count = input.chars().count();
    if count <= n {
        return input.to_owned();
    }
    let mut out: String = input.chars().take(n.saturating_sub(1)).collect();
    out.push('…');
    out
}

/// What: Format a Unix timestamp as `YYYY-MM-DD HH:MM:SS` for log lines.
///
/// Inputs:
/// - `secs`: Seconds since the Unix epoch, or `None` when unknown.
///
/// Output:
/// - Formatted UTC date string; empty string when `secs` is `None` or out of range.
#[must_use]
pub fn ts_to_date(secs: Option<i64>) -> String {
    let Some(secs) = secs else {
        return String::new();
    };
    chrono::DateTime::<chrono::Utc>::from_timestamp(secs, 0)
        .map(|dt| dt.format("%Y-%m-%d %H:%M:%S").to_string())
        .unwrap_or_default()
}
