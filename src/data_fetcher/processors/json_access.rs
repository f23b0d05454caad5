//! Total accessors over untyped feed JSON.
//!
//! Every helper returns a default instead of failing, so a missing key is an
//! explicit branch at the call site.

use serde_json::Value;

/// Returns the array stored under `key`, or an empty slice when the key is
/// absent or holds something else.
pub fn array_field<'a>(value: &'a Value, key: &str) -> &'a [Value] {
    value
        .get(key)
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or(&[])
}

/// Returns the string stored under `key`, if it is a string.
pub fn str_field<'a>(value: &'a Value, key: &str) -> Option<&'a str> {
    value.get(key).and_then(Value::as_str)
}

/// Returns the field or `Value::Null`.
pub fn field_or_null(value: &Value, key: &str) -> Value {
    value.get(key).cloned().unwrap_or(Value::Null)
}

/// Normalizes an identifier to a string so `"7"` and `7` compare equal.
/// Strings are kept verbatim. Null, missing, and non-scalar values yield `None`.
pub fn id_string(value: Option<&Value>) -> Option<String> {
    match value? {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Parses a string-encoded (or native) integer, falling back to `default`
/// for anything missing or malformed.
///
/// # Example
/// ```
/// use bcci_feed::data_fetcher::processors::parse_int_or_default;
/// use serde_json::json;
///
/// assert_eq!(parse_int_or_default(Some(&json!(" 3 ")), 0), 3);
/// assert_eq!(parse_int_or_default(Some(&json!("n/a")), 0), 0);
/// assert_eq!(parse_int_or_default(None, 0), 0);
/// ```
pub fn parse_int_or_default(value: Option<&Value>, default: i64) -> i64 {
    match value {
        Some(Value::String(s)) => s.trim().parse::<i64>().unwrap_or(default),
        Some(Value::Number(n)) => n.as_i64().unwrap_or(default),
        _ => default,
    }
}
