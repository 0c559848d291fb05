use serde_json::{Map, Value};

/// Parse an array index segment.
///
/// Only plain base-10 digits are accepted; anything else (signs, fractions,
/// keys) is not an index.
///
/// # Example
///
/// ```
/// use json_map_path::parse_index;
///
/// assert_eq!(parse_index("0"), Some(0));
/// assert_eq!(parse_index("12"), Some(12));
/// assert_eq!(parse_index("-1"), None);
/// assert_eq!(parse_index("x"), None);
/// ```
pub fn parse_index(segment: &str) -> Option<usize> {
    if !is_integer(segment) {
        return None;
    }
    segment.parse().ok()
}

/// Check if a string consists only of ASCII digits.
pub fn is_integer(s: &str) -> bool {
    if s.is_empty() {
        return false;
    }
    s.bytes().all(|b| b.is_ascii_digit())
}

/// Returns true for Arrays and Objects.
pub fn is_container(value: &Value) -> bool {
    matches!(value, Value::Array(_) | Value::Object(_))
}

pub(crate) fn empty_object() -> Value {
    Value::Object(Map::new())
}
