//! Typed reads and writes over a bare `Map<String, Value>`.
//!
//! These are the operations behind [`Document`](crate::Document)'s typed
//! methods. They work on any map, so a host that keeps its own storage can
//! still read and write typed values without wrapping it.

use json_map_path::{find, PathError};
use serde_json::{Map, Value};
use tracing::trace;

use crate::codec::{Codec, CodecError};
use crate::key::Key;
use crate::options::{AccessError, AccessOp, AccessOptions};

/// Decode the value at `key` without modifying `data`.
///
/// Returns `None` when nothing is stored there, or when decoding fails; the
/// failure is handed to `options.on_error` first.
///
/// # Example
///
/// ```
/// use json_map::{extract, AccessOptions, TypedKey};
/// use serde_json::json;
///
/// let data = json!({"hello": {"world": "hello"}});
/// let data = data.as_object().unwrap();
/// let options: AccessOptions = AccessOptions::quiet();
///
/// let greeting = TypedKey::<String>::new("hello.world");
/// assert_eq!(extract(data, &greeting, &options), Some("hello".to_string()));
///
/// let as_number = TypedKey::<u32>::new("hello.world");
/// assert_eq!(extract(data, &as_number, &options), None);
/// ```
pub fn extract<K, C>(data: &Map<String, Value>, key: &K, options: &AccessOptions<C>) -> Option<K::Value>
where
    K: Key,
    C: Codec,
{
    decode_found(find(data, key.path()), key, AccessOp::Select, options)
}

/// Remove the value at `key` and decode what was there.
///
/// The value is removed even if it then fails to decode.
///
/// # Errors
///
/// Propagates [`PathError`] from the path engine (an out-of-range array
/// index). Codec failures are never returned.
pub fn remove<K, C>(
    data: &mut Map<String, Value>,
    key: &K,
    options: &AccessOptions<C>,
) -> Result<Option<K::Value>, PathError>
where
    K: Key,
    C: Codec,
{
    let removed = json_map_path::remove(data, key.path())?;
    Ok(decode_found(&removed, key, AccessOp::Remove, options))
}

/// Encode `value` and store it at `key`.
///
/// Nothing is stored if encoding fails (the failure goes to
/// `options.on_error`) or if the value encodes to `null`.
///
/// # Errors
///
/// Propagates [`PathError`] from the path engine (an out-of-range array
/// index). Codec failures are never returned.
pub fn insert<K, C>(
    data: &mut Map<String, Value>,
    key: &K,
    value: &K::Value,
    options: &AccessOptions<C>,
) -> Result<(), PathError>
where
    K: Key,
    C: Codec,
{
    let json = match key.encode(&options.codec, value) {
        Ok(json) => json,
        Err(source) => {
            report(key, AccessOp::Insert, source, options);
            return Ok(());
        }
    };
    if json.is_null() {
        trace!(path = %key.path(), "value encoded to null, nothing stored");
        return Ok(());
    }
    json_map_path::insert(data, key.path(), json)?;
    Ok(())
}

fn decode_found<K, C>(json: &Value, key: &K, op: AccessOp, options: &AccessOptions<C>) -> Option<K::Value>
where
    K: Key,
    C: Codec,
{
    if json.is_null() {
        return None;
    }
    match key.decode(&options.codec, json) {
        Ok(value) => Some(value),
        Err(source) => {
            report(key, op, source, options);
            None
        }
    }
}

fn report<K: Key, C>(key: &K, op: AccessOp, source: CodecError, options: &AccessOptions<C>) {
    options.on_error.handle(&AccessError {
        op,
        path: key.path().clone(),
        type_name: key.type_name(),
        source,
    });
}
