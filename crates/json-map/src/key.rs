//! Typed handles to a location in a document.
//!
//! A [`TypedKey`] knows its path and its declared type and leaves the
//! conversion to whatever [`Codec`] the caller configured. A [`DirectKey`]
//! carries its own encode/decode pair and never touches the codec.

use std::any::type_name;
use std::fmt;
use std::marker::PhantomData;
use std::sync::Arc;

use json_map_path::Path;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::codec::{Codec, CodecError};

/// A path plus the knowledge of how to move between JSON and `Self::Value`.
pub trait Key {
    type Value;

    fn path(&self) -> &Path;

    /// Name of the declared type, for diagnostics.
    fn type_name(&self) -> &'static str {
        type_name::<Self::Value>()
    }

    fn encode<C: Codec>(&self, codec: &C, value: &Self::Value) -> Result<Value, CodecError>;

    fn decode<C: Codec>(&self, codec: &C, json: &Value) -> Result<Self::Value, CodecError>;
}

impl<K: Key + ?Sized> Key for &K {
    type Value = K::Value;

    fn path(&self) -> &Path {
        (**self).path()
    }

    fn type_name(&self) -> &'static str {
        (**self).type_name()
    }

    fn encode<C: Codec>(&self, codec: &C, value: &Self::Value) -> Result<Value, CodecError> {
        (**self).encode(codec, value)
    }

    fn decode<C: Codec>(&self, codec: &C, json: &Value) -> Result<Self::Value, CodecError> {
        (**self).decode(codec, json)
    }
}

/// A key converted through the configured codec.
///
/// # Example
///
/// ```
/// use json_map::{Document, TypedKey};
///
/// let port = TypedKey::<u16>::new("server.port");
///
/// let mut doc = Document::new();
/// doc.insert(&port, &8080).unwrap();
/// assert_eq!(doc.select(&port), Some(8080));
/// ```
pub struct TypedKey<T> {
    path: Path,
    _type: PhantomData<fn() -> T>,
}

impl<T> TypedKey<T> {
    pub fn new(path: impl Into<Path>) -> Self {
        Self {
            path: path.into(),
            _type: PhantomData,
        }
    }
}

impl<T> Clone for TypedKey<T> {
    fn clone(&self) -> Self {
        Self::new(self.path.clone())
    }
}

impl<T> fmt::Debug for TypedKey<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TypedKey")
            .field("path", &self.path)
            .field("type", &type_name::<T>())
            .finish()
    }
}

impl<T: Serialize + DeserializeOwned> Key for TypedKey<T> {
    type Value = T;

    fn path(&self) -> &Path {
        &self.path
    }

    fn encode<C: Codec>(&self, codec: &C, value: &T) -> Result<Value, CodecError> {
        codec.encode(value)
    }

    fn decode<C: Codec>(&self, codec: &C, json: &Value) -> Result<T, CodecError> {
        codec.decode(json)
    }
}

type EncodeFn<T> = dyn Fn(&T) -> Result<Value, CodecError> + Send + Sync;
type DecodeFn<T> = dyn Fn(&Value) -> Result<T, CodecError> + Send + Sync;

/// A key with its own encode/decode pair.
///
/// `T` needs no serde implementation; whatever codec the caller configured
/// is ignored.
///
/// # Example
///
/// ```
/// use json_map::{CodecError, Document, DirectKey};
/// use serde_json::{json, Value};
/// use std::time::Duration;
///
/// let timeout = DirectKey::new(
///     "net.timeout_ms",
///     |d: &Duration| Ok(json!(d.as_millis() as u64)),
///     |json: &Value| {
///         json.as_u64()
///             .map(Duration::from_millis)
///             .ok_or_else(|| CodecError::custom("expected milliseconds"))
///     },
/// );
///
/// let mut doc = Document::new();
/// doc.insert(&timeout, &Duration::from_secs(2)).unwrap();
/// assert_eq!(doc.find(timeout.path()), &json!(2000));
/// assert_eq!(doc.select(&timeout), Some(Duration::from_secs(2)));
/// ```
pub struct DirectKey<T> {
    path: Path,
    encode: Arc<EncodeFn<T>>,
    decode: Arc<DecodeFn<T>>,
}

impl<T> DirectKey<T> {
    pub fn new<E, D>(path: impl Into<Path>, encode: E, decode: D) -> Self
    where
        E: Fn(&T) -> Result<Value, CodecError> + Send + Sync + 'static,
        D: Fn(&Value) -> Result<T, CodecError> + Send + Sync + 'static,
    {
        Self {
            path: path.into(),
            encode: Arc::new(encode),
            decode: Arc::new(decode),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl<T> Clone for DirectKey<T> {
    fn clone(&self) -> Self {
        Self {
            path: self.path.clone(),
            encode: Arc::clone(&self.encode),
            decode: Arc::clone(&self.decode),
        }
    }
}

impl<T> fmt::Debug for DirectKey<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DirectKey")
            .field("path", &self.path)
            .field("type", &type_name::<T>())
            .finish_non_exhaustive()
    }
}

impl<T> Key for DirectKey<T> {
    type Value = T;

    fn path(&self) -> &Path {
        &self.path
    }

    fn encode<C: Codec>(&self, _codec: &C, value: &T) -> Result<Value, CodecError> {
        (self.encode)(value)
    }

    fn decode<C: Codec>(&self, _codec: &C, json: &Value) -> Result<T, CodecError> {
        (self.decode)(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::JsonCodec;
    use serde_json::json;

    /// A codec that refuses everything, to prove direct keys never reach it.
    struct Refuse;

    impl Codec for Refuse {
        fn encode<T: Serialize + ?Sized>(&self, _value: &T) -> Result<Value, CodecError> {
            Err(CodecError::custom("refused"))
        }

        fn decode<T: DeserializeOwned>(&self, _json: &Value) -> Result<T, CodecError> {
            Err(CodecError::custom("refused"))
        }
    }

    fn upper() -> DirectKey<String> {
        DirectKey::new(
            "name",
            |s: &String| Ok(Value::String(s.to_uppercase())),
            |json: &Value| {
                json.as_str()
                    .map(str::to_lowercase)
                    .ok_or_else(|| CodecError::custom("not a string"))
            },
        )
    }

    #[test]
    fn test_typed_key_uses_codec() {
        let key = TypedKey::<Vec<u8>>::new("a.b");
        assert_eq!(key.encode(&JsonCodec, &vec![1, 2]).unwrap(), json!([1, 2]));
        assert!(key.encode(&Refuse, &vec![1]).is_err());
        assert_eq!(key.path(), &Path::parse("a.b"));
        assert_eq!(Key::type_name(&key), type_name::<Vec<u8>>());
    }

    #[test]
    fn test_direct_key_bypasses_codec() {
        let key = upper();
        assert_eq!(key.encode(&Refuse, &"ada".to_string()).unwrap(), json!("ADA"));
        assert_eq!(key.decode(&Refuse, &json!("ADA")).unwrap(), "ada");
        assert!(key.decode(&Refuse, &json!(1)).is_err());
    }

    #[test]
    fn test_key_through_reference() {
        let key = upper();
        let by_ref = &key;
        assert_eq!(Key::path(&by_ref), key.path());
        assert_eq!(by_ref.decode(&JsonCodec, &json!("X")).unwrap(), "x");
    }

    #[test]
    fn test_debug_names_the_type() {
        let key = TypedKey::<u32>::new("n");
        assert!(format!("{key:?}").contains("u32"));
        assert!(format!("{:?}", upper()).contains("String"));
    }
}
