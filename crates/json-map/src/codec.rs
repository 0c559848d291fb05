//! Conversion between application values and JSON trees.

use std::fmt;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CodecError {
    #[error(transparent)]
    Json(#[from] serde_json::Error),
    #[error("{0}")]
    Custom(String),
}

impl CodecError {
    pub fn custom(msg: impl fmt::Display) -> Self {
        CodecError::Custom(msg.to_string())
    }
}

/// Encodes values into JSON trees and decodes them back.
///
/// The type being converted is the declared type of the key doing the
/// conversion. An encoding of `Value::Null` means "nothing to store".
pub trait Codec {
    fn encode<T: Serialize + ?Sized>(&self, value: &T) -> Result<Value, CodecError>;

    fn decode<T: DeserializeOwned>(&self, json: &Value) -> Result<T, CodecError>;
}

/// The default codec, backed by `serde_json`.
///
/// # Example
///
/// ```
/// use json_map::{Codec, JsonCodec};
/// use serde_json::json;
///
/// let json = JsonCodec.encode(&vec![1, 2]).unwrap();
/// assert_eq!(json, json!([1, 2]));
///
/// let back: Vec<u8> = JsonCodec.decode(&json).unwrap();
/// assert_eq!(back, [1, 2]);
///
/// assert!(JsonCodec.decode::<u8>(&json!("x")).is_err());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct JsonCodec;

impl Codec for JsonCodec {
    fn encode<T: Serialize + ?Sized>(&self, value: &T) -> Result<Value, CodecError> {
        Ok(serde_json::to_value(value)?)
    }

    fn decode<T: DeserializeOwned>(&self, json: &Value) -> Result<T, CodecError> {
        Ok(T::deserialize(json)?)
    }
}

impl<C: Codec + ?Sized> Codec for &C {
    fn encode<T: Serialize + ?Sized>(&self, value: &T) -> Result<Value, CodecError> {
        (**self).encode(value)
    }

    fn decode<T: DeserializeOwned>(&self, json: &Value) -> Result<T, CodecError> {
        (**self).decode(json)
    }
}
