use json_map_path::{Path, PathError};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::access;
use crate::codec::{Codec, JsonCodec};
use crate::key::{Key, TypedKey};
use crate::options::AccessOptions;

/// A mapping from top-level keys to JSON trees, addressable by [`Path`].
///
/// Raw access goes through [`find`](Document::find),
/// [`insert_path`](Document::insert_path) and
/// [`remove_path`](Document::remove_path). Typed access goes through keys:
/// [`select`](Document::select), [`insert`](Document::insert) and
/// [`remove`](Document::remove), each with a `_with` variant taking
/// explicit [`AccessOptions`].
///
/// A `Document` serializes as a plain JSON object.
///
/// # Example
///
/// ```
/// use json_map::{path, Document, TypedKey};
/// use serde_json::json;
///
/// let mut doc = Document::new();
/// doc.insert_path(&path!["player", "name"], json!("ada")).unwrap();
///
/// let level = TypedKey::<u32>::new("player.level");
/// doc.insert(&level, &7).unwrap();
///
/// assert_eq!(doc.select(&level), Some(7));
/// assert_eq!(
///     serde_json::to_value(&doc).unwrap(),
///     json!({"player": {"name": "ada", "level": 7}})
/// );
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Document {
    data: Map<String, Value>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_map(data: Map<String, Value>) -> Self {
        Self { data }
    }

    /// The root mapping.
    pub fn data(&self) -> &Map<String, Value> {
        &self.data
    }

    pub fn data_mut(&mut self) -> &mut Map<String, Value> {
        &mut self.data
    }

    pub fn into_inner(self) -> Map<String, Value> {
        self.data
    }

    /// The value at `path`, or `Value::Null` if there is none.
    pub fn find(&self, path: &Path) -> &Value {
        json_map_path::find(&self.data, path)
    }

    /// Store `value` at `path`, creating intermediate objects as needed.
    ///
    /// See [`json_map_path::insert`].
    pub fn insert_path(&mut self, path: &Path, value: Value) -> Result<Value, PathError> {
        json_map_path::insert(&mut self.data, path, value)
    }

    /// See [`json_map_path::remove`].
    pub fn remove_path(&mut self, path: &Path) -> Result<Value, PathError> {
        json_map_path::remove(&mut self.data, path)
    }

    pub fn select<K: Key>(&self, key: &K) -> Option<K::Value> {
        self.select_with(key, &AccessOptions::<JsonCodec>::default())
    }

    pub fn select_with<K: Key, C: Codec>(&self, key: &K, options: &AccessOptions<C>) -> Option<K::Value> {
        access::extract(&self.data, key, options)
    }

    pub fn remove<K: Key>(&mut self, key: &K) -> Result<Option<K::Value>, PathError> {
        self.remove_with(key, &AccessOptions::<JsonCodec>::default())
    }

    pub fn remove_with<K: Key, C: Codec>(
        &mut self,
        key: &K,
        options: &AccessOptions<C>,
    ) -> Result<Option<K::Value>, PathError> {
        access::remove(&mut self.data, key, options)
    }

    pub fn insert<K: Key>(&mut self, key: &K, value: &K::Value) -> Result<(), PathError> {
        self.insert_with(key, value, &AccessOptions::<JsonCodec>::default())
    }

    pub fn insert_with<K: Key, C: Codec>(
        &mut self,
        key: &K,
        value: &K::Value,
        options: &AccessOptions<C>,
    ) -> Result<(), PathError> {
        access::insert(&mut self.data, key, value, options)
    }

    /// Decode the value at `path` as `T` with the default options.
    ///
    /// ```
    /// use json_map::Document;
    /// use serde_json::json;
    ///
    /// let doc: Document = serde_json::from_value(json!({"array": ["hello", "world"]})).unwrap();
    /// assert_eq!(doc.select_as::<String>("array.1"), Some("world".to_string()));
    /// assert_eq!(doc.select_as::<Vec<String>>("array").map(|v| v.len()), Some(2));
    /// ```
    pub fn select_as<T>(&self, path: impl Into<Path>) -> Option<T>
    where
        T: Serialize + DeserializeOwned,
    {
        self.select(&TypedKey::<T>::new(path))
    }

    pub fn remove_as<T>(&mut self, path: impl Into<Path>) -> Result<Option<T>, PathError>
    where
        T: Serialize + DeserializeOwned,
    {
        self.remove(&TypedKey::<T>::new(path))
    }

    pub fn insert_as<T>(&mut self, path: impl Into<Path>, value: &T) -> Result<(), PathError>
    where
        T: Serialize + DeserializeOwned,
    {
        self.insert(&TypedKey::<T>::new(path), value)
    }
}

impl From<Map<String, Value>> for Document {
    fn from(data: Map<String, Value>) -> Self {
        Self::from_map(data)
    }
}

impl From<Document> for Map<String, Value> {
    fn from(doc: Document) -> Self {
        doc.into_inner()
    }
}
