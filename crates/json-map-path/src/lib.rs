//! Path navigation and mutation over a map of JSON trees.
//!
//! A [`Path`] is an immutable sequence of string segments such as `a.b.2.c`.
//! Segments are object keys, or base-10 indexes when the node being
//! traversed is an array. The engine works on a root
//! `serde_json::Map<String, Value>`:
//!
//! - [`find`] never fails and resolves anything it cannot reach to
//!   `Value::Null`.
//! - [`insert`] creates missing intermediate objects on the way down.
//! - [`remove`] takes a value out and hands it back.
//!
//! # Example
//!
//! ```
//! use json_map_path::{find, insert, remove, Path};
//! use serde_json::{json, Map, Value};
//!
//! let mut root = Map::new();
//! let path = Path::parse("user.name");
//!
//! insert(&mut root, &path, json!("ada")).unwrap();
//! assert_eq!(find(&root, &path), &json!("ada"));
//!
//! assert_eq!(remove(&mut root, &path).unwrap(), json!("ada"));
//! assert_eq!(find(&root, &path), &Value::Null);
//! ```

use thiserror::Error;

mod find;
mod insert;
pub mod path;
mod remove;
mod util;

pub use find::{find, find_mut, NULL};
pub use insert::insert;
pub use path::{Path, Segment};
pub use remove::remove;
pub use util::{is_container, is_integer, parse_index};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PathError {
    /// An existing array was indexed past its end while removing or
    /// replacing an element.
    #[error("index {index} out of bounds for array of length {len}")]
    IndexOutOfBounds { index: usize, len: usize },
}
