//! A path-addressable store of JSON trees with typed access.
//!
//! A [`Document`] maps top-level keys to `serde_json::Value` trees. Values
//! anywhere inside are addressed by a [`Path`] such as `a.b.2.c`: object
//! keys, or indexes into arrays that already exist. Writes create missing
//! intermediate objects.
//!
//! On top of the raw tree sit typed [keys](Key):
//!
//! - [`TypedKey<T>`] converts through a [`Codec`], by default [`JsonCodec`]
//!   (serde).
//! - [`DirectKey<T>`] carries its own encode/decode functions.
//!
//! Typed access never surfaces codec failures. They go to the
//! [`ErrorHandler`] configured in [`AccessOptions`] and the operation
//! yields `None` or stores nothing. Only [`PathError`] (an array index past
//! the end during removal or replacement) is returned to the caller.
//!
//! # Example
//!
//! ```
//! use json_map::{AccessOptions, Document, ErrorHandler, TypedKey};
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Debug, PartialEq, Serialize, Deserialize)]
//! struct Spawn {
//!     x: i32,
//!     y: i32,
//! }
//!
//! let spawn = TypedKey::<Spawn>::new("world.spawn");
//!
//! let mut doc = Document::new();
//! doc.insert(&spawn, &Spawn { x: 1, y: -4 }).unwrap();
//! assert_eq!(doc.select(&spawn), Some(Spawn { x: 1, y: -4 }));
//!
//! // The stored shape does not decode as a number: no value, no panic.
//! let quiet: AccessOptions = AccessOptions::default().with_handler(ErrorHandler::Ignore);
//! assert_eq!(doc.select_with(&TypedKey::<u64>::new("world.spawn"), &quiet), None);
//! ```

pub mod access;
pub mod codec;
mod document;
pub mod key;
pub mod options;

pub use access::extract;
pub use codec::{Codec, CodecError, JsonCodec};
pub use document::Document;
pub use key::{DirectKey, Key, TypedKey};
pub use options::{AccessError, AccessOp, AccessOptions, ErrorHandler};

pub use json_map_path::{path, Path, PathError, Segment};
