use serde_json::{Map, Value};
use tracing::debug;

use crate::find::get_mut_in;
use crate::path::Path;
use crate::util::parse_index;
use crate::PathError;

/// Remove the value at `path`, returning what was stored there.
///
/// Returns `Value::Null` without touching the document when the path is
/// empty, the parent is missing or not a container, or a non-numeric
/// segment is used against an array. Object keys are removed in place, so
/// the remaining keys keep their order; array elements after the removed
/// one shift down.
///
/// # Errors
///
/// [`PathError::IndexOutOfBounds`] if the parent is an array and the index
/// is past its end.
///
/// # Example
///
/// ```
/// use json_map_path::{path, remove};
/// use serde_json::{json, Value};
///
/// let mut doc = json!({"a": {"b": 1, "c": 2}});
/// let root = doc.as_object_mut().unwrap();
///
/// assert_eq!(remove(root, &path!["a", "b"]).unwrap(), json!(1));
/// assert_eq!(remove(root, &path!["a", "b"]).unwrap(), Value::Null);
/// assert_eq!(doc, json!({"a": {"c": 2}}));
/// ```
pub fn remove(root: &mut Map<String, Value>, path: &Path) -> Result<Value, PathError> {
    let Some((parent_path, key)) = path.split_last() else {
        return Ok(Value::Null);
    };
    if parent_path.is_empty() {
        return Ok(root.shift_remove(key).unwrap_or(Value::Null));
    }
    let Some(parent) = get_mut_in(root, parent_path) else {
        return Ok(Value::Null);
    };
    match parent {
        Value::Object(map) => Ok(map.shift_remove(key).unwrap_or(Value::Null)),
        Value::Array(arr) => {
            let Some(index) = parse_index(key) else {
                debug!(segment = %key, "non-numeric segment against an array");
                return Ok(Value::Null);
            };
            if index >= arr.len() {
                return Err(PathError::IndexOutOfBounds {
                    index,
                    len: arr.len(),
                });
            }
            Ok(arr.remove(index))
        }
        _ => Ok(Value::Null),
    }
}
