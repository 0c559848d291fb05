use serde_json::{Map, Value};
use tracing::debug;

use crate::path::{Path, Segment};
use crate::util::parse_index;

/// The sentinel handed out when nothing lives at a path.
pub static NULL: Value = Value::Null;

/// Find the value at `path` under `root`.
///
/// Never fails: an empty path, a missing key, or an out-of-range or
/// non-numeric array index resolves to [`NULL`]. A scalar reached before the
/// path is used up is returned as is.
///
/// # Example
///
/// ```
/// use json_map_path::{find, path};
/// use serde_json::{json, Value};
///
/// let root = json!({"array": ["hello", "world"]});
/// let root = root.as_object().unwrap();
///
/// assert_eq!(find(root, &path!["array", "1"]), &json!("world"));
/// assert_eq!(find(root, &path!["array", "x"]), &Value::Null);
/// assert_eq!(find(root, &path!["array", "0", "deeper"]), &json!("hello"));
/// ```
pub fn find<'a>(root: &'a Map<String, Value>, path: &Path) -> &'a Value {
    get_in(root, path.segments()).unwrap_or(&NULL)
}

/// Mutable counterpart of [`find`].
///
/// Returns `None` wherever [`find`] would return the sentinel because
/// nothing is stored there, and stops at a scalar the same way.
pub fn find_mut<'a>(root: &'a mut Map<String, Value>, path: &Path) -> Option<&'a mut Value> {
    get_mut_in(root, path.segments())
}

pub(crate) fn get_in<'a>(root: &'a Map<String, Value>, path: &[Segment]) -> Option<&'a Value> {
    let (first, rest) = path.split_first()?;
    let mut current = root.get(first)?;
    for path_step in rest {
        current = match current {
            Value::Object(map) => map.get(path_step)?,
            Value::Array(arr) => {
                let Some(idx) = parse_index(path_step) else {
                    debug!(segment = %path_step, "non-numeric segment against an array");
                    return None;
                };
                arr.get(idx)?
            }
            scalar => return Some(scalar),
        };
    }
    Some(current)
}

pub(crate) fn get_mut_in<'a>(
    root: &'a mut Map<String, Value>,
    path: &[Segment],
) -> Option<&'a mut Value> {
    let (first, rest) = path.split_first()?;
    let mut current = root.get_mut(first)?;
    for path_step in rest {
        current = match current {
            Value::Object(map) => map.get_mut(path_step)?,
            Value::Array(arr) => {
                let Some(idx) = parse_index(path_step) else {
                    debug!(segment = %path_step, "non-numeric segment against an array");
                    return None;
                };
                arr.get_mut(idx)?
            }
            _ => break,
        };
    }
    Some(current)
}
