use serde_json::{Map, Value};
use tracing::{debug, trace};

use crate::find::get_mut_in;
use crate::path::{Path, Segment};
use crate::util::{empty_object, is_container, parse_index};
use crate::PathError;

/// Store `value` at `path`, returning what was there before.
///
/// When the parent of the final segment already exists as an array or
/// object, its slot is replaced. Otherwise the path is walked from the root,
/// descending into existing children and filling gaps with fresh empty
/// objects. Arrays are never created; an array can only be indexed into if
/// it already exists.
///
/// An empty path, a non-numeric segment used against an existing array, or
/// an existing scalar (including `null`) standing where a container is
/// needed leaves the document untouched and returns `Value::Null`.
///
/// # Errors
///
/// [`PathError::IndexOutOfBounds`] if an existing array is indexed past its
/// end. Arrays are not grown.
///
/// # Example
///
/// ```
/// use json_map_path::{find, insert, path};
/// use serde_json::{json, Map, Value};
///
/// let mut root = Map::new();
/// let previous = insert(&mut root, &path!["a", "b", "2", "c"], json!(true)).unwrap();
/// assert_eq!(previous, Value::Null);
/// assert_eq!(Value::Object(root), json!({"a": {"b": {"2": {"c": true}}}}));
/// ```
pub fn insert(root: &mut Map<String, Value>, path: &Path, value: Value) -> Result<Value, PathError> {
    let Some((parent_path, key)) = path.split_last() else {
        return Ok(Value::Null);
    };
    if parent_path.is_empty() {
        return Ok(root.insert(key.to_owned(), value).unwrap_or(Value::Null));
    }
    if let Some(parent) = get_mut_in(root, parent_path) {
        if is_container(parent) {
            return put(parent, key, value);
        }
    }
    trace!(path = %path, "creating intermediate objects");
    match vivify(root, parent_path)? {
        Some(parent) => put(parent, key, value),
        None => Ok(Value::Null),
    }
}

/// Walk `path` from the root, creating objects where nothing exists yet.
///
/// Returns `None` if the walk meets an existing scalar, or a non-numeric
/// segment meets an existing array. Objects are only created below the last
/// existing node, so returning early never leaves anything behind.
fn vivify<'a>(
    root: &'a mut Map<String, Value>,
    path: &[Segment],
) -> Result<Option<&'a mut Value>, PathError> {
    let Some((first, rest)) = path.split_first() else {
        return Ok(None);
    };
    let mut node = root.entry(first.as_str()).or_insert_with(empty_object);
    for path_step in rest {
        node = match child_or_create(node, path_step)? {
            Some(child) => child,
            None => return Ok(None),
        };
    }
    Ok(Some(node))
}

fn child_or_create<'a>(node: &'a mut Value, segment: &str) -> Result<Option<&'a mut Value>, PathError> {
    match node {
        Value::Object(map) => Ok(Some(map.entry(segment).or_insert_with(|| {
            trace!(segment = %segment, "creating object");
            empty_object()
        }))),
        Value::Array(arr) => {
            let Some(index) = parse_index(segment) else {
                debug!(segment = %segment, "non-numeric segment against an array");
                return Ok(None);
            };
            let len = arr.len();
            arr.get_mut(index)
                .map(Some)
                .ok_or(PathError::IndexOutOfBounds { index, len })
        }
        _ => {
            debug!(segment = %segment, "scalar in the way, nothing inserted");
            Ok(None)
        }
    }
}

/// Set `key` on a container, returning the previous occupant.
fn put(container: &mut Value, key: &str, value: Value) -> Result<Value, PathError> {
    match container {
        Value::Object(map) => Ok(map.insert(key.to_owned(), value).unwrap_or(Value::Null)),
        Value::Array(arr) => {
            let Some(index) = parse_index(key) else {
                debug!(segment = %key, "non-numeric segment against an array");
                return Ok(Value::Null);
            };
            let len = arr.len();
            match arr.get_mut(index) {
                Some(slot) => Ok(std::mem::replace(slot, value)),
                None => Err(PathError::IndexOutOfBounds { index, len }),
            }
        }
        _ => Ok(Value::Null),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{find, path};
    use serde_json::json;

    fn root(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            _ => panic!("fixture must be an object"),
        }
    }

    #[test]
    fn test_insert_empty_path() {
        let mut data = root(json!({"a": 1}));
        assert_eq!(insert(&mut data, &Path::empty(), json!(2)), Ok(Value::Null));
        assert_eq!(Value::Object(data), json!({"a": 1}));
    }

    #[test]
    fn test_insert_top_level_returns_previous() {
        let mut data = Map::new();
        assert_eq!(insert(&mut data, &path!["a"], json!(1)), Ok(Value::Null));
        assert_eq!(insert(&mut data, &path!["a"], json!(2)), Ok(json!(1)));
        assert_eq!(find(&data, &path!["a"]), &json!(2));
    }

    #[test]
    fn test_insert_replace_keeps_key_position() {
        let mut data = root(json!({"o": {"x": 1, "y": 2}}));
        assert_eq!(insert(&mut data, &path!["o", "x"], json!(10)), Ok(json!(1)));
        assert_eq!(Value::Object(data), json!({"o": {"x": 10, "y": 2}}));
    }

    #[test]
    fn test_insert_replace_array_element() {
        let mut data = root(json!({"array": ["hello", "world"]}));
        assert_eq!(
            insert(&mut data, &path!["array", "1"], json!("there")),
            Ok(json!("world"))
        );
        assert_eq!(Value::Object(data), json!({"array": ["hello", "there"]}));
    }

    #[test]
    fn test_insert_array_out_of_bounds() {
        let mut data = root(json!({"array": ["hello"]}));
        assert_eq!(
            insert(&mut data, &path!["array", "1"], json!("world")),
            Err(PathError::IndexOutOfBounds { index: 1, len: 1 })
        );
        assert_eq!(Value::Object(data), json!({"array": ["hello"]}));
    }

    #[test]
    fn test_insert_array_non_numeric() {
        let mut data = root(json!({"array": ["hello"]}));
        assert_eq!(insert(&mut data, &path!["array", "x"], json!(1)), Ok(Value::Null));
        assert_eq!(Value::Object(data), json!({"array": ["hello"]}));
    }

    #[test]
    fn test_insert_vivifies_objects_for_numeric_segments() {
        let mut data = Map::new();
        insert(&mut data, &path!["a", "0", "b"], json!(1)).unwrap();
        assert_eq!(Value::Object(data), json!({"a": {"0": {"b": 1}}}));
    }

    #[test]
    fn test_insert_through_scalar_changes_nothing() {
        let untouched = json!({"a": 5, "b": {"c": "s"}, "n": null});
        let mut data = root(untouched.clone());
        assert_eq!(insert(&mut data, &path!["a", "x"], json!(1)), Ok(Value::Null));
        assert_eq!(insert(&mut data, &path!["b", "c", "d", "e"], json!(2)), Ok(Value::Null));
        assert_eq!(insert(&mut data, &path!["n", "x"], json!(3)), Ok(Value::Null));
        assert_eq!(Value::Object(data), untouched);
    }

    #[test]
    fn test_insert_fills_gaps_beside_existing_data() {
        let mut data = root(json!({"b": {"c": "s"}}));
        insert(&mut data, &path!["b", "d", "e"], json!(2)).unwrap();
        assert_eq!(Value::Object(data), json!({"b": {"c": "s", "d": {"e": 2}}}));
    }

    #[test]
    fn test_insert_vivifies_below_existing_array() {
        let mut data = root(json!({"list": [{"keep": true}, 3]}));
        insert(&mut data, &path!["list", "0", "deep", "leaf"], json!("a")).unwrap();
        assert_eq!(insert(&mut data, &path!["list", "1", "leaf"], json!("b")), Ok(Value::Null));
        assert_eq!(
            Value::Object(data),
            json!({"list": [{"keep": true, "deep": {"leaf": "a"}}, 3]})
        );
    }

    #[test]
    fn test_insert_vivify_past_array_end() {
        let mut data = root(json!({"list": []}));
        assert_eq!(
            insert(&mut data, &path!["list", "0", "leaf"], json!(1)),
            Err(PathError::IndexOutOfBounds { index: 0, len: 0 })
        );
        assert_eq!(Value::Object(data), json!({"list": []}));
    }

    #[test]
    fn test_insert_vivify_non_numeric_against_array() {
        let mut data = root(json!({"list": [1]}));
        assert_eq!(
            insert(&mut data, &path!["list", "x", "leaf"], json!(1)),
            Ok(Value::Null)
        );
        assert_eq!(Value::Object(data), json!({"list": [1]}));
    }
}
