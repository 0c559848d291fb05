//! Immutable segmented paths.

use std::fmt;
use std::str::FromStr;
use std::sync::{Arc, OnceLock};

/// A single step in a [`Path`].
///
/// Either an object key or, when the node being traversed is an array, a
/// base-10 index.
pub type Segment = String;

/// An immutable, ordered sequence of segments addressing a location in a
/// document.
///
/// Cloning is cheap: the segments live in a shared slice that is never
/// mutated after construction. Every constructor that would produce a
/// zero-length path hands out the same canonical empty instance, see
/// [`Path::empty`] and [`Path::ptr_eq`].
///
/// # Example
///
/// ```
/// use json_map_path::Path;
///
/// let path = Path::parse("this.is.a.path");
/// assert_eq!(path.len(), 4);
/// assert_eq!(path.to_string(), "this.is.a.path");
///
/// assert!(Path::ptr_eq(&Path::parse(" "), &Path::empty()));
/// ```
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Path {
    segments: Arc<[Segment]>,
}

fn canonical_empty() -> &'static Path {
    static EMPTY: OnceLock<Path> = OnceLock::new();
    EMPTY.get_or_init(|| Path {
        segments: Arc::from(Vec::<Segment>::new()),
    })
}

impl Path {
    /// The canonical empty path.
    pub fn empty() -> Path {
        canonical_empty().clone()
    }

    /// Build a path from any ordered collection of segments.
    ///
    /// An empty collection yields the canonical empty path.
    pub fn of<I, S>(segments: I) -> Path
    where
        I: IntoIterator<Item = S>,
        S: Into<Segment>,
    {
        let segments: Vec<Segment> = segments.into_iter().map(Into::into).collect();
        if segments.is_empty() {
            return Path::empty();
        }
        Path {
            segments: Arc::from(segments),
        }
    }

    /// Parse a dot-delimited path such as `a.b.2.c`.
    ///
    /// A blank string yields the canonical empty path. Trailing empty
    /// segments are dropped, so `"a.b."` is `["a", "b"]`, while inner empty
    /// segments are kept: `"a..b"` is `["a", "", "b"]`.
    ///
    /// ```
    /// use json_map_path::Path;
    ///
    /// assert_eq!(Path::parse("a.b."), Path::of(["a", "b"]));
    /// assert_eq!(Path::parse("a..b").len(), 3);
    /// assert!(Path::parse("").is_empty());
    /// ```
    pub fn parse(path: &str) -> Path {
        if path.trim().is_empty() {
            return Path::empty();
        }
        let mut segments: Vec<&str> = path.split('.').collect();
        while segments.last().is_some_and(|s| s.is_empty()) {
            segments.pop();
        }
        Path::of(segments)
    }

    /// Returns true if both paths share the same underlying allocation.
    ///
    /// Every empty path produced by this crate is `ptr_eq` to
    /// [`Path::empty`]; no non-empty path ever is.
    pub fn ptr_eq(a: &Path, b: &Path) -> bool {
        Arc::ptr_eq(&a.segments, &b.segments)
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Split into the parent segments and the final segment.
    ///
    /// Returns `None` for the empty path.
    pub fn split_last(&self) -> Option<(&[Segment], &str)> {
        self.segments
            .split_last()
            .map(|(last, parent)| (parent, last.as_str()))
    }

    /// The path without its final segment.
    ///
    /// The parent of a single-segment path (and of the empty path) is the
    /// canonical empty path.
    pub fn parent(&self) -> Path {
        match self.split_last() {
            Some((parent, _)) => Path::of(parent.iter().cloned()),
            None => Path::empty(),
        }
    }

    /// A new path with `segment` appended.
    pub fn child(&self, segment: impl Into<Segment>) -> Path {
        let mut segments = self.segments.to_vec();
        segments.push(segment.into());
        Path::of(segments)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Segment> {
        self.segments.iter()
    }
}

impl Default for Path {
    fn default() -> Self {
        Path::empty()
    }
}

impl fmt::Debug for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Path").field(&&*self.segments).finish()
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.segments.join("."))
    }
}

impl AsRef<[Segment]> for Path {
    fn as_ref(&self) -> &[Segment] {
        &self.segments
    }
}

impl<'a> IntoIterator for &'a Path {
    type Item = &'a Segment;
    type IntoIter = std::slice::Iter<'a, Segment>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<S: Into<Segment>> FromIterator<S> for Path {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Path::of(iter)
    }
}

impl From<Vec<String>> for Path {
    fn from(segments: Vec<String>) -> Self {
        Path::of(segments)
    }
}

impl From<&[String]> for Path {
    fn from(segments: &[String]) -> Self {
        Path::of(segments.iter().cloned())
    }
}

impl From<&str> for Path {
    fn from(path: &str) -> Self {
        Path::parse(path)
    }
}

impl From<&Path> for Path {
    fn from(path: &Path) -> Self {
        path.clone()
    }
}

impl FromStr for Path {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Path::parse(s))
    }
}

/// Build a [`Path`] from discrete segments.
///
/// `path![]` is the canonical empty path.
///
/// ```
/// use json_map_path::{path, Path};
///
/// let p = path!["this", "is", "a", "path"];
/// assert_eq!(p.len(), 4);
/// assert!(Path::ptr_eq(&path![], &Path::empty()));
/// ```
#[macro_export]
macro_rules! path {
    () => {
        $crate::Path::empty()
    };
    ($($segment:expr),+ $(,)?) => {
        $crate::Path::of([$(::std::string::String::from($segment)),+])
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    fn expected() -> Vec<String> {
        ["this", "is", "a", "path"].map(String::from).to_vec()
    }

    #[test]
    fn test_parse_blank_is_canonical_empty() {
        let none = Path::parse(" ");
        assert!(Path::ptr_eq(&none, &Path::empty()));
        assert_eq!(none.len(), 0);
    }

    #[test]
    fn test_parse_dotted() {
        let some = Path::parse("this.is.a.path");
        assert!(!Path::ptr_eq(&some, &Path::empty()));
        assert_eq!(some.segments(), expected().as_slice());
    }

    #[test]
    fn test_parse_only_dots_is_canonical_empty() {
        assert!(Path::ptr_eq(&Path::parse("..."), &Path::empty()));
    }

    #[test]
    fn test_macro_segments() {
        assert!(Path::ptr_eq(&path![], &Path::empty()));
        let some = path!["this", "is", "a", "path"];
        assert!(!Path::ptr_eq(&some, &Path::empty()));
        assert_eq!(some.segments(), expected().as_slice());
    }

    #[test]
    fn test_of_collection() {
        assert!(Path::ptr_eq(&Path::of(Vec::<String>::new()), &Path::empty()));
        let some = Path::of(expected());
        assert!(!Path::ptr_eq(&some, &Path::empty()));
        assert_eq!(some.segments(), expected().as_slice());
    }

    #[test]
    fn test_empty_never_shares_with_non_empty() {
        let a = Path::parse("a");
        let b = a.clone();
        assert!(Path::ptr_eq(&a, &b));
        assert!(!Path::ptr_eq(&a, &Path::parse("a")));
        assert_eq!(a, Path::parse("a"));
    }

    #[test]
    fn test_parent_and_child() {
        let p = Path::parse("a.b.c");
        assert_eq!(p.parent(), Path::parse("a.b"));
        assert!(Path::ptr_eq(&Path::parse("a").parent(), &Path::empty()));
        assert_eq!(p.child("d"), Path::parse("a.b.c.d"));
        assert_eq!(p.split_last(), Some((&p.segments()[..2], "c")));
        assert_eq!(Path::empty().split_last(), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(path!["a", "b", "2", "c"].to_string(), "a.b.2.c");
        assert_eq!(Path::empty().to_string(), "");
    }
}
