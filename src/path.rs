//! Dotted paths into the tag tree.
//!
//! A path such as `"display.lore.color"` names the compound `display`, inside
//! it the compound `lore`, and inside that the leaf key `color`. The empty
//! path `""` names the root compound itself.
//!
//! Every accessor operation takes an [`AsTagPath`]. Plain strings are split on
//! the fly without allocating; a [`TagPath`] is split once up front and can be
//! reused in hot loops.

use std::{convert::Infallible, fmt, iter::FusedIterator, slice, str::FromStr};

pub const SEPARATOR: char = '.';

/// A path parsed into its parent segments and its leaf key.
///
/// ```
/// use nbt_path::TagPath;
///
/// let path = TagPath::parse("a.b.c");
/// assert_eq!(path.parent(), ["a", "b"]);
/// assert_eq!(path.leaf(), "c");
/// assert_eq!(path.to_string(), "a.b.c");
///
/// let root = TagPath::parse("");
/// assert!(root.is_root());
/// assert_eq!(root.leaf(), "");
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct TagPath {
    parent: Vec<String>,
    leaf: String,
}

impl TagPath {
    pub fn parse(path: &str) -> Self {
        match path.rsplit_once(SEPARATOR) {
            Some((parent, leaf)) => Self {
                parent: parent.split(SEPARATOR).map(str::to_owned).collect(),
                leaf: leaf.to_owned(),
            },
            None => Self {
                parent: Vec::new(),
                leaf: path.to_owned(),
            },
        }
    }

    /// The compound segments leading to the leaf.
    #[inline]
    pub fn parent(&self) -> &[String] {
        &self.parent
    }

    #[inline]
    pub fn leaf(&self) -> &str {
        &self.leaf
    }

    /// `true` for the empty path, which names the root compound.
    #[inline]
    pub fn is_root(&self) -> bool {
        self.parent.is_empty() && self.leaf.is_empty()
    }

    /// All segments, leaf included. Empty for the root path.
    #[inline]
    pub fn segments(&self) -> Segments<'_> {
        if self.is_root() {
            return Segments::Empty;
        }
        Segments::Parsed {
            parent: self.parent.iter(),
            leaf: Some(self.leaf.as_str()),
        }
    }
}

impl fmt::Display for TagPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for segment in &self.parent {
            f.write_str(segment)?;
            write!(f, "{SEPARATOR}")?;
        }
        f.write_str(&self.leaf)
    }
}

impl FromStr for TagPath {
    type Err = Infallible;

    fn from_str(path: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(path))
    }
}

impl From<&str> for TagPath {
    #[inline]
    fn from(path: &str) -> Self {
        Self::parse(path)
    }
}

/// Iterator over path segments.
#[derive(Clone, Debug)]
pub enum Segments<'a> {
    Empty,
    Split(std::str::Split<'a, char>),
    Parsed {
        parent: slice::Iter<'a, String>,
        leaf: Option<&'a str>,
    },
}

impl<'a> Iterator for Segments<'a> {
    type Item = &'a str;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        match self {
            Segments::Empty => None,
            Segments::Split(split) => split.next(),
            Segments::Parsed { parent, leaf } => match parent.next() {
                Some(segment) => Some(segment.as_str()),
                None => leaf.take(),
            },
        }
    }
}

impl FusedIterator for Segments<'_> {}

mod private {
    pub trait Sealed {}
    impl Sealed for str {}
    impl Sealed for String {}
    impl Sealed for super::TagPath {}
    impl<T> Sealed for &T where T: ?Sized + Sealed {}
}

pub trait AsTagPath: private::Sealed {
    /// Every segment, leaf included. Yields nothing for the root path.
    #[doc(hidden)]
    fn segments(&self) -> Segments<'_>;

    /// The compound segments before the leaf, and the leaf key.
    #[doc(hidden)]
    fn split_leaf(&self) -> (Segments<'_>, &str);
}

impl AsTagPath for str {
    #[inline]
    fn segments(&self) -> Segments<'_> {
        if self.is_empty() {
            return Segments::Empty;
        }
        Segments::Split(self.split(SEPARATOR))
    }

    #[inline]
    fn split_leaf(&self) -> (Segments<'_>, &str) {
        match self.rsplit_once(SEPARATOR) {
            Some((parent, leaf)) => (Segments::Split(parent.split(SEPARATOR)), leaf),
            None => (Segments::Empty, self),
        }
    }
}

impl AsTagPath for String {
    #[inline]
    fn segments(&self) -> Segments<'_> {
        self.as_str().segments()
    }

    #[inline]
    fn split_leaf(&self) -> (Segments<'_>, &str) {
        self.as_str().split_leaf()
    }
}

impl AsTagPath for TagPath {
    #[inline]
    fn segments(&self) -> Segments<'_> {
        TagPath::segments(self)
    }

    #[inline]
    fn split_leaf(&self) -> (Segments<'_>, &str) {
        (
            Segments::Parsed {
                parent: self.parent.iter(),
                leaf: None,
            },
            &self.leaf,
        )
    }
}

impl<T: ?Sized + AsTagPath> AsTagPath for &T {
    #[inline]
    fn segments(&self) -> Segments<'_> {
        (**self).segments()
    }

    #[inline]
    fn split_leaf(&self) -> (Segments<'_>, &str) {
        (**self).split_leaf()
    }
}
