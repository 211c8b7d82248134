use crate::{
    AsTagPath, Compound, NBT, TagHolder, TagMatch, Value,
    path::Segments,
    tag::{self, Byte, ByteArray, Double, Float, Int, IntArray, Long, LongArray, Short},
};

enum Root<'a> {
    Holder(&'a mut dyn TagHolder),
    Tag(&'a mut Compound),
    Owned(Option<Compound>),
}

/// Typed get/set access to a tag tree, addressed by dotted paths.
///
/// Writes create every missing compound on the way to the leaf. Reads never
/// touch the tree: a missing path, or a leaf stored with another tag, reads as
/// the type's zero value.
///
/// A write that has to pass through a key holding a non-compound value
/// replaces that value with an empty compound, discarding it:
///
/// ```
/// use nbt_path::{TagAccessor, TagID};
///
/// let mut accessor = TagAccessor::new();
/// accessor.set_int("a", 5).set_int("a.b", 7);
/// assert_eq!(accessor.get_int("a"), 0);
/// assert_eq!(accessor.get_int("a.b"), 7);
/// assert!(accessor.has("a", TagID::Compound));
/// ```
///
/// The accessor holds exclusive borrows of whatever it wraps and does no
/// locking of its own.
pub struct TagAccessor<'a> {
    root: Root<'a>,
}

impl TagAccessor<'static> {
    /// An accessor with no tree yet. The first write creates one, owned by
    /// the accessor and handed back by [`into_tag`](Self::into_tag).
    #[inline]
    pub fn new() -> Self {
        Self {
            root: Root::Owned(None),
        }
    }
}

impl Default for TagAccessor<'static> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> TagAccessor<'a> {
    /// Wraps a holder. If the holder has no tree, the first write attaches a
    /// fresh one to it.
    #[inline]
    pub fn of_holder(holder: &'a mut dyn TagHolder) -> Self {
        Self {
            root: Root::Holder(holder),
        }
    }

    #[inline]
    pub fn of_tag(tag: &'a mut Compound) -> Self {
        Self {
            root: Root::Tag(tag),
        }
    }

    /// The root compound, if one exists.
    #[inline]
    pub fn tag(&self) -> Option<&Compound> {
        match &self.root {
            Root::Holder(holder) => holder.tag(),
            Root::Tag(tag) => Some(&**tag),
            Root::Owned(tag) => tag.as_ref(),
        }
    }

    /// The root compound, if one exists. Never creates it.
    #[inline]
    pub fn tag_mut(&mut self) -> Option<&mut Compound> {
        self.root_mut(false)
    }

    /// Hands back a root the accessor created itself. Borrowed roots stay
    /// with their owner, so this is `None` for accessors built with
    /// [`of_holder`](Self::of_holder) or [`of_tag`](Self::of_tag).
    #[inline]
    pub fn into_tag(self) -> Option<Compound> {
        match self.root {
            Root::Owned(tag) => tag,
            Root::Holder(_) | Root::Tag(_) => None,
        }
    }

    fn root_mut(&mut self, create: bool) -> Option<&mut Compound> {
        match &mut self.root {
            Root::Holder(holder) => {
                if holder.tag().is_none() {
                    if !create {
                        return None;
                    }
                    tracing::debug!("attaching new root compound to holder");
                    holder.set_tag(Compound::new());
                }
                holder.tag_mut()
            }
            Root::Tag(tag) => Some(&mut **tag),
            Root::Owned(tag) => {
                if tag.is_none() && !create {
                    return None;
                }
                Some(tag.get_or_insert_with(|| {
                    tracing::debug!("creating owned root compound");
                    Compound::new()
                }))
            }
        }
    }

    fn parent_of<'s, 'p, P: AsTagPath + ?Sized>(
        &'s self,
        path: &'p P,
    ) -> Option<(&'s Compound, &'p str)> {
        let (parent, leaf) = path.split_leaf();
        Some((walk(self.tag()?, parent)?, leaf))
    }

    /// The compound at `path`, following every segment. Never creates.
    ///
    /// The empty path is the root.
    #[inline]
    pub fn compound(&self, path: impl AsTagPath) -> Option<&Compound> {
        walk(self.tag()?, path.segments())
    }

    /// The compound at `path`, following every segment.
    ///
    /// With `create` set, a missing root and missing or non-compound segments
    /// are replaced by empty compounds, so the result is always `Some`.
    /// Without it, the tree is left as is and any gap yields `None`.
    pub fn compound_mut(&mut self, path: impl AsTagPath, create: bool) -> Option<&mut Compound> {
        let root = self.root_mut(create)?;
        walk_mut(root, path.segments(), create)
    }

    /// The value at `path`, whatever its tag.
    #[inline]
    pub fn get(&self, path: impl AsTagPath) -> Option<&Value> {
        let (parent, leaf) = self.parent_of(&path)?;
        parent.get(leaf)
    }

    /// The payload at `path` if it is stored with tag `T`.
    #[inline]
    pub fn get_<T: NBT>(&self, path: impl AsTagPath) -> Option<&T::Type> {
        let (parent, leaf) = self.parent_of(&path)?;
        parent.get_::<T>(leaf)
    }

    /// Stores `value` at `path`, creating the tree and any missing compounds
    /// on the way.
    pub fn set(&mut self, path: impl AsTagPath, value: impl Into<Value>) -> &mut Self {
        let (parent, leaf) = path.split_leaf();
        if let Some(compound) = self
            .root_mut(true)
            .and_then(|root| walk_mut(root, parent, true))
        {
            compound.insert(leaf, value);
        }
        self
    }

    /// Whether `path` holds a value matching `expected`.
    ///
    /// ```
    /// use nbt_path::{TagAccessor, TagID, TagMatch};
    ///
    /// let mut accessor = TagAccessor::new();
    /// accessor.set_double("pos.y", 64.5);
    /// assert!(accessor.has("pos.y", TagID::Double));
    /// assert!(accessor.has("pos.y", TagMatch::AnyNumeric));
    /// assert!(!accessor.has("pos.y", TagID::Float));
    /// assert!(!accessor.has("pos.x", TagMatch::AnyNumeric));
    /// ```
    #[inline]
    pub fn has(&self, path: impl AsTagPath, expected: impl Into<TagMatch>) -> bool {
        self.parent_of(&path)
            .is_some_and(|(parent, leaf)| parent.contains_key_of(leaf, expected))
    }

    /// Deletes the leaf at `path`. Missing paths are ignored and compounds
    /// left empty are kept.
    pub fn remove(&mut self, path: impl AsTagPath) -> &mut Self {
        let (parent, leaf) = path.split_leaf();
        if let Some(compound) = self
            .root_mut(false)
            .and_then(|root| walk_mut(root, parent, false))
        {
            compound.remove(leaf);
        }
        self
    }

    #[inline]
    pub fn set_byte(&mut self, path: impl AsTagPath, value: i8) -> &mut Self {
        self.set(path, value)
    }

    #[inline]
    pub fn get_byte(&self, path: impl AsTagPath) -> i8 {
        self.get_::<Byte>(path).copied().unwrap_or_default()
    }

    #[inline]
    pub fn set_short(&mut self, path: impl AsTagPath, value: i16) -> &mut Self {
        self.set(path, value)
    }

    #[inline]
    pub fn get_short(&self, path: impl AsTagPath) -> i16 {
        self.get_::<Short>(path).copied().unwrap_or_default()
    }

    #[inline]
    pub fn set_int(&mut self, path: impl AsTagPath, value: i32) -> &mut Self {
        self.set(path, value)
    }

    #[inline]
    pub fn get_int(&self, path: impl AsTagPath) -> i32 {
        self.get_::<Int>(path).copied().unwrap_or_default()
    }

    #[inline]
    pub fn set_long(&mut self, path: impl AsTagPath, value: i64) -> &mut Self {
        self.set(path, value)
    }

    #[inline]
    pub fn get_long(&self, path: impl AsTagPath) -> i64 {
        self.get_::<Long>(path).copied().unwrap_or_default()
    }

    #[inline]
    pub fn set_float(&mut self, path: impl AsTagPath, value: f32) -> &mut Self {
        self.set(path, value)
    }

    #[inline]
    pub fn get_float(&self, path: impl AsTagPath) -> f32 {
        self.get_::<Float>(path).copied().unwrap_or_default()
    }

    #[inline]
    pub fn set_double(&mut self, path: impl AsTagPath, value: f64) -> &mut Self {
        self.set(path, value)
    }

    #[inline]
    pub fn get_double(&self, path: impl AsTagPath) -> f64 {
        self.get_::<Double>(path).copied().unwrap_or_default()
    }

    #[inline]
    pub fn set_string(&mut self, path: impl AsTagPath, value: impl Into<String>) -> &mut Self {
        self.set(path, Value::String(value.into()))
    }

    /// The string at `path`, or `""`.
    #[inline]
    pub fn get_string(&self, path: impl AsTagPath) -> &str {
        self.get_::<tag::String>(path).map_or("", String::as_str)
    }

    #[inline]
    pub fn set_byte_array(&mut self, path: impl AsTagPath, value: impl Into<Vec<i8>>) -> &mut Self {
        self.set(path, Value::ByteArray(value.into()))
    }

    #[inline]
    pub fn get_byte_array(&self, path: impl AsTagPath) -> &[i8] {
        self.get_::<ByteArray>(path).map_or(&[][..], Vec::as_slice)
    }

    #[inline]
    pub fn set_int_array(&mut self, path: impl AsTagPath, value: impl Into<Vec<i32>>) -> &mut Self {
        self.set(path, Value::IntArray(value.into()))
    }

    #[inline]
    pub fn get_int_array(&self, path: impl AsTagPath) -> &[i32] {
        self.get_::<IntArray>(path).map_or(&[][..], Vec::as_slice)
    }

    #[inline]
    pub fn set_long_array(&mut self, path: impl AsTagPath, value: impl Into<Vec<i64>>) -> &mut Self {
        self.set(path, Value::LongArray(value.into()))
    }

    #[inline]
    pub fn get_long_array(&self, path: impl AsTagPath) -> &[i64] {
        self.get_::<LongArray>(path).map_or(&[][..], Vec::as_slice)
    }
}

fn walk<'t>(mut node: &'t Compound, segments: Segments<'_>) -> Option<&'t Compound> {
    for segment in segments {
        node = node.get_::<tag::Compound>(segment)?;
    }
    Some(node)
}

fn walk_mut<'t>(
    mut node: &'t mut Compound,
    segments: Segments<'_>,
    create: bool,
) -> Option<&'t mut Compound> {
    for segment in segments {
        node = if create {
            node.compound_entry(segment)?
        } else {
            node.get_mut_::<tag::Compound>(segment)?
        };
    }
    Some(node)
}
