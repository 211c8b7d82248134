use std::collections::{HashMap, hash_map};

use crate::{NBT, TagID, TagMatch, Value, cold_path, tag};

/// A compound node: string keys mapped to child values.
///
/// Keys are unique and iteration order is unspecified.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Compound {
    entries: HashMap<String, Value>,
}

impl Compound {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[inline]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.get(key)
    }

    /// Returns the payload under `key` if it is stored with tag `T`.
    ///
    /// A value of any other tag is reported exactly like a missing key.
    ///
    /// ```
    /// use nbt_path::{Compound, tag::{Int, String}};
    ///
    /// let mut compound = Compound::new();
    /// compound.insert("x", 7i32);
    /// assert_eq!(compound.get_::<Int>("x"), Some(&7));
    /// assert_eq!(compound.get_::<String>("x"), None);
    /// ```
    #[inline]
    pub fn get_<T: NBT>(&self, key: &str) -> Option<&T::Type> {
        let value = self.entries.get(key)?;
        if !value.is_::<T>() {
            cold_path();
            return None;
        }
        T::ref_(value)
    }

    #[inline]
    pub fn get_mut(&mut self, key: &str) -> Option<&mut Value> {
        self.entries.get_mut(key)
    }

    #[inline]
    pub fn get_mut_<T: NBT>(&mut self, key: &str) -> Option<&mut T::Type> {
        T::mut_(self.entries.get_mut(key)?)
    }

    #[inline]
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Presence test with a tag check.
    ///
    /// ```
    /// use nbt_path::{Compound, TagID, TagMatch};
    ///
    /// let mut compound = Compound::new();
    /// compound.insert("hp", 20i16);
    /// assert!(compound.contains_key_of("hp", TagID::Short));
    /// assert!(!compound.contains_key_of("hp", TagID::Int));
    /// assert!(compound.contains_key_of("hp", TagMatch::AnyNumeric));
    /// ```
    #[inline]
    pub fn contains_key_of(&self, key: &str, expected: impl Into<TagMatch>) -> bool {
        let expected = expected.into();
        self.entries
            .get(key)
            .is_some_and(|value| expected.matches(value.tag_id()))
    }

    /// Stores `value` under `key`, returning whatever was there before.
    #[inline]
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.entries.insert(key.into(), value.into())
    }

    #[inline]
    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.entries.remove(key)
    }

    #[inline]
    pub fn iter(&self) -> hash_map::Iter<'_, String, Value> {
        self.entries.iter()
    }

    #[inline]
    pub fn iter_mut(&mut self) -> hash_map::IterMut<'_, String, Value> {
        self.entries.iter_mut()
    }

    #[inline]
    pub fn keys(&self) -> hash_map::Keys<'_, String, Value> {
        self.entries.keys()
    }

    /// Returns the child compound under `key`, first replacing any
    /// non-compound value (or absence) with an empty compound.
    ///
    /// The replaced value is dropped. Always `Some`.
    pub(crate) fn compound_entry(&mut self, key: &str) -> Option<&mut Compound> {
        if !self.contains_key_of(key, TagID::Compound) {
            match self.insert(key, Compound::new()) {
                Some(overwritten) => {
                    cold_path();
                    tracing::debug!(
                        key,
                        overwritten = ?overwritten.tag_id(),
                        "replaced non-compound value on write path"
                    );
                }
                None => tracing::trace!(key, "created intermediate compound"),
            }
        }
        self.get_mut_::<tag::Compound>(key)
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Compound {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        }
    }
}

impl<K: Into<String>, V: Into<Value>> Extend<(K, V)> for Compound {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        self.entries.extend(
            iter.into_iter()
                .map(|(key, value)| (key.into(), value.into())),
        );
    }
}

impl IntoIterator for Compound {
    type Item = (String, Value);
    type IntoIter = hash_map::IntoIter<String, Value>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a> IntoIterator for &'a Compound {
    type Item = (&'a String, &'a Value);
    type IntoIter = hash_map::Iter<'a, String, Value>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
