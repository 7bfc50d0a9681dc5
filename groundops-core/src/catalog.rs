use serde::{Serialize, Serializer};
use std::fmt;
use std::sync::Arc;

use crate::{CoreError, CoreResult};

/// A record that can be addressed by an identifier within its catalog.
pub trait Keyed {
    type Key: PartialEq + fmt::Display + ?Sized;

    fn key(&self) -> &Self::Key;
}

/// Ordered, read-mostly collection of one entity type.
///
/// Entries are never mutated in place. Every update returns a new catalog
/// and leaves the receiver untouched, so any view holding the previous
/// catalog keeps seeing a consistent snapshot.
#[derive(Debug, PartialEq)]
pub struct Catalog<T> {
    entries: Arc<[T]>,
}

impl<T> Catalog<T> {
    pub fn empty() -> Self {
        Self {
            entries: Arc::from(Vec::new()),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.entries.iter()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.entries
    }
}

impl<T: Keyed> Catalog<T> {
    /// Look up an entry by key
    pub fn get(&self, key: &T::Key) -> Option<&T> {
        self.entries.iter().find(|entry| entry.key() == key)
    }

    pub fn contains(&self, key: &T::Key) -> bool {
        self.get(key).is_some()
    }
}

impl<T: Keyed + Clone> Catalog<T> {
    /// New catalog with `entry` appended at the end of display order.
    pub fn appended(&self, entry: T) -> CoreResult<Self> {
        if self.contains(entry.key()) {
            return Err(CoreError::DuplicateKey(entry.key().to_string()));
        }

        let mut entries = self.entries.to_vec();
        entries.push(entry);
        Ok(Self::from(entries))
    }

    /// New catalog with the entry under `key` swapped for `entry`, keeping its position.
    pub fn replaced(&self, key: &T::Key, entry: T) -> CoreResult<Self> {
        let position = self.entries.iter()
            .position(|existing| existing.key() == key)
            .ok_or_else(|| CoreError::NotFound(key.to_string()))?;

        let mut entries = self.entries.to_vec();
        entries[position] = entry;
        Ok(Self::from(entries))
    }
}

impl<T> Clone for Catalog<T> {
    fn clone(&self) -> Self {
        Self {
            entries: Arc::clone(&self.entries),
        }
    }
}

impl<T> Default for Catalog<T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T> From<Vec<T>> for Catalog<T> {
    fn from(entries: Vec<T>) -> Self {
        Self {
            entries: Arc::from(entries),
        }
    }
}

impl<T> FromIterator<T> for Catalog<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from(iter.into_iter().collect::<Vec<_>>())
    }
}

impl<'a, T> IntoIterator for &'a Catalog<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl<T: Serialize> Serialize for Catalog<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_seq(self.entries.iter())
    }
}
