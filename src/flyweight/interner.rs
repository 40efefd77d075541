//! Bidirectional string interning.
//!
//! Each distinct string is stored once as an `Rc<str>` that both directions
//! of the mapping share: the hash map for `value -> key` and the vector for
//! `key -> value`.

use crate::error::{PatternError, Result};
use rustc_hash::FxHashMap;
use std::fmt;
use std::num::NonZeroU32;
use std::rc::Rc;

/// Handle for an interned string. Keys are issued sequentially from 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Key(NonZeroU32);

impl Key {
    pub fn get(self) -> u32 {
        self.0.get()
    }

    fn index(self) -> usize {
        (self.0.get() - 1) as usize
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Key for the entry stored after `issued` others.
fn next_key(issued: usize) -> Option<Key> {
    issued
        .checked_add(1)
        .and_then(|next| u32::try_from(next).ok())
        .and_then(NonZeroU32::new)
        .map(Key)
}

#[derive(Debug, Default)]
pub struct Interner {
    keys: FxHashMap<Rc<str>, Key>,
    values: Vec<Rc<str>>,
}

impl Interner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the key for `value`, inserting it with the next sequential key
    /// if it has not been seen before.
    ///
    /// # Panics
    ///
    /// Panics once every `u32` key has been issued. Use
    /// [`Interner::try_intern`] to get an error instead.
    pub fn intern(&mut self, value: &str) -> Key {
        match self.try_intern(value) {
            Ok(key) => key,
            Err(err) => panic!("cannot intern {value:?}: {err}"),
        }
    }

    /// Like [`Interner::intern`], but fails with
    /// [`PatternError::KeySpaceExhausted`] when no key is left.
    pub fn try_intern(&mut self, value: &str) -> Result<Key> {
        if let Some(&key) = self.keys.get(value) {
            return Ok(key);
        }

        let key = next_key(self.values.len()).ok_or(PatternError::KeySpaceExhausted)?;
        let shared: Rc<str> = Rc::from(value);
        self.values.push(Rc::clone(&shared));
        self.keys.insert(shared, key);
        tracing::debug!(%key, value, "interned new string");
        Ok(key)
    }

    pub fn resolve(&self, key: Key) -> Option<&str> {
        self.values.get(key.index()).map(|value| &**value)
    }

    /// Looks up `value` without inserting it.
    pub fn get(&self, value: &str) -> Option<Key> {
        self.keys.get(value).copied()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterates over `(key, value)` pairs in issue order.
    pub fn iter(&self) -> impl Iterator<Item = (Key, &str)> + '_ {
        self.values.iter().zip(1u32..).filter_map(|(value, raw)| {
            NonZeroU32::new(raw).map(|raw| (Key(raw), &**value))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keys_are_sequential_from_one() {
        let mut names = Interner::new();
        assert_eq!(names.intern("John").get(), 1);
        assert_eq!(names.intern("Smith").get(), 2);
        assert_eq!(names.intern("Jane").get(), 3);
    }

    #[test]
    fn test_repeated_value_returns_existing_key() {
        let mut names = Interner::new();
        let first = names.intern("Smith");
        names.intern("Doe");
        let again = names.intern("Smith");

        assert_eq!(first, again);
        assert_eq!(names.len(), 2);
    }

    #[test]
    fn test_resolve_round_trips_issued_keys() {
        let mut names = Interner::new();
        let john = names.intern("John");
        let cunk = names.intern("Wilhelmina");

        assert_eq!(names.resolve(john), Some("John"));
        assert_eq!(names.resolve(cunk), Some("Wilhelmina"));
    }

    #[test]
    fn test_resolve_unissued_key_is_none() {
        let mut other = Interner::new();
        other.intern("a");
        let foreign = other.intern("b");

        let names = Interner::new();
        assert_eq!(names.resolve(foreign), None);
    }

    #[test]
    fn test_get_does_not_insert() {
        let mut names = Interner::new();
        assert_eq!(names.get("ghost"), None);
        assert!(names.is_empty());

        let key = names.intern("ghost");
        assert_eq!(names.get("ghost"), Some(key));
    }

    #[test]
    fn test_mapping_stays_a_bijection() {
        let mut names = Interner::new();
        let input = ["John", "Smith", "Jane", "Smith", "Jane", "Doe", "Smith", "Smith", "Cunk"];
        for value in input {
            names.intern(value);
        }

        assert_eq!(names.len(), 5);
        for (key, value) in names.iter() {
            assert_eq!(names.get(value), Some(key));
            assert_eq!(names.resolve(key), Some(value));
        }
    }

    #[test]
    fn test_storage_is_shared_between_directions() {
        let mut names = Interner::new();
        let key = names.intern("shared");
        let stored = &names.values[key.index()];
        // One reference from the vector, one from the map.
        assert_eq!(Rc::strong_count(stored), 2);
    }

    #[test]
    fn test_key_space_ends_at_u32_max() {
        assert_eq!(next_key(0).map(Key::get), Some(1));
        let last = u32::MAX as usize - 1;
        assert_eq!(next_key(last).map(Key::get), Some(u32::MAX));
        assert_eq!(next_key(last + 1), None);
        assert_eq!(next_key(usize::MAX), None);
    }

    #[test]
    fn test_try_intern_matches_intern() {
        let mut names = Interner::new();
        let key = names.try_intern("John").unwrap();
        assert_eq!(names.intern("John"), key);
        assert_eq!(names.try_intern("Smith").unwrap().get(), 2);
    }

    #[test]
    fn test_empty_string_is_a_value_like_any_other() {
        let mut names = Interner::new();
        let key = names.intern("");
        assert_eq!(names.resolve(key), Some(""));
        assert_eq!(names.intern(""), key);
    }
}
