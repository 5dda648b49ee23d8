//! Category keys and category-keyed maps
//!
//! Categories are free-form strings supplied by upstream data. Stray leading or
//! trailing whitespace is common there, so every key is trimmed on the way in.
//! `CategoryMap` only accepts `CategoryKey`s, which makes it impossible to
//! insert or look up an untrimmed key.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// A trimmed, case-sensitive category identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct CategoryKey(String);

impl CategoryKey {
    pub fn new(raw: &str) -> Self {
        Self(raw.trim().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True for transactions that carry no category at all
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<String> for CategoryKey {
    fn from(raw: String) -> Self {
        if raw.trim().len() == raw.len() {
            Self(raw)
        } else {
            Self::new(&raw)
        }
    }
}

impl From<&str> for CategoryKey {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

impl From<CategoryKey> for String {
    fn from(key: CategoryKey) -> Self {
        key.0
    }
}

impl fmt::Display for CategoryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Insertion-ordered map keyed by normalized category
#[derive(Debug, Clone)]
pub struct CategoryMap<V> {
    index: HashMap<CategoryKey, usize>,
    entries: Vec<(CategoryKey, V)>,
}

impl<V> Default for CategoryMap<V> {
    fn default() -> Self {
        Self {
            index: HashMap::new(),
            entries: Vec::new(),
        }
    }
}

impl<V> CategoryMap<V> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the entry for `key`, appending a new one built by `default` if the
    /// key has not been seen yet. Existing keys keep their original position.
    pub fn entry_or_insert_with(&mut self, key: CategoryKey, default: impl FnOnce() -> V) -> &mut V {
        let position = match self.index.get(&key) {
            Some(&i) => i,
            None => {
                let i = self.entries.len();
                self.index.insert(key.clone(), i);
                self.entries.push((key, default()));
                i
            }
        };
        &mut self.entries[position].1
    }
}

impl<V> IntoIterator for CategoryMap<V> {
    type Item = (CategoryKey, V);
    type IntoIter = std::vec::IntoIter<(CategoryKey, V)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}
