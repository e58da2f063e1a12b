//! Reference name lists (countries, hospitals).
//!
//! Names are normalized to lowercase on insertion. Iteration follows insertion
//! order, which the hospital extractor depends on when several names match.

use std::collections::HashMap;

/// Ordered, case-insensitive list of reference names.
///
/// Each entry may carry aliases (for countries: adjectival forms such as
/// `malaysian`). An alias matches as an exact word and resolves to the
/// canonical name of its entry.
#[derive(Debug, Clone, Default)]
pub struct ReferenceList {
    names: Vec<String>,
    index: HashMap<String, usize>,
}

impl ReferenceList {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a name. Duplicates are kept in iteration order; lookups
    /// resolve to the first occurrence.
    pub fn insert(&mut self, name: &str) {
        self.insert_with_aliases(name, std::iter::empty::<&str>());
    }

    /// Appends a name together with words that should resolve to it.
    pub fn insert_with_aliases<I, S>(&mut self, name: &str, aliases: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let position = self.names.len();
        let name = normalize(name);
        self.index.entry(name.clone()).or_insert(position);
        for alias in aliases {
            let alias = normalize(alias.as_ref());
            if !alias.is_empty() {
                self.index.entry(alias).or_insert(position);
            }
        }
        self.names.push(name);
    }

    /// Exact, case-insensitive membership test over names and aliases.
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.resolve(word).is_some()
    }

    /// Canonical (lowercase) name that `word` denotes, if any.
    #[must_use]
    pub fn resolve(&self, word: &str) -> Option<&str> {
        let position = self
            .index
            .get(word)
            .or_else(|| self.index.get(&normalize(word)))?;
        self.names.get(*position).map(String::as_str)
    }

    /// Names in insertion order.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl<S: AsRef<str>> FromIterator<S> for ReferenceList {
    fn from_iter<T: IntoIterator<Item = S>>(iter: T) -> Self {
        let mut list = Self::new();
        for name in iter {
            list.insert(name.as_ref());
        }
        list
    }
}

fn normalize(name: &str) -> String {
    name.trim().to_lowercase()
}

/// The two read-only lists shared by every narrative of a run.
#[derive(Debug, Clone, Default)]
pub struct Lookups {
    pub countries: ReferenceList,
    pub hospitals: ReferenceList,
}

impl Lookups {
    #[must_use]
    pub const fn new(countries: ReferenceList, hospitals: ReferenceList) -> Self {
        Self {
            countries,
            hospitals,
        }
    }
}
