use std::fmt::Debug;

use tracing::debug;

/// An insertion-ordered pool of distinct literal values.
///
/// Indices are 1-based and permanent: the first value registered gets 1, the
/// next distinct value gets 2 and so on. Index 0 is never handed out, so it can
/// be used by callers as "not found".
///
/// Lookups are a linear scan. Tables hold the distinct constants of a single
/// source file, which keeps them small.
#[derive(Debug, Clone, PartialEq)]
pub struct LiteralTable<T> {
    name: &'static str,
    values: Vec<T>,
}

impl<T> Default for LiteralTable<T> {
    fn default() -> Self {
        LiteralTable::named("literal")
    }
}

impl<T> LiteralTable<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty table whose registrations are logged under `name`.
    pub fn named(name: &'static str) -> Self {
        LiteralTable {
            name,
            values: vec![],
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Returns the value registered under `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` was not returned by [`LiteralTable::register`] on this
    /// table. Handing in a foreign index is a bug in the caller.
    pub fn get(&self, index: usize) -> &T {
        match self.try_get(index) {
            Some(value) => value,
            None => panic!(
                "literal index {} out of range (table holds {} values)",
                index,
                self.values.len()
            ),
        }
    }

    pub fn try_get(&self, index: usize) -> Option<&T> {
        self.values.get(index.checked_sub(1)?)
    }

    /// Iterates `(index, value)` pairs in registration order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &T)> {
        self.values
            .iter()
            .enumerate()
            .map(|(position, value)| (position + 1, value))
    }

    /// Returns the index of the first entry equal to `value`.
    pub fn find<Q>(&self, value: &Q) -> Option<usize>
    where
        Q: ?Sized,
        T: PartialEq<Q>,
    {
        self.values
            .iter()
            .position(|entry| entry == value)
            .map(|position| position + 1)
    }

    /// Returns the existing index of `value`, or appends it and returns the new
    /// one.
    pub fn register<Q>(&mut self, value: &Q) -> usize
    where
        Q: ?Sized + ToOwned<Owned = T> + Debug,
        T: PartialEq<Q>,
    {
        if let Some(index) = self.find(value) {
            return index;
        }

        self.values.push(value.to_owned());
        let index = self.values.len();
        debug!(table = self.name, index, value = ?value, "registered literal");

        index
    }
}
