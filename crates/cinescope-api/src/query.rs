//! `QueryParams` - ordered query-string builder.

use std::fmt::Display;

/// Ordered list of query parameters.
///
/// Unset (`None`) values and empty lists are skipped, so an unset filter
/// field never reaches the wire.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    pairs: Vec<(String, String)>,
}

impl QueryParams {
    /// Creates an empty parameter list.
    #[must_use]
    pub const fn new() -> Self {
        Self { pairs: Vec::new() }
    }

    /// Sets `key` to `value`, replacing an earlier value for the same key.
    #[must_use]
    pub fn set(mut self, key: &str, value: impl Display) -> Self {
        self.insert(key, value.to_string());
        self
    }

    /// Sets `key` when `value` is `Some`.
    #[must_use]
    pub fn opt<T: Display>(self, key: &str, value: Option<T>) -> Self {
        match value {
            Some(v) => self.set(key, v),
            None => self,
        }
    }

    /// Sets `key` to the `|`-joined values when the list is non-empty.
    #[must_use]
    pub fn list<T: Display>(self, key: &str, values: &[T]) -> Self {
        if values.is_empty() {
            return self;
        }
        let joined = values
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("|");
        self.set(key, joined)
    }

    /// Returns the value for `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Returns `true` if `key` is present.
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Number of parameters.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Returns `true` if no parameter is set.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Iterates parameters in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pairs.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Returns `defaults` with every key in `self` applied on top.
    ///
    /// Keys already in `defaults` keep their position; new keys follow.
    #[must_use]
    pub fn over(self, defaults: Self) -> Self {
        let mut merged = defaults;
        for (key, value) in self.pairs {
            merged.insert(&key, value);
        }
        merged
    }

    /// Consumes the builder into `(key, value)` pairs.
    #[must_use]
    pub fn into_pairs(self) -> Vec<(String, String)> {
        self.pairs
    }

    fn insert(&mut self, key: &str, value: String) {
        if let Some(slot) = self.pairs.iter_mut().find(|(k, _)| k == key) {
            slot.1 = value;
        } else {
            self.pairs.push((String::from(key), value));
        }
    }
}
