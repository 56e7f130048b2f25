//! Ordered header multimap

use indexmap::IndexMap;

/// Header names mapped to every value added for them.
///
/// Names keep the order in which they were first added and are stored exactly
/// as given. Adding a name again appends to its values instead of replacing
/// them, so iteration yields all values of the first name, then all values of
/// the second, and so on.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Headers {
    entries: IndexMap<String, Vec<String>>,
}

impl Headers {
    /// Create an empty header map
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `value` to the values of `name`
    pub fn append(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.entries
            .entry(name.into())
            .or_default()
            .push(value.into());
    }

    /// All values added for `name`, in insertion order
    pub fn get_all(&self, name: &str) -> &[String] {
        self.entries.get(name).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Distinct header names in first insertion order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Flattened `(name, value)` pairs in the order they go on the wire
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().flat_map(|(name, values)| {
            values
                .iter()
                .map(move |value| (name.as_str(), value.as_str()))
        })
    }

    /// Total number of values across all names
    pub fn len(&self) -> usize {
        self.entries.values().map(Vec::len).sum()
    }

    /// True when no header has been added
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
