//! Bounded person name.

use serde::Serialize;
use std::fmt;

/// Maximum number of characters kept in a name.
pub const MAX_NAME_LEN: usize = 49;

/// A person's name, at most [`MAX_NAME_LEN`] characters long.
///
/// Longer input is truncated to its first `MAX_NAME_LEN` characters.
/// Truncation is silent and always lands on a character boundary. Empty
/// names are allowed.
#[derive(Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct PersonName(String);

impl PersonName {
    /// Creates a name, truncating it if needed.
    #[must_use]
    pub fn new(name: &str) -> Self {
        Self(truncate(name).to_string())
    }

    /// Returns the name as a string slice.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the name's raw bytes.
    #[inline]
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }

    /// Returns true if the name is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the number of characters in the name.
    #[must_use]
    pub fn char_count(&self) -> usize {
        self.0.chars().count()
    }

    /// Returns true if `name` would be shortened by [`PersonName::new`].
    #[must_use]
    pub fn would_truncate(name: &str) -> bool {
        truncate(name).len() < name.len()
    }

    /// Consumes the name and returns the inner string.
    #[must_use]
    pub fn into_string(self) -> String {
        self.0
    }
}

fn truncate(name: &str) -> &str {
    match name.char_indices().nth(MAX_NAME_LEN) {
        Some((end, _)) => &name[..end],
        None => name,
    }
}

impl fmt::Debug for PersonName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PersonName({:?})", self.0)
    }
}

impl fmt::Display for PersonName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for PersonName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for PersonName {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for PersonName {
    fn from(mut name: String) -> Self {
        let keep = truncate(&name).len();
        name.truncate(keep);
        Self(name)
    }
}

impl PartialEq<str> for PersonName {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for PersonName {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_name_is_kept() {
        let name = PersonName::new("Alice");
        assert_eq!(name, "Alice");
        assert_eq!(name.char_count(), 5);
    }

    #[test]
    fn long_name_is_truncated() {
        let long = "x".repeat(80);
        let name = PersonName::new(&long);
        assert_eq!(name.char_count(), MAX_NAME_LEN);
        assert_eq!(name.as_str(), &long[..MAX_NAME_LEN]);
        assert!(PersonName::would_truncate(&long));
    }

    #[test]
    fn exact_limit_is_kept() {
        let exact = "y".repeat(MAX_NAME_LEN);
        assert!(!PersonName::would_truncate(&exact));
        assert_eq!(PersonName::new(&exact).as_str(), exact);
    }

    #[test]
    fn truncation_respects_char_boundaries() {
        let long = "é".repeat(60);
        let name = PersonName::new(&long);
        assert_eq!(name.char_count(), MAX_NAME_LEN);
        assert_eq!(name.as_bytes().len(), MAX_NAME_LEN * 2);
    }

    #[test]
    fn from_string_truncates_in_place() {
        let name = PersonName::from("z".repeat(100));
        assert_eq!(name.char_count(), MAX_NAME_LEN);
    }

    #[test]
    fn empty_name_is_allowed() {
        let name = PersonName::new("");
        assert!(name.is_empty());
    }

    #[test]
    fn display_and_debug() {
        let name = PersonName::new("Bob");
        assert_eq!(format!("{name}"), "Bob");
        assert_eq!(format!("{name:?}"), "PersonName(\"Bob\")");
    }
}
