//! Record comparators.
//!
//! A comparator is a three-way ordering over two records. [`SortField`]
//! covers the three built-in orderings; any closure with the right shape
//! can be passed to [`crate::PeopleStore::sort`] as well.

use crate::person::Person;
use serde::Serialize;
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// A three-way comparison over two records.
pub trait PersonComparator {
    /// Compares `a` with `b`.
    fn compare(&self, a: &Person, b: &Person) -> Ordering;
}

impl<F> PersonComparator for F
where
    F: Fn(&Person, &Person) -> Ordering,
{
    fn compare(&self, a: &Person, b: &Person) -> Ordering {
        self(a, b)
    }
}

/// The built-in orderings, one per record field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SortField {
    /// Bytewise lexicographic order of names.
    Name,
    /// Numeric order of ages.
    Age,
    /// Numeric order of weights, never reporting equality.
    Weight,
}

impl SortField {
    /// All fields, in menu order.
    pub const ALL: [SortField; 3] = [SortField::Name, SortField::Age, SortField::Weight];

    /// Returns the lowercase field name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Age => "age",
            Self::Weight => "weight",
        }
    }
}

impl PersonComparator for SortField {
    fn compare(&self, a: &Person, b: &Person) -> Ordering {
        match self {
            Self::Name => by_name(a, b),
            Self::Age => by_age(a, b),
            Self::Weight => by_weight(a, b),
        }
    }
}

/// Compares names byte by byte.
#[must_use]
pub fn by_name(a: &Person, b: &Person) -> Ordering {
    a.name().as_bytes().cmp(b.name().as_bytes())
}

/// Compares ages numerically.
#[must_use]
pub fn by_age(a: &Person, b: &Person) -> Ordering {
    a.age().cmp(&b.age())
}

/// Compares weights, returning `Greater` only when `a` is strictly heavier.
///
/// Equal weights compare as `Less`, so this never returns `Equal`. Sorts
/// built on it give no ordering guarantee among records of equal weight.
#[must_use]
pub fn by_weight(a: &Person, b: &Person) -> Ordering {
    if a.weight() > b.weight() {
        Ordering::Greater
    } else {
        Ordering::Less
    }
}

impl fmt::Display for SortField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown field name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown sort field: {0:?} (expected name, age or weight)")]
pub struct ParseSortFieldError(String);

impl FromStr for SortField {
    type Err = ParseSortFieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "name" => Ok(Self::Name),
            "age" => Ok(Self::Age),
            "weight" => Ok(Self::Weight),
            _ => Err(ParseSortFieldError(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn person(name: &str, age: i32, weight: f64) -> Person {
        Person::new(name, age, weight).unwrap()
    }

    #[test]
    fn name_is_bytewise() {
        let a = person("Alice", 1, 1.0);
        let b = person("Bob", 1, 1.0);
        let lower = person("alice", 1, 1.0);
        assert_eq!(by_name(&a, &b), Ordering::Less);
        assert_eq!(by_name(&b, &a), Ordering::Greater);
        assert_eq!(by_name(&a, &a), Ordering::Equal);
        // Uppercase sorts before lowercase in byte order.
        assert_eq!(by_name(&b, &lower), Ordering::Less);
    }

    #[test]
    fn name_prefix_sorts_first() {
        let short = person("Ann", 1, 1.0);
        let long = person("Anna", 1, 1.0);
        assert_eq!(by_name(&short, &long), Ordering::Less);
    }

    #[test]
    fn age_is_numeric() {
        let young = person("A", 9, 1.0);
        let old = person("B", 10, 1.0);
        assert_eq!(by_age(&young, &old), Ordering::Less);
        assert_eq!(by_age(&old, &young), Ordering::Greater);
        assert_eq!(by_age(&old, &old), Ordering::Equal);
    }

    #[test]
    fn weight_never_reports_equal() {
        let x = person("X", 1, 70.0);
        let y = person("Y", 1, 70.0);
        assert_eq!(by_weight(&x, &y), Ordering::Less);
        assert_eq!(by_weight(&y, &x), Ordering::Less);
        assert_eq!(by_weight(&x, &x), Ordering::Less);
    }

    #[test]
    fn weight_strictly_heavier_is_greater() {
        let light = person("L", 1, 50.0);
        let heavy = person("H", 1, 90.0);
        assert_eq!(by_weight(&heavy, &light), Ordering::Greater);
        assert_eq!(by_weight(&light, &heavy), Ordering::Less);
    }

    #[test]
    fn field_dispatches_to_comparator() {
        let a = person("Zed", 20, 80.0);
        let b = person("Amy", 30, 60.0);
        assert_eq!(SortField::Name.compare(&a, &b), Ordering::Greater);
        assert_eq!(SortField::Age.compare(&a, &b), Ordering::Less);
        assert_eq!(SortField::Weight.compare(&a, &b), Ordering::Greater);
    }

    #[test]
    fn closures_are_comparators() {
        let reverse_age = |a: &Person, b: &Person| b.age().cmp(&a.age());
        let a = person("A", 20, 1.0);
        let b = person("B", 30, 1.0);
        assert_eq!(reverse_age.compare(&a, &b), Ordering::Greater);
    }

    #[test]
    fn parse_and_display() {
        for field in SortField::ALL {
            assert_eq!(field.to_string().parse::<SortField>().unwrap(), field);
        }
        assert_eq!(" Weight ".parse::<SortField>().unwrap(), SortField::Weight);
        assert!("height".parse::<SortField>().is_err());
    }
}
