//! In-place record sorting.

use crate::compare::PersonComparator;
use crate::person::Person;
use serde::Serialize;
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// Sort direction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    /// Smallest first.
    #[default]
    Ascending,
    /// Largest first.
    Descending,
}

impl SortOrder {
    /// Returns true if the pair `(left, right)` with the given comparison
    /// result is out of order and must be swapped.
    #[inline]
    #[must_use]
    pub fn should_swap(self, cmp: Ordering) -> bool {
        match self {
            Self::Ascending => cmp == Ordering::Greater,
            Self::Descending => cmp == Ordering::Less,
        }
    }

    /// Returns true for [`SortOrder::Ascending`].
    #[must_use]
    pub const fn is_ascending(self) -> bool {
        matches!(self, Self::Ascending)
    }
}

impl From<bool> for SortOrder {
    /// `true` is ascending.
    fn from(ascending: bool) -> Self {
        if ascending {
            Self::Ascending
        } else {
            Self::Descending
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ascending => f.write_str("ascending"),
            Self::Descending => f.write_str("descending"),
        }
    }
}

/// Error returned when parsing an unknown sort direction.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown sort order: {0:?} (expected asc or desc)")]
pub struct ParseSortOrderError(String);

impl FromStr for SortOrder {
    type Err = ParseSortOrderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "asc" | "ascending" => Ok(Self::Ascending),
            "desc" | "descending" => Ok(Self::Descending),
            _ => Err(ParseSortOrderError(s.to_string())),
        }
    }
}

/// Bubble-sorts `records` in place and returns the number of swaps.
///
/// Runs exactly `len - 1` passes with no early exit. Each pass compares
/// adjacent pairs and swaps them when `order` says they are out of order.
/// Equal elements are never swapped, but a comparator that never reports
/// equality (see [`crate::compare::by_weight`]) can reorder them.
pub fn bubble_sort<C>(records: &mut [Person], comparator: &C, order: SortOrder) -> usize
where
    C: PersonComparator + ?Sized,
{
    let len = records.len();
    let mut swaps = 0;

    for pass in 0..len.saturating_sub(1) {
        for j in 0..len - pass - 1 {
            let cmp = comparator.compare(&records[j], &records[j + 1]);
            if order.should_swap(cmp) {
                records.swap(j, j + 1);
                swaps += 1;
            }
        }
    }

    swaps
}
