//! Property-based test generators using proptest.
//!
//! Provides strategies for generating people, persisted lines and
//! sequences of store operations.

use peopledb_codec::{is_encodable_name, RecordFields};
use peopledb_core::{SortField, SortOrder, MAX_AGE, MAX_NAME_LEN, MAX_WEIGHT, MIN_AGE, MIN_WEIGHT};
use proptest::prelude::*;

/// Strategy for names that survive a save and load unchanged.
///
/// Non-empty, at most [`MAX_NAME_LEN`] characters, no separators.
pub fn person_name_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[A-Za-z][A-Za-z0-9 ._'-]{0,48}")
        .expect("Invalid regex")
        .prop_filter("Name must be encodable", |s| is_encodable_name(s))
}

/// Strategy for names of any length, including ones that will be truncated.
pub fn long_name_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex(&format!("[a-zA-Z\u{e9}\u{f6}\u{4e2d}]{{1,{}}}", MAX_NAME_LEN * 2))
        .expect("Invalid regex")
}

/// Strategy for ages in the accepted range.
pub fn valid_age_strategy() -> impl Strategy<Value = i32> {
    MIN_AGE..=MAX_AGE
}

/// Strategy for ages outside the accepted range.
pub fn invalid_age_strategy() -> impl Strategy<Value = i32> {
    prop_oneof![i32::MIN..MIN_AGE, (MAX_AGE + 1)..=i32::MAX]
}

/// Strategy for weights in the accepted range.
pub fn valid_weight_strategy() -> impl Strategy<Value = f64> {
    MIN_WEIGHT..=MAX_WEIGHT
}

/// Strategy for weights that round-trip exactly at six decimal places.
pub fn persisted_weight_strategy() -> impl Strategy<Value = f64> {
    (0u32..=200_000).prop_map(|milli| f64::from(milli) / 1000.0)
}

/// Strategy for weights outside the accepted range, including non-finite ones.
pub fn invalid_weight_strategy() -> impl Strategy<Value = f64> {
    prop_oneof![
        -1.0e9..-1.0e-6f64,
        (MAX_WEIGHT + 1.0e-6)..1.0e9,
        Just(f64::NAN),
        Just(f64::INFINITY),
        Just(f64::NEG_INFINITY),
    ]
}

/// Strategy for valid `(name, age, weight)` rows.
pub fn person_row_strategy() -> impl Strategy<Value = (String, i32, f64)> {
    (
        person_name_strategy(),
        valid_age_strategy(),
        persisted_weight_strategy(),
    )
}

/// Strategy for record fields that encode without error.
pub fn record_fields_strategy() -> impl Strategy<Value = RecordFields> {
    person_row_strategy().prop_map(|(name, age, weight)| RecordFields::new(name, age, weight))
}

/// Strategy for sort fields.
pub fn sort_field_strategy() -> impl Strategy<Value = SortField> {
    prop::sample::select(SortField::ALL.to_vec())
}

/// Strategy for sort directions.
pub fn sort_order_strategy() -> impl Strategy<Value = SortOrder> {
    any::<bool>().prop_map(SortOrder::from)
}

/// An operation applied to a store.
#[derive(Debug, Clone)]
pub enum StoreOperation {
    /// Insert a row, which may fail validation
    Insert {
        /// Name
        name: String,
        /// Age
        age: i32,
        /// Weight
        weight: f64,
    },
    /// Remove by position, which may be out of range
    Remove {
        /// Position
        index: usize,
    },
    /// Sort the store
    Sort {
        /// Field to compare
        field: SortField,
        /// Direction
        order: SortOrder,
    },
}

/// Strategy for store operations.
pub fn store_operation_strategy() -> impl Strategy<Value = StoreOperation> {
    prop_oneof![
        5 => person_row_strategy()
            .prop_map(|(name, age, weight)| StoreOperation::Insert { name, age, weight }),
        1 => (person_name_strategy(), invalid_age_strategy(), valid_weight_strategy())
            .prop_map(|(name, age, weight)| StoreOperation::Insert { name, age, weight }),
        1 => (person_name_strategy(), valid_age_strategy(), invalid_weight_strategy())
            .prop_map(|(name, age, weight)| StoreOperation::Insert { name, age, weight }),
        2 => (0usize..32).prop_map(|index| StoreOperation::Remove { index }),
        1 => (sort_field_strategy(), sort_order_strategy())
            .prop_map(|(field, order)| StoreOperation::Sort { field, order }),
    ]
}

/// Strategy for generating a sequence of operations.
pub fn operation_sequence_strategy(
    min_ops: usize,
    max_ops: usize,
) -> impl Strategy<Value = Vec<StoreOperation>> {
    prop::collection::vec(store_operation_strategy(), min_ops..max_ops)
}

/// Configuration for property tests.
#[derive(Debug, Clone)]
pub struct PropTestConfig {
    /// Number of test cases to run.
    pub cases: u32,
    /// Maximum shrink iterations.
    pub max_shrink_iters: u32,
}

impl Default for PropTestConfig {
    fn default() -> Self {
        Self {
            cases: 256,
            max_shrink_iters: 1000,
        }
    }
}

impl PropTestConfig {
    /// Creates a configuration for quick tests.
    #[must_use]
    pub fn quick() -> Self {
        Self {
            cases: 32,
            max_shrink_iters: 100,
        }
    }

    /// Creates a configuration for thorough tests.
    #[must_use]
    pub fn thorough() -> Self {
        Self {
            cases: 1024,
            max_shrink_iters: 10000,
        }
    }

    /// Converts to proptest config.
    #[must_use]
    pub fn to_proptest_config(&self) -> ProptestConfig {
        ProptestConfig {
            cases: self.cases,
            max_shrink_iters: self.max_shrink_iters,
            ..ProptestConfig::default()
        }
    }
}
