//! Person records.

mod name;

pub use name::{PersonName, MAX_NAME_LEN};

use crate::error::ValidationError;
use peopledb_codec::{RecordFields, ToFields};
use serde::Serialize;
use std::fmt;
use std::ops::RangeInclusive;

/// Smallest accepted age.
pub const MIN_AGE: i32 = 0;
/// Largest accepted age.
pub const MAX_AGE: i32 = 150;
/// Smallest accepted weight.
pub const MIN_WEIGHT: f64 = 0.0;
/// Largest accepted weight.
pub const MAX_WEIGHT: f64 = 200.0;

const AGE_RANGE: RangeInclusive<i32> = MIN_AGE..=MAX_AGE;
const WEIGHT_RANGE: RangeInclusive<f64> = MIN_WEIGHT..=MAX_WEIGHT;

/// A single person record.
///
/// A `Person` can only be built through [`Person::new`], which enforces
/// `0 <= age <= 150` and `0 <= weight <= 200`. The fields are private so
/// a record never leaves those ranges once constructed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Person {
    name: PersonName,
    age: i32,
    weight: f64,
}

impl Person {
    /// Creates a validated record.
    ///
    /// The name is truncated to [`MAX_NAME_LEN`] characters.
    ///
    /// # Errors
    ///
    /// Returns the first violated constraint, age before weight.
    pub fn new(name: impl AsRef<str>, age: i32, weight: f64) -> Result<Self, ValidationError> {
        validate(age, weight)?;
        Ok(Self {
            name: PersonName::new(name.as_ref()),
            age,
            weight,
        })
    }

    /// Returns the name.
    #[inline]
    #[must_use]
    pub fn name(&self) -> &PersonName {
        &self.name
    }

    /// Returns the age in years.
    #[inline]
    #[must_use]
    pub const fn age(&self) -> i32 {
        self.age
    }

    /// Returns the weight.
    #[inline]
    #[must_use]
    pub const fn weight(&self) -> f64 {
        self.weight
    }
}

/// Checks the age and weight constraints without building a record.
///
/// NaN and infinite weights are out of range.
///
/// # Errors
///
/// Returns the first violated constraint, age before weight.
pub fn validate(age: i32, weight: f64) -> Result<(), ValidationError> {
    if !AGE_RANGE.contains(&age) {
        return Err(ValidationError::AgeOutOfRange {
            age,
            min: MIN_AGE,
            max: MAX_AGE,
        });
    }
    if !WEIGHT_RANGE.contains(&weight) {
        return Err(ValidationError::WeightOutOfRange {
            weight,
            min: MIN_WEIGHT,
            max: MAX_WEIGHT,
        });
    }
    Ok(())
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (age {}, weight {:.1})", self.name, self.age, self.weight)
    }
}

impl ToFields for Person {
    fn to_fields(&self) -> RecordFields {
        RecordFields::new(self.name.as_str(), self.age, self.weight)
    }
}

impl TryFrom<RecordFields> for Person {
    type Error = ValidationError;

    fn try_from(fields: RecordFields) -> Result<Self, Self::Error> {
        validate(fields.age, fields.weight)?;
        Ok(Self {
            name: PersonName::from(fields.name),
            age: fields.age,
            weight: fields.weight,
        })
    }
}
