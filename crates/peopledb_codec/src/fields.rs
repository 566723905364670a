//! Raw record fields as they appear on a line.

/// Field separator used by the line format.
pub const FIELD_SEPARATOR: char = ',';

/// Number of fractional digits written for the weight field.
pub const WEIGHT_PRECISION: usize = 6;

/// The three fields of one persisted line.
///
/// This is an unvalidated tuple: the codec only cares about the shape of a
/// line. Range checks and name truncation belong to the record type built
/// on top of it.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordFields {
    /// Everything before the first separator.
    pub name: String,
    /// Signed decimal integer.
    pub age: i32,
    /// Floating-point number.
    pub weight: f64,
}

impl RecordFields {
    /// Creates a new field tuple.
    pub fn new(name: impl Into<String>, age: i32, weight: f64) -> Self {
        Self {
            name: name.into(),
            age,
            weight,
        }
    }

    /// Returns true if the name can be written without breaking the format.
    ///
    /// There is no quoting, so a name must not contain the field separator
    /// or a line break.
    #[must_use]
    pub fn has_encodable_name(&self) -> bool {
        is_encodable_name(&self.name)
    }
}

/// Returns true if `name` contains no separator and no line break.
#[must_use]
pub fn is_encodable_name(name: &str) -> bool {
    !name.contains([FIELD_SEPARATOR, '\n', '\r'])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_name_is_encodable() {
        assert!(RecordFields::new("Alice", 30, 60.0).has_encodable_name());
        assert!(is_encodable_name("Anna Maria"));
        assert!(is_encodable_name(""));
    }

    #[test]
    fn delimiters_are_not_encodable() {
        assert!(!is_encodable_name("Smith, John"));
        assert!(!is_encodable_name("two\nlines"));
        assert!(!is_encodable_name("carriage\r"));
    }
}
