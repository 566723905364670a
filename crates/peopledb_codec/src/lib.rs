//! # PeopleDB Codec
//!
//! Line-oriented text encoding for PeopleDB records.
//!
//! Each record is one line of three comma-separated fields:
//!
//! ```text
//! <name>,<age>,<weight with 6 decimal digits>\n
//! ```
//!
//! ## Format Rules
//!
//! - No header line
//! - No quoting or escaping, so names cannot contain commas or line breaks
//! - Age is a signed decimal integer
//! - Weight is written with exactly six fractional digits
//! - Lines that do not have exactly this shape are reported, never repaired
//!
//! ## Usage
//!
//! ```
//! use peopledb_codec::{from_line, to_line, RecordFields};
//!
//! let fields = RecordFields::new("Alice", 30, 62.5);
//! let line = to_line(&fields).unwrap();
//! assert_eq!(line, "Alice,30,62.500000\n");
//!
//! let decoded = from_line(&line).unwrap();
//! assert_eq!(decoded, fields);
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

mod decoder;
mod encoder;
mod error;
mod fields;

pub use decoder::{from_line, DecodedLine, LineDecoder};
pub use encoder::{to_line, LineEncoder};
pub use error::{CodecError, CodecResult};
pub use fields::{is_encodable_name, RecordFields, FIELD_SEPARATOR, WEIGHT_PRECISION};

/// Trait for record types that can be written as a line.
pub trait ToFields {
    /// Project this record onto the three persisted fields.
    fn to_fields(&self) -> RecordFields;

    /// Encode this record as a complete line.
    fn encode_line(&self) -> CodecResult<String> {
        to_line(&self.to_fields())
    }
}

impl ToFields for RecordFields {
    fn to_fields(&self) -> RecordFields {
        self.clone()
    }
}
