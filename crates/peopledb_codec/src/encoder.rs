//! Record line encoder.

use crate::error::{CodecError, CodecResult};
use crate::fields::{RecordFields, FIELD_SEPARATOR, WEIGHT_PRECISION};
use std::fmt::Write as _;

/// Encode one record as a line, including the trailing newline.
///
/// The output has the form `name,age,weight\n` with the weight printed
/// using exactly six fractional digits.
///
/// # Errors
///
/// Returns [`CodecError::UnencodableName`] if the name contains a comma
/// or a line break.
pub fn to_line(fields: &RecordFields) -> CodecResult<String> {
    let mut encoder = LineEncoder::new();
    encoder.encode(fields)?;
    Ok(encoder.into_string())
}

/// A line encoder.
///
/// Lines accumulate in an internal buffer. A rejected record leaves the
/// buffer as it was, so callers can skip it and keep encoding.
pub struct LineEncoder {
    buffer: String,
    lines: usize,
}

impl LineEncoder {
    /// Create a new encoder.
    pub fn new() -> Self {
        Self {
            buffer: String::new(),
            lines: 0,
        }
    }

    /// Create a new encoder sized for roughly `lines` records.
    pub fn with_capacity(lines: usize) -> Self {
        Self {
            buffer: String::with_capacity(lines * 32),
            lines: 0,
        }
    }

    /// Encode a record and append it to the buffer.
    pub fn encode(&mut self, fields: &RecordFields) -> CodecResult<()> {
        if !fields.has_encodable_name() {
            return Err(CodecError::unencodable_name(fields.name.clone()));
        }

        // Writing into a String cannot fail.
        let _ = writeln!(
            self.buffer,
            "{name}{sep}{age}{sep}{weight:.prec$}",
            name = fields.name,
            sep = FIELD_SEPARATOR,
            age = fields.age,
            weight = fields.weight,
            prec = WEIGHT_PRECISION,
        );
        self.lines += 1;
        Ok(())
    }

    /// Number of lines encoded so far.
    pub fn line_count(&self) -> usize {
        self.lines
    }

    /// Get the encoded text.
    pub fn as_str(&self) -> &str {
        &self.buffer
    }

    /// Consume this encoder and return the encoded text.
    pub fn into_string(self) -> String {
        self.buffer
    }
}

impl Default for LineEncoder {
    fn default() -> Self {
        Self::new()
    }
}
