//! Record line decoder.

use crate::error::{CodecError, CodecResult};
use crate::fields::{RecordFields, FIELD_SEPARATOR};
use std::io::{self, BufRead};

/// Decode one line into its three fields.
///
/// The accepted shape is `name,age,weight`:
/// - `name` is every character before the first comma and must not be empty
/// - `age` may be preceded by whitespace and must run up to the second comma
/// - `weight` is the remainder, surrounding whitespace (including the line
///   terminator) is ignored
///
/// # Errors
///
/// Returns an error describing the first field that does not parse. The
/// caller decides whether that is fatal; the store loader skips such lines.
pub fn from_line(line: &str) -> CodecResult<RecordFields> {
    let (name, rest) = line
        .split_once(FIELD_SEPARATOR)
        .ok_or(CodecError::missing_field("age"))?;
    if name.is_empty() {
        return Err(CodecError::EmptyName);
    }

    let (age_text, weight_text) = rest
        .split_once(FIELD_SEPARATOR)
        .ok_or(CodecError::missing_field("weight"))?;
    let age = age_text
        .trim_start()
        .parse::<i32>()
        .map_err(|_| CodecError::invalid_integer("age", age_text))?;

    let weight_text = weight_text.trim();
    if weight_text.is_empty() {
        return Err(CodecError::missing_field("weight"));
    }
    let weight = weight_text
        .parse::<f64>()
        .map_err(|_| CodecError::invalid_float("weight", weight_text))?;

    Ok(RecordFields {
        name: name.to_string(),
        age,
        weight,
    })
}

/// Outcome of decoding a single line.
#[derive(Debug, Clone, PartialEq)]
pub struct DecodedLine {
    /// 1-based line number within the source.
    pub number: usize,
    /// The decoded fields, or why the line was rejected.
    pub result: CodecResult<RecordFields>,
}

/// A streaming line decoder.
///
/// Yields one [`DecodedLine`] per input line. A malformed line does not
/// stop iteration; only I/O failures are reported as `Err`.
pub struct LineDecoder<R> {
    reader: R,
    line_number: usize,
    buf: Vec<u8>,
}

impl<R: BufRead> LineDecoder<R> {
    /// Create a new decoder over the given reader.
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            line_number: 0,
            buf: Vec::new(),
        }
    }

    /// Number of lines read so far.
    pub fn lines_read(&self) -> usize {
        self.line_number
    }

    /// Consume the decoder and return the underlying reader.
    pub fn into_inner(self) -> R {
        self.reader
    }
}

impl<R: BufRead> Iterator for LineDecoder<R> {
    type Item = io::Result<DecodedLine>;

    fn next(&mut self) -> Option<Self::Item> {
        self.buf.clear();
        match self.reader.read_until(b'\n', &mut self.buf) {
            Ok(0) => None,
            Ok(_) => {
                self.line_number += 1;
                let result = match std::str::from_utf8(&self.buf) {
                    Ok(text) => from_line(text),
                    Err(_) => Err(CodecError::InvalidUtf8),
                };
                Some(Ok(DecodedLine {
                    number: self.line_number,
                    result,
                }))
            }
            Err(e) => Some(Err(e)),
        }
    }
}
