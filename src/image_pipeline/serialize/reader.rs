use std::io::{BufRead, ErrorKind, Read};

use tracing::warn;

use crate::image_pipeline::serialize::field::Field;
use crate::image_pipeline::serialize::record::Record;
use crate::image_pipeline::serialize::varint::{self, VarintError};

/// Deserializing visitor.
///
/// Reads never abort: every short or malformed read appends a message to the
/// error log and leaves the destination partially filled. Callers must check
/// [`BinaryReader::has_errors`] after the pass before trusting the result.
pub struct BinaryReader<R> {
    input: R,
    path: Vec<&'static str>,
    errors: Vec<String>,
}

impl<R: BufRead> BinaryReader<R> {
    pub fn new(input: R) -> Self {
        Self {
            input,
            path: Vec::new(),
            errors: Vec::new(),
        }
    }

    /// Reads one varint, logging `not enough data ... to read {what}` on
    /// truncation.
    pub fn read_unsigned(&mut self, what: &str) -> Option<u64> {
        match varint::read_from(&mut self.input) {
            Ok(value) => Some(value),
            Err(VarintError::Truncated) => {
                self.error(format!("not enough data in buffer to read {}", what));
                None
            }
            Err(e) => {
                self.error(format!("failed to read {}: {}", what, e));
                None
            }
        }
    }

    /// Appends up to `len` bytes to `out` and returns how many were available.
    pub fn read_bytes(&mut self, len: u64, out: &mut Vec<u8>) -> u64 {
        let before = out.len();
        let result = (&mut self.input).take(len).read_to_end(out);
        if let Err(e) = result {
            self.error(format!("failed to read {} bytes: {}", len, e));
        }
        (out.len() - before) as u64
    }

    /// True once the source has no more bytes. A read failure also counts as
    /// the end, after being logged.
    pub fn at_end(&mut self) -> bool {
        loop {
            let peeked = self.input.fill_buf().map(|buf| buf.is_empty());
            match peeked {
                Ok(empty) => return empty,
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => {
                    self.error(format!("failed to peek input: {}", e));
                    return true;
                }
            }
        }
    }

    pub fn field<T: Field>(&mut self, name: &'static str, value: &mut T) {
        self.path.push(name);
        value.decode(self);
        self.path.pop();
    }

    pub fn record<T: Record>(&mut self, value: &mut T) {
        self.path.push(T::NAME);
        value.read_fields(self);
        self.path.pop();
    }

    /// Logs a problem against the field currently being read.
    pub fn error(&mut self, message: impl Into<String>) {
        let message = message.into();
        let entry = if self.path.is_empty() {
            format!("Error: {}", message)
        } else {
            format!("Error in {}: {}", self.path.join("."), message)
        };
        warn!("{}", entry);
        self.errors.push(entry);
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    pub fn into_errors(self) -> Vec<String> {
        self.errors
    }
}
