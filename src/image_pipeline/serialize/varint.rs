//! Unsigned LEB128-style varints.
//!
//! Each byte carries 7 value bits, least-significant group first; the high
//! bit is set on every byte except the last.

use std::io::{self, Read};
use thiserror::Error;

const PAYLOAD_MASK: u8 = 0x7F;
const CONTINUATION: u8 = 0x80;

/// Longest encoding of a `u64` (ceil(64 / 7)).
pub const MAX_ENCODED_LEN: usize = 10;

#[derive(Error, Debug)]
pub enum VarintError {
    #[error("input ended before the terminating varint byte")]
    Truncated,

    #[error("varint does not fit in 64 bits")]
    Overflow,

    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

/// Appends the encoding of `value` to `out`.
pub fn encode(mut value: u64, out: &mut Vec<u8>) {
    loop {
        let byte = (value as u8) & PAYLOAD_MASK;
        value >>= 7;
        if value == 0 {
            out.push(byte);
            return;
        }
        out.push(byte | CONTINUATION);
    }
}

pub fn encoded_len(value: u64) -> usize {
    let bits = 64 - value.leading_zeros() as usize;
    bits.div_ceil(7).max(1)
}

/// Decodes one varint from the front of `bytes`, returning the value and the
/// number of bytes consumed.
pub fn decode(bytes: &[u8]) -> Result<(u64, usize), VarintError> {
    let mut acc = Accumulator::default();
    for (index, &byte) in bytes.iter().enumerate() {
        if let Some(value) = acc.push(byte)? {
            return Ok((value, index + 1));
        }
    }
    Err(VarintError::Truncated)
}

/// Decodes one varint from a byte source. End of input before the final byte
/// is `Truncated`; any other read failure is passed through as `Io`.
pub fn read_from<R: Read + ?Sized>(reader: &mut R) -> Result<u64, VarintError> {
    let mut acc = Accumulator::default();
    let mut byte = [0u8; 1];
    loop {
        match reader.read(&mut byte) {
            Ok(0) => return Err(VarintError::Truncated),
            Ok(_) => {
                if let Some(value) = acc.push(byte[0])? {
                    return Ok(value);
                }
            }
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(VarintError::Io(e)),
        }
    }
}

#[derive(Default)]
struct Accumulator {
    value: u64,
    shift: u32,
}

impl Accumulator {
    /// Folds in one byte; yields the value once the terminating byte is seen.
    fn push(&mut self, byte: u8) -> Result<Option<u64>, VarintError> {
        let payload = u64::from(byte & PAYLOAD_MASK);
        if self.shift >= 64 || (self.shift == 63 && payload > 1) {
            return Err(VarintError::Overflow);
        }
        self.value |= payload << self.shift;
        self.shift += 7;

        if byte & CONTINUATION == 0 {
            Ok(Some(self.value))
        } else {
            Ok(None)
        }
    }
}
