//! Binary PGM (`P5`) reader.
//!
//! Only 8-bit files are accepted (maxval 1..=255), which matches the one
//! byte per sample layout of [`RawImageData`]. Comments (`#` to end of line)
//! are allowed anywhere in the header.

use tracing::debug;
use crate::image_pipeline::common::error::{ArchiveError, Result};
use crate::image_pipeline::raw::reader::RawImageReader;
use crate::image_pipeline::raw::types::{RawImageData, pixel_count};

const MAGIC: &[u8; 2] = b"P5";

pub struct PgmReader;

impl RawImageReader for PgmReader {
    fn read_raw(&self, data: &[u8]) -> Result<RawImageData> {
        debug!("Decoding PGM image, {} bytes", data.len());

        if !data.starts_with(MAGIC) {
            return Err(ArchiveError::UnsupportedFormat(
                "missing P5 magic number".to_string(),
            ));
        }

        let mut header = HeaderCursor { data, pos: MAGIC.len() };
        let width = header.next_number("width")?;
        let height = header.next_number("height")?;
        let maxval = header.next_number("maxval")?;

        if maxval == 0 || maxval > u8::MAX as usize {
            return Err(ArchiveError::UnsupportedFormat(format!(
                "PGM maxval {} (only 8-bit samples are supported)",
                maxval
            )));
        }

        // exactly one whitespace byte separates the header from the raster
        if !header.peek().is_some_and(|b| b.is_ascii_whitespace()) {
            return Err(ArchiveError::UnsupportedFormat(
                "PGM header is not terminated by whitespace".to_string(),
            ));
        }
        let raster_start = header.pos + 1;

        let len = pixel_count(width, height)?;
        let raster = &data[raster_start..];
        if raster.len() < len {
            return Err(ArchiveError::BufferSizeMismatch {
                expected: len,
                actual: raster.len(),
            });
        }

        debug!("Decoded PGM: {}x{}, maxval {}", width, height, maxval);
        RawImageData::new(width, height, raster[..len].to_vec())
    }
}

struct HeaderCursor<'a> {
    data: &'a [u8],
    pos: usize,
}

impl HeaderCursor<'_> {
    fn peek(&self) -> Option<u8> {
        self.data.get(self.pos).copied()
    }

    fn skip_separators(&mut self) {
        while let Some(b) = self.peek() {
            if b == b'#' {
                while self.peek().is_some_and(|b| b != b'\n') {
                    self.pos += 1;
                }
            } else if b.is_ascii_whitespace() {
                self.pos += 1;
            } else {
                break;
            }
        }
    }

    fn next_number(&mut self, what: &str) -> Result<usize> {
        self.skip_separators();
        let start = self.pos;
        while self.peek().is_some_and(|b| b.is_ascii_digit()) {
            self.pos += 1;
        }

        std::str::from_utf8(&self.data[start..self.pos])
            .ok()
            .and_then(|digits| digits.parse().ok())
            .ok_or_else(|| {
                ArchiveError::UnsupportedFormat(format!("invalid PGM {} field", what))
            })
    }
}
