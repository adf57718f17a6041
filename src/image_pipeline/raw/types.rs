//! Raw image data types

use crate::image_pipeline::common::error::{ArchiveError, Result};

/// Single-channel 8-bit image, row-major (`data[row * width + col]`).
///
/// The buffer length is checked against `width * height` on construction,
/// so every accessor can index rows without further validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawImageData {
    width: usize,
    height: usize,
    data: Vec<u8>,
}

impl RawImageData {
    /// Wraps an existing pixel buffer.
    ///
    /// Fails with `InvalidDimensions` when either side is zero (or the
    /// product overflows) and with `BufferSizeMismatch` when `data` is not
    /// exactly `width * height` bytes long.
    pub fn new(width: usize, height: usize, data: Vec<u8>) -> Result<Self> {
        let expected = pixel_count(width, height)?;
        if data.len() != expected {
            return Err(ArchiveError::BufferSizeMismatch {
                expected,
                actual: data.len(),
            });
        }

        Ok(Self { width, height, data })
    }

    /// Image of the given size with every sample set to `value`.
    ///
    /// A buffer that cannot be allocated is reported as `InvalidDimensions`.
    pub fn filled(width: usize, height: usize, value: u8) -> Result<Self> {
        let len = pixel_count(width, height)?;
        let mut data = Vec::new();
        data.try_reserve_exact(len)
            .map_err(|_| ArchiveError::InvalidDimensions(width, height))?;
        data.resize(len, value);

        Ok(Self { width, height, data })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn data_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    pub fn into_data(self) -> Vec<u8> {
        self.data
    }

    pub fn row(&self, index: usize) -> Option<&[u8]> {
        if index >= self.height {
            return None;
        }
        let start = index * self.width;
        Some(&self.data[start..start + self.width])
    }

    pub fn rows(&self) -> impl Iterator<Item = &[u8]> {
        self.data.chunks_exact(self.width)
    }
}

/// `width * height`, rejecting empty sizes and sizes no buffer can hold
/// (above `isize::MAX` bytes).
pub(crate) fn pixel_count(width: usize, height: usize) -> Result<usize> {
    if width == 0 || height == 0 {
        return Err(ArchiveError::InvalidDimensions(width, height));
    }
    width
        .checked_mul(height)
        .filter(|&len| len <= isize::MAX as usize)
        .ok_or(ArchiveError::InvalidDimensions(width, height))
}
