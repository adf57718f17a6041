//! Packed image types

use crate::image_pipeline::packing::constants::{TAG_BLACK, TAG_OTHER, TAG_WHITE};
use crate::record;

/// Classification of one chunk in a packed row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ChunkTag {
    /// Every sample is `FULL_WHITE`; no payload.
    White = TAG_WHITE,
    /// Every sample is `FULL_BLACK`; no payload.
    Black = TAG_BLACK,
    /// Mixed samples; followed by the chunk's bytes verbatim.
    Other = TAG_OTHER,
}

impl TryFrom<u8> for ChunkTag {
    type Error = u8;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            TAG_WHITE => Ok(ChunkTag::White),
            TAG_BLACK => Ok(ChunkTag::Black),
            TAG_OTHER => Ok(ChunkTag::Other),
            other => Err(other),
        }
    }
}

/// Run-tagged form of a [`RawImageData`](crate::image_pipeline::RawImageData).
///
/// `empty_rows` has one flag per image row. Rows flagged `true` were entirely
/// white and have no entry in `rows`; every other row is stored in `rows`, in
/// order, as a sequence of tags and payload bytes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PackedImage {
    /// Format tag of the source image, e.g. `"png"`.
    pub extension: String,
    pub width: usize,
    pub height: usize,
    pub empty_rows: Vec<bool>,
    pub rows: Vec<Vec<u8>>,
}

record!(PackedImage { extension, width, height, empty_rows, rows });

impl PackedImage {
    /// Number of rows the flags say should be stored in `rows`.
    pub fn non_empty_rows(&self) -> usize {
        self.empty_rows.iter().filter(|&&empty| !empty).count()
    }

    /// Total tag and payload bytes across all stored rows.
    pub fn packed_len(&self) -> usize {
        self.rows.iter().map(Vec::len).sum()
    }
}
