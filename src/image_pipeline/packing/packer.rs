use tracing::{debug, instrument};

use crate::image_pipeline::packing::constants::{FULL_BLACK, FULL_WHITE, STEP};
use crate::image_pipeline::packing::types::{ChunkTag, PackedImage};
use crate::image_pipeline::raw::types::RawImageData;

/// Packs `image` row by row.
///
/// Each row is cut into chunks of [`STEP`] samples (the last one may be
/// shorter). All-white chunks become a `White` tag, all-black chunks a `Black`
/// tag, anything else an `Other` tag followed by the chunk's bytes. Rows made
/// only of white chunks are flagged empty and not stored.
#[instrument(level = "debug", skip_all, fields(width = image.width(), height = image.height()))]
pub fn pack(image: &RawImageData, extension: &str) -> PackedImage {
    let mut packed = PackedImage {
        extension: extension.to_string(),
        width: image.width(),
        height: image.height(),
        empty_rows: Vec::with_capacity(image.height()),
        rows: Vec::new(),
    };

    for row in image.rows() {
        match pack_row(row) {
            Some(tagged) => {
                packed.empty_rows.push(false);
                packed.rows.push(tagged);
            }
            None => packed.empty_rows.push(true),
        }
    }

    debug!(
        stored_rows = packed.rows.len(),
        packed_bytes = packed.packed_len(),
        "Packed image"
    );
    packed
}

/// Tags one row, or returns `None` when every chunk is white.
fn pack_row(row: &[u8]) -> Option<Vec<u8>> {
    let mut tagged = Vec::with_capacity(row.len().div_ceil(STEP));
    let mut empty = true;

    for chunk in row.chunks(STEP) {
        let tag = classify(chunk);
        tagged.push(tag as u8);
        match tag {
            ChunkTag::White => {}
            ChunkTag::Black => empty = false,
            ChunkTag::Other => {
                tagged.extend_from_slice(chunk);
                empty = false;
            }
        }
    }

    (!empty).then_some(tagged)
}

pub fn classify(chunk: &[u8]) -> ChunkTag {
    if chunk.iter().all(|&b| b == FULL_WHITE) {
        ChunkTag::White
    } else if chunk.iter().all(|&b| b == FULL_BLACK) {
        ChunkTag::Black
    } else {
        ChunkTag::Other
    }
}
