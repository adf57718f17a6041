use tracing::{debug, instrument};

use crate::image_pipeline::common::error::{ArchiveError, Result};
use crate::image_pipeline::packing::constants::{FULL_BLACK, FULL_WHITE, STEP};
use crate::image_pipeline::packing::types::{ChunkTag, PackedImage};
use crate::image_pipeline::raw::types::{RawImageData, pixel_count};

/// Rebuilds the pixel buffer of `packed` into a newly allocated image.
///
/// The flags and stored rows are checked before the buffer is allocated.
pub fn unpack(packed: &PackedImage) -> Result<RawImageData> {
    check_layout(packed)?;
    let mut image = RawImageData::filled(packed.width, packed.height, FULL_WHITE)?;
    unpack_into(packed, image.data_mut())?;
    Ok(image)
}

/// Rebuilds the pixel buffer of `packed` into caller-owned storage, which
/// must be exactly `width * height` bytes.
///
/// The flags and stored rows are checked against each other and every stored
/// row must decode to exactly `width` samples. On error `output` may be
/// partially written.
#[instrument(level = "debug", skip_all, fields(width = packed.width, height = packed.height))]
pub fn unpack_into(packed: &PackedImage, output: &mut [u8]) -> Result<()> {
    let expected = check_layout(packed)?;
    if output.len() != expected {
        return Err(ArchiveError::BufferSizeMismatch {
            expected,
            actual: output.len(),
        });
    }

    let declared = packed.non_empty_rows();
    let mut stored = packed.rows.iter();
    let out_rows = output.chunks_exact_mut(packed.width);
    for (index, (out_row, &empty)) in out_rows.zip(&packed.empty_rows).enumerate() {
        if empty {
            out_row.fill(FULL_WHITE);
            continue;
        }

        let tagged = stored.next().ok_or(ArchiveError::RowCountMismatch {
            expected: declared,
            actual: packed.rows.len(),
        })?;
        unpack_row(index, tagged, out_row)?;
    }

    debug!("Unpacked {} stored rows", declared);
    Ok(())
}

/// Checks the dimensions, flags and stored row count against each other and
/// returns the pixel count.
fn check_layout(packed: &PackedImage) -> Result<usize> {
    let pixels = pixel_count(packed.width, packed.height)?;

    if packed.empty_rows.len() != packed.height {
        return Err(ArchiveError::FlagCountMismatch {
            expected: packed.height,
            actual: packed.empty_rows.len(),
        });
    }

    let declared = packed.non_empty_rows();
    if declared != packed.rows.len() {
        return Err(ArchiveError::RowCountMismatch {
            expected: declared,
            actual: packed.rows.len(),
        });
    }

    Ok(pixels)
}

/// Walks one tagged row. The span of every chunk, payload included, is
/// `min(STEP, samples left in the row)`, the same rule the packer uses.
fn unpack_row(row: usize, tagged: &[u8], out: &mut [u8]) -> Result<()> {
    let mut cursor = 0;
    let mut x = 0;

    while cursor < tagged.len() {
        if x == out.len() {
            return Err(ArchiveError::RowLayout {
                row,
                reason: format!("tags continue past the row width at byte {}", cursor),
            });
        }

        let span = STEP.min(out.len() - x);
        let tag = ChunkTag::try_from(tagged[cursor]).map_err(|tag| ArchiveError::UnknownTag {
            row,
            offset: cursor,
            tag,
        })?;
        cursor += 1;

        let target = &mut out[x..x + span];
        match tag {
            ChunkTag::White => target.fill(FULL_WHITE),
            ChunkTag::Black => target.fill(FULL_BLACK),
            ChunkTag::Other => {
                let payload = tagged.get(cursor..cursor + span).ok_or_else(|| {
                    ArchiveError::RowLayout {
                        row,
                        reason: format!(
                            "chunk at column {} needs {} payload bytes, {} left",
                            x,
                            span,
                            tagged.len() - cursor
                        ),
                    }
                })?;
                target.copy_from_slice(payload);
                cursor += span;
            }
        }
        x += span;
    }

    if x != out.len() {
        return Err(ArchiveError::RowLayout {
            row,
            reason: format!("tags cover {} of {} samples", x, out.len()),
        });
    }

    Ok(())
}
