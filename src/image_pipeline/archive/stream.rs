use std::io::{BufRead, Write};

use tracing::{debug, warn};

use crate::image_pipeline::common::error::{ArchiveError, Result};
use crate::image_pipeline::packing::PackedImage;
use crate::image_pipeline::serialize;

/// Serialized archive bytes: extension, width, height, empty-row flags, rows.
pub fn to_bytes(packed: &PackedImage) -> Vec<u8> {
    serialize::to_bytes(packed)
}

pub fn write_to(packed: &PackedImage, output: &mut dyn Write) -> Result<()> {
    let bytes = to_bytes(packed);
    output.write_all(&bytes)?;
    debug!("Wrote {} archive bytes", bytes.len());
    Ok(())
}

/// Reads one archive from `input`.
///
/// Every problem found during the pass is collected; if there was any, the
/// partially read value is discarded and the whole log is returned as
/// `MalformedStream`.
pub fn read_from<R: BufRead>(input: R) -> Result<PackedImage> {
    let mut packed = PackedImage::default();
    let errors = serialize::read_into(&mut packed, input);

    if !errors.is_empty() {
        warn!("Archive read failed with {} error(s)", errors.len());
        return Err(ArchiveError::MalformedStream(errors));
    }

    debug!(
        width = packed.width,
        height = packed.height,
        stored_rows = packed.rows.len(),
        "Read archive"
    );
    Ok(packed)
}

pub fn from_bytes(bytes: &[u8]) -> Result<PackedImage> {
    read_from(bytes)
}
