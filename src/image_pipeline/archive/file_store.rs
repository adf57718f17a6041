use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use tracing::{info, instrument};

use crate::image_pipeline::archive::stream::{read_from, write_to};
use crate::image_pipeline::common::error::{ArchiveError, Result};
use crate::image_pipeline::packing::PackedImage;

/// Writes `packed` to `path`, replacing any existing file.
#[instrument(skip(packed, path))]
pub fn save<P: AsRef<Path>>(packed: &PackedImage, path: P) -> Result<()> {
    let path = path.as_ref();

    let mut file = File::create(path).map_err(|e| {
        ArchiveError::OutputWriteError(format!("{}: {}", path.display(), e))
    })?;
    write_to(packed, &mut file).map_err(|e| match e {
        ArchiveError::IoError(e) => {
            ArchiveError::OutputWriteError(format!("{}: {}", path.display(), e))
        }
        other => other,
    })?;

    info!(path = %path.display(), "Saved packed image");
    Ok(())
}

/// Reads a packed image from `path`. A file that cannot be opened is an
/// `InputReadError`; a file that opens but does not parse cleanly is a
/// `MalformedStream` carrying every logged problem.
#[instrument(skip(path))]
pub fn load<P: AsRef<Path>>(path: P) -> Result<PackedImage> {
    let path = path.as_ref();

    let file = File::open(path).map_err(|e| {
        ArchiveError::InputReadError(format!("{}: {}", path.display(), e))
    })?;
    let packed = read_from(BufReader::new(file))?;

    info!(path = %path.display(), "Loaded packed image");
    Ok(packed)
}
