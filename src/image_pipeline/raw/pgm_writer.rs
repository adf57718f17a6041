use std::io::Write;
use tracing::debug;
use crate::image_pipeline::common::error::Result;
use crate::image_pipeline::raw::types::RawImageData;
use crate::image_pipeline::raw::writer::RawImageWriter;

/// Writes 8-bit binary PGM (`P5`, maxval 255).
pub struct PgmWriter;

impl RawImageWriter for PgmWriter {
    fn write_raw(&self, image: &RawImageData, output: &mut dyn Write) -> Result<()> {
        debug!("Encoding PGM image: {}x{}", image.width(), image.height());

        let mut buffer = format!("P5\n{} {}\n255\n", image.width(), image.height()).into_bytes();
        buffer.extend_from_slice(image.data());

        output.write_all(&buffer)?;

        debug!("PGM encoding complete");
        Ok(())
    }
}
