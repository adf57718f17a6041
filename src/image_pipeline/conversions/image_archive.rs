use tracing::{info, instrument, warn};
use std::io::Write;
use std::path::Path;

use crate::image_pipeline::{
    archive,
    common::error::{ArchiveError, Result},
    conversions::config::ArchiveConfig,
    packing::{self, PackedImage},
    raw::{PgmReader, PgmWriter, RawImageReader, RawImageWriter},
};

pub struct ImageArchivePipeline<R: RawImageReader, W: RawImageWriter> {
    reader: R,
    writer: W,
    config: ArchiveConfig,
}

impl ImageArchivePipeline<PgmReader, PgmWriter> {
    pub fn new(config: ArchiveConfig) -> Self {
        Self {
            reader: PgmReader,
            writer: PgmWriter,
            config,
        }
    }
}

impl<R: RawImageReader, W: RawImageWriter> ImageArchivePipeline<R, W> {
    pub fn with_custom(reader: R, writer: W, config: ArchiveConfig) -> Self {
        Self {
            reader,
            writer,
            config,
        }
    }

    fn validate_dimensions(&self, width: usize, height: usize) -> Result<()> {
        if !self.config.validate_dimensions {
            return Ok(());
        }

        if width == 0 || height == 0 {
            return Err(ArchiveError::InvalidDimensions(width, height));
        }

        if let Some(max) = self.config.max_dimension {
            if width > max || height > max {
                warn!("Image dimensions {}x{} exceed maximum {}", width, height, max);
                return Err(ArchiveError::InvalidDimensions(width, height));
            }
        }

        Ok(())
    }

    /// Decodes a raw image file and packs it.
    #[instrument(skip(self, input_data), fields(input_size = input_data.len()))]
    pub fn archive(&self, input_data: &[u8]) -> Result<PackedImage> {
        let raw_image = {
            let _span = tracing::info_span!("decode_raw").entered();
            self.reader.read_raw(input_data)?
        };

        {
            let _span = tracing::info_span!("validate_dimensions",
                width = raw_image.width(),
                height = raw_image.height()
            ).entered();
            self.validate_dimensions(raw_image.width(), raw_image.height())?;
        }

        let packed = {
            let _span = tracing::info_span!("pack").entered();
            packing::pack(&raw_image, &self.config.extension)
        };

        info!(
            width = packed.width,
            height = packed.height,
            raw_bytes = raw_image.data().len(),
            packed_bytes = packed.packed_len(),
            "Packing complete"
        );
        Ok(packed)
    }

    /// Unpacks `packed` and encodes it with the pipeline's writer.
    #[instrument(skip(self, packed, output), fields(width = packed.width, height = packed.height))]
    pub fn restore(&self, packed: &PackedImage, output: &mut dyn Write) -> Result<()> {
        self.validate_dimensions(packed.width, packed.height)?;

        let raw_image = {
            let _span = tracing::info_span!("unpack").entered();
            packing::unpack(packed)?
        };

        {
            let _span = tracing::info_span!("encode_raw").entered();
            self.writer.write_raw(&raw_image, output)?;
        }

        info!("Restore complete");
        Ok(())
    }

    #[instrument(skip(self, input_path, output_path))]
    pub fn archive_file<P: AsRef<Path>, Q: AsRef<Path>>(
        &self,
        input_path: P,
        output_path: Q,
    ) -> Result<PackedImage> {
        let input_path = input_path.as_ref();
        let output_path = output_path.as_ref();

        info!(
            input = %input_path.display(),
            output = %output_path.display(),
            "Archiving file"
        );

        let input_data = {
            let _span = tracing::info_span!("read_input_file").entered();
            std::fs::read(input_path).map_err(|e| {
                ArchiveError::InputReadError(format!("{}: {}", input_path.display(), e))
            })?
        };

        let packed = self.archive(&input_data)?;
        archive::save(&packed, output_path)?;

        Ok(packed)
    }

    #[instrument(skip(self, input_path, output_path))]
    pub fn restore_file<P: AsRef<Path>, Q: AsRef<Path>>(
        &self,
        input_path: P,
        output_path: Q,
    ) -> Result<()> {
        let input_path = input_path.as_ref();
        let output_path = output_path.as_ref();

        info!(
            input = %input_path.display(),
            output = %output_path.display(),
            "Restoring file"
        );

        let packed = archive::load(input_path)?;

        let mut output_file = {
            let _span = tracing::info_span!("create_output_file").entered();
            std::fs::File::create(output_path).map_err(|e| {
                ArchiveError::OutputWriteError(format!("{}: {}", output_path.display(), e))
            })?
        };

        self.restore(&packed, &mut output_file)
    }

    pub fn config(&self) -> &ArchiveConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: ArchiveConfig) {
        self.config = config;
    }
}
