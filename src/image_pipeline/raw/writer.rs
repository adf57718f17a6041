use std::io::Write;
use crate::image_pipeline::common::error::Result;
use crate::image_pipeline::raw::types::RawImageData;

pub trait RawImageWriter {
    fn write_raw(&self, image: &RawImageData, output: &mut dyn Write) -> Result<()>;
}
