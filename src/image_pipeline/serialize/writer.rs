use tracing::trace;

use crate::image_pipeline::serialize::field::Field;
use crate::image_pipeline::serialize::record::Record;
use crate::image_pipeline::serialize::varint;

/// Serializing visitor. Output accumulates in memory, so writing never fails;
/// moving the bytes to a file is the caller's concern.
#[derive(Debug, Default)]
pub struct BinaryWriter {
    buf: Vec<u8>,
}

impl BinaryWriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn write_unsigned(&mut self, value: u64) {
        varint::encode(value, &mut self.buf);
    }

    pub fn write_bytes(&mut self, bytes: &[u8]) {
        self.buf.extend_from_slice(bytes);
    }

    pub fn field<T: Field>(&mut self, name: &'static str, value: &T) {
        let start = self.buf.len();
        value.encode(self);
        trace!(field = name, bytes = self.buf.len() - start, "wrote field");
    }

    pub fn record<T: Record>(&mut self, value: &T) {
        let start = self.buf.len();
        value.write_fields(self);
        trace!(record = T::NAME, bytes = self.buf.len() - start, "wrote record");
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.buf
    }
}
