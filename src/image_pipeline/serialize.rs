//! Binary serialization framework
//!
//! A record declares its fields once (see [`record!`](crate::record)); the
//! writer and the reader both walk that list in declaration order and apply
//! the per-kind rule from [`Field`] to each value.

pub mod varint;
mod field;
mod record;
mod reader;
mod writer;


use std::io::BufRead;

pub use field::{Field, FieldKind};
pub use reader::BinaryReader;
pub use record::{FieldDescriptor, Record};
pub use writer::BinaryWriter;

/// Serializes every declared field of `value`.
pub fn to_bytes<T: Record>(value: &T) -> Vec<u8> {
    let mut writer = BinaryWriter::new();
    writer.record(value);
    writer.into_bytes()
}

/// Reads `value`'s declared fields from `input`, returning the error log.
///
/// An empty log means the read succeeded. A non-empty log means `value` may
/// hold partial data and must not be trusted.
pub fn read_into<T: Record, R: BufRead>(value: &mut T, input: R) -> Vec<String> {
    let mut reader = BinaryReader::new(input);
    reader.record(value);
    reader.into_errors()
}
