//! Per-kind traversal rules.
//!
//! Unsigned integers and booleans are single varints, strings are a varint
//! byte length followed by the raw bytes, and sequences are a varint element
//! count followed by each element under its own rule. Nesting is unbounded
//! (`Vec<Vec<u8>>` is a count, then a count per inner sequence, then bytes).

use std::fmt;
use std::io::BufRead;

use crate::image_pipeline::serialize::reader::BinaryReader;
use crate::image_pipeline::serialize::writer::BinaryWriter;

/// Shape of a serializable value, used for schema listings and diagnostics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldKind {
    Unsigned(&'static str),
    Bool,
    Text,
    Sequence(Box<FieldKind>),
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldKind::Unsigned(name) => f.write_str(name),
            FieldKind::Bool => f.write_str("bool"),
            FieldKind::Text => f.write_str("string"),
            FieldKind::Sequence(inner) => write!(f, "seq<{}>", inner),
        }
    }
}

/// A value that knows how to write itself and how to read itself back.
///
/// `decode` never fails outright: problems are logged on the reader and the
/// destination keeps whatever was read before the problem.
pub trait Field: Default {
    fn kind() -> FieldKind;

    fn encode(&self, writer: &mut BinaryWriter);

    fn decode<R: BufRead>(&mut self, reader: &mut BinaryReader<R>);
}

macro_rules! unsigned_field {
    ($($ty:ty),+) => {
        $(
            impl Field for $ty {
                fn kind() -> FieldKind {
                    FieldKind::Unsigned(stringify!($ty))
                }

                fn encode(&self, writer: &mut BinaryWriter) {
                    writer.write_unsigned(*self as u64);
                }

                fn decode<R: BufRead>(&mut self, reader: &mut BinaryReader<R>) {
                    let Some(value) = reader.read_unsigned("number") else {
                        return;
                    };
                    match <$ty>::try_from(value) {
                        Ok(value) => *self = value,
                        Err(_) => reader.error(format!(
                            "value {} out of range for {}",
                            value,
                            stringify!($ty)
                        )),
                    }
                }
            }
        )+
    };
}

unsigned_field!(u8, u16, u32, u64, usize);

/// Only 0 and 1 are accepted on read; any other value is logged as malformed
/// and the destination is left unchanged.
impl Field for bool {
    fn kind() -> FieldKind {
        FieldKind::Bool
    }

    fn encode(&self, writer: &mut BinaryWriter) {
        writer.write_unsigned(u64::from(*self));
    }

    fn decode<R: BufRead>(&mut self, reader: &mut BinaryReader<R>) {
        match reader.read_unsigned("bool") {
            Some(0) => *self = false,
            Some(1) => *self = true,
            Some(other) => reader.error(format!("invalid bool value {}", other)),
            None => {}
        }
    }
}

impl Field for String {
    fn kind() -> FieldKind {
        FieldKind::Text
    }

    fn encode(&self, writer: &mut BinaryWriter) {
        writer.write_unsigned(self.len() as u64);
        writer.write_bytes(self.as_bytes());
    }

    fn decode<R: BufRead>(&mut self, reader: &mut BinaryReader<R>) {
        let Some(len) = reader.read_unsigned("string size") else {
            return;
        };

        let mut bytes = Vec::new();
        let found = reader.read_bytes(len, &mut bytes);
        if found < len {
            reader.error(format!(
                "expected {} bytes in string but only found {}",
                len, found
            ));
        }

        *self = match String::from_utf8(bytes) {
            Ok(text) => text,
            Err(e) => {
                reader.error("string is not valid UTF-8");
                String::from_utf8_lossy(e.as_bytes()).into_owned()
            }
        };
    }
}

impl<T: Field> Field for Vec<T> {
    fn kind() -> FieldKind {
        FieldKind::Sequence(Box::new(T::kind()))
    }

    fn encode(&self, writer: &mut BinaryWriter) {
        writer.write_unsigned(self.len() as u64);
        for element in self {
            element.encode(writer);
        }
    }

    fn decode<R: BufRead>(&mut self, reader: &mut BinaryReader<R>) {
        let Some(count) = reader.read_unsigned("sequence size") else {
            return;
        };

        self.clear();
        let mut found = 0u64;
        while found < count && !reader.at_end() {
            let mut element = T::default();
            element.decode(reader);
            self.push(element);
            found += 1;
        }

        if found != count {
            reader.error(format!(
                "expected {} elements in {} but only found {}",
                count,
                Self::kind(),
                found
            ));
        }
    }
}
