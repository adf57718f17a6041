use std::io::BufRead;

use crate::image_pipeline::serialize::field::{Field, FieldKind};
use crate::image_pipeline::serialize::reader::BinaryReader;
use crate::image_pipeline::serialize::writer::BinaryWriter;

/// A structured value with a fixed, ordered list of named fields.
///
/// Implement it with [`record!`](crate::record) so the field list is written
/// once and drives both directions.
pub trait Record {
    const NAME: &'static str;

    fn write_fields(&self, writer: &mut BinaryWriter);

    fn read_fields<R: BufRead>(&mut self, reader: &mut BinaryReader<R>);

    fn schema(&self) -> Vec<FieldDescriptor>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDescriptor {
    pub name: &'static str,
    pub kind: FieldKind,
}

impl FieldDescriptor {
    pub fn of<T: Field>(name: &'static str, _value: &T) -> Self {
        Self {
            name,
            kind: T::kind(),
        }
    }
}

/// Declares the serialized field order of a struct.
///
/// ```ignore
/// record!(PackedImage { extension, width, height, empty_rows, rows });
/// ```
#[macro_export]
macro_rules! record {
    ($ty:ident { $($field:ident),+ $(,)? }) => {
        impl $crate::image_pipeline::serialize::Record for $ty {
            const NAME: &'static str = stringify!($ty);

            fn write_fields(&self, writer: &mut $crate::image_pipeline::serialize::BinaryWriter) {
                $( writer.field(stringify!($field), &self.$field); )+
            }

            fn read_fields<R: ::std::io::BufRead>(
                &mut self,
                reader: &mut $crate::image_pipeline::serialize::BinaryReader<R>,
            ) {
                $( reader.field(stringify!($field), &mut self.$field); )+
            }

            fn schema(&self) -> Vec<$crate::image_pipeline::serialize::FieldDescriptor> {
                vec![
                    $( $crate::image_pipeline::serialize::FieldDescriptor::of(
                        stringify!($field),
                        &self.$field,
                    ), )+
                ]
            }
        }
    };
}
