//! Packed image persistence
//!
//! Drives the serialization framework over a [`PackedImage`](crate::image_pipeline::PackedImage)
//! in memory or against a file on disk.

mod file_store;
mod stream;


pub use file_store::{load, save};
pub use stream::{from_bytes, read_from, to_bytes, write_to};
