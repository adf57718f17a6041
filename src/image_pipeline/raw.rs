//! Raw image module
//!
//! This module provides the in-memory pixel buffer plus the file readers and
//! writers that move it to and from disk.

mod reader;
mod writer;
mod pgm_reader;
mod pgm_writer;
pub mod types;


pub use reader::RawImageReader;
pub use writer::RawImageWriter;
pub use pgm_reader::PgmReader;
pub use pgm_writer::PgmWriter;
pub use types::RawImageData;
