//! Row packing module
//!
//! Converts raw pixel buffers to the run-tagged [`PackedImage`] form and back.

pub mod constants;
mod packer;
mod unpacker;
pub mod types;

#[cfg(test)]
mod tests;

pub use constants::STEP;
pub use packer::{classify, pack};
pub use types::{ChunkTag, PackedImage};
pub use unpacker::{unpack, unpack_into};
