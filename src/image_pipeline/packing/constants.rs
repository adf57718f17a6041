//! Values shared by the packer and the unpacker.

/// Samples per chunk. The last chunk of a row holds `width % STEP` samples
/// when the width is not a multiple of `STEP`.
pub const STEP: usize = 4;

pub const FULL_WHITE: u8 = 0xFF;
pub const FULL_BLACK: u8 = 0x00;

/// Chunk tags, drawn from a 2-bit space. `0b01` is reserved.
pub const TAG_WHITE: u8 = 0b00;
pub const TAG_BLACK: u8 = 0b10;
pub const TAG_OTHER: u8 = 0b11;
