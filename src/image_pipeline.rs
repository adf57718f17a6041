//! Image packing pipeline module
//!
//! This module provides row-wise packing of scanned-document bitmaps, the
//! binary serialization framework used to persist packed images, and the
//! orchestration that moves images between raw files and archives.

pub mod raw;
pub mod packing;
pub mod serialize;
pub mod archive;
pub mod conversions;
pub mod common;

pub use common::{
    ArchiveError,
    Result,
};

pub use raw::{
    RawImageData,
    RawImageReader,
    RawImageWriter,
    PgmReader,
    PgmWriter,
};

pub use packing::{
    ChunkTag,
    PackedImage,
    STEP,
    pack,
    unpack,
    unpack_into,
};

pub use archive::{
    load,
    save,
};

pub use conversions::{
    ArchiveConfig,
    ArchiveConfigBuilder,
    ImageArchivePipeline,
};
