//! Pipeline conversions module
//!
//! This module contains orchestration logic for archiving raw image files and
//! restoring them.

mod config;
mod image_archive;


pub use config::{ArchiveConfig, ArchiveConfigBuilder};
pub use image_archive::ImageArchivePipeline;
