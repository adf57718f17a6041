use thiserror::Error;

#[derive(Error, Debug)]
pub enum ArchiveError {
    #[error("Failed to read input file: {0}")]
    InputReadError(String),

    #[error("Failed to write output file: {0}")]
    OutputWriteError(String),

    #[error("Invalid image dimensions: width={0}, height={1}")]
    InvalidDimensions(usize, usize),

    #[error("Pixel buffer holds {actual} bytes, expected {expected}")]
    BufferSizeMismatch { expected: usize, actual: usize },

    #[error("Unknown chunk tag {tag:#04x} in row {row} at byte {offset}")]
    UnknownTag { row: usize, offset: usize, tag: u8 },

    #[error("Malformed packed row {row}: {reason}")]
    RowLayout { row: usize, reason: String },

    #[error("Packed image has {actual} empty-row flags for {expected} rows")]
    FlagCountMismatch { expected: usize, actual: usize },

    #[error("Packed image declares {expected} non-empty rows but stores {actual}")]
    RowCountMismatch { expected: usize, actual: usize },

    #[error("Malformed archive stream: {}", .0.join("; "))]
    MalformedStream(Vec<String>),

    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ArchiveError>;
