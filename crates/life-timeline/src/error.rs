//! Timeline file error types.

use thiserror::Error;

/// Timeline persistence error type.
#[derive(Debug, Error)]
pub enum TimelineError {
    /// IO error.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Encoding or decoding failed, including timelines whose generations
    /// do not share one shape or hold unknown states.
    #[error("encoding error: {0}")]
    Encode(#[from] bincode::Error),

    /// Not a timeline file.
    #[error("not a timeline file")]
    BadMagic,

    /// Written by a newer or older, incompatible format.
    #[error("unsupported timeline format version: {0}")]
    UnsupportedVersion(u32),
}

/// Result type for timeline persistence.
pub type TimelineResult<T> = Result<T, TimelineError>;
