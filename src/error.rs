use thiserror::Error;

/// Errors that can occur during room detection.
///
/// The geometry pipeline itself prefers sentinel results (empty polygon,
/// zero area, unchanged input) over errors; this type covers the genuine
/// precondition violations around it.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum DetectError {
    #[error("pixel buffer size mismatch: expected {expected} bytes, got {actual}")]
    BufferSizeMismatch { expected: usize, actual: usize },

    #[error("failed to load image: {0}")]
    ImageLoad(String),
}
