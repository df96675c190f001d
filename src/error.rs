//! Errors

use thiserror::Error;

/// Errors raised while building or evaluating a triangle
#[derive(Debug, Error)]
pub enum Error {
    /// Input could not be turned into a triangle
    #[error("invalid input: {0}")]
    InvalidInput(String),
    /// Triangle has zero area and the configuration rejects it
    #[error("degenerate triangle: ({0}, {1}), ({2}, {3}), ({4}, {5}) are collinear")]
    Degenerate(f64, f64, f64, f64, f64, f64),
    /// An edge spans more than the allowed extent along one axis
    #[error("edge extent {extent} exceeds limit {limit}")]
    OutOfRange { extent: f64, limit: f64 },
    /// Writing a coverage image failed
    #[error(transparent)]
    Image(#[from] image::ImageError),
}

/// Result with [Error](enum.Error.html)
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub(crate) fn invalid<S: Into<String>>(msg: S) -> Self {
        Error::InvalidInput(msg.into())
    }
}
