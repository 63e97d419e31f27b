use thiserror::Error;

/// Errors that can occur while vectorizing a pixel grid.
///
/// Walk overruns are not errors: they are collected as warnings in
/// [`crate::Vectorized::overruns`].
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum VectorizeError {
    #[error("invalid grid: {0}")]
    InvalidGrid(String),

    #[error("area #{color:08x} has no border cells")]
    EmptyAreaBorder { color: u32 },

    #[error("failed to load image: {0}")]
    ImageLoad(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
