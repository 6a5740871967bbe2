use thiserror::Error;

/// Errors from reader and file hashing.
///
/// Hashing an in-memory byte slice cannot fail; these only arise when input
/// has to be pulled from an I/O source.
#[derive(Debug, Error)]
pub enum CryptoError {
    #[error("chunk size must be greater than zero, got {0}")]
    InvalidChunkSize(usize),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type CryptoResult<T> = Result<T, CryptoError>;
