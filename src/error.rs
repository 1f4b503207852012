//! Error types for the rendering pipeline.

use thiserror::Error;

/// Result type alias for encode and decode operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while encoding or decoding barcodes.
///
/// `InvalidArgument` means the caller's input was malformed and is rejected
/// before any encoding work starts; `EncodingFailure` means the input was
/// well formed but the symbol provider could not produce a symbol for it,
/// so callers can branch on the failure kind instead of catching a generic
/// error.
#[derive(Error, Debug)]
pub enum Error {
    /// Malformed caller input (empty contents, unsupported format,
    /// negative dimensions).
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),

    /// The symbol provider could not produce a symbol for the given
    /// contents and error correction level.
    #[error("could not generate symbol")]
    EncodingFailure(#[from] SymbolError),

    /// The symbol provider returned a matrix with zero width or height.
    #[error("module matrix has zero width or height")]
    DegenerateMatrix,

    /// No symbol was located in the image.
    #[error("no symbol found")]
    NotFound,
}

/// Failure reported by a [`SymbolProvider`](crate::writer::SymbolProvider).
#[derive(Error, Debug, Clone)]
#[error("{message}")]
pub struct SymbolError {
    message: String,
}

impl SymbolError {
    /// Creates a provider failure with the given message.
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into() }
    }
}
