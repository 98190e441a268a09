//! Error types for the qrgrid crate.

use thiserror::Error;

/// The error type for building and writing QR symbols.
#[derive(Debug, Error)]
pub enum QrError {
    /// The requested version is outside the QR Code Model 2 range.
    #[error("invalid version {0}: must be between 1 and 40")]
    InvalidVersion(i32),

    /// The mode value is not exactly one of the four one-hot mode indicators.
    #[error("invalid mode {0:#06b}: expected Numeric(1), Alphanumeric(2), Binary(4) or Kanji(8)")]
    InvalidMode(u8),

    /// An error while creating the output directory or file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// An error while encoding or saving a raster image.
    #[error("image error: {0}")]
    Image(#[from] image::ImageError),
}

/// A convenience `Result` type alias using the crate's `QrError` type.
pub type Result<T> = std::result::Result<T, QrError>;
