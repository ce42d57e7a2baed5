//! Error types for qrbatch operations

use thiserror::Error;

/// Result type alias using qrbatch's Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for qrbatch operations
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid generator input (empty base URL and the like)
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// QR code encoding failed
    #[error("Failed to encode QR code: {0}")]
    QrEncode(String),

    /// QR code decoding failed
    #[error("Failed to decode QR code: {0}")]
    QrDecode(String),

    /// No QR code found in image
    #[error("No QR code found in image")]
    NoQrCodeFound,

    /// A written image did not decode back to its URL
    #[error("Verification failed for {qr_id}: expected '{expected}', decoded '{found}'")]
    VerificationFailed {
        /// Identifier of the offending image
        qr_id: String,
        /// URL the image should encode
        expected: String,
        /// Text actually decoded from the image
        found: String,
    },

    /// URL signing error
    #[error("Signing error: {0}")]
    Signing(String),

    /// Manifest serialization error
    #[error("Manifest error: {0}")]
    Manifest(String),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Image processing error
    #[error("Image processing error: {0}")]
    Image(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<image::ImageError> for Error {
    fn from(e: image::ImageError) -> Self {
        Error::Image(e.to_string())
    }
}

impl From<csv::Error> for Error {
    fn from(e: csv::Error) -> Self {
        Error::Manifest(e.to_string())
    }
}
