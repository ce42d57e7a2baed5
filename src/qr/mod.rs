//! QR code rendering and scan-back
//!
//! Labels are rendered with fixed parameters so every batch prints identically:
//! error-correction level M, 10 pixels per module and the standard 4-module
//! quiet zone. The decoder is only used to check that written images read back
//! to the URL they were generated for.

mod decoder;
mod encoder;

pub use decoder::QrDecoder;
pub use encoder::QrEncoder;

/// Error-correction level used for every label
pub const DEFAULT_EC_LEVEL: qrcode::EcLevel = qrcode::EcLevel::M;

/// Edge length of one module in pixels
pub const MODULE_PIXELS: u32 = 10;

/// Quiet zone width in modules, as emitted by the `qrcode` renderer
pub const QUIET_ZONE_MODULES: u32 = 4;
