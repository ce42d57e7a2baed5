//! QR code encoder

use crate::error::{Error, Result};
use crate::qr::{DEFAULT_EC_LEVEL, MODULE_PIXELS};
use image::{GrayImage, ImageFormat, Luma};
use qrcode::QrCode;
use std::path::Path;

/// QR code encoder producing grayscale label images
#[derive(Debug, Clone)]
pub struct QrEncoder {
    /// Error correction level
    ecc_level: qrcode::EcLevel,
    /// Pixels per module
    module_pixels: u32,
}

impl QrEncoder {
    /// Create a new QR encoder with the label defaults (Medium ECC, 10px modules)
    pub fn new() -> Self {
        Self {
            ecc_level: DEFAULT_EC_LEVEL,
            module_pixels: MODULE_PIXELS,
        }
    }

    /// Encode text into a QR code image, quiet zone included
    pub fn encode_str(&self, data: &str) -> Result<GrayImage> {
        let code = QrCode::with_error_correction_level(data.as_bytes(), self.ecc_level)
            .map_err(|e| Error::QrEncode(format!("Failed to create QR code for '{data}': {e}")))?;

        Ok(code
            .render::<Luma<u8>>()
            .quiet_zone(true)
            .module_dimensions(self.module_pixels, self.module_pixels)
            .build())
    }

    /// Encode text and write it as a PNG, replacing any existing file
    pub fn write_png(&self, data: &str, path: &Path) -> Result<()> {
        let image = self.encode_str(data)?;
        image.save_with_format(path, ImageFormat::Png)?;
        Ok(())
    }
}

impl Default for QrEncoder {
    fn default() -> Self {
        Self::new()
    }
}
