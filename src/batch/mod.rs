//! Batch generation of numbered QR labels
//!
//! A run walks the sequence `1..=count`, derives an identifier and URL for each
//! number, writes `<qr_id>.png` into the output directory and finally persists
//! the whole [`Manifest`] as `qr_list.csv`.

mod generator;
mod id;
mod manifest;
mod signing;

pub use generator::{BatchSummary, Generator, GeneratorOptions};
pub use id::QrId;
pub use manifest::{MANIFEST_FILE_NAME, Manifest, Record, RecordStatus};
pub use signing::UrlSigner;

use crate::error::{Error, Result};

/// Default number of codes generated per run
pub const DEFAULT_COUNT: u32 = 100;

/// Default output directory
pub const DEFAULT_OUT_DIR: &str = "./qr_output";

/// Number of codes to generate for a requested count. Zero and negative
/// requests generate nothing; counts beyond `u32::MAX` are rejected.
pub fn effective_count(requested: i64) -> Result<u32> {
    u32::try_from(requested.max(0)).map_err(|_| {
        Error::InvalidArgument(format!("count {requested} exceeds the supported maximum"))
    })
}
