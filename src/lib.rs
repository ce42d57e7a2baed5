//! qrbatch - numbered QR label batches for loyalty programs
//!
//! Generates `qr_00001.png`, `qr_00002.png`, ... each encoding
//! `base_url + qr_id`, and a `qr_list.csv` manifest listing every identifier,
//! its URL and its status.
//!
//! # Example
//!
//! ```no_run
//! use qrbatch::{Generator, GeneratorOptions};
//!
//! fn main() -> anyhow::Result<()> {
//!     let mut options = GeneratorOptions::new("https://example.fr/scan?qr=");
//!     options.count = 3;
//!     options.out_dir = "labels".into();
//!
//!     let summary = Generator::new(options)?.run()?;
//!     println!("{}", summary.message());
//!     Ok(())
//! }
//! ```

#![warn(missing_docs, rust_2024_compatibility)]

pub mod batch;
pub mod config;
pub mod error;
pub mod logging;
pub mod qr;

// Re-exports for convenience
pub use error::{Error, Result};

pub use batch::{BatchSummary, Generator, GeneratorOptions, Manifest, QrId, Record, UrlSigner};
pub use config::{BatchOptions, LogRotation, LoggingOptions, QrBatchConfig, SigningOptions};
pub use qr::{QrDecoder, QrEncoder};
