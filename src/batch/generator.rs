//! Sequential label generator

use crate::batch::{MANIFEST_FILE_NAME, Manifest, QrId, Record, UrlSigner};
use crate::error::{Error, Result};
use crate::qr::{QrDecoder, QrEncoder};
use serde::Serialize;
use std::path::PathBuf;
use tracing::{debug, info, warn};

/// Inputs for one generation run
#[derive(Debug, Clone)]
pub struct GeneratorOptions {
    /// Prefix prepended verbatim to every identifier
    pub base_url: String,
    /// Number of labels to generate
    pub count: u32,
    /// Directory receiving the images and the manifest
    pub out_dir: PathBuf,
    /// Optional signer turning on signed URLs
    pub signer: Option<UrlSigner>,
    /// Decode each written image and compare it to its URL
    pub verify: bool,
}

impl GeneratorOptions {
    /// Options with the default count and output directory
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            count: super::DEFAULT_COUNT,
            out_dir: PathBuf::from(super::DEFAULT_OUT_DIR),
            signer: None,
            verify: false,
        }
    }
}

/// Outcome of a completed run
#[derive(Debug, Clone, Serialize)]
pub struct BatchSummary {
    /// Number of labels written
    pub generated: u32,
    /// Output directory
    pub out_dir: PathBuf,
    /// Path of the written manifest
    pub manifest: PathBuf,
    /// Whether URLs carry a signature
    pub signed: bool,
    /// Whether every image was decoded back successfully
    pub verified: bool,
}

impl BatchSummary {
    /// Human-readable confirmation line
    pub fn message(&self) -> String {
        format!(
            "Generated {} QR codes in {}",
            self.generated,
            self.out_dir.display()
        )
    }
}

/// Writes a numbered batch of QR labels plus their manifest
#[derive(Debug)]
pub struct Generator {
    options: GeneratorOptions,
    encoder: QrEncoder,
    decoder: Option<QrDecoder>,
}

impl Generator {
    /// Create a generator; rejects an empty base URL before touching the filesystem
    pub fn new(options: GeneratorOptions) -> Result<Self> {
        if options.base_url.is_empty() {
            return Err(Error::InvalidArgument(
                "base URL must not be empty".to_string(),
            ));
        }

        let decoder = options.verify.then(QrDecoder::new);

        Ok(Self {
            options,
            encoder: QrEncoder::new(),
            decoder,
        })
    }

    /// Build the record for one sequence number without rendering anything
    pub fn record_for(&self, seq: u32) -> Result<Record> {
        let qr_id = QrId::from_sequence(seq);
        let url = format!("{}{}", self.options.base_url, qr_id);

        match &self.options.signer {
            Some(signer) => {
                let sig = signer.sign(&qr_id)?;
                let url = UrlSigner::signed_url(&url, &sig);
                Ok(Record::new(qr_id, url, Some(sig)))
            }
            None => Ok(Record::new(qr_id, url, None)),
        }
    }

    /// Run the batch. Any failure aborts the run; images already written stay
    /// on disk and no manifest is produced.
    pub fn run(&self) -> Result<BatchSummary> {
        let out_dir = &self.options.out_dir;
        let count = self.options.count;

        std::fs::create_dir_all(out_dir)?;
        info!(
            count,
            out_dir = %out_dir.display(),
            signed = self.options.signer.is_some(),
            "Generating QR batch"
        );
        if count > 99_999 {
            warn!(count, "Identifiers beyond qr_99999 are wider than five digits");
        }

        let mut manifest = if self.options.signer.is_some() {
            Manifest::signed()
        } else {
            Manifest::new()
        };

        for seq in 1..=count {
            let record = self.record_for(seq)?;
            let path = out_dir.join(record.qr_id.file_name());

            self.encoder.write_png(&record.url, &path)?;

            if let Some(decoder) = &self.decoder {
                let found = decoder.decode_file(&path)?;
                if found != record.url {
                    return Err(Error::VerificationFailed {
                        qr_id: record.qr_id.to_string(),
                        expected: record.url,
                        found,
                    });
                }
            }

            debug!(qr_id = %record.qr_id, path = %path.display(), "Wrote QR image");
            manifest.push(record);
        }

        let manifest_path = out_dir.join(MANIFEST_FILE_NAME);
        manifest.write_to_path(&manifest_path)?;
        info!(
            rows = manifest.len(),
            manifest = %manifest_path.display(),
            "Wrote manifest"
        );

        Ok(BatchSummary {
            generated: count,
            out_dir: out_dir.clone(),
            manifest: manifest_path,
            signed: self.options.signer.is_some(),
            verified: self.decoder.is_some(),
        })
    }
}
