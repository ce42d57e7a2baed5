//! In-memory manifest and its CSV serialization

use crate::batch::QrId;
use crate::error::Result;
use std::fmt;
use std::io;
use std::path::Path;

/// File name of the manifest inside the output directory
pub const MANIFEST_FILE_NAME: &str = "qr_list.csv";

/// Lifecycle status recorded for a label
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordStatus {
    /// Freshly generated, not yet distributed
    New,
}

impl RecordStatus {
    /// Status as written in the manifest
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::New => "new",
        }
    }
}

impl fmt::Display for RecordStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One manifest row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    /// Label identifier
    pub qr_id: QrId,
    /// URL encoded in the label
    pub url: String,
    /// Label status
    pub status: RecordStatus,
    /// HMAC signature, present only for signed batches
    pub sig: Option<String>,
}

impl Record {
    /// Record for a freshly generated label
    pub fn new(qr_id: QrId, url: String, sig: Option<String>) -> Self {
        Self {
            qr_id,
            url,
            status: RecordStatus::New,
            sig,
        }
    }
}

/// Ordered list of generated labels
#[derive(Debug, Clone, Default)]
pub struct Manifest {
    records: Vec<Record>,
    signed: bool,
}

impl Manifest {
    /// Empty manifest without a signature column
    pub fn new() -> Self {
        Self::default()
    }

    /// Empty manifest that writes a trailing `sig` column
    pub fn signed() -> Self {
        Self {
            records: Vec::new(),
            signed: true,
        }
    }

    /// Append a record, preserving generation order
    pub fn push(&mut self, record: Record) {
        self.records.push(record);
    }

    /// Records in generation order
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Number of records
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the manifest holds no records
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Header row for this manifest
    pub fn header(&self) -> &'static [&'static str] {
        if self.signed {
            &["qr_id", "url", "status", "sig"]
        } else {
            &["qr_id", "url", "status"]
        }
    }

    /// Serialize header and rows as CSV into `writer`
    pub fn write_csv<W: io::Write>(&self, writer: W) -> Result<()> {
        let mut csv = csv::WriterBuilder::new()
            .has_headers(false)
            .terminator(csv::Terminator::Any(b'\n'))
            .from_writer(writer);

        csv.write_record(self.header())?;
        for record in &self.records {
            let base = [
                record.qr_id.as_str(),
                record.url.as_str(),
                record.status.as_str(),
            ];
            if self.signed {
                csv.write_record(base.iter().copied().chain([record.sig.as_deref().unwrap_or("")]))?;
            } else {
                csv.write_record(base)?;
            }
        }
        csv.flush()?;
        Ok(())
    }

    /// Write the manifest to `path`, truncating any previous file
    pub fn write_to_path(&self, path: &Path) -> Result<()> {
        let file = std::fs::File::create(path)?;
        self.write_csv(io::BufWriter::new(file))
    }
}
