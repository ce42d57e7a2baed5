//! Sequential label identifiers

use std::fmt;

/// Zero-padded label identifier such as `qr_00001`
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct QrId(String);

impl QrId {
    /// Identifier prefix
    pub const PREFIX: &'static str = "qr_";

    /// Minimum width of the numeric part
    pub const WIDTH: usize = 5;

    /// Build the identifier for a sequence number. Numbers wider than
    /// [`QrId::WIDTH`] digits are kept whole rather than truncated.
    pub fn from_sequence(seq: u32) -> Self {
        Self(format!("{}{:0width$}", Self::PREFIX, seq, width = Self::WIDTH))
    }

    /// Identifier as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Image file name for this identifier
    pub fn file_name(&self) -> String {
        format!("{}.png", self.0)
    }
}

impl fmt::Display for QrId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for QrId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
