//! HMAC signatures appended to label URLs

use crate::batch::QrId;
use crate::error::{Error, Result};
use hmac::{Hmac, Mac};
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

/// Signs identifiers with HMAC-SHA256 so the scan endpoint can reject forged labels
#[derive(Clone)]
pub struct UrlSigner {
    secret: Vec<u8>,
}

impl UrlSigner {
    /// Create a signer; the secret must not be empty
    pub fn new(secret: impl AsRef<[u8]>) -> Result<Self> {
        let secret = secret.as_ref();
        if secret.is_empty() {
            return Err(Error::Config("Signing secret must not be empty".to_string()));
        }
        Ok(Self {
            secret: secret.to_vec(),
        })
    }

    /// Lowercase hex HMAC-SHA256 of `message`
    pub fn sign_str(&self, message: &str) -> Result<String> {
        let mut mac = HmacSha256::new_from_slice(&self.secret)
            .map_err(|e| Error::Signing(format!("Invalid HMAC key: {e}")))?;
        mac.update(message.as_bytes());
        Ok(hex::encode(mac.finalize().into_bytes()))
    }

    /// Signature for a label identifier
    pub fn sign(&self, qr_id: &QrId) -> Result<String> {
        self.sign_str(qr_id.as_str())
    }

    /// Append the signature parameter to an already built URL, opening a
    /// query string when the URL has none
    pub fn signed_url(url: &str, sig: &str) -> String {
        let separator = if url.contains('?') { '&' } else { '?' };
        format!("{url}{separator}sig={sig}")
    }
}

impl std::fmt::Debug for UrlSigner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UrlSigner")
            .field("secret", &"<redacted>")
            .finish()
    }
}
