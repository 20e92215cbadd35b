//! Stateless CSRF tokens for the search form.
//!
//! A token is `<issued>.<signature>` where `issued` is a Unix timestamp and
//! the signature is a SHA-256 digest keyed with the application secret.
//! No server-side session is needed to check one.

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use chrono::Utc;
use sha2::{Digest, Sha256};
use subtle::ConstantTimeEq;

/// Tokens older than this are rejected.
const TOKEN_TTL_SECS: i64 = 3600;

/// Why a submitted token was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum CsrfError {
    #[error("The CSRF token is missing.")]
    Missing,

    #[error("The CSRF token is invalid.")]
    Invalid,

    #[error("The CSRF token has expired.")]
    Expired,
}

/// Issues and checks form tokens.
#[derive(Clone)]
pub struct CsrfSigner {
    key: Vec<u8>,
}

impl CsrfSigner {
    pub fn new(secret: &str) -> Self {
        Self {
            key: secret.as_bytes().to_vec(),
        }
    }

    /// Token for a form rendered now.
    pub fn issue(&self) -> String {
        self.issue_at(Utc::now().timestamp())
    }

    pub fn issue_at(&self, issued: i64) -> String {
        format!("{issued}.{}", self.sign(issued))
    }

    /// Check a token submitted now.
    pub fn verify(&self, token: &str) -> Result<(), CsrfError> {
        self.verify_at(token, Utc::now().timestamp())
    }

    pub fn verify_at(&self, token: &str, now: i64) -> Result<(), CsrfError> {
        let token = token.trim();
        if token.is_empty() {
            return Err(CsrfError::Missing);
        }

        let (issued, signature) = token.split_once('.').ok_or(CsrfError::Invalid)?;
        let issued: i64 = issued.parse().map_err(|_| CsrfError::Invalid)?;

        let expected = self.sign(issued);
        if !bool::from(signature.as_bytes().ct_eq(expected.as_bytes())) {
            return Err(CsrfError::Invalid);
        }

        if now.saturating_sub(issued) > TOKEN_TTL_SECS {
            return Err(CsrfError::Expired);
        }
        Ok(())
    }

    fn sign(&self, issued: i64) -> String {
        let mut hasher = Sha256::new();
        hasher.update(&self.key);
        hasher.update(b":");
        hasher.update(issued.to_string().as_bytes());
        URL_SAFE_NO_PAD.encode(hasher.finalize())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const NOW: i64 = 1_700_000_000;

    #[test]
    fn fresh_token_verifies() {
        let signer = CsrfSigner::new("secret");
        let token = signer.issue_at(NOW);
        assert_eq!(signer.verify_at(&token, NOW + 10), Ok(()));
    }

    #[test]
    fn issued_token_verifies_now() {
        let signer = CsrfSigner::new("secret");
        assert_eq!(signer.verify(&signer.issue()), Ok(()));
    }

    #[test]
    fn missing_token() {
        let signer = CsrfSigner::new("secret");
        assert_eq!(signer.verify_at("", NOW), Err(CsrfError::Missing));
        assert_eq!(CsrfError::Missing.to_string(), "The CSRF token is missing.");
    }

    #[test]
    fn other_secret_is_invalid() {
        let token = CsrfSigner::new("secret").issue_at(NOW);
        let other = CsrfSigner::new("different");
        assert_eq!(other.verify_at(&token, NOW), Err(CsrfError::Invalid));
    }

    #[test]
    fn tampered_timestamp_is_invalid() {
        let signer = CsrfSigner::new("secret");
        let token = signer.issue_at(NOW);
        let (_, signature) = token.split_once('.').unwrap();
        let forged = format!("{}.{signature}", NOW + 7200);
        assert_eq!(signer.verify_at(&forged, NOW + 7200), Err(CsrfError::Invalid));
    }

    #[test]
    fn garbage_is_invalid() {
        let signer = CsrfSigner::new("secret");
        for token in ["abc", "abc.def", "123", "."] {
            assert_eq!(signer.verify_at(token, NOW), Err(CsrfError::Invalid), "{token}");
        }
    }

    #[test]
    fn old_token_expires() {
        let signer = CsrfSigner::new("secret");
        let token = signer.issue_at(NOW);
        assert_eq!(
            signer.verify_at(&token, NOW + TOKEN_TTL_SECS + 1),
            Err(CsrfError::Expired)
        );
        assert_eq!(signer.verify_at(&token, NOW + TOKEN_TTL_SECS), Ok(()));
    }
}
