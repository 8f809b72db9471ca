//! Session Token Codec
//!
//! Mints and validates the stateless session marker carried by the `auth`
//! cookie. The token is `"<issued_at_ms>.<base64url(hmac_sha256(secret,
//! issued_at_ms))>"`; there is no server-side session registry, so the
//! token's signature and embedded issue time are the whole session.
//!
//! Expiry is measured from issuance (24h by default) and does not slide.

use hmac::{Hmac, Mac};
use sha2::Sha256;
use std::time::Duration;

use platform::crypto::{from_base64_url, to_base64_url};

/// Validation outcome for a presented session token
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionToken {
    /// Signature checks out and the token is within its lifetime
    Valid {
        /// Absolute expiry, unix ms
        expires_at_ms: i64,
    },
    /// Signature checks out but the lifetime has elapsed
    Expired,
    /// Malformed token or signature mismatch
    Forged,
}

impl SessionToken {
    /// Whether this token grants a session
    pub fn is_valid(&self) -> bool {
        matches!(self, SessionToken::Valid { .. })
    }
}

/// Issues and validates signed session tokens
#[derive(Debug, Clone)]
pub struct SessionCodec {
    secret: [u8; 32],
    ttl_ms: i64,
}

impl SessionCodec {
    pub fn new(secret: [u8; 32], ttl: Duration) -> Self {
        Self {
            secret,
            ttl_ms: ttl.as_millis() as i64,
        }
    }

    /// Mint a token issued at `now_ms`
    pub fn issue(&self, now_ms: i64) -> String {
        let payload = now_ms.to_string();
        let signature = self.sign(payload.as_bytes());
        format!("{}.{}", payload, to_base64_url(&signature))
    }

    /// Validate a presented token against `now_ms`
    pub fn validate(&self, token: &str, now_ms: i64) -> SessionToken {
        let Some((payload, signature_b64)) = token.split_once('.') else {
            return SessionToken::Forged;
        };

        let Ok(signature) = from_base64_url(signature_b64) else {
            return SessionToken::Forged;
        };

        let mut mac = Hmac::<Sha256>::new_from_slice(&self.secret)
            .expect("HMAC can take key of any size");
        mac.update(payload.as_bytes());
        if mac.verify_slice(&signature).is_err() {
            return SessionToken::Forged;
        }

        // Signature is valid, so the payload is server-issued; a parse
        // failure here still means tampering
        let Ok(issued_at_ms) = payload.parse::<i64>() else {
            return SessionToken::Forged;
        };

        let expires_at_ms = issued_at_ms.saturating_add(self.ttl_ms);
        if now_ms >= expires_at_ms {
            return SessionToken::Expired;
        }

        SessionToken::Valid { expires_at_ms }
    }

    fn sign(&self, data: &[u8]) -> [u8; 32] {
        let mut mac = Hmac::<Sha256>::new_from_slice(&self.secret)
            .expect("HMAC can take key of any size");
        mac.update(data);
        mac.finalize().into_bytes().into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TTL: Duration = Duration::from_secs(86_400);

    fn codec() -> SessionCodec {
        SessionCodec::new([7u8; 32], TTL)
    }

    #[test]
    fn test_issue_then_validate() {
        let codec = codec();
        let now = 1_700_000_000_000;
        let token = codec.issue(now);

        match codec.validate(&token, now + 1) {
            SessionToken::Valid { expires_at_ms } => {
                assert_eq!(expires_at_ms, now + 86_400_000);
            }
            other => panic!("expected Valid, got {:?}", other),
        }
    }

    #[test]
    fn test_expired_token() {
        let codec = codec();
        let now = 1_700_000_000_000;
        let token = codec.issue(now);

        assert_eq!(
            codec.validate(&token, now + 86_400_000),
            SessionToken::Expired
        );
        assert_eq!(
            codec.validate(&token, now + 86_400_001),
            SessionToken::Expired
        );
    }

    #[test]
    fn test_forged_signature() {
        let codec = codec();
        let other = SessionCodec::new([8u8; 32], TTL);
        let now = 1_700_000_000_000;

        // Token signed with a different secret
        let token = other.issue(now);
        assert_eq!(codec.validate(&token, now), SessionToken::Forged);

        // Tampered payload keeps the old signature
        let token = codec.issue(now);
        let (_, sig) = token.split_once('.').unwrap();
        let tampered = format!("{}.{}", now + 1, sig);
        assert_eq!(codec.validate(&tampered, now), SessionToken::Forged);
    }

    #[test]
    fn test_garbage_tokens() {
        let codec = codec();
        let now = 1_700_000_000_000;

        for garbage in ["", "true", "a.b", "a.b.c", "12345", ".", "12345."] {
            assert_eq!(
                codec.validate(garbage, now),
                SessionToken::Forged,
                "token {:?} should be forged",
                garbage
            );
        }
    }

    #[test]
    fn test_validation_is_deterministic() {
        let codec = codec();
        let now = 1_700_000_000_000;
        let token = codec.issue(now);

        let first = codec.validate(&token, now + 5);
        let second = codec.validate(&token, now + 5);
        assert_eq!(first, second);
    }
}
