//! Check Session Use Case
//!
//! Validates a presented session cookie value. Pure: no I/O, no clock
//! beyond the injected "now", so the gate stays deterministic for a given
//! `(path, cookie)` at a given instant.

use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::domain::session::{SessionCodec, SessionToken};

/// Check session use case
pub struct CheckSessionUseCase {
    codec: SessionCodec,
}

impl CheckSessionUseCase {
    pub fn new(config: Arc<AuthConfig>) -> Self {
        Self {
            codec: SessionCodec::new(config.session_secret, config.session_ttl),
        }
    }

    /// Classify a presented token (absent counts as no session)
    pub fn status(&self, token: Option<&str>) -> SessionToken {
        match token {
            Some(token) => self
                .codec
                .validate(token, chrono::Utc::now().timestamp_millis()),
            None => SessionToken::Forged,
        }
    }

    /// Just check whether a token grants a session
    pub fn is_valid(&self, token: Option<&str>) -> bool {
        self.status(token).is_valid()
    }
}
