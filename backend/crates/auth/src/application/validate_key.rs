//! API Key Validation Use Case
//!
//! Compares a caller-supplied key against the stored one. The comparison is
//! exact (case-sensitive, no normalization) and constant-time. There is no
//! transaction around the read-then-compare: a rotation landing in between
//! rejects the in-flight old-key request, which is the safe direction.

use std::sync::Arc;

use crate::domain::repository::SettingsRepository;
use crate::error::{AuthError, AuthResult};

/// Why a supplied key failed validation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidKeyReason {
    /// Caller supplied no key at all
    MissingKey,
    /// The deployment has never generated a key
    NoKeyConfigured,
    /// Supplied key differs from the stored key
    Mismatch,
}

impl InvalidKeyReason {
    /// Wire-level error for this reason. `NoKeyConfigured` is reported to
    /// the caller the same as a mismatch; the distinction is internal.
    pub fn to_error(self) -> AuthError {
        match self {
            InvalidKeyReason::MissingKey => AuthError::ApiKeyMissing,
            InvalidKeyReason::NoKeyConfigured | InvalidKeyReason::Mismatch => {
                AuthError::ApiKeyInvalid
            }
        }
    }
}

/// Validation outcome
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiKeyValidation {
    Valid,
    Invalid(InvalidKeyReason),
}

impl ApiKeyValidation {
    pub fn is_valid(&self) -> bool {
        matches!(self, ApiKeyValidation::Valid)
    }
}

/// Pure comparison of a supplied key against the stored one
pub fn validate_api_key(supplied: Option<&str>, stored: Option<&str>) -> ApiKeyValidation {
    let Some(supplied) = supplied else {
        return ApiKeyValidation::Invalid(InvalidKeyReason::MissingKey);
    };
    let Some(stored) = stored else {
        return ApiKeyValidation::Invalid(InvalidKeyReason::NoKeyConfigured);
    };

    if platform::crypto::constant_time_eq(supplied.as_bytes(), stored.as_bytes()) {
        ApiKeyValidation::Valid
    } else {
        ApiKeyValidation::Invalid(InvalidKeyReason::Mismatch)
    }
}

/// Validate API key use case (reads the stored key, then compares)
pub struct ValidateApiKeyUseCase<S>
where
    S: SettingsRepository + Clone + Send + Sync + 'static,
{
    settings_repo: Arc<S>,
}

impl<S> ValidateApiKeyUseCase<S>
where
    S: SettingsRepository + Clone + Send + Sync + 'static,
{
    pub fn new(settings_repo: Arc<S>) -> Self {
        Self { settings_repo }
    }

    pub async fn execute(&self, supplied: Option<&str>) -> AuthResult<ApiKeyValidation> {
        let stored = self
            .settings_repo
            .find()
            .await?
            .and_then(|settings| settings.api_key);

        Ok(validate_api_key(supplied, stored.as_deref()))
    }
}
