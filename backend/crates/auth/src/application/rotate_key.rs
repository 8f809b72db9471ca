//! API Key Rotation Use Case
//!
//! Generates a fresh opaque key and persists it as the sole API key. No
//! grace period: the moment the write commits, the previous key is dead.
//! If the write fails, the previous key remains valid (replace-or-nothing).

use std::sync::Arc;

use crate::domain::repository::SettingsRepository;
use crate::error::AuthResult;

/// Random bytes per generated key (base64url-encoded on the wire)
pub const API_KEY_BYTES: usize = 32;

/// Rotate API key use case
pub struct RotateApiKeyUseCase<S>
where
    S: SettingsRepository + Clone + Send + Sync + 'static,
{
    settings_repo: Arc<S>,
}

impl<S> RotateApiKeyUseCase<S>
where
    S: SettingsRepository + Clone + Send + Sync + 'static,
{
    pub fn new(settings_repo: Arc<S>) -> Self {
        Self { settings_repo }
    }

    /// Generate and persist a new API key, returning it to the caller
    pub async fn execute(&self) -> AuthResult<String> {
        let api_key = generate_api_key();

        self.settings_repo.replace_api_key(&api_key).await?;

        tracing::info!("API key rotated");

        Ok(api_key)
    }
}

/// Generate a new opaque API key value
pub fn generate_api_key() -> String {
    platform::crypto::to_base64_url(&platform::crypto::random_bytes(API_KEY_BYTES))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_keys_are_distinct() {
        let a = generate_api_key();
        let b = generate_api_key();
        assert_ne!(a, b);
    }

    #[test]
    fn test_generated_key_shape() {
        let key = generate_api_key();
        // 32 bytes -> 43 base64url chars, no padding
        assert_eq!(key.len(), 43);
        assert!(!key.contains('='));
        assert!(
            key.chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
        );
    }
}
