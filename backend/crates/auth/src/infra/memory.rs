//! In-Memory Repository Implementation
//!
//! Backing store for gate tests and credential-only local development;
//! same contract as the Postgres repository.

use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::repository::SettingsRepository;
use crate::domain::settings::ConsoleSettings;
use crate::error::AuthResult;

/// In-memory settings repository
#[derive(Clone, Default)]
pub struct MemSettingsRepository {
    record: Arc<RwLock<Option<ConsoleSettings>>>,
}

impl MemSettingsRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing record (test seeding)
    pub fn with_record(settings: ConsoleSettings) -> Self {
        Self {
            record: Arc::new(RwLock::new(Some(settings))),
        }
    }
}

impl SettingsRepository for MemSettingsRepository {
    async fn find(&self) -> AuthResult<Option<ConsoleSettings>> {
        Ok(self.record.read().await.clone())
    }

    async fn upsert_webhook_url(
        &self,
        webhook_url: Option<&str>,
    ) -> AuthResult<ConsoleSettings> {
        let mut guard = self.record.write().await;
        let mut settings = guard.take().unwrap_or_else(ConsoleSettings::empty);
        settings.webhook_url = webhook_url.map(str::to_string);
        settings.updated_at = chrono::Utc::now();
        *guard = Some(settings.clone());
        Ok(settings)
    }

    async fn replace_api_key(&self, api_key: &str) -> AuthResult<ConsoleSettings> {
        let mut guard = self.record.write().await;
        let mut settings = guard.take().unwrap_or_else(ConsoleSettings::empty);
        settings.api_key = Some(api_key.to_string());
        settings.updated_at = chrono::Utc::now();
        *guard = Some(settings.clone());
        Ok(settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_starts_empty() {
        let repo = MemSettingsRepository::new();
        assert!(repo.find().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_replace_api_key_preserves_webhook() {
        let repo = MemSettingsRepository::new();
        repo.upsert_webhook_url(Some("https://example.com/hook"))
            .await
            .unwrap();
        repo.replace_api_key("key1").await.unwrap();

        let settings = repo.find().await.unwrap().unwrap();
        assert_eq!(settings.api_key.as_deref(), Some("key1"));
        assert_eq!(
            settings.webhook_url.as_deref(),
            Some("https://example.com/hook")
        );
    }

    #[tokio::test]
    async fn test_replace_api_key_overwrites() {
        let repo = MemSettingsRepository::new();
        repo.replace_api_key("key1").await.unwrap();
        repo.replace_api_key("key2").await.unwrap();

        let settings = repo.find().await.unwrap().unwrap();
        assert_eq!(settings.api_key.as_deref(), Some("key2"));
    }
}
