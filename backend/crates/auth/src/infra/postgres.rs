//! PostgreSQL Repository Implementations

use chrono::{DateTime, Utc};
use sqlx::PgPool;

use crate::domain::repository::SettingsRepository;
use crate::domain::settings::{ConsoleSettings, SETTINGS_ID};
use crate::error::AuthResult;

/// PostgreSQL-backed settings repository
#[derive(Clone)]
pub struct PgSettingsRepository {
    pool: PgPool,
}

impl PgSettingsRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct SettingsRow {
    id: String,
    api_key: Option<String>,
    webhook_url: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl SettingsRow {
    fn into_settings(self) -> ConsoleSettings {
        ConsoleSettings {
            id: self.id,
            api_key: self.api_key,
            webhook_url: self.webhook_url,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

impl SettingsRepository for PgSettingsRepository {
    async fn find(&self) -> AuthResult<Option<ConsoleSettings>> {
        let row = sqlx::query_as::<_, SettingsRow>(
            r#"
            SELECT
                id,
                api_key,
                webhook_url,
                created_at,
                updated_at
            FROM settings
            WHERE id = $1
            "#,
        )
        .bind(SETTINGS_ID)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(SettingsRow::into_settings))
    }

    async fn upsert_webhook_url(
        &self,
        webhook_url: Option<&str>,
    ) -> AuthResult<ConsoleSettings> {
        let row = sqlx::query_as::<_, SettingsRow>(
            r#"
            INSERT INTO settings (id, webhook_url)
            VALUES ($1, $2)
            ON CONFLICT (id) DO UPDATE
            SET webhook_url = EXCLUDED.webhook_url,
                updated_at = now()
            RETURNING id, api_key, webhook_url, created_at, updated_at
            "#,
        )
        .bind(SETTINGS_ID)
        .bind(webhook_url)
        .fetch_one(&self.pool)
        .await?;

        Ok(row.into_settings())
    }

    async fn replace_api_key(&self, api_key: &str) -> AuthResult<ConsoleSettings> {
        // Single-statement upsert: readers see the old or the new key,
        // never a torn value
        let row = sqlx::query_as::<_, SettingsRow>(
            r#"
            INSERT INTO settings (id, api_key)
            VALUES ($1, $2)
            ON CONFLICT (id) DO UPDATE
            SET api_key = EXCLUDED.api_key,
                updated_at = now()
            RETURNING id, api_key, webhook_url, created_at, updated_at
            "#,
        )
        .bind(SETTINGS_ID)
        .bind(api_key)
        .fetch_one(&self.pool)
        .await?;

        Ok(row.into_settings())
    }
}
