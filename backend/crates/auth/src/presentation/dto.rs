//! API DTOs (Data Transfer Objects)

use serde::{Deserialize, Serialize};

use crate::domain::settings::ConsoleSettings;

/// Request for POST /api/auth/login
#[derive(Debug, Clone, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Response for POST /api/auth/login and POST /api/auth/logout
#[derive(Debug, Clone, Serialize)]
pub struct SuccessResponse {
    pub success: bool,
}

/// Response for GET /api/auth/status
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionStatusResponse {
    pub authenticated: bool,
    pub expires_at_ms: Option<i64>,
}

/// Response for POST /api/settings/generate-api-key
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiKeyResponse {
    pub api_key: String,
}

/// Request for POST /api/settings
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateSettingsRequest {
    #[serde(default)]
    pub webhook_url: Option<String>,
}

/// Response for GET/POST /api/settings
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SettingsResponse {
    pub id: String,
    pub api_key: Option<String>,
    pub webhook_url: Option<String>,
    pub created_at_ms: i64,
    pub updated_at_ms: i64,
}

impl From<ConsoleSettings> for SettingsResponse {
    fn from(settings: ConsoleSettings) -> Self {
        Self {
            id: settings.id,
            api_key: settings.api_key,
            webhook_url: settings.webhook_url,
            created_at_ms: settings.created_at.timestamp_millis(),
            updated_at_ms: settings.updated_at.timestamp_millis(),
        }
    }
}
