//! Console Settings Entity
//!
//! Exactly one logical settings record exists per deployment. The fixed id
//! plus upsert-on-conflict keeps the table a singleton by construction.

use chrono::{DateTime, Utc};

/// Fixed id of the singleton settings row
pub const SETTINGS_ID: &str = "default";

/// The deployment-wide settings record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConsoleSettings {
    pub id: String,
    /// API key for programmatic callers; None until first generated
    pub api_key: Option<String>,
    pub webhook_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ConsoleSettings {
    /// The record as it looks before anything has been stored
    pub fn empty() -> Self {
        let now = Utc::now();
        Self {
            id: SETTINGS_ID.to_string(),
            api_key: None,
            webhook_url: None,
            created_at: now,
            updated_at: now,
        }
    }
}
