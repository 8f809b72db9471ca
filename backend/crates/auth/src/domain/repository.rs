//! Repository Traits
//!
//! Interfaces for data persistence. Implementation is in infrastructure layer.

use crate::domain::settings::ConsoleSettings;
use crate::error::AuthResult;

/// Settings repository trait
///
/// The settings row is the only mutable shared resource in the auth core.
/// Writes must be atomic single-statement upserts so concurrent readers see
/// either the pre- or post-write record, never a torn one.
#[trait_variant::make(SettingsRepository: Send)]
pub trait LocalSettingsRepository {
    /// Fetch the singleton settings record, if any has been stored
    async fn find(&self) -> AuthResult<Option<ConsoleSettings>>;

    /// Upsert the webhook URL on the singleton record
    async fn upsert_webhook_url(&self, webhook_url: Option<&str>)
    -> AuthResult<ConsoleSettings>;

    /// Atomically replace the API key (the previous key stays valid only
    /// if this write fails)
    async fn replace_api_key(&self, api_key: &str) -> AuthResult<ConsoleSettings>;
}
