//! Auth (Authorization) Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Route classification, gate decisions, session token codec
//! - `application/` - Use cases and application services
//! - `infra/` - Settings store implementations (Postgres, in-memory)
//! - `presentation/` - HTTP handlers, DTOs, router, request gate middleware
//!
//! ## Features
//! - Single-admin login against an env-configured credential pair
//! - Stateless HMAC-signed session cookie (24h, not sliding)
//! - Request gate classifying every inbound path and deciding
//!   allow / redirect / reject
//! - API key validation for programmatic callers (`X-API-Key`)
//! - Dashboard-only API key rotation
//!
//! ## Security Model
//! - Session cookie is an HMAC-SHA256 signed token, not a plain flag;
//!   forging it requires the server secret
//! - Credential and API key comparisons are constant-time
//! - No server-side session registry: logout clears the single cookie

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

#[cfg(test)]
mod tests;

// Re-exports for convenience
pub use application::config::AuthConfig;
pub use error::{AuthError, AuthResult};
pub use infra::postgres::PgSettingsRepository;
pub use presentation::router::{auth_router, settings_router};

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

// Convenience re-exports
pub mod config {
    pub use crate::application::config::*;
}

pub mod models {
    pub use crate::domain::gate::*;
    pub use crate::domain::route::*;
    pub use crate::domain::session::*;
    pub use crate::domain::settings::*;
    pub use crate::presentation::dto::*;
}

pub mod handlers {
    pub use crate::presentation::handlers::*;
}

pub mod store {
    pub use crate::infra::memory::MemSettingsRepository;
    pub use crate::infra::postgres::PgSettingsRepository as SettingsStore;
}

pub mod router {
    pub use crate::presentation::router::*;
}

pub mod middleware {
    pub use crate::presentation::middleware::*;
}
