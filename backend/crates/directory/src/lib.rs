//! Directory Backend Module
//!
//! CRUD surface for the console's directory records: stations, clients,
//! locations, and voices. Every route here sits behind the request gate
//! (session or API key); this crate performs no authorization of its own.
//!
//! Clean Architecture structure:
//! - `domain/` - Entities, drafts, repository contract
//! - `infra/` - Postgres repository implementation
//! - `presentation/` - HTTP handlers, DTOs, router

pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

pub use error::{DirectoryError, DirectoryResult};
pub use infra::postgres::PgDirectoryRepository;
pub use presentation::router::directory_router;

// Convenience re-exports
pub mod models {
    pub use crate::domain::entity::*;
    pub use crate::presentation::dto::*;
}

pub mod handlers {
    pub use crate::presentation::handlers::*;
}
