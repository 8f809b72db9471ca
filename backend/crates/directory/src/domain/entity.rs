//! Directory Entities
//!
//! Row-shaped records for the console directory. Playout credentials and
//! prompt configuration are not part of the console surface and are
//! deliberately absent.

use chrono::{DateTime, Utc};
use kernel::id::{ClientId, LocationId, StationId, VoiceId};

/// A radio station registered in the console
#[derive(Debug, Clone, PartialEq)]
pub struct Station {
    pub id: StationId,
    pub name: String,
    pub location_id: Option<LocationId>,
    pub playout_url: String,
    pub language: String,
    pub website: Option<String>,
    pub logo: Option<String>,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

/// Fields of a station the console can set; used for create and replace
#[derive(Debug, Clone, PartialEq)]
pub struct StationDraft {
    pub name: String,
    pub location_id: Option<LocationId>,
    pub playout_url: String,
    pub language: String,
    pub website: Option<String>,
    pub logo: Option<String>,
    pub status: String,
}

/// A client organization
#[derive(Debug, Clone, PartialEq)]
pub struct Client {
    pub id: ClientId,
    pub name: String,
    pub email: String,
    pub company: String,
    pub website: Option<String>,
    pub logo: Option<String>,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ClientDraft {
    pub name: String,
    pub email: String,
    pub company: String,
    pub website: Option<String>,
    pub logo: Option<String>,
    pub status: String,
}

/// A broadcast location
#[derive(Debug, Clone, PartialEq)]
pub struct Location {
    pub id: LocationId,
    pub name: String,
    pub country: String,
    pub city: String,
    pub timezone: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LocationDraft {
    pub name: String,
    pub country: String,
    pub city: String,
    pub timezone: String,
}

/// A synthetic voice available for production
#[derive(Debug, Clone, PartialEq)]
pub struct Voice {
    pub id: VoiceId,
    /// Provider-side voice identifier
    pub voice_id: String,
    pub name: String,
    pub gender: String,
    pub language: String,
    pub country: String,
    pub category: String,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct VoiceDraft {
    pub voice_id: String,
    pub name: String,
    pub gender: String,
    pub language: String,
    pub country: String,
    pub category: String,
    pub status: String,
}
