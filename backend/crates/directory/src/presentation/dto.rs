//! API DTOs (Data Transfer Objects)

use serde::{Deserialize, Serialize};

use crate::domain::entity::{
    Client, ClientDraft, Location, LocationDraft, Station, StationDraft, Voice, VoiceDraft,
};

/// Response for POST/DELETE acknowledgements
#[derive(Debug, Clone, Serialize)]
pub struct SuccessResponse {
    pub success: bool,
}

// ============================================================================
// Stations
// ============================================================================

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StationRequest {
    pub name: String,
    #[serde(default)]
    pub location_id: Option<i64>,
    pub playout_url: String,
    pub language: String,
    #[serde(default)]
    pub website: Option<String>,
    #[serde(default)]
    pub logo: Option<String>,
    pub status: String,
}

impl StationRequest {
    pub fn into_draft(self) -> StationDraft {
        StationDraft {
            name: self.name,
            location_id: self.location_id.map(Into::into),
            playout_url: self.playout_url,
            language: self.language,
            website: self.website,
            logo: self.logo,
            status: self.status,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StationResponse {
    pub id: i64,
    pub name: String,
    pub location_id: Option<i64>,
    pub playout_url: String,
    pub language: String,
    pub website: Option<String>,
    pub logo: Option<String>,
    pub status: String,
    pub created_at_ms: i64,
}

impl From<Station> for StationResponse {
    fn from(station: Station) -> Self {
        Self {
            id: station.id.value(),
            name: station.name,
            location_id: station.location_id.map(Into::into),
            playout_url: station.playout_url,
            language: station.language,
            website: station.website,
            logo: station.logo,
            status: station.status,
            created_at_ms: station.created_at.timestamp_millis(),
        }
    }
}

// ============================================================================
// Clients
// ============================================================================

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientRequest {
    pub name: String,
    pub email: String,
    pub company: String,
    #[serde(default)]
    pub website: Option<String>,
    #[serde(default)]
    pub logo: Option<String>,
    #[serde(default = "default_status")]
    pub status: String,
}

fn default_status() -> String {
    "active".to_string()
}

impl ClientRequest {
    pub fn into_draft(self) -> ClientDraft {
        ClientDraft {
            name: self.name,
            email: self.email,
            company: self.company,
            website: self.website,
            logo: self.logo,
            status: self.status,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientResponse {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub company: String,
    pub website: Option<String>,
    pub logo: Option<String>,
    pub status: String,
    pub created_at_ms: i64,
    pub updated_at_ms: i64,
}

impl From<Client> for ClientResponse {
    fn from(client: Client) -> Self {
        Self {
            id: client.id.value(),
            name: client.name,
            email: client.email,
            company: client.company,
            website: client.website,
            logo: client.logo,
            status: client.status,
            created_at_ms: client.created_at.timestamp_millis(),
            updated_at_ms: client.updated_at.timestamp_millis(),
        }
    }
}

// ============================================================================
// Locations
// ============================================================================

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationRequest {
    pub name: String,
    pub country: String,
    pub city: String,
    pub timezone: String,
}

impl LocationRequest {
    pub fn into_draft(self) -> LocationDraft {
        LocationDraft {
            name: self.name,
            country: self.country,
            city: self.city,
            timezone: self.timezone,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationResponse {
    pub id: i64,
    pub name: String,
    pub country: String,
    pub city: String,
    pub timezone: String,
    pub created_at_ms: i64,
}

impl From<Location> for LocationResponse {
    fn from(location: Location) -> Self {
        Self {
            id: location.id.value(),
            name: location.name,
            country: location.country,
            city: location.city,
            timezone: location.timezone,
            created_at_ms: location.created_at.timestamp_millis(),
        }
    }
}

// ============================================================================
// Voices
// ============================================================================

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VoiceRequest {
    pub voice_id: String,
    pub name: String,
    pub gender: String,
    pub language: String,
    pub country: String,
    pub category: String,
    pub status: String,
}

impl VoiceRequest {
    pub fn into_draft(self) -> VoiceDraft {
        VoiceDraft {
            voice_id: self.voice_id,
            name: self.name,
            gender: self.gender,
            language: self.language,
            country: self.country,
            category: self.category,
            status: self.status,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VoiceResponse {
    pub id: i64,
    pub voice_id: String,
    pub name: String,
    pub gender: String,
    pub language: String,
    pub country: String,
    pub category: String,
    pub status: String,
    pub created_at_ms: i64,
}

impl From<Voice> for VoiceResponse {
    fn from(voice: Voice) -> Self {
        Self {
            id: voice.id.value(),
            voice_id: voice.voice_id,
            name: voice.name,
            gender: voice.gender,
            language: voice.language,
            country: voice.country,
            category: voice.category,
            status: voice.status,
            created_at_ms: voice.created_at.timestamp_millis(),
        }
    }
}
