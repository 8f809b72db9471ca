//! PostgreSQL Repository Implementation

use chrono::{DateTime, Utc};
use kernel::id::{ClientId, LocationId, StationId, VoiceId};
use sqlx::PgPool;

use crate::domain::entity::{
    Client, ClientDraft, Location, LocationDraft, Station, StationDraft, Voice, VoiceDraft,
};
use crate::domain::repository::DirectoryRepository;
use crate::error::{DirectoryError, DirectoryResult};

/// PostgreSQL-backed directory repository
#[derive(Clone)]
pub struct PgDirectoryRepository {
    pool: PgPool,
}

impl PgDirectoryRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct StationRow {
    id: i64,
    name: String,
    location_id: Option<i64>,
    playout_url: String,
    language: String,
    website: Option<String>,
    logo: Option<String>,
    status: String,
    created_at: DateTime<Utc>,
}

impl StationRow {
    fn into_station(self) -> Station {
        Station {
            id: StationId::new(self.id),
            name: self.name,
            location_id: self.location_id.map(LocationId::new),
            playout_url: self.playout_url,
            language: self.language,
            website: self.website,
            logo: self.logo,
            status: self.status,
            created_at: self.created_at,
        }
    }
}

#[derive(sqlx::FromRow)]
struct ClientRow {
    id: i64,
    name: String,
    email: String,
    company: String,
    website: Option<String>,
    logo: Option<String>,
    status: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl ClientRow {
    fn into_client(self) -> Client {
        Client {
            id: ClientId::new(self.id),
            name: self.name,
            email: self.email,
            company: self.company,
            website: self.website,
            logo: self.logo,
            status: self.status,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

#[derive(sqlx::FromRow)]
struct LocationRow {
    id: i64,
    name: String,
    country: String,
    city: String,
    timezone: String,
    created_at: DateTime<Utc>,
}

impl LocationRow {
    fn into_location(self) -> Location {
        Location {
            id: LocationId::new(self.id),
            name: self.name,
            country: self.country,
            city: self.city,
            timezone: self.timezone,
            created_at: self.created_at,
        }
    }
}

#[derive(sqlx::FromRow)]
struct VoiceRow {
    id: i64,
    voice_id: String,
    name: String,
    gender: String,
    language: String,
    country: String,
    category: String,
    status: String,
    created_at: DateTime<Utc>,
}

impl VoiceRow {
    fn into_voice(self) -> Voice {
        Voice {
            id: VoiceId::new(self.id),
            voice_id: self.voice_id,
            name: self.name,
            gender: self.gender,
            language: self.language,
            country: self.country,
            category: self.category,
            status: self.status,
            created_at: self.created_at,
        }
    }
}

const STATION_COLUMNS: &str =
    "id, name, location_id, playout_url, language, website, logo, status, created_at";
const CLIENT_COLUMNS: &str =
    "id, name, email, company, website, logo, status, created_at, updated_at";
const LOCATION_COLUMNS: &str = "id, name, country, city, timezone, created_at";
const VOICE_COLUMNS: &str =
    "id, voice_id, name, gender, language, country, category, status, created_at";

impl DirectoryRepository for PgDirectoryRepository {
    async fn list_stations(&self) -> DirectoryResult<Vec<Station>> {
        let rows = sqlx::query_as::<_, StationRow>(&format!(
            "SELECT {STATION_COLUMNS} FROM stations ORDER BY id"
        ))
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(StationRow::into_station).collect())
    }

    async fn create_station(&self, draft: &StationDraft) -> DirectoryResult<Station> {
        let row = sqlx::query_as::<_, StationRow>(&format!(
            r#"
            INSERT INTO stations (name, location_id, playout_url, language, website, logo, status)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING {STATION_COLUMNS}
            "#
        ))
        .bind(&draft.name)
        .bind(draft.location_id.map(i64::from))
        .bind(&draft.playout_url)
        .bind(&draft.language)
        .bind(&draft.website)
        .bind(&draft.logo)
        .bind(&draft.status)
        .fetch_one(&self.pool)
        .await?;

        Ok(row.into_station())
    }

    async fn update_station(
        &self,
        id: StationId,
        draft: &StationDraft,
    ) -> DirectoryResult<Station> {
        let row = sqlx::query_as::<_, StationRow>(&format!(
            r#"
            UPDATE stations
            SET name = $2,
                location_id = $3,
                playout_url = $4,
                language = $5,
                website = $6,
                logo = $7,
                status = $8
            WHERE id = $1
            RETURNING {STATION_COLUMNS}
            "#
        ))
        .bind(id.value())
        .bind(&draft.name)
        .bind(draft.location_id.map(i64::from))
        .bind(&draft.playout_url)
        .bind(&draft.language)
        .bind(&draft.website)
        .bind(&draft.logo)
        .bind(&draft.status)
        .fetch_optional(&self.pool)
        .await?;

        row.map(StationRow::into_station)
            .ok_or(DirectoryError::NotFound("Station"))
    }

    async fn delete_station(&self, id: StationId) -> DirectoryResult<()> {
        let result = sqlx::query("DELETE FROM stations WHERE id = $1")
            .bind(id.value())
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DirectoryError::NotFound("Station"));
        }
        Ok(())
    }

    async fn list_clients(&self) -> DirectoryResult<Vec<Client>> {
        let rows = sqlx::query_as::<_, ClientRow>(&format!(
            "SELECT {CLIENT_COLUMNS} FROM clients ORDER BY id"
        ))
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(ClientRow::into_client).collect())
    }

    async fn create_client(&self, draft: &ClientDraft) -> DirectoryResult<Client> {
        let row = sqlx::query_as::<_, ClientRow>(&format!(
            r#"
            INSERT INTO clients (name, email, company, website, logo, status)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING {CLIENT_COLUMNS}
            "#
        ))
        .bind(&draft.name)
        .bind(&draft.email)
        .bind(&draft.company)
        .bind(&draft.website)
        .bind(&draft.logo)
        .bind(&draft.status)
        .fetch_one(&self.pool)
        .await?;

        Ok(row.into_client())
    }

    async fn update_client(&self, id: ClientId, draft: &ClientDraft) -> DirectoryResult<Client> {
        let row = sqlx::query_as::<_, ClientRow>(&format!(
            r#"
            UPDATE clients
            SET name = $2,
                email = $3,
                company = $4,
                website = $5,
                logo = $6,
                status = $7,
                updated_at = now()
            WHERE id = $1
            RETURNING {CLIENT_COLUMNS}
            "#
        ))
        .bind(id.value())
        .bind(&draft.name)
        .bind(&draft.email)
        .bind(&draft.company)
        .bind(&draft.website)
        .bind(&draft.logo)
        .bind(&draft.status)
        .fetch_optional(&self.pool)
        .await?;

        row.map(ClientRow::into_client)
            .ok_or(DirectoryError::NotFound("Client"))
    }

    async fn delete_client(&self, id: ClientId) -> DirectoryResult<()> {
        let result = sqlx::query("DELETE FROM clients WHERE id = $1")
            .bind(id.value())
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DirectoryError::NotFound("Client"));
        }
        Ok(())
    }

    async fn list_locations(&self) -> DirectoryResult<Vec<Location>> {
        let rows = sqlx::query_as::<_, LocationRow>(&format!(
            "SELECT {LOCATION_COLUMNS} FROM locations ORDER BY id"
        ))
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(LocationRow::into_location).collect())
    }

    async fn create_location(&self, draft: &LocationDraft) -> DirectoryResult<Location> {
        let row = sqlx::query_as::<_, LocationRow>(&format!(
            r#"
            INSERT INTO locations (name, country, city, timezone)
            VALUES ($1, $2, $3, $4)
            RETURNING {LOCATION_COLUMNS}
            "#
        ))
        .bind(&draft.name)
        .bind(&draft.country)
        .bind(&draft.city)
        .bind(&draft.timezone)
        .fetch_one(&self.pool)
        .await?;

        Ok(row.into_location())
    }

    async fn update_location(
        &self,
        id: LocationId,
        draft: &LocationDraft,
    ) -> DirectoryResult<Location> {
        let row = sqlx::query_as::<_, LocationRow>(&format!(
            r#"
            UPDATE locations
            SET name = $2,
                country = $3,
                city = $4,
                timezone = $5
            WHERE id = $1
            RETURNING {LOCATION_COLUMNS}
            "#
        ))
        .bind(id.value())
        .bind(&draft.name)
        .bind(&draft.country)
        .bind(&draft.city)
        .bind(&draft.timezone)
        .fetch_optional(&self.pool)
        .await?;

        row.map(LocationRow::into_location)
            .ok_or(DirectoryError::NotFound("Location"))
    }

    async fn delete_location(&self, id: LocationId) -> DirectoryResult<()> {
        let result = sqlx::query("DELETE FROM locations WHERE id = $1")
            .bind(id.value())
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DirectoryError::NotFound("Location"));
        }
        Ok(())
    }

    async fn list_voices(&self) -> DirectoryResult<Vec<Voice>> {
        let rows = sqlx::query_as::<_, VoiceRow>(&format!(
            "SELECT {VOICE_COLUMNS} FROM voices ORDER BY id"
        ))
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(VoiceRow::into_voice).collect())
    }

    async fn create_voice(&self, draft: &VoiceDraft) -> DirectoryResult<Voice> {
        let row = sqlx::query_as::<_, VoiceRow>(&format!(
            r#"
            INSERT INTO voices (voice_id, name, gender, language, country, category, status)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING {VOICE_COLUMNS}
            "#
        ))
        .bind(&draft.voice_id)
        .bind(&draft.name)
        .bind(&draft.gender)
        .bind(&draft.language)
        .bind(&draft.country)
        .bind(&draft.category)
        .bind(&draft.status)
        .fetch_one(&self.pool)
        .await?;

        Ok(row.into_voice())
    }

    async fn update_voice(&self, id: VoiceId, draft: &VoiceDraft) -> DirectoryResult<Voice> {
        let row = sqlx::query_as::<_, VoiceRow>(&format!(
            r#"
            UPDATE voices
            SET voice_id = $2,
                name = $3,
                gender = $4,
                language = $5,
                country = $6,
                category = $7,
                status = $8
            WHERE id = $1
            RETURNING {VOICE_COLUMNS}
            "#
        ))
        .bind(id.value())
        .bind(&draft.voice_id)
        .bind(&draft.name)
        .bind(&draft.gender)
        .bind(&draft.language)
        .bind(&draft.country)
        .bind(&draft.category)
        .bind(&draft.status)
        .fetch_optional(&self.pool)
        .await?;

        row.map(VoiceRow::into_voice)
            .ok_or(DirectoryError::NotFound("Voice"))
    }

    async fn delete_voice(&self, id: VoiceId) -> DirectoryResult<()> {
        let result = sqlx::query("DELETE FROM voices WHERE id = $1")
            .bind(id.value())
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DirectoryError::NotFound("Voice"));
        }
        Ok(())
    }
}
