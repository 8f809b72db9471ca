//! Repository Traits
//!
//! Interfaces for data persistence. Implementation is in infrastructure layer.

use kernel::id::{ClientId, LocationId, StationId, VoiceId};

use crate::domain::entity::{
    Client, ClientDraft, Location, LocationDraft, Station, StationDraft, Voice, VoiceDraft,
};
use crate::error::DirectoryResult;

/// Directory repository trait
///
/// One contract for all four directory tables; updates are full replacements
/// of the draft fields and must fail with `NotFound` for an absent id.
#[trait_variant::make(DirectoryRepository: Send)]
pub trait LocalDirectoryRepository {
    async fn list_stations(&self) -> DirectoryResult<Vec<Station>>;
    async fn create_station(&self, draft: &StationDraft) -> DirectoryResult<Station>;
    async fn update_station(&self, id: StationId, draft: &StationDraft)
    -> DirectoryResult<Station>;
    async fn delete_station(&self, id: StationId) -> DirectoryResult<()>;

    async fn list_clients(&self) -> DirectoryResult<Vec<Client>>;
    async fn create_client(&self, draft: &ClientDraft) -> DirectoryResult<Client>;
    async fn update_client(&self, id: ClientId, draft: &ClientDraft) -> DirectoryResult<Client>;
    async fn delete_client(&self, id: ClientId) -> DirectoryResult<()>;

    async fn list_locations(&self) -> DirectoryResult<Vec<Location>>;
    async fn create_location(&self, draft: &LocationDraft) -> DirectoryResult<Location>;
    async fn update_location(
        &self,
        id: LocationId,
        draft: &LocationDraft,
    ) -> DirectoryResult<Location>;
    async fn delete_location(&self, id: LocationId) -> DirectoryResult<()>;

    async fn list_voices(&self) -> DirectoryResult<Vec<Voice>>;
    async fn create_voice(&self, draft: &VoiceDraft) -> DirectoryResult<Voice>;
    async fn update_voice(&self, id: VoiceId, draft: &VoiceDraft) -> DirectoryResult<Voice>;
    async fn delete_voice(&self, id: VoiceId) -> DirectoryResult<()>;
}
