//! HTTP Handlers
//!
//! All routes here sit behind the request gate; by the time a request
//! arrives it carries either a session or API key capability.

use axum::Json;
use axum::extract::{Path, State};
use std::sync::Arc;

use crate::domain::repository::DirectoryRepository;
use crate::error::DirectoryResult;
use crate::presentation::dto::{
    ClientRequest, ClientResponse, LocationRequest, LocationResponse, StationRequest,
    StationResponse, SuccessResponse, VoiceRequest, VoiceResponse,
};

/// Shared state for directory handlers
#[derive(Clone)]
pub struct DirectoryAppState<R>
where
    R: DirectoryRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
}

// ============================================================================
// Stations
// ============================================================================

pub async fn list_stations<R>(
    State(state): State<DirectoryAppState<R>>,
) -> DirectoryResult<Json<Vec<StationResponse>>>
where
    R: DirectoryRepository + Clone + Send + Sync + 'static,
{
    let stations = state.repo.list_stations().await?;
    Ok(Json(stations.into_iter().map(Into::into).collect()))
}

pub async fn create_station<R>(
    State(state): State<DirectoryAppState<R>>,
    Json(req): Json<StationRequest>,
) -> DirectoryResult<Json<StationResponse>>
where
    R: DirectoryRepository + Clone + Send + Sync + 'static,
{
    let station = state.repo.create_station(&req.into_draft()).await?;
    tracing::info!(id = %station.id, name = %station.name, "Station created");
    Ok(Json(station.into()))
}

pub async fn update_station<R>(
    State(state): State<DirectoryAppState<R>>,
    Path(id): Path<i64>,
    Json(req): Json<StationRequest>,
) -> DirectoryResult<Json<StationResponse>>
where
    R: DirectoryRepository + Clone + Send + Sync + 'static,
{
    let station = state.repo.update_station(id.into(), &req.into_draft()).await?;
    Ok(Json(station.into()))
}

pub async fn delete_station<R>(
    State(state): State<DirectoryAppState<R>>,
    Path(id): Path<i64>,
) -> DirectoryResult<Json<SuccessResponse>>
where
    R: DirectoryRepository + Clone + Send + Sync + 'static,
{
    state.repo.delete_station(id.into()).await?;
    tracing::info!(id = %id, "Station deleted");
    Ok(Json(SuccessResponse { success: true }))
}

// ============================================================================
// Clients
// ============================================================================

pub async fn list_clients<R>(
    State(state): State<DirectoryAppState<R>>,
) -> DirectoryResult<Json<Vec<ClientResponse>>>
where
    R: DirectoryRepository + Clone + Send + Sync + 'static,
{
    let clients = state.repo.list_clients().await?;
    Ok(Json(clients.into_iter().map(Into::into).collect()))
}

pub async fn create_client<R>(
    State(state): State<DirectoryAppState<R>>,
    Json(req): Json<ClientRequest>,
) -> DirectoryResult<Json<ClientResponse>>
where
    R: DirectoryRepository + Clone + Send + Sync + 'static,
{
    let client = state.repo.create_client(&req.into_draft()).await?;
    tracing::info!(id = %client.id, name = %client.name, "Client created");
    Ok(Json(client.into()))
}

pub async fn update_client<R>(
    State(state): State<DirectoryAppState<R>>,
    Path(id): Path<i64>,
    Json(req): Json<ClientRequest>,
) -> DirectoryResult<Json<ClientResponse>>
where
    R: DirectoryRepository + Clone + Send + Sync + 'static,
{
    let client = state.repo.update_client(id.into(), &req.into_draft()).await?;
    Ok(Json(client.into()))
}

pub async fn delete_client<R>(
    State(state): State<DirectoryAppState<R>>,
    Path(id): Path<i64>,
) -> DirectoryResult<Json<SuccessResponse>>
where
    R: DirectoryRepository + Clone + Send + Sync + 'static,
{
    state.repo.delete_client(id.into()).await?;
    tracing::info!(id = %id, "Client deleted");
    Ok(Json(SuccessResponse { success: true }))
}

// ============================================================================
// Locations
// ============================================================================

pub async fn list_locations<R>(
    State(state): State<DirectoryAppState<R>>,
) -> DirectoryResult<Json<Vec<LocationResponse>>>
where
    R: DirectoryRepository + Clone + Send + Sync + 'static,
{
    let locations = state.repo.list_locations().await?;
    Ok(Json(locations.into_iter().map(Into::into).collect()))
}

pub async fn create_location<R>(
    State(state): State<DirectoryAppState<R>>,
    Json(req): Json<LocationRequest>,
) -> DirectoryResult<Json<LocationResponse>>
where
    R: DirectoryRepository + Clone + Send + Sync + 'static,
{
    let location = state.repo.create_location(&req.into_draft()).await?;
    tracing::info!(id = %location.id, name = %location.name, "Location created");
    Ok(Json(location.into()))
}

pub async fn update_location<R>(
    State(state): State<DirectoryAppState<R>>,
    Path(id): Path<i64>,
    Json(req): Json<LocationRequest>,
) -> DirectoryResult<Json<LocationResponse>>
where
    R: DirectoryRepository + Clone + Send + Sync + 'static,
{
    let location = state
        .repo
        .update_location(id.into(), &req.into_draft())
        .await?;
    Ok(Json(location.into()))
}

pub async fn delete_location<R>(
    State(state): State<DirectoryAppState<R>>,
    Path(id): Path<i64>,
) -> DirectoryResult<Json<SuccessResponse>>
where
    R: DirectoryRepository + Clone + Send + Sync + 'static,
{
    state.repo.delete_location(id.into()).await?;
    tracing::info!(id = %id, "Location deleted");
    Ok(Json(SuccessResponse { success: true }))
}

// ============================================================================
// Voices
// ============================================================================

pub async fn list_voices<R>(
    State(state): State<DirectoryAppState<R>>,
) -> DirectoryResult<Json<Vec<VoiceResponse>>>
where
    R: DirectoryRepository + Clone + Send + Sync + 'static,
{
    let voices = state.repo.list_voices().await?;
    Ok(Json(voices.into_iter().map(Into::into).collect()))
}

pub async fn create_voice<R>(
    State(state): State<DirectoryAppState<R>>,
    Json(req): Json<VoiceRequest>,
) -> DirectoryResult<Json<VoiceResponse>>
where
    R: DirectoryRepository + Clone + Send + Sync + 'static,
{
    let voice = state.repo.create_voice(&req.into_draft()).await?;
    tracing::info!(id = %voice.id, name = %voice.name, "Voice created");
    Ok(Json(voice.into()))
}

pub async fn update_voice<R>(
    State(state): State<DirectoryAppState<R>>,
    Path(id): Path<i64>,
    Json(req): Json<VoiceRequest>,
) -> DirectoryResult<Json<VoiceResponse>>
where
    R: DirectoryRepository + Clone + Send + Sync + 'static,
{
    let voice = state.repo.update_voice(id.into(), &req.into_draft()).await?;
    Ok(Json(voice.into()))
}

pub async fn delete_voice<R>(
    State(state): State<DirectoryAppState<R>>,
    Path(id): Path<i64>,
) -> DirectoryResult<Json<SuccessResponse>>
where
    R: DirectoryRepository + Clone + Send + Sync + 'static,
{
    state.repo.delete_voice(id.into()).await?;
    tracing::info!(id = %id, "Voice deleted");
    Ok(Json(SuccessResponse { success: true }))
}
