//! Directory Router

use axum::Router;
use axum::routing::{get, put};
use std::sync::Arc;

use crate::domain::repository::DirectoryRepository;
use crate::presentation::handlers::{
    DirectoryAppState, create_client, create_location, create_station, create_voice,
    delete_client, delete_location, delete_station, delete_voice, list_clients, list_locations,
    list_stations, list_voices, update_client, update_location, update_station, update_voice,
};

/// Directory routes, nested under `/api`
pub fn directory_router<R>(repo: Arc<R>) -> Router
where
    R: DirectoryRepository + Clone + Send + Sync + 'static,
{
    let state = DirectoryAppState { repo };

    Router::new()
        .route("/stations", get(list_stations::<R>).post(create_station::<R>))
        .route(
            "/stations/{id}",
            put(update_station::<R>).delete(delete_station::<R>),
        )
        .route("/clients", get(list_clients::<R>).post(create_client::<R>))
        .route(
            "/clients/{id}",
            put(update_client::<R>).delete(delete_client::<R>),
        )
        .route(
            "/locations",
            get(list_locations::<R>).post(create_location::<R>),
        )
        .route(
            "/locations/{id}",
            put(update_location::<R>).delete(delete_location::<R>),
        )
        .route("/voices", get(list_voices::<R>).post(create_voice::<R>))
        .route(
            "/voices/{id}",
            put(update_voice::<R>).delete(delete_voice::<R>),
        )
        .with_state(state)
}
