//! Auth and Settings Routers

use axum::Router;
use axum::routing::{get, post};
use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::domain::repository::SettingsRepository;
use crate::presentation::handlers::{
    AuthAppState, generate_api_key, get_settings, login, logout, session_status, update_settings,
};

/// Session lifecycle routes, nested under `/api/auth`
pub fn auth_router<S>(settings: Arc<S>, config: Arc<AuthConfig>) -> Router
where
    S: SettingsRepository + Clone + Send + Sync + 'static,
{
    let state = AuthAppState { settings, config };

    Router::new()
        .route("/login", post(login::<S>))
        .route("/logout", post(logout::<S>))
        .route("/status", get(session_status::<S>))
        .with_state(state)
}

/// Settings routes, nested under `/api/settings`
pub fn settings_router<S>(settings: Arc<S>, config: Arc<AuthConfig>) -> Router
where
    S: SettingsRepository + Clone + Send + Sync + 'static,
{
    let state = AuthAppState { settings, config };

    Router::new()
        .route("/", get(get_settings::<S>).post(update_settings::<S>))
        .route("/generate-api-key", post(generate_api_key::<S>))
        .with_state(state)
}
