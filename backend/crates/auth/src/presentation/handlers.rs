//! HTTP Handlers

use axum::Json;
use axum::extract::State;
use axum::http::{HeaderMap, StatusCode, header};
use axum::response::IntoResponse;
use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::application::{
    CheckSessionUseCase, LoginInput, LoginUseCase, RotateApiKeyUseCase,
};
use crate::domain::repository::SettingsRepository;
use crate::domain::session::SessionToken;
use crate::domain::settings::ConsoleSettings;
use crate::error::{AuthError, AuthResult};
use crate::presentation::dto::{
    ApiKeyResponse, LoginRequest, SessionStatusResponse, SettingsResponse, SuccessResponse,
    UpdateSettingsRequest,
};
use crate::presentation::middleware::Capability;

/// Shared state for auth handlers
#[derive(Clone)]
pub struct AuthAppState<S>
where
    S: SettingsRepository + Clone + Send + Sync + 'static,
{
    pub settings: Arc<S>,
    pub config: Arc<AuthConfig>,
}

// ============================================================================
// Login
// ============================================================================

/// POST /api/auth/login
pub async fn login<S>(
    State(state): State<AuthAppState<S>>,
    Json(req): Json<LoginRequest>,
) -> AuthResult<impl IntoResponse>
where
    S: SettingsRepository + Clone + Send + Sync + 'static,
{
    let use_case = LoginUseCase::new(state.config.clone());

    let output = use_case.execute(LoginInput {
        username: req.username,
        password: req.password,
    })?;

    let cookie = state
        .config
        .cookie_config()
        .build_set_cookie(&output.session_token);

    Ok((
        StatusCode::OK,
        [(header::SET_COOKIE, cookie)],
        Json(SuccessResponse { success: true }),
    ))
}

// ============================================================================
// Logout
// ============================================================================

/// POST /api/auth/logout
///
/// Idempotent: clears the cookie whether or not a session existed.
pub async fn logout<S>(State(state): State<AuthAppState<S>>) -> impl IntoResponse
where
    S: SettingsRepository + Clone + Send + Sync + 'static,
{
    let cookie = state.config.cookie_config().build_delete_cookie();

    (
        StatusCode::OK,
        [(header::SET_COOKIE, cookie)],
        Json(SuccessResponse { success: true }),
    )
}

// ============================================================================
// Session Status
// ============================================================================

/// GET /api/auth/status
pub async fn session_status<S>(
    State(state): State<AuthAppState<S>>,
    headers: HeaderMap,
) -> Json<SessionStatusResponse>
where
    S: SettingsRepository + Clone + Send + Sync + 'static,
{
    let token = platform::cookie::extract_cookie(&headers, &state.config.session_cookie_name);

    let status = CheckSessionUseCase::new(state.config.clone()).status(token.as_deref());

    match status {
        SessionToken::Valid { expires_at_ms } => Json(SessionStatusResponse {
            authenticated: true,
            expires_at_ms: Some(expires_at_ms),
        }),
        SessionToken::Expired | SessionToken::Forged => Json(SessionStatusResponse {
            authenticated: false,
            expires_at_ms: None,
        }),
    }
}

// ============================================================================
// Settings (dashboard session only)
// ============================================================================

/// GET /api/settings
pub async fn get_settings<S>(
    State(state): State<AuthAppState<S>>,
    capability: Option<axum::Extension<Capability>>,
) -> AuthResult<Json<SettingsResponse>>
where
    S: SettingsRepository + Clone + Send + Sync + 'static,
{
    require_session(capability)?;

    let settings = state
        .settings
        .find()
        .await?
        .unwrap_or_else(ConsoleSettings::empty);

    Ok(Json(settings.into()))
}

/// POST /api/settings
pub async fn update_settings<S>(
    State(state): State<AuthAppState<S>>,
    capability: Option<axum::Extension<Capability>>,
    Json(req): Json<UpdateSettingsRequest>,
) -> AuthResult<Json<SettingsResponse>>
where
    S: SettingsRepository + Clone + Send + Sync + 'static,
{
    require_session(capability)?;

    let settings = state
        .settings
        .upsert_webhook_url(req.webhook_url.as_deref())
        .await?;

    Ok(Json(settings.into()))
}

/// POST /api/settings/generate-api-key
///
/// Rotating the key is a dashboard-only administrative action: an API-key
/// caller must not be able to mint its own replacement.
pub async fn generate_api_key<S>(
    State(state): State<AuthAppState<S>>,
    capability: Option<axum::Extension<Capability>>,
) -> AuthResult<Json<ApiKeyResponse>>
where
    S: SettingsRepository + Clone + Send + Sync + 'static,
{
    require_session(capability)?;

    let use_case = RotateApiKeyUseCase::new(state.settings.clone());
    let api_key = use_case.execute().await?;

    Ok(Json(ApiKeyResponse { api_key }))
}

// ============================================================================
// Helper Functions
// ============================================================================

/// Insist on a dashboard session capability (set by the request gate)
fn require_session(capability: Option<axum::Extension<Capability>>) -> AuthResult<()> {
    match capability {
        Some(axum::Extension(Capability::Session)) => Ok(()),
        _ => Err(AuthError::Unauthorized),
    }
}
