//! Request Gate Middleware
//!
//! Every inbound request passes through here first. The gate classifies the
//! path, checks the session cookie, and applies the decision table: pass
//! through, redirect (page routes), or reject with a JSON error (API
//! routes). For protected API routes without a session, a valid `X-API-Key`
//! header authorizes the request instead; whichever capability won is
//! recorded in request extensions for handlers that insist on a dashboard
//! session.
//!
//! The gate never writes session or settings state.

use axum::body::Body;
use axum::extract::State;
use axum::http::{Request, StatusCode, header};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::application::{ApiKeyValidation, CheckSessionUseCase, ValidateApiKeyUseCase};
use crate::domain::gate::{GateDecision, decide};
use crate::domain::repository::SettingsRepository;
use crate::domain::route::{DASHBOARD_PATH, LOGIN_PATH, RouteClass, classify};
use crate::error::AuthError;

/// Header carrying the programmatic API key
pub const API_KEY_HEADER: &str = "X-API-Key";

/// How a request passed the gate, stored in request extensions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Capability {
    /// Authenticated dashboard session (cookie)
    Session,
    /// Programmatic caller with a valid API key
    ApiKey,
}

/// Middleware state
#[derive(Clone)]
pub struct GateState<S>
where
    S: SettingsRepository + Clone + Send + Sync + 'static,
{
    pub settings: Arc<S>,
    pub config: Arc<AuthConfig>,
}

/// The request gate
pub async fn request_gate<S>(
    State(state): State<GateState<S>>,
    mut req: Request<Body>,
    next: Next,
) -> Result<Response, Response>
where
    S: SettingsRepository + Clone + Send + Sync + 'static,
{
    let path = req.uri().path().to_string();
    let class = classify(&path);

    let token = platform::cookie::extract_cookie(req.headers(), &state.config.session_cookie_name);
    let session_valid = CheckSessionUseCase::new(state.config.clone()).is_valid(token.as_deref());

    match decide(class, session_valid) {
        GateDecision::Allow => {
            if session_valid {
                req.extensions_mut().insert(Capability::Session);
            }
            Ok(next.run(req).await)
        }
        GateDecision::RedirectToDashboard => {
            tracing::debug!(path = %path, "Authenticated request to login page, redirecting");
            Err(found(DASHBOARD_PATH))
        }
        GateDecision::RedirectToLogin => {
            tracing::debug!(path = %path, "Unauthenticated page request, redirecting to login");
            let location = format!("{}?from={}", LOGIN_PATH, urlencoding::encode(&path));
            Err(found(&location))
        }
        GateDecision::Reject => {
            debug_assert_eq!(class, RouteClass::ProtectedApi);

            // Second, independent gate: a programmatic caller with a valid
            // API key is authorized even without a session
            let supplied = req
                .headers()
                .get(API_KEY_HEADER)
                .and_then(|value| value.to_str().ok())
                .map(str::to_string);

            let validator = ValidateApiKeyUseCase::new(state.settings.clone());
            match validator.execute(supplied.as_deref()).await {
                Ok(ApiKeyValidation::Valid) => {
                    req.extensions_mut().insert(Capability::ApiKey);
                    Ok(next.run(req).await)
                }
                Ok(ApiKeyValidation::Invalid(reason)) => {
                    tracing::debug!(path = %path, reason = ?reason, "API key rejected");
                    Err(reason.to_error().into_response())
                }
                Err(e) => Err(e.into_response()),
            }
        }
    }
}

/// 302 Found redirect (the dashboard frontend expects 302, not 303/307)
fn found(location: &str) -> Response {
    match header::HeaderValue::from_str(location) {
        Ok(value) => {
            (StatusCode::FOUND, [(header::LOCATION, value)], ()).into_response()
        }
        Err(_) => AuthError::Internal("Invalid redirect location".to_string()).into_response(),
    }
}
