//! API Server Entry Point
//!
//! Application entry point and server initialization.
//! Uses `anyhow` for startup errors, but application-level
//! errors should use `kernel::error::AppError`.

use auth::middleware::{GateState, request_gate};
use auth::{AuthConfig, PgSettingsRepository, auth_router, settings_router};
use axum::{
    Router, http,
    http::{Method, header},
};
use base64::Engine;
use base64::engine::general_purpose;
use directory::{PgDirectoryRepository, directory_router};
use sqlx::postgres::PgPoolOptions;
use std::env;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::{AllowHeaders, AllowMethods, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

// Re-export unified error types for use in handlers
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "api=info,auth=info,directory=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Database connection
    let database_url = env::var("DATABASE_URL").expect("DATABASE_URL must be set in environment");

    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(&database_url)
        .await?;

    tracing::info!("Connected to database");

    // Run migrations
    sqlx::migrate!("../../../database/migrations")
        .run(&pool)
        .await?;

    tracing::info!("Migrations completed");

    // Auth configuration
    let mut auth_config = if cfg!(debug_assertions) {
        AuthConfig::development()
    } else {
        // In production, load secret from environment
        let secret_b64 =
            env::var("SESSION_SECRET").expect("SESSION_SECRET must be set in production");
        let secret_bytes = Engine::decode(&general_purpose::STANDARD, &secret_b64)?;
        anyhow::ensure!(
            secret_bytes.len() == 32,
            "SESSION_SECRET must decode to exactly 32 bytes"
        );
        let mut secret = [0u8; 32];
        secret.copy_from_slice(&secret_bytes);
        AuthConfig {
            session_secret: secret,
            ..AuthConfig::default()
        }
    };
    auth_config.admin_username = env::var("ADMIN_USERNAME").ok();
    auth_config.admin_password = env::var("ADMIN_PASSWORD").ok();

    if auth_config.admin_credentials().is_none() {
        tracing::warn!("ADMIN_USERNAME/ADMIN_PASSWORD not set, login is disabled");
    }

    let auth_config = Arc::new(auth_config);
    let settings_repo = Arc::new(PgSettingsRepository::new(pool.clone()));
    let directory_repo = Arc::new(PgDirectoryRepository::new(pool.clone()));

    // CORS configuration
    let frontend_origins = env::var("FRONTEND_ORIGINS")
        .unwrap_or_else(|_| "http://localhost:3000,http://127.0.0.1:3000".to_string());

    let allowed_origins: Vec<http::HeaderValue> = frontend_origins
        .split(',')
        .filter_map(|origin| origin.trim().parse().ok())
        .collect();

    let cors = CorsLayer::new()
        .allow_origin(allowed_origins)
        .allow_methods(AllowMethods::list([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ]))
        .allow_headers(AllowHeaders::list([
            header::CONTENT_TYPE,
            header::ACCEPT,
            http::HeaderName::from_static("x-api-key"),
        ]))
        .allow_credentials(true);

    // Every request passes the gate before reaching a handler
    let gate = GateState {
        settings: settings_repo.clone(),
        config: auth_config.clone(),
    };

    // Build router
    let app = Router::new()
        .nest(
            "/api/auth",
            auth_router(settings_repo.clone(), auth_config.clone()),
        )
        .nest(
            "/api/settings",
            settings_router(settings_repo.clone(), auth_config.clone()),
        )
        .nest("/api", directory_router(directory_repo))
        .layer(axum::middleware::from_fn_with_state(
            gate,
            request_gate::<PgSettingsRepository>,
        ))
        .layer(TraceLayer::new_for_http())
        .layer(cors);

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], 31113));
    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;

    Ok(())
}
