//! Unit tests for the auth crate

#[cfg(test)]
mod config_tests {
    use crate::application::config::{AuthConfig, SameSite};

    #[test]
    fn test_default_config() {
        let config = AuthConfig::default();
        assert_eq!(config.session_cookie_name, "auth");
        assert_eq!(config.session_ttl.as_secs(), 86_400);
        assert!(config.cookie_secure);
        assert_eq!(config.cookie_same_site, SameSite::Lax);
        assert!(config.admin_credentials().is_none());
    }

    #[test]
    fn test_partial_credentials_are_not_enough() {
        let config = AuthConfig {
            admin_username: Some("admin".to_string()),
            ..Default::default()
        };
        assert!(config.admin_credentials().is_none());

        let config = AuthConfig {
            admin_password: Some("secret".to_string()),
            ..Default::default()
        };
        assert!(config.admin_credentials().is_none());
    }

    #[test]
    fn test_random_secret_differs_per_config() {
        let a = AuthConfig::with_random_secret();
        let b = AuthConfig::with_random_secret();
        assert_ne!(a.session_secret, b.session_secret);
        assert_ne!(a.session_secret, [0u8; 32]);
    }

    #[test]
    fn test_development_config_is_insecure() {
        let config = AuthConfig::development();
        assert!(!config.cookie_secure);
    }

    #[test]
    fn test_cookie_config_attributes() {
        let config = AuthConfig::default();
        let cookie = config.cookie_config();
        assert_eq!(cookie.name, "auth");
        assert!(cookie.http_only);
        assert_eq!(cookie.path, "/");
        assert_eq!(cookie.max_age_secs, Some(86_400));
    }

    #[test]
    fn test_session_ttl_ms() {
        let config = AuthConfig::default();
        assert_eq!(config.session_ttl_ms(), 86_400_000);
    }
}

#[cfg(test)]
mod dto_tests {
    use crate::domain::settings::ConsoleSettings;
    use crate::presentation::dto::*;

    #[test]
    fn test_login_request_deserialization() {
        let json = r#"{"username": "admin", "password": "secret"}"#;
        let req: LoginRequest = serde_json::from_str(json).unwrap();
        assert_eq!(req.username, "admin");
        assert_eq!(req.password, "secret");
    }

    #[test]
    fn test_success_response_serialization() {
        let json = serde_json::to_string(&SuccessResponse { success: true }).unwrap();
        assert_eq!(json, r#"{"success":true}"#);
    }

    #[test]
    fn test_api_key_response_is_camel_case() {
        let json = serde_json::to_string(&ApiKeyResponse {
            api_key: "k".to_string(),
        })
        .unwrap();
        assert_eq!(json, r#"{"apiKey":"k"}"#);
    }

    #[test]
    fn test_session_status_serialization() {
        let json = serde_json::to_string(&SessionStatusResponse {
            authenticated: true,
            expires_at_ms: Some(1000),
        })
        .unwrap();
        assert!(json.contains(r#""authenticated":true"#));
        assert!(json.contains(r#""expiresAtMs":1000"#));
    }

    #[test]
    fn test_update_settings_request_defaults() {
        let req: UpdateSettingsRequest = serde_json::from_str("{}").unwrap();
        assert!(req.webhook_url.is_none());

        let req: UpdateSettingsRequest =
            serde_json::from_str(r#"{"webhookUrl": "https://example.com/hook"}"#).unwrap();
        assert_eq!(req.webhook_url.as_deref(), Some("https://example.com/hook"));
    }

    #[test]
    fn test_settings_response_from_domain() {
        let mut settings = ConsoleSettings::empty();
        settings.api_key = Some("abc".to_string());
        let resp: SettingsResponse = settings.into();
        assert_eq!(resp.id, "default");
        assert_eq!(resp.api_key.as_deref(), Some("abc"));
        assert!(resp.webhook_url.is_none());
    }
}

#[cfg(test)]
mod error_tests {
    use crate::error::AuthError;
    use axum::http::StatusCode;

    #[test]
    fn test_wire_messages() {
        assert_eq!(
            AuthError::ConfigMissing.to_string(),
            "Server configuration error - missing credentials"
        );
        assert_eq!(AuthError::InvalidCredentials.to_string(), "Invalid credentials");
        assert_eq!(AuthError::ApiKeyMissing.to_string(), "API key is required");
        assert_eq!(AuthError::ApiKeyInvalid.to_string(), "Invalid API key");
    }

    #[test]
    fn test_status_codes() {
        assert_eq!(AuthError::ConfigMissing.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(AuthError::InvalidCredentials.status_code(), StatusCode::UNAUTHORIZED);
        assert_eq!(AuthError::Unauthorized.status_code(), StatusCode::UNAUTHORIZED);
        assert_eq!(AuthError::ApiKeyMissing.status_code(), StatusCode::UNAUTHORIZED);
        assert_eq!(AuthError::ApiKeyInvalid.status_code(), StatusCode::UNAUTHORIZED);
    }

    #[test]
    fn test_internal_errors_do_not_leak_details() {
        let err = AuthError::Internal("pool exhausted".to_string());
        let app_err = err.to_app_error();
        assert_eq!(app_err.message(), "Internal server error");
    }
}
