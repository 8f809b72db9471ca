//! Login Use Case
//!
//! Authenticates the administrator and mints a session token.

use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::domain::session::SessionCodec;
use crate::error::{AuthError, AuthResult};

/// Login input
pub struct LoginInput {
    pub username: String,
    pub password: String,
}

/// Login output
pub struct LoginOutput {
    /// Session token for cookie
    pub session_token: String,
}

/// Login use case
///
/// There is exactly one credential pair, sourced from trusted process
/// configuration, so comparison is direct (constant-time) rather than
/// against a stored hash. No lockout and no attempt counting.
pub struct LoginUseCase {
    config: Arc<AuthConfig>,
}

impl LoginUseCase {
    pub fn new(config: Arc<AuthConfig>) -> Self {
        Self { config }
    }

    pub fn execute(&self, input: LoginInput) -> AuthResult<LoginOutput> {
        let (expected_username, expected_password) = self
            .config
            .admin_credentials()
            .ok_or(AuthError::ConfigMissing)?;

        // Both sides are trimmed before the exact comparison; pasted
        // credentials routinely carry stray whitespace
        let username = input.username.trim();
        let password = input.password.trim();
        let expected_username = expected_username.trim();
        let expected_password = expected_password.trim();

        // Evaluate both comparisons unconditionally
        let username_ok =
            platform::crypto::constant_time_eq(username.as_bytes(), expected_username.as_bytes());
        let password_ok =
            platform::crypto::constant_time_eq(password.as_bytes(), expected_password.as_bytes());

        if !(username_ok && password_ok) {
            return Err(AuthError::InvalidCredentials);
        }

        let codec = SessionCodec::new(self.config.session_secret, self.config.session_ttl);
        let session_token = codec.issue(chrono::Utc::now().timestamp_millis());

        tracing::info!("Administrator signed in");

        Ok(LoginOutput { session_token })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> Arc<AuthConfig> {
        Arc::new(AuthConfig {
            admin_username: Some("admin".to_string()),
            admin_password: Some("secret".to_string()),
            ..AuthConfig::development()
        })
    }

    #[test]
    fn test_exact_match_succeeds() {
        let use_case = LoginUseCase::new(config());
        let output = use_case.execute(LoginInput {
            username: "admin".to_string(),
            password: "secret".to_string(),
        });
        assert!(output.is_ok());
    }

    #[test]
    fn test_surrounding_whitespace_is_trimmed() {
        let use_case = LoginUseCase::new(config());
        let output = use_case.execute(LoginInput {
            username: " admin ".to_string(),
            password: "secret ".to_string(),
        });
        assert!(output.is_ok());
    }

    #[test]
    fn test_wrong_credentials() {
        let use_case = LoginUseCase::new(config());

        for (username, password) in [
            ("admin", "wrong"),
            ("wrong", "secret"),
            ("", ""),
            ("Admin", "secret"),
            ("admin", "SECRET"),
        ] {
            let result = use_case.execute(LoginInput {
                username: username.to_string(),
                password: password.to_string(),
            });
            assert!(
                matches!(result, Err(AuthError::InvalidCredentials)),
                "{}:{} should be rejected",
                username,
                password
            );
        }
    }

    #[test]
    fn test_unconfigured_credentials() {
        let use_case = LoginUseCase::new(Arc::new(AuthConfig::development()));
        let result = use_case.execute(LoginInput {
            username: "admin".to_string(),
            password: "secret".to_string(),
        });
        assert!(matches!(result, Err(AuthError::ConfigMissing)));
    }

    #[test]
    fn test_minted_token_validates() {
        let config = config();
        let use_case = LoginUseCase::new(config.clone());
        let output = use_case
            .execute(LoginInput {
                username: "admin".to_string(),
                password: "secret".to_string(),
            })
            .unwrap();

        let codec = SessionCodec::new(config.session_secret, config.session_ttl);
        let now = chrono::Utc::now().timestamp_millis();
        assert!(codec.validate(&output.session_token, now).is_valid());
    }
}
