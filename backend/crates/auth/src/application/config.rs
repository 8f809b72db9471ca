//! Application Configuration
//!
//! Configuration for the Auth application layer.

use std::time::Duration;

/// Re-export SameSite from platform
pub use platform::cookie::SameSite;
use platform::cookie::CookieConfig;

/// Auth application configuration
///
/// The admin credential pair comes from process configuration, is loaded
/// once at startup, and stays immutable for the process lifetime. It is
/// never stored in the database.
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// Configured administrator username (None when unset)
    pub admin_username: Option<String>,
    /// Configured administrator password (None when unset)
    pub admin_password: Option<String>,
    /// Session cookie name
    pub session_cookie_name: String,
    /// Session secret key for HMAC signing (32 bytes)
    pub session_secret: [u8; 32],
    /// Session lifetime from issuance (24 hours, not sliding)
    pub session_ttl: Duration,
    /// Whether to require Secure cookie
    pub cookie_secure: bool,
    /// SameSite policy
    pub cookie_same_site: SameSite,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            admin_username: None,
            admin_password: None,
            session_cookie_name: "auth".to_string(),
            session_secret: [0u8; 32],
            session_ttl: Duration::from_secs(86_400),
            cookie_secure: true,
            cookie_same_site: SameSite::Lax,
        }
    }
}

impl AuthConfig {
    /// Create config with a random session secret (for development)
    pub fn with_random_secret() -> Self {
        use rand::RngCore;
        let mut secret = [0u8; 32];
        rand::rng().fill_bytes(&mut secret);
        Self {
            session_secret: secret,
            ..Default::default()
        }
    }

    /// Create config for development (insecure cookie)
    pub fn development() -> Self {
        Self {
            cookie_secure: false,
            ..Self::with_random_secret()
        }
    }

    /// Both halves of the admin credential pair, when fully configured
    pub fn admin_credentials(&self) -> Option<(&str, &str)> {
        match (self.admin_username.as_deref(), self.admin_password.as_deref()) {
            (Some(user), Some(pass)) => Some((user, pass)),
            _ => None,
        }
    }

    /// Session TTL in milliseconds
    pub fn session_ttl_ms(&self) -> i64 {
        self.session_ttl.as_millis() as i64
    }

    /// Cookie attributes for the session cookie
    pub fn cookie_config(&self) -> CookieConfig {
        CookieConfig {
            name: self.session_cookie_name.clone(),
            secure: self.cookie_secure,
            http_only: true,
            same_site: self.cookie_same_site,
            path: "/".to_string(),
            max_age_secs: Some(self.session_ttl.as_secs() as i64),
        }
    }
}
