//! Route Classification
//!
//! Sorts every inbound path into exactly one class. Classification is a
//! pure function of the path string - never the method, body, or headers -
//! so the gate's decision for a path is reproducible from the path alone.

/// Login page path
pub const LOGIN_PATH: &str = "/login";

/// Dashboard landing page, target of the authenticated-on-login redirect
pub const DASHBOARD_PATH: &str = "/dashboard";

/// Static asset prefix served without authentication
pub const STATIC_ASSET_PREFIX: &str = "/assets";

/// Authentication API prefix (login/logout/status must stay reachable
/// without a session)
pub const AUTH_API_PREFIX: &str = "/api/auth/";

/// Programmatic API prefix
pub const API_PREFIX: &str = "/api/";

/// Route class of an inbound request path
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteClass {
    /// Root and static assets - always served
    Public,
    /// Login/logout/status endpoints - always served
    AuthApi,
    /// The login form page
    LoginPage,
    /// JSON API routes requiring a session or an API key
    ProtectedApi,
    /// Dashboard pages requiring a session
    ProtectedPage,
}

/// Classify a request path. Total over any string; first match wins.
pub fn classify(path: &str) -> RouteClass {
    if path == "/" || path.starts_with(STATIC_ASSET_PREFIX) {
        return RouteClass::Public;
    }
    if path.starts_with(AUTH_API_PREFIX) {
        return RouteClass::AuthApi;
    }
    if path == LOGIN_PATH {
        return RouteClass::LoginPage;
    }
    if path.starts_with(API_PREFIX) {
        return RouteClass::ProtectedApi;
    }
    RouteClass::ProtectedPage
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_public_routes() {
        assert_eq!(classify("/"), RouteClass::Public);
        assert_eq!(classify("/assets/app.css"), RouteClass::Public);
        assert_eq!(classify("/assets/img/logo.svg"), RouteClass::Public);
    }

    #[test]
    fn test_auth_api_routes() {
        assert_eq!(classify("/api/auth/login"), RouteClass::AuthApi);
        assert_eq!(classify("/api/auth/logout"), RouteClass::AuthApi);
        assert_eq!(classify("/api/auth/status"), RouteClass::AuthApi);
    }

    #[test]
    fn test_login_page() {
        assert_eq!(classify("/login"), RouteClass::LoginPage);
        // Only the exact path is the login page
        assert_eq!(classify("/login/extra"), RouteClass::ProtectedPage);
    }

    #[test]
    fn test_protected_api_routes() {
        assert_eq!(classify("/api/stations"), RouteClass::ProtectedApi);
        assert_eq!(classify("/api/settings/generate-api-key"), RouteClass::ProtectedApi);
        // Bare "/api/auth" without trailing slash is not the auth prefix
        assert_eq!(classify("/api/auth"), RouteClass::ProtectedApi);
    }

    #[test]
    fn test_protected_pages() {
        assert_eq!(classify("/dashboard"), RouteClass::ProtectedPage);
        assert_eq!(classify("/clients"), RouteClass::ProtectedPage);
        assert_eq!(classify("/voices"), RouteClass::ProtectedPage);
    }

    #[test]
    fn test_totality_over_odd_inputs() {
        // Never panics, always returns a class
        for path in ["", "no-slash", "//", "/..", "/login?x=1", "/API/stations", "日本語"] {
            let _ = classify(path);
        }
        // Query strings are not stripped here; callers pass the bare path
        assert_eq!(classify(""), RouteClass::ProtectedPage);
        assert_eq!(classify("/API/stations"), RouteClass::ProtectedPage);
    }
}
