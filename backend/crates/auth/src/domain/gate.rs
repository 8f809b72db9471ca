//! Gate Decisions
//!
//! The pure decision table at the heart of the request gate: given a route
//! class and whether the request carries a valid session, produce exactly
//! one routing decision. No I/O, no clock, no randomness.

use crate::domain::route::RouteClass;

/// Outcome of the gate for one request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateDecision {
    /// Pass the request through unchanged
    Allow,
    /// 302 to `/login?from=<original-path>`
    RedirectToLogin,
    /// 302 to `/dashboard` (already signed in, no reason to see the form)
    RedirectToDashboard,
    /// 401 with a JSON error body (API routes; the middleware may still
    /// honor an API key before finalizing this)
    Reject,
}

/// Decide what to do with a request.
///
/// | class          | session present     | session absent  |
/// |----------------|---------------------|-----------------|
/// | Public/AuthApi | Allow               | Allow           |
/// | LoginPage      | RedirectToDashboard | Allow           |
/// | ProtectedPage  | Allow               | RedirectToLogin |
/// | ProtectedApi   | Allow               | Reject          |
pub fn decide(class: RouteClass, session_present: bool) -> GateDecision {
    match (class, session_present) {
        (RouteClass::Public | RouteClass::AuthApi, _) => GateDecision::Allow,
        (RouteClass::LoginPage, true) => GateDecision::RedirectToDashboard,
        (RouteClass::LoginPage, false) => GateDecision::Allow,
        (RouteClass::ProtectedPage, true) => GateDecision::Allow,
        (RouteClass::ProtectedPage, false) => GateDecision::RedirectToLogin,
        (RouteClass::ProtectedApi, true) => GateDecision::Allow,
        (RouteClass::ProtectedApi, false) => GateDecision::Reject,
    }
}
