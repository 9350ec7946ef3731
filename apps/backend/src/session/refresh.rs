//! Sliding-window session refresh.
//!
//! Each qualifying request re-signs the already-verified payload with a fresh
//! expiry, pushing the 7-day window forward. Callers only invoke this with a
//! payload that decoded successfully; an absent or invalid cookie is a no-op
//! at the call site, never a new session minted from nothing.

use std::time::SystemTime;

use actix_web::cookie::Cookie;

use crate::auth::claims::SessionClaims;
use crate::error::AppError;
use crate::session::cookie::issue_session_cookie;
use crate::state::security_config::SecurityConfig;

/// Re-sign `claims` with a renewed expiry and return the replacement cookie.
pub fn refreshed_session_cookie(
    claims: &SessionClaims,
    now: SystemTime,
    security: &SecurityConfig,
) -> Result<Cookie<'static>, AppError> {
    issue_session_cookie(&claims.sub, claims.role.as_deref(), now, security)
}
