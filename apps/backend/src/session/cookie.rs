//! Session cookie accessor.
//!
//! The signed token's only durable form is the `session` cookie; this module
//! owns reading it, writing it, and clearing it. Decode failures collapse to
//! `None` here (anonymous visitors are the normal case, not an error) while
//! the codec underneath keeps the failure kinds distinguishable for tests.

use std::time::SystemTime;

use actix_web::cookie::{Cookie, SameSite};
use actix_web::HttpRequest;
use time::OffsetDateTime;

use crate::auth::claims::SessionClaims;
use crate::auth::jwt::{mint_session_token, verify_session_token};
use crate::error::AppError;
use crate::state::security_config::{SecurityConfig, SESSION_COOKIE};

/// Read and verify the current request's session. Side-effect-free.
///
/// Absent cookie, bad signature, malformed token and natural expiry all
/// return `None`.
pub fn read_session(req: &HttpRequest, security: &SecurityConfig) -> Option<SessionClaims> {
    let cookie = req.cookie(SESSION_COOKIE)?;
    verify_session_token(cookie.value(), security).ok()
}

/// Build the `session` cookie carrying a signed token.
///
/// HttpOnly, SameSite=Lax, site-wide path; Secure in production. The cookie
/// expiry mirrors the token's `exp` so browser and token agree on lifetime.
pub fn session_cookie(
    token: String,
    exp_unix: i64,
    security: &SecurityConfig,
) -> Cookie<'static> {
    let mut builder = Cookie::build(SESSION_COOKIE, token)
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(security.secure_cookies);

    if let Ok(expiry) = OffsetDateTime::from_unix_timestamp(exp_unix) {
        builder = builder.expires(expiry);
    }

    builder.finish()
}

/// Mint a fresh token for `sub`/`role` and wrap it in the session cookie.
///
/// Shared by login (first issuance) and the refresher (re-issuance); both
/// produce a token whose `exp` sits one full TTL from `now`, mirrored in the
/// cookie expiry.
pub fn issue_session_cookie(
    sub: &str,
    role: Option<&str>,
    now: SystemTime,
    security: &SecurityConfig,
) -> Result<Cookie<'static>, AppError> {
    let token = mint_session_token(sub, role, now, security)?;
    let exp = now
        .duration_since(std::time::UNIX_EPOCH)
        .map_err(|_| AppError::internal("Failed to get current time".to_string()))?
        .as_secs() as i64
        + security.session_ttl_secs;
    Ok(session_cookie(token, exp, security))
}

/// Build the removal cookie used by logout: same attributes, empty value,
/// expiry in the past.
pub fn clear_session_cookie(security: &SecurityConfig) -> Cookie<'static> {
    Cookie::build(SESSION_COOKIE, "")
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(security.secure_cookies)
        .expires(OffsetDateTime::UNIX_EPOCH)
        .finish()
}

#[cfg(test)]
mod tests {
    use std::time::SystemTime;

    use actix_web::test::TestRequest;

    use super::*;
    use crate::auth::jwt::mint_session_token;

    fn test_security() -> SecurityConfig {
        SecurityConfig::new("test_secret_key_for_testing_purposes_only".as_bytes())
    }

    #[test]
    fn cookie_attributes() {
        let security = test_security();
        let cookie = session_cookie("tok".to_string(), 2_000_000_000, &security);

        assert_eq!(cookie.name(), "session");
        assert_eq!(cookie.path(), Some("/"));
        assert_eq!(cookie.http_only(), Some(true));
        assert_eq!(cookie.same_site(), Some(SameSite::Lax));
        assert_eq!(cookie.secure(), Some(false));

        let expiry = cookie.expires_datetime().expect("expiry set");
        assert_eq!(expiry.unix_timestamp(), 2_000_000_000);
    }

    #[test]
    fn secure_attribute_follows_config() {
        let security = test_security().with_secure_cookies(true);
        let cookie = session_cookie("tok".to_string(), 2_000_000_000, &security);
        assert_eq!(cookie.secure(), Some(true));
    }

    #[test]
    fn clear_cookie_expires_in_the_past() {
        let security = test_security();
        let cookie = clear_session_cookie(&security);

        assert_eq!(cookie.name(), "session");
        assert_eq!(cookie.value(), "");
        assert_eq!(cookie.http_only(), Some(true));
        let expiry = cookie.expires_datetime().expect("expiry set");
        assert!(expiry < OffsetDateTime::now_utc());
    }

    #[actix_web::test]
    async fn read_session_roundtrip() {
        let security = test_security();
        let token =
            mint_session_token("42", Some("admin"), SystemTime::now(), &security).unwrap();

        let req = TestRequest::default()
            .cookie(Cookie::new(SESSION_COOKIE, token))
            .to_http_request();

        let claims = read_session(&req, &security).expect("valid session");
        assert_eq!(claims.sub, "42");
        assert!(claims.is_admin());
    }

    #[actix_web::test]
    async fn read_session_absent_cookie() {
        let security = test_security();
        let req = TestRequest::default().to_http_request();
        assert!(read_session(&req, &security).is_none());
    }

    #[actix_web::test]
    async fn read_session_garbage_cookie() {
        let security = test_security();
        let req = TestRequest::default()
            .cookie(Cookie::new(SESSION_COOKIE, "definitely-not-a-jwt"))
            .to_http_request();
        assert!(read_session(&req, &security).is_none());
    }
}
