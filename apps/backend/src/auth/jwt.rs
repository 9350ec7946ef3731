use std::time::{SystemTime, UNIX_EPOCH};

use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};

use crate::auth::claims::SessionClaims;
use crate::error::AppError;
use crate::state::security_config::SecurityConfig;

/// Mint a HS256 session token with the configured TTL (7 days).
pub fn mint_session_token(
    sub: &str,
    role: Option<&str>,
    now: SystemTime,
    security: &SecurityConfig,
) -> Result<String, AppError> {
    let iat = now
        .duration_since(UNIX_EPOCH)
        .map_err(|_| AppError::internal("Failed to get current time".to_string()))?
        .as_secs() as i64;

    let claims = SessionClaims {
        sub: sub.to_string(),
        role: role.map(|r| r.to_string()),
        iat,
        exp: iat + security.session_ttl_secs,
    };

    encode(
        &Header::new(security.algorithm),
        &claims,
        &EncodingKey::from_secret(&security.session_secret),
    )
    .map_err(|e| AppError::internal(format!("Failed to encode session token: {e}")))
}

/// Verify a session token and return its claims.
///
/// The failure variants stay distinguishable here (expired vs. tampered vs.
/// malformed); the cookie accessor collapses them all to "no session". No
/// library error ever escapes this boundary.
pub fn verify_session_token(
    token: &str,
    security: &SecurityConfig,
) -> Result<SessionClaims, AppError> {
    let mut validation = Validation::new(security.algorithm);
    // No clock leeway: a cookie that expired one second ago must fail closed.
    validation.leeway = 0;

    decode::<SessionClaims>(
        token,
        &DecodingKey::from_secret(&security.session_secret),
        &validation,
    )
    .map(|data| data.claims)
    .map_err(|e| match e.kind() {
        jsonwebtoken::errors::ErrorKind::ExpiredSignature => AppError::session_expired(),
        _ => AppError::session_invalid(),
    })
}

#[cfg(test)]
mod tests {
    use std::time::{Duration, SystemTime, UNIX_EPOCH};

    use super::{mint_session_token, verify_session_token};
    use crate::error::AppError;
    use crate::state::security_config::SecurityConfig;

    fn test_security() -> SecurityConfig {
        SecurityConfig::new("test_secret_key_for_testing_purposes_only".as_bytes())
    }

    #[test]
    fn test_mint_and_verify_roundtrip() {
        let security = test_security();
        let now = SystemTime::now();

        let token = mint_session_token("42", Some("admin"), now, &security).unwrap();
        let claims = verify_session_token(&token, &security).unwrap();

        assert_eq!(claims.sub, "42");
        assert_eq!(claims.role.as_deref(), Some("admin"));
        assert_eq!(
            claims.iat,
            now.duration_since(UNIX_EPOCH).unwrap().as_secs() as i64
        );
        assert_eq!(claims.exp, claims.iat + 7 * 24 * 60 * 60);
    }

    #[test]
    fn test_roundtrip_without_role() {
        let security = test_security();

        let token = mint_session_token("7", None, SystemTime::now(), &security).unwrap();
        let claims = verify_session_token(&token, &security).unwrap();

        assert_eq!(claims.sub, "7");
        assert_eq!(claims.role, None);
        assert!(!claims.is_admin());
    }

    #[test]
    fn test_expired_token() {
        let security = test_security();

        // Eight days ago so the 7-day token is expired
        let now = SystemTime::now() - Duration::from_secs(8 * 24 * 60 * 60);
        let token = mint_session_token("42", None, now, &security).unwrap();

        match verify_session_token(&token, &security) {
            Err(AppError::SessionExpired) => {}
            other => panic!("Expected SessionExpired, got {other:?}"),
        }
    }

    #[test]
    fn test_just_expired_token_fails_closed() {
        let security = test_security();

        // Expired one second ago; leeway is zero so this must fail
        let ttl = Duration::from_secs(security.session_ttl_secs as u64);
        let now = SystemTime::now() - ttl - Duration::from_secs(1);
        let token = mint_session_token("42", None, now, &security).unwrap();

        assert!(matches!(
            verify_session_token(&token, &security),
            Err(AppError::SessionExpired)
        ));
    }

    #[test]
    fn test_bad_signature() {
        let security_a = SecurityConfig::new("secret-A".as_bytes());
        let token = mint_session_token("42", None, SystemTime::now(), &security_a).unwrap();

        let security_b = SecurityConfig::new("secret-B".as_bytes());
        match verify_session_token(&token, &security_b) {
            Err(AppError::SessionInvalid) => {}
            other => panic!("Expected SessionInvalid, got {other:?}"),
        }
    }

    #[test]
    fn test_tampered_signature_rejected() {
        let security = test_security();
        let token = mint_session_token("42", Some("admin"), SystemTime::now(), &security).unwrap();

        let mut parts: Vec<String> = token.split('.').map(|s| s.to_string()).collect();
        assert_eq!(parts.len(), 3);

        // Flip every character of the signature segment in turn; each single
        // flip must make decode fail.
        let signature = parts[2].clone();
        for (i, c) in signature.char_indices() {
            let replacement = if c == 'A' { 'B' } else { 'A' };
            if c == replacement {
                continue;
            }
            let mut mutated = signature.clone();
            mutated.replace_range(i..i + c.len_utf8(), &replacement.to_string());
            parts[2] = mutated;
            let tampered = parts.join(".");
            assert!(
                verify_session_token(&tampered, &security).is_err(),
                "flip at {i} was accepted"
            );
        }
    }

    #[test]
    fn test_malformed_token() {
        let security = test_security();

        for garbage in ["", "not-a-token", "a.b", "a.b.c.d", "🦀🦀🦀"] {
            assert!(matches!(
                verify_session_token(garbage, &security),
                Err(AppError::SessionInvalid)
            ));
        }
    }
}
