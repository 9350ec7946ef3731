use jsonwebtoken::Algorithm;

use crate::error::AppError;

/// Name of the cookie the signed session token travels in.
pub const SESSION_COOKIE: &str = "session";

/// Session validity window: 7 days, pushed forward on every refresh.
pub const SESSION_TTL_SECS: i64 = 7 * 24 * 60 * 60;

/// Configuration for session signing and cookie attributes.
#[derive(Debug, Clone)]
pub struct SecurityConfig {
    /// Secret key for signing and verifying session tokens
    pub session_secret: Vec<u8>,
    /// Signing algorithm (HS256)
    pub algorithm: Algorithm,
    /// Seconds a freshly minted or refreshed token stays valid
    pub session_ttl_secs: i64,
    /// Whether cookies carry the Secure attribute (production)
    pub secure_cookies: bool,
}

impl SecurityConfig {
    /// Create a new SecurityConfig with the given session secret
    pub fn new(session_secret: impl Into<Vec<u8>>) -> Self {
        Self {
            session_secret: session_secret.into(),
            algorithm: Algorithm::HS256,
            session_ttl_secs: SESSION_TTL_SECS,
            secure_cookies: false,
        }
    }

    /// Read the configuration from the environment.
    ///
    /// `SESSION_SECRET` is required; a missing secret is a startup failure,
    /// never a per-request one. `SECURE_COOKIES=true` turns on the Secure
    /// cookie attribute for production deployments behind TLS.
    pub fn from_env() -> Result<Self, AppError> {
        let secret = std::env::var("SESSION_SECRET")
            .map_err(|_| AppError::config("SESSION_SECRET must be set".to_string()))?;
        if secret.is_empty() {
            return Err(AppError::config("SESSION_SECRET must not be empty".to_string()));
        }

        let secure_cookies = std::env::var("SECURE_COOKIES")
            .map(|v| v == "true" || v == "1")
            .unwrap_or(false);

        Ok(Self {
            secure_cookies,
            ..Self::new(secret.as_bytes().to_vec())
        })
    }

    pub fn with_secure_cookies(mut self, secure: bool) -> Self {
        self.secure_cookies = secure;
        self
    }
}

impl Default for SecurityConfig {
    fn default() -> Self {
        Self::new(b"default_secret_for_tests_only".to_vec())
    }
}

#[cfg(test)]
mod tests {
    use serial_test::serial;

    use super::*;

    #[test]
    fn ttl_is_seven_days() {
        let config = SecurityConfig::default();
        assert_eq!(config.session_ttl_secs, 7 * 24 * 60 * 60);
    }

    #[test]
    #[serial]
    fn from_env_fails_without_secret() {
        std::env::remove_var("SESSION_SECRET");
        let result = SecurityConfig::from_env();
        assert!(result.is_err());
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("SESSION_SECRET"));
    }
}
