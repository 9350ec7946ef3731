//! Session claims carried by the signed cookie and stored in request
//! extensions by the session gate.

use serde::{Deserialize, Serialize};

/// Decoded contents of a session token.
///
/// Only ever constructed after successful credential verification (login) or
/// from an already-verified token (refresh). Never persisted server-side; the
/// signed cookie is its only durable form.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct SessionClaims {
    /// Account identifier (users.id, stringified)
    pub sub: String,
    /// Privilege level ("admin", "subscriber"); absent for plain accounts
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    /// Issued-at (seconds since epoch)
    pub iat: i64,
    /// Expiry (seconds since epoch)
    pub exp: i64,
}

impl SessionClaims {
    pub fn is_admin(&self) -> bool {
        self.role.as_deref() == Some("admin")
    }
}
