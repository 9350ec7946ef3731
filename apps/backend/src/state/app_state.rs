use sea_orm::DatabaseConnection;

use super::security_config::SecurityConfig;
use crate::config::routes::RouteRules;

/// Application state containing shared resources.
///
/// Built once at startup and injected via `web::Data`; everything here is
/// read-only after construction, so concurrent request handlers share it
/// without coordination.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Database connection pool (optional for test scenarios)
    pub db: Option<DatabaseConnection>,
    /// Session signing and cookie configuration
    pub security: SecurityConfig,
    /// Route-class rules consumed by the session gate
    pub routes: RouteRules,
}

impl AppState {
    /// Create a new AppState with the given database connection
    pub fn new(db: DatabaseConnection, security: SecurityConfig, routes: RouteRules) -> Self {
        Self {
            db: Some(db),
            security,
            routes,
        }
    }

    /// Create a new AppState without a database connection (for testing)
    pub fn without_db(security: SecurityConfig, routes: RouteRules) -> Self {
        Self {
            db: None,
            security,
            routes,
        }
    }

    #[cfg(test)]
    pub fn for_tests() -> Self {
        Self::without_db(SecurityConfig::default(), RouteRules::default())
    }
}

/// Borrow the pool or fail with a typed error when the state was built
/// without one.
pub fn require_db(state: &AppState) -> Result<&DatabaseConnection, crate::error::AppError> {
    state
        .db
        .as_ref()
        .ok_or_else(|| crate::error::AppError::db_unavailable("no database connection".to_string()))
}
