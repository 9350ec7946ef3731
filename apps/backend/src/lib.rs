#![deny(clippy::wildcard_imports)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

pub mod auth;
pub mod config;
pub mod entities;
pub mod error;
pub mod extractors;
pub mod infra;
pub mod logging;
pub mod middleware;
pub mod repos;
pub mod routes;
pub mod services;
pub mod session;
pub mod state;
pub mod trace_ctx;

#[cfg(test)]
pub mod test_bootstrap;

// Re-exports for public API
pub use auth::claims::SessionClaims;
pub use auth::jwt::{mint_session_token, verify_session_token};
pub use config::db::{db_url, DbOwner, DbProfile};
pub use config::routes::{RouteClass, RouteRules};
pub use error::AppError;
pub use extractors::{CurrentAdmin, CurrentSession};
pub use infra::db::connect_db;
pub use infra::state::build_state;
pub use middleware::cors::cors_middleware;
pub use middleware::request_trace::RequestTrace;
pub use middleware::session_gate::{decide, GateDecision, SessionGate};
pub use session::cookie::{clear_session_cookie, issue_session_cookie, read_session};
pub use state::app_state::AppState;
pub use state::security_config::{SecurityConfig, SESSION_COOKIE};

// Prelude for test convenience
pub mod prelude {
    pub use super::auth::claims::*;
    pub use super::auth::jwt::*;
    pub use super::config::routes::*;
    pub use super::error::*;
    pub use super::middleware::session_gate::*;
    pub use super::session::cookie::*;
    pub use super::state::app_state::*;
    pub use super::state::security_config::*;
}

// Auto-initialize logging for unit tests
#[cfg(test)]
#[ctor::ctor]
fn init_test_logging() {
    test_bootstrap::logging::init();
}
