//! Session extractor for API handlers.
//!
//! API routes are exempt from the page gate, so handlers that need the
//! caller's identity pull it straight from the cookie here. Absent and
//! invalid sessions are indistinguishable to the client: both are 401.

use actix_web::dev::Payload;
use actix_web::{web, FromRequest, HttpRequest};
use futures_util::future::{ready, Ready};

use crate::auth::claims::SessionClaims;
use crate::error::AppError;
use crate::session::cookie::read_session;
use crate::state::app_state::AppState;

/// The verified session of the current request.
#[derive(Debug, Clone)]
pub struct CurrentSession(pub SessionClaims);

impl FromRequest for CurrentSession {
    type Error = AppError;
    type Future = Ready<Result<Self, AppError>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let result = match req.app_data::<web::Data<AppState>>() {
            Some(state) => read_session(req, &state.security)
                .map(CurrentSession)
                .ok_or_else(AppError::session_missing),
            None => Err(AppError::internal("AppState not available".to_string())),
        };
        ready(result)
    }
}
