//! Admin extractor for back-office API handlers.

use actix_web::dev::Payload;
use actix_web::{web, FromRequest, HttpRequest};
use futures_util::future::{ready, Ready};

use crate::auth::claims::SessionClaims;
use crate::error::AppError;
use crate::session::cookie::read_session;
use crate::state::app_state::AppState;

/// A verified session whose role is "admin".
///
/// No session is 401; a session without the admin role is 403 (the caller
/// is known, just not allowed).
#[derive(Debug, Clone)]
pub struct CurrentAdmin(pub SessionClaims);

impl FromRequest for CurrentAdmin {
    type Error = AppError;
    type Future = Ready<Result<Self, AppError>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let result = match req.app_data::<web::Data<AppState>>() {
            Some(state) => match read_session(req, &state.security) {
                Some(claims) if claims.is_admin() => Ok(CurrentAdmin(claims)),
                Some(_) => Err(AppError::forbidden()),
                None => Err(AppError::session_missing()),
            },
            None => Err(AppError::internal("AppState not available".to_string())),
        };
        ready(result)
    }
}
