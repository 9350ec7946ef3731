use std::time::SystemTime;

use actix_web::{web, HttpResponse};
use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::extractors::CurrentSession;
use crate::services::accounts::verify_credentials;
use crate::session::cookie::{clear_session_cookie, issue_session_cookie};
use crate::state::app_state::{require_db, AppState};

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub id: i64,
    pub role: String,
}

#[derive(Debug, Serialize)]
pub struct MeResponse {
    pub sub: String,
    pub role: Option<String>,
    pub exp: i64,
}

/// Handle a login submission: verify credentials, mint a session token and
/// set the session cookie. Failures are the generic invalid-credentials
/// problem; no cookie is set on failure.
async fn login(
    req: web::Json<LoginRequest>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    if req.email.trim().is_empty() {
        return Err(AppError::bad_request(
            "INVALID_EMAIL",
            "Email cannot be empty".to_string(),
        ));
    }
    if req.password.is_empty() {
        return Err(AppError::bad_request(
            "INVALID_PASSWORD",
            "Password cannot be empty".to_string(),
        ));
    }

    let db = require_db(&app_state)?;
    let account = verify_credentials(db, &req.email, &req.password).await?;

    let cookie = issue_session_cookie(
        &account.id.to_string(),
        Some(&account.role),
        SystemTime::now(),
        &app_state.security,
    )?;

    Ok(HttpResponse::Ok().cookie(cookie).json(LoginResponse {
        id: account.id,
        role: account.role,
    }))
}

/// Destroy the session by deleting the cookie. The token itself stays
/// cryptographically valid until its natural expiry; there is no server-side
/// revocation list.
async fn logout(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    Ok(HttpResponse::NoContent()
        .cookie(clear_session_cookie(&app_state.security))
        .finish())
}

/// Who am I, according to my cookie.
async fn me(session: CurrentSession) -> Result<HttpResponse, AppError> {
    let claims = session.0;
    Ok(HttpResponse::Ok().json(MeResponse {
        sub: claims.sub,
        role: claims.role,
        exp: claims.exp,
    }))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/login").route(web::post().to(login)))
        .service(web::resource("/logout").route(web::post().to(logout)))
        .service(web::resource("/me").route(web::get().to(me)));
}
