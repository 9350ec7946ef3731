use actix_web::{web, HttpResponse};
use serde::Deserialize;

use crate::error::AppError;
use crate::extractors::CurrentAdmin;
use crate::repos::profiles::ProfileDraft;
use crate::services::profile;
use crate::state::app_state::{require_db, AppState};

#[derive(Debug, Deserialize)]
pub struct ProfilePayload {
    #[serde(default)]
    pub headline: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub social_links: serde_json::Map<String, serde_json::Value>,
}

async fn get_profile(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let db = require_db(&app_state)?;
    let row = profile::get(db).await?;
    Ok(HttpResponse::Ok().json(row))
}

async fn admin_save_profile(
    _admin: CurrentAdmin,
    payload: web::Json<ProfilePayload>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let db = require_db(&app_state)?;
    let payload = payload.into_inner();
    let row = profile::save(
        db,
        ProfileDraft {
            headline: payload.headline,
            bio: payload.bio,
            skills: payload.skills,
            social_links: payload.social_links,
        },
    )
    .await?;
    Ok(HttpResponse::Ok().json(row))
}

pub fn configure_public_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("").route(web::get().to(get_profile)));
}

pub fn configure_admin_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/profile").route(web::put().to(admin_save_profile)));
}
