use actix_web::{web, HttpResponse};
use serde::Deserialize;

use crate::error::AppError;
use crate::extractors::CurrentAdmin;
use crate::repos::projects::ProjectDraft;
use crate::services::projects;
use crate::state::app_state::{require_db, AppState};

#[derive(Debug, Deserialize)]
pub struct ProjectPayload {
    pub title: String,
    pub slug: String,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub tech_stack: Vec<String>,
    #[serde(default)]
    pub repo_url: Option<String>,
    #[serde(default)]
    pub live_url: Option<String>,
    #[serde(default)]
    pub published: bool,
    #[serde(default)]
    pub sort_order: i32,
}

impl From<ProjectPayload> for ProjectDraft {
    fn from(payload: ProjectPayload) -> Self {
        Self {
            title: payload.title,
            slug: payload.slug,
            summary: payload.summary,
            tech_stack: payload.tech_stack,
            repo_url: payload.repo_url,
            live_url: payload.live_url,
            published: payload.published,
            sort_order: payload.sort_order,
        }
    }
}

async fn list_published(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let db = require_db(&app_state)?;
    let rows = projects::list_published(db).await?;
    Ok(HttpResponse::Ok().json(rows))
}

async fn get_published(
    slug: web::Path<String>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let db = require_db(&app_state)?;
    let row = projects::get_published(db, &slug).await?;
    Ok(HttpResponse::Ok().json(row))
}

async fn admin_list(
    _admin: CurrentAdmin,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let db = require_db(&app_state)?;
    let rows = projects::list_all(db).await?;
    Ok(HttpResponse::Ok().json(rows))
}

async fn admin_create(
    _admin: CurrentAdmin,
    payload: web::Json<ProjectPayload>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let db = require_db(&app_state)?;
    let row = projects::create(db, payload.into_inner().into()).await?;
    Ok(HttpResponse::Created().json(row))
}

async fn admin_update(
    _admin: CurrentAdmin,
    id: web::Path<i64>,
    payload: web::Json<ProjectPayload>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let db = require_db(&app_state)?;
    let row = projects::update(db, *id, payload.into_inner().into()).await?;
    Ok(HttpResponse::Ok().json(row))
}

async fn admin_delete(
    _admin: CurrentAdmin,
    id: web::Path<i64>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let db = require_db(&app_state)?;
    projects::delete(db, *id).await?;
    Ok(HttpResponse::NoContent().finish())
}

pub fn configure_public_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("").route(web::get().to(list_published)))
        .service(web::resource("/{slug}").route(web::get().to(get_published)));
}

pub fn configure_admin_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/projects")
            .route(web::get().to(admin_list))
            .route(web::post().to(admin_create)),
    )
    .service(
        web::resource("/projects/{id}")
            .route(web::put().to(admin_update))
            .route(web::delete().to(admin_delete)),
    );
}
