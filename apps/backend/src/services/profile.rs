//! Owner profile document rules.

use sea_orm::ConnectionTrait;
use tracing::info;

use crate::entities::profiles;
use crate::error::AppError;
use crate::repos::profiles as repo;
use crate::repos::profiles::ProfileDraft;

pub async fn get<C: ConnectionTrait + Send + Sync>(
    conn: &C,
) -> Result<profiles::Model, AppError> {
    repo::find(conn)
        .await?
        .ok_or_else(|| AppError::not_found("PROFILE_NOT_FOUND", "Profile not found".to_string()))
}

pub async fn save<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    draft: ProfileDraft,
) -> Result<profiles::Model, AppError> {
    let row = repo::upsert(conn, draft).await?;
    info!(profile_id = row.id, "profile saved");
    Ok(row)
}
