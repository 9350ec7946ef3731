//! Project repository functions (generic over ConnectionTrait).

use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, NotSet, QueryFilter, QueryOrder,
    Set,
};
use time::OffsetDateTime;

use crate::entities::projects;
use crate::error::AppError;

/// Fields a caller supplies when creating or updating a project.
#[derive(Debug, Clone)]
pub struct ProjectDraft {
    pub title: String,
    pub slug: String,
    pub summary: Option<String>,
    pub tech_stack: Vec<String>,
    pub repo_url: Option<String>,
    pub live_url: Option<String>,
    pub published: bool,
    pub sort_order: i32,
}

pub async fn list_published<C: ConnectionTrait + Send + Sync>(
    conn: &C,
) -> Result<Vec<projects::Model>, AppError> {
    let rows = projects::Entity::find()
        .filter(projects::Column::Published.eq(true))
        .order_by_asc(projects::Column::SortOrder)
        .all(conn)
        .await?;
    Ok(rows)
}

pub async fn list_all<C: ConnectionTrait + Send + Sync>(
    conn: &C,
) -> Result<Vec<projects::Model>, AppError> {
    let rows = projects::Entity::find()
        .order_by_asc(projects::Column::SortOrder)
        .all(conn)
        .await?;
    Ok(rows)
}

pub async fn find_published_by_slug<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    slug: &str,
) -> Result<Option<projects::Model>, AppError> {
    let row = projects::Entity::find()
        .filter(projects::Column::Slug.eq(slug))
        .filter(projects::Column::Published.eq(true))
        .one(conn)
        .await?;
    Ok(row)
}

pub async fn find_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: i64,
) -> Result<Option<projects::Model>, AppError> {
    Ok(projects::Entity::find_by_id(id).one(conn).await?)
}

pub async fn insert<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    draft: ProjectDraft,
) -> Result<projects::Model, AppError> {
    let now = OffsetDateTime::now_utc();
    let row = projects::ActiveModel {
        id: NotSet,
        title: Set(draft.title),
        slug: Set(draft.slug),
        summary: Set(draft.summary),
        tech_stack: Set(serde_json::json!(draft.tech_stack)),
        repo_url: Set(draft.repo_url),
        live_url: Set(draft.live_url),
        published: Set(draft.published),
        sort_order: Set(draft.sort_order),
        created_at: Set(now),
        updated_at: Set(now),
    }
    .insert(conn)
    .await?;
    Ok(row)
}

pub async fn update<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: i64,
    draft: ProjectDraft,
) -> Result<Option<projects::Model>, AppError> {
    let Some(existing) = projects::Entity::find_by_id(id).one(conn).await? else {
        return Ok(None);
    };

    let mut active: projects::ActiveModel = existing.into();
    active.title = Set(draft.title);
    active.slug = Set(draft.slug);
    active.summary = Set(draft.summary);
    active.tech_stack = Set(serde_json::json!(draft.tech_stack));
    active.repo_url = Set(draft.repo_url);
    active.live_url = Set(draft.live_url);
    active.published = Set(draft.published);
    active.sort_order = Set(draft.sort_order);
    active.updated_at = Set(OffsetDateTime::now_utc());

    Ok(Some(active.update(conn).await?))
}

pub async fn delete<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: i64,
) -> Result<bool, AppError> {
    let result = projects::Entity::delete_by_id(id).exec(conn).await?;
    Ok(result.rows_affected > 0)
}
