//! Project content rules on top of the repository layer.

use sea_orm::{ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter};
use tracing::info;

use crate::entities::projects;
use crate::error::AppError;
use crate::repos::projects as repo;
use crate::repos::projects::ProjectDraft;

fn validate_draft(draft: &ProjectDraft) -> Result<(), AppError> {
    if draft.title.trim().is_empty() {
        return Err(AppError::invalid(
            "INVALID_TITLE",
            "Title cannot be empty".to_string(),
        ));
    }
    if draft.slug.is_empty()
        || !draft
            .slug
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
    {
        return Err(AppError::invalid(
            "INVALID_SLUG",
            "Slug must be lowercase letters, digits and dashes".to_string(),
        ));
    }
    Ok(())
}

async fn slug_taken<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    slug: &str,
    excluding_id: Option<i64>,
) -> Result<bool, AppError> {
    let existing = projects::Entity::find()
        .filter(projects::Column::Slug.eq(slug))
        .one(conn)
        .await?;
    Ok(match existing {
        Some(row) => Some(row.id) != excluding_id,
        None => false,
    })
}

pub async fn list_published<C: ConnectionTrait + Send + Sync>(
    conn: &C,
) -> Result<Vec<projects::Model>, AppError> {
    repo::list_published(conn).await
}

pub async fn list_all<C: ConnectionTrait + Send + Sync>(
    conn: &C,
) -> Result<Vec<projects::Model>, AppError> {
    repo::list_all(conn).await
}

pub async fn get_published<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    slug: &str,
) -> Result<projects::Model, AppError> {
    repo::find_published_by_slug(conn, slug)
        .await?
        .ok_or_else(|| AppError::not_found("PROJECT_NOT_FOUND", "Project not found".to_string()))
}

pub async fn create<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    draft: ProjectDraft,
) -> Result<projects::Model, AppError> {
    validate_draft(&draft)?;
    if slug_taken(conn, &draft.slug, None).await? {
        return Err(AppError::conflict(
            "SLUG_TAKEN",
            format!("A project with slug '{}' already exists", draft.slug),
        ));
    }

    let row = repo::insert(conn, draft).await?;
    info!(project_id = row.id, slug = %row.slug, "project created");
    Ok(row)
}

pub async fn update<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: i64,
    draft: ProjectDraft,
) -> Result<projects::Model, AppError> {
    validate_draft(&draft)?;
    if slug_taken(conn, &draft.slug, Some(id)).await? {
        return Err(AppError::conflict(
            "SLUG_TAKEN",
            format!("A project with slug '{}' already exists", draft.slug),
        ));
    }

    repo::update(conn, id, draft)
        .await?
        .ok_or_else(|| AppError::not_found("PROJECT_NOT_FOUND", "Project not found".to_string()))
}

pub async fn delete<C: ConnectionTrait + Send + Sync>(conn: &C, id: i64) -> Result<(), AppError> {
    if !repo::delete(conn, id).await? {
        return Err(AppError::not_found(
            "PROJECT_NOT_FOUND",
            "Project not found".to_string(),
        ));
    }
    info!(project_id = id, "project deleted");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(title: &str, slug: &str) -> ProjectDraft {
        ProjectDraft {
            title: title.to_string(),
            slug: slug.to_string(),
            summary: None,
            tech_stack: vec![],
            repo_url: None,
            live_url: None,
            published: false,
            sort_order: 0,
        }
    }

    #[test]
    fn valid_draft_passes() {
        assert!(validate_draft(&draft("Folio", "folio-site")).is_ok());
        assert!(validate_draft(&draft("X", "a-2024")).is_ok());
    }

    #[test]
    fn empty_title_rejected() {
        assert!(validate_draft(&draft("  ", "slug")).is_err());
    }

    #[test]
    fn bad_slugs_rejected() {
        for slug in ["", "Has Caps", "space here", "ünïcode", "under_score"] {
            assert!(validate_draft(&draft("Title", slug)).is_err(), "{slug}");
        }
    }
}
