//! Profile repository functions (generic over ConnectionTrait).
//!
//! The profiles table holds a single document; reads take the first row and
//! writes update it in place, creating it on first save.

use sea_orm::{ActiveModelTrait, ConnectionTrait, EntityTrait, NotSet, Set};
use time::OffsetDateTime;

use crate::entities::profiles;
use crate::error::AppError;

#[derive(Debug, Clone)]
pub struct ProfileDraft {
    pub headline: Option<String>,
    pub bio: Option<String>,
    pub skills: Vec<String>,
    pub social_links: serde_json::Map<String, serde_json::Value>,
}

pub async fn find<C: ConnectionTrait + Send + Sync>(
    conn: &C,
) -> Result<Option<profiles::Model>, AppError> {
    Ok(profiles::Entity::find().one(conn).await?)
}

pub async fn upsert<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    draft: ProfileDraft,
) -> Result<profiles::Model, AppError> {
    let now = OffsetDateTime::now_utc();

    match profiles::Entity::find().one(conn).await? {
        Some(existing) => {
            let mut active: profiles::ActiveModel = existing.into();
            active.headline = Set(draft.headline);
            active.bio = Set(draft.bio);
            active.skills = Set(serde_json::json!(draft.skills));
            active.social_links = Set(serde_json::Value::Object(draft.social_links));
            active.updated_at = Set(now);
            Ok(active.update(conn).await?)
        }
        None => {
            let row = profiles::ActiveModel {
                id: NotSet,
                headline: Set(draft.headline),
                bio: Set(draft.bio),
                skills: Set(serde_json::json!(draft.skills)),
                social_links: Set(serde_json::Value::Object(draft.social_links)),
                created_at: Set(now),
                updated_at: Set(now),
            }
            .insert(conn)
            .await?;
            Ok(row)
        }
    }
}
