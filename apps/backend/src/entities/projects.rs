use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "projects")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub title: String,
    /// URL segment; unique
    pub slug: String,
    pub summary: Option<String>,
    /// JSON array of technology names
    #[sea_orm(column_name = "tech_stack")]
    pub tech_stack: Json,
    #[sea_orm(column_name = "repo_url")]
    pub repo_url: Option<String>,
    #[sea_orm(column_name = "live_url")]
    pub live_url: Option<String>,
    pub published: bool,
    #[sea_orm(column_name = "sort_order")]
    pub sort_order: i32,
    #[sea_orm(column_name = "created_at")]
    pub created_at: OffsetDateTime,
    #[sea_orm(column_name = "updated_at")]
    pub updated_at: OffsetDateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
