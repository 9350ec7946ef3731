//! Account repository functions (generic over ConnectionTrait).

use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, NotSet, QueryFilter, Set,
};
use time::OffsetDateTime;

use crate::entities::{user_credentials, users};
use crate::error::AppError;

/// Account domain model
#[derive(Debug, Clone, PartialEq)]
pub struct Account {
    pub id: i64,
    pub name: Option<String>,
    pub role: String,
    pub created_at: OffsetDateTime,
    pub updated_at: OffsetDateTime,
}

/// Stored login credentials for an account
#[derive(Debug, Clone, PartialEq)]
pub struct AccountCredentials {
    pub id: i64,
    pub user_id: i64,
    pub email: String,
    pub password_hash: String,
    pub last_login: Option<OffsetDateTime>,
}

pub async fn find_credentials_by_email<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    email: &str,
) -> Result<Option<AccountCredentials>, AppError> {
    let credential = user_credentials::Entity::find()
        .filter(user_credentials::Column::Email.eq(email))
        .one(conn)
        .await?;
    Ok(credential.map(AccountCredentials::from))
}

pub async fn find_account_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: i64,
) -> Result<Option<Account>, AppError> {
    let user = users::Entity::find_by_id(id).one(conn).await?;
    Ok(user.map(Account::from))
}

pub async fn create_account<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    name: Option<&str>,
    role: &str,
) -> Result<Account, AppError> {
    let now = OffsetDateTime::now_utc();
    let user = users::ActiveModel {
        id: NotSet,
        name: Set(name.map(|n| n.to_string())),
        role: Set(role.to_string()),
        created_at: Set(now),
        updated_at: Set(now),
    }
    .insert(conn)
    .await?;
    Ok(Account::from(user))
}

pub async fn create_credentials<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    user_id: i64,
    email: &str,
    password_hash: &str,
) -> Result<AccountCredentials, AppError> {
    let now = OffsetDateTime::now_utc();
    let credential = user_credentials::ActiveModel {
        id: NotSet,
        user_id: Set(user_id),
        email: Set(email.to_string()),
        password_hash: Set(password_hash.to_string()),
        last_login: Set(None),
        created_at: Set(now),
        updated_at: Set(now),
    }
    .insert(conn)
    .await?;
    Ok(AccountCredentials::from(credential))
}

/// Stamp a successful login on the credential row.
pub async fn touch_last_login<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    credential_id: i64,
) -> Result<(), AppError> {
    let now = OffsetDateTime::now_utc();
    let credential = user_credentials::Entity::find_by_id(credential_id)
        .one(conn)
        .await?
        .ok_or_else(|| {
            AppError::not_found("CREDENTIALS_NOT_FOUND", "Credentials not found".to_string())
        })?;

    let mut active: user_credentials::ActiveModel = credential.into();
    active.last_login = Set(Some(now));
    active.updated_at = Set(now);
    active.update(conn).await?;
    Ok(())
}

// Conversions between SeaORM models and domain models

impl From<users::Model> for Account {
    fn from(model: users::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            role: model.role,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

impl From<user_credentials::Model> for AccountCredentials {
    fn from(model: user_credentials::Model) -> Self {
        Self {
            id: model.id,
            user_id: model.user_id,
            email: model.email,
            password_hash: model.password_hash,
            last_login: model.last_login,
        }
    }
}
