//! Credential verification and account provisioning.

use sea_orm::ConnectionTrait;
use tracing::{info, warn};

use crate::auth::password::{hash_password, verify_password};
use crate::error::AppError;
use crate::logging::pii::Redacted;
use crate::repos::accounts;

/// Identity facts carried into a freshly minted session.
#[derive(Debug, Clone, PartialEq)]
pub struct VerifiedAccount {
    pub id: i64,
    pub role: String,
}

/// Pure decision step of the verifier.
///
/// Unknown email and wrong password collapse into the same failure so the
/// response never reveals which half was wrong. Testable without a database.
fn check_login(
    credential: Option<&accounts::AccountCredentials>,
    password: &str,
) -> Result<i64, AppError> {
    match credential {
        Some(cred) if verify_password(&cred.password_hash, password) => Ok(cred.user_id),
        _ => Err(AppError::invalid_credentials()),
    }
}

/// Verify an email/password pair against stored credentials.
///
/// The email is lowercase-normalized before lookup. On success the
/// credential row's last_login is stamped. Neither the password nor the hash
/// is ever logged or returned.
pub async fn verify_credentials<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    email: &str,
    password: &str,
) -> Result<VerifiedAccount, AppError> {
    let normalized = email.trim().to_lowercase();

    let credential = accounts::find_credentials_by_email(conn, &normalized).await?;
    let user_id = check_login(credential.as_ref(), password)?;

    let account = match accounts::find_account_by_id(conn, user_id).await? {
        Some(account) => account,
        None => {
            // Credentials without an account row: broken data, but the
            // response stays generic.
            warn!(user_id, "credentials reference a missing account");
            return Err(AppError::invalid_credentials());
        }
    };

    if let Some(cred) = credential {
        accounts::touch_last_login(conn, cred.id).await?;
    }

    info!(
        user_id = account.id,
        email = %Redacted(&normalized),
        "login verified"
    );

    Ok(VerifiedAccount {
        id: account.id,
        role: account.role,
    })
}

/// Idempotently provision the back-office admin account from configuration.
///
/// Called at startup when `ADMIN_EMAIL`/`ADMIN_PASSWORD` are set. An existing
/// account with that email wins; the configured password is only used on
/// first creation.
pub async fn ensure_admin_account<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    email: &str,
    password: &str,
    name: Option<&str>,
) -> Result<(), AppError> {
    let normalized = email.trim().to_lowercase();

    if accounts::find_credentials_by_email(conn, &normalized)
        .await?
        .is_some()
    {
        info!(email = %Redacted(&normalized), "admin account already present");
        return Ok(());
    }

    let password_hash = hash_password(password)?;
    let account = accounts::create_account(conn, name, "admin").await?;
    accounts::create_credentials(conn, account.id, &normalized, &password_hash).await?;

    info!(
        user_id = account.id,
        email = %Redacted(&normalized),
        "admin account created"
    );
    Ok(())
}
