//! Server-side bodies of the user-management server functions.
//!
//! Rejections the user should see are returned as
//! [`ServiceResponse::failure`]; everything else is an [`ApiError`] and reaches
//! the client as a transport failure.

use sqlx::PgPool;
use tower_sessions::Session;
use uuid::Uuid;

use crate::auth::{hash_password, session_user_id, verify_password, SESSION_USER_ID_KEY};
use crate::db::get_pool;
use crate::error::ApiError;
use crate::models::{EditUserData, Profile, ServiceResponse, User};
use crate::policy::review_edit;

const NOT_AUTHENTICATED: &str = "Not authenticated";
const USER_NOT_FOUND: &str = "User not found";

async fn load_user(pool: &PgPool, id: Uuid) -> Result<Option<User>, ApiError> {
    let user: Option<User> = sqlx::query_as("SELECT * FROM users WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(user)
}

/// The session's user, if any.
pub async fn current_user(session: &Session) -> Result<Option<Profile>, ApiError> {
    let Some(user_id) = session_user_id(session).await? else {
        return Ok(None);
    };
    let pool = get_pool().await?;
    Ok(load_user(pool, user_id).await?.map(|u| u.to_profile()))
}

pub async fn my_profile(session: &Session) -> Result<ServiceResponse<Profile>, ApiError> {
    let Some(user_id) = session_user_id(session).await? else {
        return Ok(ServiceResponse::failure(NOT_AUTHENTICATED));
    };
    let pool = get_pool().await?;

    match load_user(pool, user_id).await? {
        Some(user) => Ok(ServiceResponse::success(user.to_profile())),
        None => Ok(ServiceResponse::failure(USER_NOT_FOUND)),
    }
}

pub async fn edit(
    session: &Session,
    id: &str,
    payload: EditUserData,
) -> Result<ServiceResponse<()>, ApiError> {
    let Some(actor_id) = session_user_id(session).await? else {
        return Ok(ServiceResponse::failure(NOT_AUTHENTICATED));
    };
    let Ok(target_id) = Uuid::parse_str(id) else {
        return Ok(ServiceResponse::failure(USER_NOT_FOUND));
    };
    let pool = get_pool().await?;

    let Some(actor) = load_user(pool, actor_id).await? else {
        return Ok(ServiceResponse::failure(NOT_AUTHENTICATED));
    };
    let Some(target) = load_user(pool, target_id).await? else {
        return Ok(ServiceResponse::failure(USER_NOT_FOUND));
    };

    let edit = match review_edit(
        &actor.id.to_string(),
        actor.role(),
        &target.id.to_string(),
        target.role(),
        payload,
    ) {
        Ok(edit) => edit,
        Err(rejection) => return Ok(ServiceResponse::failure(rejection.to_string())),
    };

    let taken: Option<(i32,)> =
        sqlx::query_as("SELECT 1::INT4 FROM users WHERE email = $1 AND id <> $2")
            .bind(&edit.email)
            .bind(target.id)
            .fetch_optional(pool)
            .await?;
    if taken.is_some() {
        return Ok(ServiceResponse::failure("Email already in use"));
    }

    let password_hash = edit.password.as_deref().map(hash_password).transpose()?;

    sqlx::query(
        "UPDATE users SET name = $1, email = $2, role = $3, \
         password_hash = COALESCE($4, password_hash), updated_at = NOW() \
         WHERE id = $5",
    )
    .bind(&edit.name)
    .bind(&edit.email)
    .bind(edit.role.as_str())
    .bind(password_hash)
    .bind(target.id)
    .execute(pool)
    .await?;

    tracing::info!(
        user_id = %target.id,
        actor_id = %actor.id,
        password_changed = edit.changes_password(),
        "profile updated"
    );
    Ok(ServiceResponse::ok())
}

/// Check credentials and start a session. `None` on any mismatch.
pub async fn login(
    session: &Session,
    email: &str,
    password: &str,
) -> Result<Option<Profile>, ApiError> {
    let email = email.trim().to_lowercase();
    let pool = get_pool().await?;

    let user: Option<User> = sqlx::query_as("SELECT * FROM users WHERE email = $1")
        .bind(&email)
        .fetch_optional(pool)
        .await?;

    let Some(user) = user else {
        return Ok(None);
    };
    let Some(ref hash) = user.password_hash else {
        return Ok(None);
    };
    if !verify_password(password, hash)? {
        return Ok(None);
    }

    session
        .insert(SESSION_USER_ID_KEY, user.id.to_string())
        .await?;

    Ok(Some(user.to_profile()))
}

pub async fn logout(session: &Session) -> Result<(), ApiError> {
    session.flush().await?;
    Ok(())
}
