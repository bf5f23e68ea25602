//! Session keys and lookup.

use tower_sessions::Session;
use uuid::Uuid;

use crate::error::ApiError;

/// Key for storing user ID in session.
pub const SESSION_USER_ID_KEY: &str = "user_id";

/// The signed-in user's id, or `None` when the session is anonymous.
pub async fn session_user_id(session: &Session) -> Result<Option<Uuid>, ApiError> {
    let user_id: Option<String> = session.get(SESSION_USER_ID_KEY).await?;
    match user_id {
        Some(id) => Ok(Some(Uuid::parse_str(&id)?)),
        None => Ok(None),
    }
}
