//! Server-side failures that are not part of the user-facing API contract.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("configuration error: {0}")]
    Config(#[from] config::ConfigError),
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
    #[error("invalid session user id: {0}")]
    InvalidUserId(#[from] uuid::Error),
    #[error("session error: {0}")]
    Session(#[from] tower_sessions::session::Error),
    #[error("{0}")]
    Password(String),
}
