//! The user-management collaborator as seen from the UI.
//!
//! [`UserService`] is the seam the profile editor is written against. The app
//! uses [`ApiUserService`], which forwards to the server functions in this
//! crate; tests substitute an in-memory fake.

use std::future::Future;

use thiserror::Error;

use crate::models::{EditUserData, Profile, ServiceResponse};

/// A call that never produced a [`ServiceResponse`] (network, decoding, or
/// server infrastructure failure).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ServiceError {
    #[error("request failed: {0}")]
    Transport(String),
}

/// Async interface to the remote user-management API.
pub trait UserService {
    /// Profile of the signed-in user.
    fn get_my_profile(
        &self,
    ) -> impl Future<Output = Result<ServiceResponse<Profile>, ServiceError>>;

    /// Apply `payload` to the user addressed by `id`. Not idempotent.
    fn edit_user(
        &self,
        id: &str,
        payload: EditUserData,
    ) -> impl Future<Output = Result<ServiceResponse<()>, ServiceError>>;
}

/// [`UserService`] backed by this crate's server functions.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ApiUserService;

impl UserService for ApiUserService {
    async fn get_my_profile(&self) -> Result<ServiceResponse<Profile>, ServiceError> {
        crate::get_my_profile()
            .await
            .map_err(|e| ServiceError::Transport(e.to_string()))
    }

    async fn edit_user(
        &self,
        id: &str,
        payload: EditUserData,
    ) -> Result<ServiceResponse<()>, ServiceError> {
        crate::edit_user(id.to_string(), payload)
            .await
            .map_err(|e| ServiceError::Transport(e.to_string()))
    }
}
