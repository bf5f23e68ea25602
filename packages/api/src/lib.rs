//! # API crate — user-management server functions
//!
//! Defines the Dioxus server functions the web frontend calls, the models that
//! cross the client/server boundary, and the [`client::UserService`] seam the
//! profile editor is written against.
//!
//! ## Modules
//!
//! | Module | Feature gate | Purpose |
//! |--------|-------------|---------|
//! | [`auth`] | `server` | Session lookup and Argon2 password hashing |
//! | [`client`] | — | `UserService` trait, `ServiceError`, and the server-function backed `ApiUserService` |
//! | [`settings`] | `server` | `Settings` loaded with the `config` crate |
//! | [`db`] | — | PostgreSQL connection pool (lazy `OnceCell` singleton) |
//! | [`models`] | — | `Profile`, `Role`, `EditUserData`, `ServiceResponse`, password rules |
//! | [`policy`] | — | Authorization and normalization of profile edits |
//!
//! ## Server functions exposed here
//!
//! Every public `async fn` in this file is a Dioxus server function, compiled
//! twice: once with the server body (behind `#[cfg(feature = "server")]`) and
//! once as a client stub that forwards the call over HTTP.
//!
//! - **Authentication**: `get_current_user`, `login_password`, `logout`
//! - **Profiles**: `get_my_profile`, `edit_user`

use dioxus::prelude::*;

pub mod auth;
pub mod client;
#[cfg(feature = "server")]
pub mod settings;
pub mod db;
#[cfg(feature = "server")]
pub mod error;
pub mod models;
pub mod policy;
#[cfg(feature = "server")]
mod users;

pub use client::{ApiUserService, ServiceError, UserService};
pub use models::{EditUserData, PasswordError, Profile, Role, ServiceResponse};

#[cfg(feature = "server")]
fn internal(e: error::ApiError) -> ServerFnError {
    tracing::error!("{}", e);
    ServerFnError::new(e.to_string())
}

/// Get the current authenticated user from the session.
#[cfg(feature = "server")]
#[get("/api/auth/me", session: tower_sessions::Session)]
pub async fn get_current_user() -> Result<Option<Profile>, ServerFnError> {
    users::current_user(&session).await.map_err(internal)
}

#[cfg(not(feature = "server"))]
#[get("/api/auth/me")]
pub async fn get_current_user() -> Result<Option<Profile>, ServerFnError> {
    Ok(None)
}

/// Log in with email and password.
#[cfg(feature = "server")]
#[post("/api/auth/login", session: tower_sessions::Session)]
pub async fn login_password(email: String, password: String) -> Result<Profile, ServerFnError> {
    match users::login(&session, &email, &password).await.map_err(internal)? {
        Some(profile) => Ok(profile),
        None => Err(ServerFnError::new("Invalid email or password")),
    }
}

#[cfg(not(feature = "server"))]
#[post("/api/auth/login")]
pub async fn login_password(email: String, password: String) -> Result<Profile, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Log out the current user by clearing the session.
#[cfg(feature = "server")]
#[post("/api/auth/logout", session: tower_sessions::Session)]
pub async fn logout() -> Result<(), ServerFnError> {
    users::logout(&session).await.map_err(internal)
}

#[cfg(not(feature = "server"))]
#[post("/api/auth/logout")]
pub async fn logout() -> Result<(), ServerFnError> {
    Ok(())
}

/// Profile of the signed-in user.
#[cfg(feature = "server")]
#[get("/api/users/me", session: tower_sessions::Session)]
pub async fn get_my_profile() -> Result<ServiceResponse<Profile>, ServerFnError> {
    users::my_profile(&session).await.map_err(internal)
}

#[cfg(not(feature = "server"))]
#[get("/api/users/me")]
pub async fn get_my_profile() -> Result<ServiceResponse<Profile>, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Update name, email, role and optionally the password of user `id`.
#[cfg(feature = "server")]
#[post("/api/users/:id", session: tower_sessions::Session)]
pub async fn edit_user(
    id: String,
    payload: EditUserData,
) -> Result<ServiceResponse<()>, ServerFnError> {
    users::edit(&session, &id, payload).await.map_err(internal)
}

#[cfg(not(feature = "server"))]
#[post("/api/users/:id")]
pub async fn edit_user(
    id: String,
    payload: EditUserData,
) -> Result<ServiceResponse<()>, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}
