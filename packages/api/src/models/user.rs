//! # User model for the user-management API
//!
//! Two representations of an account:
//!
//! ## [`User`] (server only)
//!
//! The complete row from the `users` table, loaded with [`sqlx::FromRow`]:
//!
//! - `id` — primary key (`UUID v4`).
//! - `name`, `email` — profile fields editable from the profile card.
//! - `role` — stored as text (`"user"` or `"admin"`), parsed with [`Role::parse`].
//! - `password_hash` — Argon2 PHC string; `None` for accounts that cannot log in.
//! - `created_at` / `updated_at` — audit timestamps.
//!
//! [`User::to_profile`] projects it into a [`Profile`].
//!
//! ## [`Profile`]
//!
//! The client-safe subset that crosses the server/client boundary. The identifier
//! is serialized as `_id` to stay wire-compatible with the user-management API.

use serde::{Deserialize, Serialize};

#[cfg(feature = "server")]
use chrono::{DateTime, Utc};
#[cfg(feature = "server")]
use sqlx::FromRow;
#[cfg(feature = "server")]
use uuid::Uuid;

/// Account role. Anything other than [`Role::User`] is privileged.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    User,
    Admin,
}

impl Role {
    /// Wire/database spelling of the role.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Admin => "admin",
        }
    }

    /// Parse the wire spelling. Unknown roles yield `None`.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "user" => Some(Role::User),
            "admin" => Some(Role::Admin),
            _ => None,
        }
    }

    pub fn is_privileged(&self) -> bool {
        !matches!(self, Role::User)
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Role::User => write!(f, "User"),
            Role::Admin => write!(f, "Administrator"),
        }
    }
}

/// Full user record from the database.
#[cfg(feature = "server")]
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub role: String,
    pub password_hash: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[cfg(feature = "server")]
impl User {
    /// Parsed role. Rows with an unknown role are treated as plain users.
    pub fn role(&self) -> Role {
        Role::parse(&self.role).unwrap_or_default()
    }

    /// Convert to Profile for client consumption.
    pub fn to_profile(&self) -> Profile {
        Profile {
            id: self.id.to_string(),
            name: self.name.clone(),
            email: self.email.clone(),
            role: self.role(),
        }
    }
}

/// Profile of an account, safe to send to the client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: Role,
}
