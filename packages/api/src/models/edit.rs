//! Update payload for `edit_user` and the password-change rules shared by the
//! profile card and the server.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::Role;

/// Minimum length of a new password, in characters.
pub const MIN_PASSWORD_LEN: usize = 6;

/// Fields sent when a profile is edited.
///
/// The password pair is present only when the user typed a new password; when
/// absent the keys are left out of the JSON body entirely.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EditUserData {
    pub name: String,
    pub email: String,
    pub role: Role,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confirm_password: Option<String>,
}

impl EditUserData {
    pub fn new(name: impl Into<String>, email: impl Into<String>, role: Role) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            role,
            password: None,
            confirm_password: None,
        }
    }

    /// Attach a password change. An empty `password` leaves both fields unset.
    pub fn with_password(mut self, password: &str, confirm_password: &str) -> Self {
        if !password.is_empty() {
            self.password = Some(password.to_string());
            self.confirm_password = Some(confirm_password.to_string());
        }
        self
    }

    /// Whether this payload carries a password change.
    pub fn changes_password(&self) -> bool {
        self.password.is_some()
    }
}

/// Reasons a password change is rejected before it reaches the network.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PasswordError {
    #[error("Passwords do not match")]
    Mismatch,
    #[error("Password must be at least 6 characters long")]
    TooShort,
}

/// Check a password change. An empty `password` means "no change" and passes.
///
/// Mismatch is reported before length. Length is counted in UTF-16 code units,
/// the unit browsers use for `value.length`.
pub fn validate_password_change(password: &str, confirm_password: &str) -> Result<(), PasswordError> {
    if password.is_empty() {
        return Ok(());
    }
    if password != confirm_password {
        return Err(PasswordError::Mismatch);
    }
    if password.encode_utf16().count() < MIN_PASSWORD_LEN {
        return Err(PasswordError::TooShort);
    }
    Ok(())
}
