use api::models::validate_password_change;
use api::{EditUserData, PasswordError, Profile, Role};

/// Editable field of the profile form.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProfileField {
    Name,
    Email,
    Password,
    ConfirmPassword,
    Role,
}

/// Local, editable copy of a profile plus the password-change pair.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FormState {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub role: Role,
}

impl FormState {
    /// Form for `profile` with empty password fields.
    pub fn from_profile(profile: &Profile) -> Self {
        Self {
            name: profile.name.clone(),
            email: profile.email.clone(),
            password: String::new(),
            confirm_password: String::new(),
            role: profile.role,
        }
    }

    /// Merge one field. A role that does not parse leaves the role unchanged.
    pub fn set(&mut self, field: ProfileField, value: String) {
        match field {
            ProfileField::Name => self.name = value,
            ProfileField::Email => self.email = value,
            ProfileField::Password => self.password = value,
            ProfileField::ConfirmPassword => self.confirm_password = value,
            ProfileField::Role => {
                if let Some(role) = Role::parse(&value) {
                    self.role = role;
                }
            }
        }
    }

    /// Copy of this form with both password fields emptied.
    pub fn without_passwords(&self) -> Self {
        Self {
            password: String::new(),
            confirm_password: String::new(),
            ..self.clone()
        }
    }

    pub fn validate(&self) -> Result<(), PasswordError> {
        validate_password_change(&self.password, &self.confirm_password)
    }

    /// Update payload; the password pair is included only when a password was typed.
    pub fn to_payload(&self) -> EditUserData {
        EditUserData::new(self.name.clone(), self.email.clone(), self.role)
            .with_password(&self.password, &self.confirm_password)
    }
}
