//! Who may change what when a profile is edited.
//!
//! [`review_edit`] runs on the server before any write. It is kept free of
//! database types so the rules can be checked in isolation.

use thiserror::Error;

use crate::models::{validate_password_change, EditUserData, PasswordError, Role};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EditRejection {
    #[error("You are not allowed to edit this user")]
    NotAllowed,
    #[error("Only administrators can change roles")]
    RoleChange,
    #[error("Name is required")]
    NameRequired,
    #[error("Invalid email address")]
    InvalidEmail,
    #[error(transparent)]
    Password(#[from] PasswordError),
}

/// Check an edit made by `actor` against the current state of `target`, and
/// return the normalized payload to store.
///
/// Users may edit themselves; privileged users may edit anyone. Only privileged
/// users may change a role. Name is trimmed, email trimmed and lowercased, and
/// an empty password is treated as no change.
pub fn review_edit(
    actor_id: &str,
    actor_role: Role,
    target_id: &str,
    target_role: Role,
    payload: EditUserData,
) -> Result<EditUserData, EditRejection> {
    if actor_id != target_id && !actor_role.is_privileged() {
        return Err(EditRejection::NotAllowed);
    }
    if payload.role != target_role && !actor_role.is_privileged() {
        return Err(EditRejection::RoleChange);
    }

    let name = payload.name.trim().to_string();
    if name.is_empty() {
        return Err(EditRejection::NameRequired);
    }

    let email = payload.email.trim().to_lowercase();
    if email.is_empty() || !email.contains('@') {
        return Err(EditRejection::InvalidEmail);
    }

    let password = payload.password.unwrap_or_default();
    let confirm_password = payload.confirm_password.unwrap_or_default();
    validate_password_change(&password, &confirm_password)?;

    Ok(EditUserData::new(name, email, payload.role).with_password(&password, &confirm_password))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload() -> EditUserData {
        EditUserData::new("Ann", "ann@x.com", Role::User)
    }

    #[test]
    fn test_self_edit_allowed() {
        let edit = review_edit("u1", Role::User, "u1", Role::User, payload()).unwrap();
        assert_eq!(edit, payload());
    }

    #[test]
    fn test_user_cannot_edit_others() {
        let err = review_edit("u1", Role::User, "u2", Role::User, payload()).unwrap_err();
        assert_eq!(err, EditRejection::NotAllowed);
    }

    #[test]
    fn test_admin_can_edit_others_and_roles() {
        let mut p = payload();
        p.role = Role::Admin;
        let edit = review_edit("admin", Role::Admin, "u2", Role::User, p).unwrap();
        assert_eq!(edit.role, Role::Admin);
    }

    #[test]
    fn test_user_cannot_promote_self() {
        let mut p = payload();
        p.role = Role::Admin;
        let err = review_edit("u1", Role::User, "u1", Role::User, p).unwrap_err();
        assert_eq!(err, EditRejection::RoleChange);
        assert_eq!(err.to_string(), "Only administrators can change roles");
    }

    #[test]
    fn test_normalizes_name_and_email() {
        let p = EditUserData::new("  Anna ", " Ann@X.com ", Role::User);
        let edit = review_edit("u1", Role::User, "u1", Role::User, p).unwrap();
        assert_eq!(edit.name, "Anna");
        assert_eq!(edit.email, "ann@x.com");
    }

    #[test]
    fn test_rejects_blank_name_and_bad_email() {
        let p = EditUserData::new("   ", "ann@x.com", Role::User);
        assert_eq!(
            review_edit("u1", Role::User, "u1", Role::User, p),
            Err(EditRejection::NameRequired)
        );

        let p = EditUserData::new("Ann", "ann.example.com", Role::User);
        assert_eq!(
            review_edit("u1", Role::User, "u1", Role::User, p),
            Err(EditRejection::InvalidEmail)
        );
    }

    #[test]
    fn test_password_rules_rechecked() {
        let p = payload().with_password("abc", "abc");
        let err = review_edit("u1", Role::User, "u1", Role::User, p).unwrap_err();
        assert_eq!(err, EditRejection::Password(PasswordError::TooShort));
        assert_eq!(err.to_string(), "Password must be at least 6 characters long");

        // a hand-built request with a password but no confirmation
        let mut p = payload();
        p.password = Some("hunter22".to_string());
        let err = review_edit("u1", Role::User, "u1", Role::User, p).unwrap_err();
        assert_eq!(err, EditRejection::Password(PasswordError::Mismatch));

        // browsers count this as six characters
        let p = payload().with_password("😀😀😀", "😀😀😀");
        let edit = review_edit("u1", Role::User, "u1", Role::User, p).unwrap();
        assert!(edit.changes_password());
    }

    #[test]
    fn test_empty_password_is_dropped() {
        let mut p = payload();
        p.password = Some(String::new());
        p.confirm_password = Some(String::new());
        let edit = review_edit("u1", Role::User, "u1", Role::User, p).unwrap();
        assert!(!edit.changes_password());
        assert!(edit.confirm_password.is_none());
    }
}
