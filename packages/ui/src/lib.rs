//! This crate contains all shared UI for the workspace.

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

pub mod components;

mod auth;
pub use auth::{use_auth, AuthProvider, AuthState, LogoutButton};

pub mod notifications;
pub use notifications::{notify, use_notifications, Notification, NotificationLevel, Toaster};

mod spinner;
pub use spinner::Spinner;

mod login;
pub use login::LoginForm;

pub mod profile;
pub use profile::UserProfileCard;
