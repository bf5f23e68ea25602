//! Data models shared by the server functions and the UI.

mod edit;
mod response;
mod user;

pub use edit::{validate_password_change, EditUserData, PasswordError, MIN_PASSWORD_LEN};
pub use response::ServiceResponse;
#[cfg(feature = "server")]
pub use user::User;
pub use user::{Profile, Role};
