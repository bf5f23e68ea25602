//! The "My Profile" workflow: fetch, view, edit, save.

mod card;
pub mod editor;
pub mod form;

pub use card::UserProfileCard;
pub use editor::{EditorMode, ProfileEditorState};
pub use form::{FormState, ProfileField};
