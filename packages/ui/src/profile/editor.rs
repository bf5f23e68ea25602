//! Profile editor state machine.
//!
//! `Loading` → `Viewing` ⇄ `Editing`. The transitions are plain methods on
//! [`ProfileEditorState`]; the async operations ([`fetch_profile`],
//! [`submit_update`], [`cancel_edit`]) drive them around a [`UserService`] call
//! through an [`EditorCell`], so no state borrow is held across an `.await`.
//!
//! Every failure becomes a [`Notification`]; nothing here returns an error.

use api::{EditUserData, PasswordError, Profile, ServiceError, ServiceResponse, UserService};
use dioxus::prelude::*;

use super::form::{FormState, ProfileField};
use crate::notifications::Notification;

pub const FETCH_FAILED: &str = "Failed to fetch profile";
pub const FETCH_ERRORED: &str = "Failed to fetch profile details";
pub const UPDATE_FAILED: &str = "Failed to update profile";
pub const UPDATE_SUCCEEDED: &str = "Profile updated successfully!";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum EditorMode {
    #[default]
    Loading,
    Viewing,
    Editing,
}

/// Identifies one profile fetch; only the latest one may write its result.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FetchTicket(u64);

/// What a submit attempt turned into.
#[derive(Clone, Debug, PartialEq)]
pub enum SubmitStart {
    /// Not editing, or an update is already in flight.
    Ignored,
    /// Failed a local password check; nothing was sent.
    Rejected(PasswordError),
    /// Send `payload` to the user addressed by `user_id`.
    Dispatch { user_id: String, payload: EditUserData },
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ProfileEditorState {
    pub mode: EditorMode,
    /// Identifier of the fetched profile; addresses the update request.
    pub user_id: String,
    /// Last successfully fetched (or saved) profile.
    pub profile: Option<Profile>,
    pub form: FormState,
    pub fetching: bool,
    pub saving: bool,
    fetch_seq: u64,
}

impl ProfileEditorState {
    pub fn is_editing(&self) -> bool {
        self.mode == EditorMode::Editing
    }

    pub fn begin_fetch(&mut self) -> FetchTicket {
        self.fetch_seq += 1;
        self.fetching = true;
        FetchTicket(self.fetch_seq)
    }

    /// Apply a fetch result. Results of superseded fetches are dropped.
    pub fn finish_fetch(
        &mut self,
        ticket: FetchTicket,
        result: Result<ServiceResponse<Profile>, ServiceError>,
    ) -> Option<Notification> {
        if ticket.0 != self.fetch_seq {
            tracing::debug!("dropping superseded profile fetch");
            return None;
        }
        self.fetching = false;
        if self.mode == EditorMode::Loading {
            self.mode = EditorMode::Viewing;
        }

        match result {
            Ok(ServiceResponse {
                success: true,
                data: Some(profile),
                ..
            }) => {
                self.user_id = profile.id.clone();
                self.form = FormState::from_profile(&profile);
                self.profile = Some(profile);
                None
            }
            Ok(response) => Some(Notification::error(response.error_or(FETCH_FAILED))),
            Err(e) => {
                tracing::error!("Error fetching profile: {}", e);
                Some(Notification::error(FETCH_ERRORED))
            }
        }
    }

    pub fn start_editing(&mut self) {
        if self.mode == EditorMode::Viewing {
            self.mode = EditorMode::Editing;
        }
    }

    /// Merge a field edit. Only the edit form mutates the form.
    pub fn set_field(&mut self, field: ProfileField, value: String) {
        if self.is_editing() {
            self.form.set(field, value);
        }
    }

    /// Leave edit mode and restore the last fetched profile.
    pub fn cancel_editing(&mut self) {
        self.mode = EditorMode::Viewing;
        self.form = match &self.profile {
            Some(profile) => FormState::from_profile(profile),
            None => self.form.without_passwords(),
        };
    }

    pub fn begin_submit(&mut self) -> SubmitStart {
        if !self.is_editing() || self.saving {
            return SubmitStart::Ignored;
        }
        if let Err(e) = self.form.validate() {
            return SubmitStart::Rejected(e);
        }
        self.saving = true;
        SubmitStart::Dispatch {
            user_id: self.user_id.clone(),
            payload: self.form.to_payload(),
        }
    }

    pub fn finish_submit(
        &mut self,
        result: Result<ServiceResponse<()>, ServiceError>,
    ) -> Notification {
        self.saving = false;

        match result {
            Ok(response) if response.success => {
                tracing::info!(user_id = %self.user_id, "profile updated");
                self.form = self.form.without_passwords();
                if let Some(profile) = &mut self.profile {
                    profile.name = self.form.name.clone();
                    profile.email = self.form.email.clone();
                    profile.role = self.form.role;
                }
                self.mode = EditorMode::Viewing;
                Notification::success(UPDATE_SUCCEEDED)
            }
            Ok(response) => Notification::error(response.error_or(UPDATE_FAILED)),
            Err(e) => {
                tracing::error!("Failed to update profile: {}", e);
                Notification::error(UPDATE_FAILED)
            }
        }
    }
}

/// Somewhere the editor state lives: a [`Signal`] in the app, a plain value in tests.
pub trait EditorCell {
    fn update<R>(&mut self, f: impl FnOnce(&mut ProfileEditorState) -> R) -> R;
}

impl EditorCell for ProfileEditorState {
    fn update<R>(&mut self, f: impl FnOnce(&mut ProfileEditorState) -> R) -> R {
        f(self)
    }
}

impl EditorCell for Signal<ProfileEditorState> {
    fn update<R>(&mut self, f: impl FnOnce(&mut ProfileEditorState) -> R) -> R {
        f(&mut *self.write())
    }
}

/// Fetch the signed-in user's profile into the form.
pub async fn fetch_profile(
    cell: &mut impl EditorCell,
    service: &impl UserService,
) -> Option<Notification> {
    let ticket = cell.update(|s| s.begin_fetch());
    let result = service.get_my_profile().await;
    cell.update(|s| s.finish_fetch(ticket, result))
}

/// Validate and send the form. `None` when the submit was ignored.
pub async fn submit_update(
    cell: &mut impl EditorCell,
    service: &impl UserService,
) -> Option<Notification> {
    let (user_id, payload) = match cell.update(|s| s.begin_submit()) {
        SubmitStart::Ignored => return None,
        SubmitStart::Rejected(e) => return Some(Notification::error(e.to_string())),
        SubmitStart::Dispatch { user_id, payload } => (user_id, payload),
    };
    let result = service.edit_user(&user_id, payload).await;
    Some(cell.update(|s| s.finish_submit(result)))
}

/// Drop unsaved edits and reload the profile.
pub async fn cancel_edit(
    cell: &mut impl EditorCell,
    service: &impl UserService,
) -> Option<Notification> {
    cell.update(|s| s.cancel_editing());
    fetch_profile(cell, service).await
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use api::Role;

    use super::*;

    /// In-memory UserService that records every call.
    struct FakeUserService {
        profile: Mutex<Result<ServiceResponse<Profile>, ServiceError>>,
        edit_result: Mutex<Result<ServiceResponse<()>, ServiceError>>,
        fetches: Mutex<usize>,
        edits: Mutex<Vec<(String, EditUserData)>>,
    }

    impl FakeUserService {
        fn new() -> Self {
            Self {
                profile: Mutex::new(Ok(ServiceResponse::success(ann()))),
                edit_result: Mutex::new(Ok(ServiceResponse::ok())),
                fetches: Mutex::new(0),
                edits: Mutex::new(Vec::new()),
            }
        }

        fn set_profile(&self, result: Result<ServiceResponse<Profile>, ServiceError>) {
            *self.profile.lock().unwrap() = result;
        }

        fn set_edit_result(&self, result: Result<ServiceResponse<()>, ServiceError>) {
            *self.edit_result.lock().unwrap() = result;
        }

        fn fetch_count(&self) -> usize {
            *self.fetches.lock().unwrap()
        }

        fn edits(&self) -> Vec<(String, EditUserData)> {
            self.edits.lock().unwrap().clone()
        }
    }

    impl UserService for FakeUserService {
        async fn get_my_profile(&self) -> Result<ServiceResponse<Profile>, ServiceError> {
            *self.fetches.lock().unwrap() += 1;
            self.profile.lock().unwrap().clone()
        }

        async fn edit_user(
            &self,
            id: &str,
            payload: EditUserData,
        ) -> Result<ServiceResponse<()>, ServiceError> {
            self.edits.lock().unwrap().push((id.to_string(), payload));
            self.edit_result.lock().unwrap().clone()
        }
    }

    fn ann() -> Profile {
        Profile {
            id: "u1".to_string(),
            name: "Ann".to_string(),
            email: "ann@x.com".to_string(),
            role: Role::User,
        }
    }

    fn transport_error() -> ServiceError {
        ServiceError::Transport("connection refused".to_string())
    }

    /// Fetched and switched to edit mode.
    async fn editing(service: &FakeUserService) -> ProfileEditorState {
        let mut state = ProfileEditorState::default();
        assert!(fetch_profile(&mut state, service).await.is_none());
        state.start_editing();
        assert_eq!(state.mode, EditorMode::Editing);
        state
    }

    #[tokio::test]
    async fn test_fetch_populates_form() {
        let service = FakeUserService::new();
        let mut state = ProfileEditorState::default();
        assert_eq!(state.mode, EditorMode::Loading);

        let note = fetch_profile(&mut state, &service).await;

        assert!(note.is_none());
        assert_eq!(state.mode, EditorMode::Viewing);
        assert!(!state.fetching);
        assert_eq!(state.user_id, "u1");
        assert_eq!(
            state.form,
            FormState {
                name: "Ann".to_string(),
                email: "ann@x.com".to_string(),
                password: String::new(),
                confirm_password: String::new(),
                role: Role::User,
            }
        );
        assert_eq!(state.profile, Some(ann()));
    }

    #[tokio::test]
    async fn test_fetch_reported_failure_still_leaves_loading() {
        let service = FakeUserService::new();
        service.set_profile(Ok(ServiceResponse::failure("Not authenticated")));
        let mut state = ProfileEditorState::default();

        let note = fetch_profile(&mut state, &service).await;

        assert_eq!(note, Some(Notification::error("Not authenticated")));
        assert_eq!(state.mode, EditorMode::Viewing);
        assert!(!state.fetching);
        assert_eq!(state.form, FormState::default());
        assert!(state.profile.is_none());
    }

    #[tokio::test]
    async fn test_fetch_failure_without_message_uses_fallback() {
        let service = FakeUserService::new();
        service.set_profile(Ok(ServiceResponse {
            success: false,
            data: None,
            error: None,
        }));
        let mut state = ProfileEditorState::default();

        let note = fetch_profile(&mut state, &service).await;
        assert_eq!(note, Some(Notification::error(FETCH_FAILED)));
    }

    #[tokio::test]
    async fn test_fetch_transport_error() {
        let service = FakeUserService::new();
        service.set_profile(Err(transport_error()));
        let mut state = ProfileEditorState::default();

        let note = fetch_profile(&mut state, &service).await;

        assert_eq!(note, Some(Notification::error(FETCH_ERRORED)));
        assert_eq!(state.mode, EditorMode::Viewing);
        assert!(!state.fetching);
    }

    #[tokio::test]
    async fn test_rename_without_password() {
        let service = FakeUserService::new();
        let mut state = editing(&service).await;
        state.set_field(ProfileField::Name, "Anna".to_string());

        let note = submit_update(&mut state, &service).await;

        assert_eq!(note, Some(Notification::success(UPDATE_SUCCEEDED)));
        assert_eq!(state.mode, EditorMode::Viewing);
        assert!(!state.saving);

        let edits = service.edits();
        assert_eq!(edits.len(), 1);
        let (id, payload) = &edits[0];
        assert_eq!(id, "u1");
        assert_eq!(payload, &EditUserData::new("Anna", "ann@x.com", Role::User));

        let json = serde_json::to_value(payload).unwrap();
        let keys: Vec<&String> = json.as_object().unwrap().keys().collect();
        assert_eq!(keys.len(), 3);
        assert!(json.get("password").is_none());
        assert!(json.get("confirmPassword").is_none());
        // the identifier only addresses the request
        assert!(json.get("_id").is_none());
        assert!(json.get("id").is_none());
    }

    #[tokio::test]
    async fn test_mismatched_passwords_never_reach_network() {
        let service = FakeUserService::new();
        for (password, confirm) in [("abcdef", "abcdeg"), ("abc", "xyz"), ("secret1", "")] {
            let mut state = editing(&service).await;
            state.set_field(ProfileField::Password, password.to_string());
            state.set_field(ProfileField::ConfirmPassword, confirm.to_string());

            let note = submit_update(&mut state, &service).await;

            assert_eq!(note, Some(Notification::error("Passwords do not match")));
            assert_eq!(state.mode, EditorMode::Editing);
            assert!(!state.saving);
        }
        assert!(service.edits().is_empty());
    }

    #[tokio::test]
    async fn test_short_password_never_reaches_network() {
        let service = FakeUserService::new();
        for password in ["a", "abc", "abcde"] {
            let mut state = editing(&service).await;
            state.set_field(ProfileField::Password, password.to_string());
            state.set_field(ProfileField::ConfirmPassword, password.to_string());

            let note = submit_update(&mut state, &service).await;

            assert_eq!(
                note,
                Some(Notification::error("Password must be at least 6 characters long"))
            );
            assert_eq!(state.mode, EditorMode::Editing);
            assert!(!state.saving);
        }
        assert!(service.edits().is_empty());
    }

    #[tokio::test]
    async fn test_valid_password_sent_then_cleared() {
        let service = FakeUserService::new();
        let mut state = editing(&service).await;
        state.set_field(ProfileField::Password, "hunter22".to_string());
        state.set_field(ProfileField::ConfirmPassword, "hunter22".to_string());

        let note = submit_update(&mut state, &service).await;

        assert_eq!(note, Some(Notification::success(UPDATE_SUCCEEDED)));
        let (_, payload) = &service.edits()[0];
        assert_eq!(payload.password.as_deref(), Some("hunter22"));
        assert_eq!(payload.confirm_password.as_deref(), Some("hunter22"));

        assert!(state.form.password.is_empty());
        assert!(state.form.confirm_password.is_empty());
        assert_eq!(state.form.name, "Ann");
        assert_eq!(state.mode, EditorMode::Viewing);
    }

    #[tokio::test]
    async fn test_reported_update_failure_keeps_editing() {
        let service = FakeUserService::new();
        service.set_edit_result(Ok(ServiceResponse::failure("Email already in use")));
        let mut state = editing(&service).await;
        state.set_field(ProfileField::Password, "hunter22".to_string());
        state.set_field(ProfileField::ConfirmPassword, "hunter22".to_string());

        let note = submit_update(&mut state, &service).await;

        assert_eq!(note, Some(Notification::error("Email already in use")));
        assert_eq!(state.mode, EditorMode::Editing);
        assert!(!state.saving);
        assert_eq!(state.form.password, "hunter22");
        assert_eq!(state.form.confirm_password, "hunter22");
    }

    #[tokio::test]
    async fn test_update_transport_error_keeps_editing() {
        let service = FakeUserService::new();
        service.set_edit_result(Err(transport_error()));
        let mut state = editing(&service).await;
        state.set_field(ProfileField::Name, "Anna".to_string());

        let note = submit_update(&mut state, &service).await;

        assert_eq!(note, Some(Notification::error(UPDATE_FAILED)));
        assert_eq!(state.mode, EditorMode::Editing);
        assert!(!state.saving);
        assert_eq!(state.form.name, "Anna");
        assert_eq!(service.edits().len(), 1);
    }

    #[tokio::test]
    async fn test_cancel_restores_last_fetched_profile() {
        let service = FakeUserService::new();
        let edit_runs: [&[(ProfileField, &str)]; 3] = [
            &[(ProfileField::Name, "Anna")],
            &[
                (ProfileField::Email, "other@x.com"),
                (ProfileField::Password, "secret1"),
                (ProfileField::ConfirmPassword, "secret2"),
            ],
            &[],
        ];

        for edits in edit_runs {
            let mut state = editing(&service).await;
            let fetched = state.form.clone();
            for (field, value) in edits {
                state.set_field(*field, value.to_string());
            }

            let before = service.fetch_count();
            let note = cancel_edit(&mut state, &service).await;

            assert!(note.is_none());
            assert_eq!(service.fetch_count(), before + 1);
            assert_eq!(state.mode, EditorMode::Viewing);
            assert_eq!(state.form, fetched);
            assert!(state.form.password.is_empty());
            assert!(state.form.confirm_password.is_empty());
        }
        assert!(service.edits().is_empty());
    }

    #[tokio::test]
    async fn test_cancel_with_failed_refetch_keeps_restored_values() {
        let service = FakeUserService::new();
        let mut state = editing(&service).await;
        state.set_field(ProfileField::Name, "Anna".to_string());
        service.set_profile(Err(transport_error()));

        let note = cancel_edit(&mut state, &service).await;

        assert_eq!(note, Some(Notification::error(FETCH_ERRORED)));
        assert_eq!(state.mode, EditorMode::Viewing);
        assert_eq!(state.form.name, "Ann");
    }

    #[tokio::test]
    async fn test_submit_in_flight_is_ignored() {
        let service = FakeUserService::new();
        let mut state = editing(&service).await;
        state.saving = true;

        assert!(submit_update(&mut state, &service).await.is_none());
        assert!(service.edits().is_empty());
        assert!(state.saving);
    }

    #[tokio::test]
    async fn test_submit_outside_edit_mode_is_ignored() {
        let service = FakeUserService::new();
        let mut state = ProfileEditorState::default();
        fetch_profile(&mut state, &service).await;

        assert!(submit_update(&mut state, &service).await.is_none());
        assert!(service.edits().is_empty());
    }

    #[test]
    fn test_superseded_fetch_is_dropped() {
        let mut state = ProfileEditorState::default();
        let first = state.begin_fetch();
        let second = state.begin_fetch();

        let other = Profile {
            id: "u2".to_string(),
            ..ann()
        };
        assert!(state.finish_fetch(first, Ok(ServiceResponse::success(other))).is_none());
        assert!(state.fetching);
        assert_eq!(state.mode, EditorMode::Loading);
        assert!(state.user_id.is_empty());

        state.finish_fetch(second, Ok(ServiceResponse::success(ann())));
        assert!(!state.fetching);
        assert_eq!(state.user_id, "u1");
    }

    #[test]
    fn test_fields_locked_outside_edit_mode() {
        let mut state = ProfileEditorState::default();
        let ticket = state.begin_fetch();
        state.finish_fetch(ticket, Ok(ServiceResponse::success(ann())));

        state.set_field(ProfileField::Name, "Anna".to_string());
        assert_eq!(state.form.name, "Ann");

        state.start_editing();
        state.set_field(ProfileField::Name, "Anna".to_string());
        assert_eq!(state.form.name, "Anna");
    }

    #[test]
    fn test_edit_not_available_while_loading() {
        let mut state = ProfileEditorState::default();
        state.start_editing();
        assert_eq!(state.mode, EditorMode::Loading);
    }
}
