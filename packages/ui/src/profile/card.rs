use api::ApiUserService;
use dioxus::prelude::*;

use super::editor::{cancel_edit, fetch_profile, submit_update, EditorMode, ProfileEditorState};
use super::form::ProfileField;
use crate::components::{
    Button, ButtonVariant, Card, CardContent, CardDescription, CardHeader, CardTitle, Input, Label,
};
use crate::icons::{FaFloppyDisk, FaPenToSquare, FaUser, FaXmark};
use crate::notifications::{notify, use_notifications};
use crate::{Icon, Spinner};

const PROFILE_CSS: Asset = asset!("/src/profile/profile.css");

/// "My Profile" card: shows the signed-in user's profile and edits it in place.
///
/// Must be rendered below a [`crate::Toaster`].
#[component]
pub fn UserProfileCard() -> Element {
    let mut editor = use_signal(ProfileEditorState::default);
    let mut toasts = use_notifications();

    // Load the profile once on mount
    use_hook(move || {
        spawn(async move {
            if let Some(note) = fetch_profile(&mut editor, &ApiUserService).await {
                notify(&mut toasts, note);
            }
        })
    });

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        spawn(async move {
            if let Some(note) = submit_update(&mut editor, &ApiUserService).await {
                notify(&mut toasts, note);
            }
        });
    };

    let handle_cancel = move |_| {
        spawn(async move {
            if let Some(note) = cancel_edit(&mut editor, &ApiUserService).await {
                notify(&mut toasts, note);
            }
        });
    };

    let state = editor();

    if state.mode == EditorMode::Loading {
        return rsx! {
            Card {
                CardHeader {
                    CardTitle {
                        Icon { icon: FaUser, width: 18, height: 18 }
                        "My Profile"
                    }
                }
                CardContent {
                    div { class: "profile-loading", Spinner { size: 32 } }
                }
            }
        };
    }

    let editing = state.is_editing();
    let form = state.form.clone();

    rsx! {
        document::Stylesheet { href: PROFILE_CSS }
        Card {
            CardHeader {
                div {
                    class: "profile-header",
                    div {
                        CardTitle {
                            Icon { icon: FaUser, width: 18, height: 18 }
                            "My Profile"
                        }
                        CardDescription { "Manage your account information" }
                    }
                    if !editing {
                        Button {
                            variant: ButtonVariant::Outline,
                            onclick: move |_| editor.write().start_editing(),
                            Icon { icon: FaPenToSquare, width: 14, height: 14 }
                            "Edit"
                        }
                    }
                }
            }
            CardContent {
                form {
                    class: "profile-form",
                    onsubmit: handle_submit,

                    div {
                        class: "profile-grid",
                        div {
                            Label { html_for: "name", "Full Name *" }
                            Input {
                                id: "name",
                                value: form.name.clone(),
                                placeholder: "Enter full name...",
                                required: true,
                                disabled: !editing,
                                oninput: move |evt: FormEvent| {
                                    editor.write().set_field(ProfileField::Name, evt.value());
                                },
                            }
                        }
                        div {
                            Label { html_for: "email", "Email Address *" }
                            Input {
                                id: "email",
                                input_type: "email",
                                value: form.email.clone(),
                                placeholder: "user@example.com",
                                required: true,
                                disabled: !editing,
                                oninput: move |evt: FormEvent| {
                                    editor.write().set_field(ProfileField::Email, evt.value());
                                },
                            }
                        }
                    }

                    if editing {
                        div {
                            class: "profile-password",
                            h4 { class: "profile-section-title", "Change Password (Optional)" }
                            div {
                                class: "profile-grid",
                                div {
                                    Label { html_for: "password", "New Password" }
                                    Input {
                                        id: "password",
                                        input_type: "password",
                                        value: form.password.clone(),
                                        placeholder: "Enter new password...",
                                        oninput: move |evt: FormEvent| {
                                            editor.write().set_field(ProfileField::Password, evt.value());
                                        },
                                    }
                                }
                                div {
                                    Label { html_for: "confirm-password", "Confirm New Password" }
                                    Input {
                                        id: "confirm-password",
                                        input_type: "password",
                                        value: form.confirm_password.clone(),
                                        placeholder: "Confirm new password...",
                                        oninput: move |evt: FormEvent| {
                                            editor.write().set_field(ProfileField::ConfirmPassword, evt.value());
                                        },
                                    }
                                }
                            }
                            p {
                                class: "profile-hint",
                                "Leave password fields empty if you don't want to change your password."
                            }
                        }

                        div {
                            class: "profile-actions",
                            Button {
                                button_type: "submit",
                                disabled: state.saving,
                                if state.saving {
                                    Spinner { size: 14, color: "#ffffff" }
                                    "Saving..."
                                } else {
                                    Icon { icon: FaFloppyDisk, width: 14, height: 14 }
                                    "Save Changes"
                                }
                            }
                            Button {
                                variant: ButtonVariant::Outline,
                                onclick: handle_cancel,
                                Icon { icon: FaXmark, width: 14, height: 14 }
                                "Cancel"
                            }
                        }
                    } else {
                        div {
                            class: "profile-grid profile-meta",
                            div {
                                span { class: "profile-meta-label", "Account Status" }
                                p { class: "profile-status-active", "Active" }
                            }
                            div {
                                span { class: "profile-meta-label", "Member Since" }
                                p { class: "profile-meta-value", "Recently" }
                            }
                            div {
                                span { class: "profile-meta-label", "Role" }
                                p { class: "profile-meta-value", "{form.role}" }
                            }
                        }
                    }
                }
            }
        }
    }
}
