//! Email + password sign-in form.

use dioxus::prelude::*;

use crate::auth::{use_auth, AuthState};
use crate::components::{Button, Input, Label};
use crate::Spinner;

#[component]
pub fn LoginForm(
    /// Called after the session is established.
    on_success: Option<EventHandler<()>>,
) -> Element {
    let mut auth = use_auth();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    let handle_login = move |evt: FormEvent| {
        evt.prevent_default();
        spawn(async move {
            error.set(None);

            let e = email().trim().to_string();
            let p = password();
            if e.is_empty() || p.is_empty() {
                error.set(Some("Email and password are required".to_string()));
                return;
            }

            loading.set(true);
            match api::login_password(e, p).await {
                Ok(user) => {
                    auth.set(AuthState::signed_in(user));
                    loading.set(false);
                    if let Some(handler) = &on_success {
                        handler.call(());
                    }
                }
                Err(e) => {
                    tracing::error!("Login failed: {}", e);
                    loading.set(false);
                    error.set(Some(e.to_string()));
                }
            }
        });
    };

    rsx! {
        form {
            class: "login-form",
            onsubmit: handle_login,

            div {
                class: "login-form-heading",
                h1 { "Login to your account" }
                p { "Enter your email below to login to your account" }
            }

            div {
                Label { html_for: "login-email", "Email" }
                Input {
                    id: "login-email",
                    input_type: "email",
                    placeholder: "m@example.com",
                    value: email(),
                    required: true,
                    oninput: move |evt: FormEvent| email.set(evt.value()),
                }
            }

            div {
                Label { html_for: "login-password", "Password" }
                Input {
                    id: "login-password",
                    input_type: "password",
                    value: password(),
                    required: true,
                    oninput: move |evt: FormEvent| password.set(evt.value()),
                }
            }

            if let Some(msg) = error() {
                p { class: "login-error", "{msg}" }
            }

            Button {
                button_type: "submit",
                class: "login-submit",
                disabled: loading(),
                if loading() {
                    Spinner { size: 14, color: "#ffffff" }
                    "Signing in..."
                } else {
                    "Login"
                }
            }
        }
    }
}
