//! Admin profile page.

use dioxus::prelude::*;
use ui::{use_auth, LogoutButton, Spinner, UserProfileCard};

use crate::Route;

#[component]
pub fn Profile() -> Element {
    let auth = use_auth();
    let nav = use_navigator();

    use_effect(move || {
        let state = auth();
        if !state.loading && state.user.is_none() {
            nav.replace(Route::Login {});
        }
    });

    let state = auth();
    if state.loading || state.user.is_none() {
        return rsx! {
            Spinner {}
        };
    }

    rsx! {
        div {
            class: "admin-page",
            div {
                class: "admin-topbar",
                LogoutButton { class: "logout-btn" }
            }
            UserProfileCard {}
        }
    }
}
