//! Login page: brand header and sign-in form on the left, artwork on the right.

use dioxus::prelude::*;
use ui::icons::FaLayerGroup;
use ui::{use_auth, Icon, LoginForm};

use crate::Route;

const BRAND: &str = "Arunachal Festival";

/// Login page component.
#[component]
pub fn Login() -> Element {
    let auth = use_auth();
    let nav = use_navigator();

    // If already logged in, go to the profile page
    use_effect(move || {
        let state = auth();
        if !state.loading && state.user.is_some() {
            nav.replace(Route::Profile {});
        }
    });

    rsx! {
        div {
            class: "login-page",
            div {
                class: "login-pane",
                div {
                    a {
                        class: "login-brand",
                        href: "#",
                        title: BRAND,
                        div {
                            class: "login-brand-mark",
                            Icon { icon: FaLayerGroup, width: 14, height: 14 }
                        }
                        "{BRAND}"
                    }
                }
                div {
                    class: "login-center",
                    div {
                        LoginForm {
                            on_success: move |_| {
                                nav.replace(Route::Profile {});
                            },
                        }
                    }
                }
            }
            div { class: "login-art" }
        }
    }
}
