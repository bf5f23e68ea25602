use dioxus::prelude::*;

use super::COMPONENTS_CSS;

#[component]
pub fn Input(
    #[props(default)] id: String,
    #[props(default = "text".to_string())] input_type: String,
    #[props(default)] value: String,
    #[props(default)] placeholder: String,
    #[props(default)] disabled: bool,
    #[props(default)] required: bool,
    #[props(default)] class: String,
    oninput: Option<EventHandler<FormEvent>>,
) -> Element {
    rsx! {
        document::Stylesheet { href: COMPONENTS_CSS }
        input {
            class: "input {class}",
            id: "{id}",
            r#type: "{input_type}",
            value: "{value}",
            placeholder: "{placeholder}",
            disabled,
            required,
            oninput: move |evt| {
                if let Some(handler) = &oninput {
                    handler.call(evt);
                }
            },
        }
    }
}

#[component]
pub fn Label(
    #[props(default)] html_for: String,
    #[props(default)] class: String,
    children: Element,
) -> Element {
    rsx! {
        label {
            class: "label {class}",
            r#for: "{html_for}",
            {children}
        }
    }
}
