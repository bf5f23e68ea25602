use dioxus::prelude::*;

const SPINNER_CSS: Asset = asset!("/src/spinner.css");

/// Circular loading indicator.
#[component]
pub fn Spinner(
    #[props(default = 48)] size: u32,
    #[props(default = "#ea580c".to_string())] color: String,
    #[props(default)] class: String,
) -> Element {
    let border = (size / 8).max(2);

    rsx! {
        document::Stylesheet { href: SPINNER_CSS }
        div {
            class: "spinner-wrap {class}",
            div {
                class: "spinner",
                role: "status",
                style: "width: {size}px; height: {size}px; border-width: {border}px; border-color: {color}; border-bottom-color: transparent;",
            }
        }
    }
}
