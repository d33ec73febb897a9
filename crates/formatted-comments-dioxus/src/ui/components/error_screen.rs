use dioxus::prelude::*;

use crate::ui::STYLE_CSS;

/// Replaces the editor when the config or the starting draft can't be loaded.
///
/// `causes` is the error chain below `message`, outermost first.
#[component]
pub fn ErrorScreen(message: String, causes: Vec<String>, config_path: String) -> Element {
    rsx! {
        style { {STYLE_CSS} }
        div {
            class: "error-screen",
            h1 { "Could not open the comment editor" }
            p { class: "error-message", "{message}" }
            if !causes.is_empty() {
                ul {
                    class: "error-causes",
                    for cause in causes.iter() {
                        li { "{cause}" }
                    }
                }
            }
            p {
                class: "error-hint",
                "Check {config_path}, or pass a readable draft file as the only argument."
            }
        }
    }
}
