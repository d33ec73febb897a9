use dioxus::prelude::*;
use formatted_comments_config::Config;
use formatted_comments_engine::{FormattedContent, Keymap, parse};

use super::STYLE_CSS;
use super::components::{FormattedTextDisplay, FormattedTextarea};

#[component]
pub fn App(config: Config, initial_text: String) -> Element {
    let mut text = use_signal(|| initial_text.clone());
    let mut content = use_signal(|| parse(&initial_text));
    let keymap = Keymap::new(config.shortcuts.bold, config.shortcuts.italic);

    let payload = content
        .read()
        .to_json_pretty()
        .unwrap_or_else(|e| e.to_string());

    rsx! {
        style { {STYLE_CSS} }
        div {
            class: "app-container",
            h1 { "formatted-comments" }
            FormattedTextarea {
                value: text(),
                placeholder: config.editor.placeholder.clone(),
                rows: u32::from(config.editor.rows),
                disabled: config.editor.disabled,
                keymap,
                on_change: move |(new_text, new_content): (String, FormattedContent)| {
                    log::debug!("comment changed: {} blocks", new_content.blocks.len());
                    text.set(new_text);
                    content.set(new_content);
                },
            }
            h2 { "Preview" }
            div {
                class: "preview",
                FormattedTextDisplay { text: text(), content: Some(content()) }
            }
            details {
                class: "payload",
                summary { "Stored payload" }
                pre { "{payload}" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dioxus::dioxus_core::VirtualDom;
    use dioxus_ssr::render;

    #[test]
    fn test_app_renders_editor_preview_and_payload() {
        let mut dom = VirtualDom::new_with_props(
            App,
            AppProps {
                config: Config::default(),
                initial_text: "**hi**\n- a".to_string(),
            },
        );
        dom.rebuild_in_place();
        let html = render(&dom);

        assert!(html.contains("<textarea"));
        assert!(html.contains("<strong>hi</strong>"));
        assert!(html.contains("<li>a</li>"));
        assert!(html.contains("Stored payload"));
        assert!(html.contains("Write a comment..."));
    }

    #[test]
    fn test_app_respects_disabled_config() {
        let mut config = Config::default();
        config.editor.disabled = true;

        let mut dom = VirtualDom::new_with_props(
            App,
            AppProps {
                config,
                initial_text: String::new(),
            },
        );
        dom.rebuild_in_place();
        let html = render(&dom);

        assert!(html.contains("is-disabled"));
    }
}
