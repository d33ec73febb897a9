use dioxus::prelude::*;
use formatted_comments_engine::{FormatKind, Keymap};

/// Bold / Italic / List buttons above a formatted text area.
#[component]
pub fn FormattingToolbar(
    on_format: EventHandler<FormatKind>,
    #[props(default)] disabled: bool,
    #[props(default)] keymap: Keymap,
) -> Element {
    rsx! {
        div {
            class: if disabled { "formatting-toolbar is-disabled" } else { "formatting-toolbar" },
            role: "toolbar",
            for kind in FormatKind::ALL {
                button {
                    key: "{kind.label()}",
                    r#type: "button",
                    class: "toolbar-button",
                    title: button_title(&keymap, kind),
                    disabled,
                    // Keep focus (and the selection) in the text area
                    onmousedown: move |evt| evt.prevent_default(),
                    onclick: move |_| on_format.call(kind),
                    {button_face(kind)}
                }
            }
        }
    }
}

fn button_title(keymap: &Keymap, kind: FormatKind) -> String {
    match keymap.describe(kind) {
        Some(shortcut) => format!("{} ({shortcut})", kind.label()),
        None => kind.label().to_string(),
    }
}

fn button_face(kind: FormatKind) -> Element {
    match kind {
        FormatKind::Bold => rsx! { strong { "B" } },
        FormatKind::Italic => rsx! { em { "I" } },
        FormatKind::List => rsx! { span { "• List" } },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dioxus::dioxus_core::VirtualDom;
    use dioxus_ssr::render;

    fn render_root(root: fn() -> Element) -> String {
        let mut dom = VirtualDom::new(root);
        dom.rebuild_in_place();
        render(&dom)
    }

    #[test]
    fn test_toolbar_titles_include_shortcuts() {
        let html = render_root(|| rsx! { FormattingToolbar { on_format: |_| {} } });

        assert!(html.contains("Bold (Ctrl+B)"));
        assert!(html.contains("Italic (Ctrl+I)"));
        assert!(html.contains("title=\"List\""));
        assert!(!html.contains("is-disabled"));
    }

    #[test]
    fn test_toolbar_follows_configured_keys() {
        let html = render_root(|| {
            rsx! {
                FormattingToolbar { on_format: |_| {}, keymap: Keymap::new('k', 'j') }
            }
        });

        assert!(html.contains("Bold (Ctrl+K)"));
        assert!(html.contains("Italic (Ctrl+J)"));
    }

    #[test]
    fn test_disabled_toolbar() {
        let html = render_root(|| rsx! { FormattingToolbar { on_format: |_| {}, disabled: true } });
        assert!(html.contains("is-disabled"));
    }
}
