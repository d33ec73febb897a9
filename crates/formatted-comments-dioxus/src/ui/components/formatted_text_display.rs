use dioxus::prelude::*;
use formatted_comments_engine::{Block, FormattedContent, TextBlock};

/// Read-only rendering of a formatted comment.
///
/// Without content, or with no blocks, the raw text is shown as-is with line
/// breaks preserved.
#[component]
pub fn FormattedTextDisplay(text: String, content: Option<FormattedContent>) -> Element {
    let Some(content) = content.filter(|content| !content.is_empty()) else {
        return rsx! {
            p {
                class: "formatted-text raw",
                style: "white-space: pre-wrap",
                "{text}"
            }
        };
    };

    rsx! {
        div {
            class: "formatted-text",
            for (index, block) in content.blocks.iter().enumerate() {
                {match block {
                    Block::List(list) => rsx! {
                        ul {
                            key: "{index}",
                            for item in list.items.iter() {
                                li { "{item}" }
                            }
                        }
                    },
                    Block::Text(text) if text.content.is_empty() => rsx! {},
                    Block::Text(text) => rsx! {
                        p { key: "{index}", {emphasized(text)} }
                    },
                }}
            }
        }
    }
}

fn emphasized(block: &TextBlock) -> Element {
    let content = &block.content;
    match (block.is_bold(), block.is_italic()) {
        (true, true) => rsx! { strong { em { "{content}" } } },
        (true, false) => rsx! { strong { "{content}" } },
        (false, true) => rsx! { em { "{content}" } },
        (false, false) => rsx! { "{content}" },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dioxus::dioxus_core::VirtualDom;
    use dioxus_ssr::render;
    use formatted_comments_engine::parse;

    fn render_display(text: &str, content: Option<FormattedContent>) -> String {
        let mut dom = VirtualDom::new_with_props(
            FormattedTextDisplay,
            FormattedTextDisplayProps {
                text: text.to_string(),
                content,
            },
        );
        dom.rebuild_in_place();
        render(&dom)
    }

    #[test]
    fn test_renders_lists_and_emphasis() {
        let text = "Plan:\n- milk\n- eggs\n**loud**\n*soft*\n***both***";
        let html = render_display(text, Some(parse(text)));

        assert!(html.contains("<p>Plan:</p>"));
        assert!(html.contains("<ul><li>milk</li><li>eggs</li></ul>"));
        assert!(html.contains("<strong>loud</strong>"));
        assert!(html.contains("<em>soft</em>"));
        assert!(html.contains("<strong><em>both</em></strong>"));
        assert!(!html.contains("pre-wrap"));
    }

    #[test]
    fn test_falls_back_to_raw_text_without_content() {
        let html = render_display("just **text**", None);
        assert!(html.contains("white-space: pre-wrap"));
        assert!(html.contains("just **text**"));
        assert!(!html.contains("<strong>"));
    }

    #[test]
    fn test_falls_back_to_raw_text_with_empty_content() {
        let html = render_display("  \n", Some(parse("  \n")));
        assert!(html.contains("white-space: pre-wrap"));
    }

    #[test]
    fn test_skips_text_blocks_without_content() {
        let html = render_display("***", Some(parse("***")));
        assert!(!html.contains("<p"));
        assert!(!html.contains("<em>"));
        assert!(!html.contains("pre-wrap"));
    }

    #[test]
    fn test_escapes_markup_in_content() {
        let text = "<script>x</script>";
        let html = render_display(text, Some(parse(text)));
        assert!(!html.contains("<script>"));
    }
}
