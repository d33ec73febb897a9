use std::fmt::Write;

use html_escape::encode_text;

use crate::models::{Block, FormattedContent, TextBlock};

/// Render formatted content as an HTML fragment.
///
/// Lists become `<ul>`, text blocks become paragraphs wrapped in
/// `<strong>`/`<em>`. Text blocks whose markers stripped down to nothing are
/// skipped. Without content (or with no blocks) the raw text is
/// shown verbatim in a whitespace-preserving paragraph.
pub fn to_html(text: &str, content: Option<&FormattedContent>) -> String {
    let Some(content) = content.filter(|content| !content.is_empty()) else {
        return format!(
            r#"<p style="white-space: pre-wrap">{}</p>"#,
            encode_text(text)
        );
    };

    let mut out = String::new();
    for block in &content.blocks {
        match block {
            Block::List(list) => {
                out.push_str("<ul>");
                for item in &list.items {
                    let _ = write!(out, "<li>{}</li>", encode_text(item));
                }
                out.push_str("</ul>");
            }
            Block::Text(text) if text.content.is_empty() => {}
            Block::Text(text) => {
                let _ = write!(out, "<p>{}</p>", render_text(text));
            }
        }
    }
    out
}

fn render_text(block: &TextBlock) -> String {
    let mut inner = encode_text(&block.content).into_owned();
    if block.is_italic() {
        inner = format!("<em>{inner}</em>");
    }
    if block.is_bold() {
        inner = format!("<strong>{inner}</strong>");
    }
    inner
}
