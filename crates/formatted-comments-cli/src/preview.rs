use formatted_comments_engine::{Block, FormattedContent, TextBlock};
use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};

const BULLET: &str = "• ";

/// Terminal projection of parsed content.
///
/// Falls back to the raw text line by line when there are no blocks, so
/// whitespace-only input still shows what was typed.
pub fn preview_lines(text: &str, content: &FormattedContent) -> Vec<Line<'static>> {
    if content.is_empty() {
        return text
            .split('\n')
            .map(|line| Line::from(Span::raw(line.to_string())))
            .collect();
    }

    let mut lines = Vec::new();
    for block in &content.blocks {
        match block {
            Block::List(list) => lines.extend(list.items.iter().map(|item| {
                Line::from(vec![Span::raw(BULLET), Span::raw(item.clone())])
            })),
            Block::Text(text) if text.content.is_empty() => {}
            Block::Text(text) => lines.push(Line::from(Span::styled(
                text.content.clone(),
                text_style(text),
            ))),
        }
    }
    lines
}

fn text_style(block: &TextBlock) -> Style {
    let mut style = Style::default();
    if block.is_bold() {
        style = style.add_modifier(Modifier::BOLD);
    }
    if block.is_italic() {
        style = style.add_modifier(Modifier::ITALIC);
    }
    style
}
