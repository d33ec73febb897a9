use regex::Regex;
use std::borrow::Cow;
use std::sync::OnceLock;

use crate::models::{Emphasis, TextBlock};

/// Emphasis delimiters with owned constants.
pub struct EmphasisMarker;

impl EmphasisMarker {
    /// Wraps bold text.
    pub const BOLD: &'static str = "**";
    /// Wraps italic text.
    pub const ITALIC: &'static str = "*";
}

fn bold_span() -> &'static Regex {
    static BOLD_REGEX: OnceLock<Regex> = OnceLock::new();
    BOLD_REGEX.get_or_init(|| Regex::new(r"\*\*(.+?)\*\*").expect("Invalid bold regex"))
}

fn italic_span() -> &'static Regex {
    static ITALIC_REGEX: OnceLock<Regex> = OnceLock::new();
    ITALIC_REGEX.get_or_init(|| Regex::new(r"\*(.+?)\*").expect("Invalid italic regex"))
}

/// Classifies whole-line emphasis and strips the markers.
///
/// Emphasis applies to the entire line. When a line carries both a bold span
/// and a separate italic span, every `*` is removed in one pass, so
/// `"**a** *b*"` and `"***ab***"` both collapse to styled text without span
/// boundaries. Unbalanced markers stay in the content as literal characters.
pub fn classify_emphasis(line: &str) -> TextBlock {
    let bold = bold_span().is_match(line);

    // A single-asterisk span only counts as italic when it survives removal of
    // the bold pairs, otherwise `**hi**` would read as both.
    let without_bold = if bold {
        Cow::Owned(line.replace(EmphasisMarker::BOLD, ""))
    } else {
        Cow::Borrowed(line)
    };
    let italic = italic_span().is_match(&without_bold);

    match (bold, italic) {
        (true, true) => TextBlock::new(
            line.replace(EmphasisMarker::ITALIC, ""),
            [Emphasis::Bold, Emphasis::Italic],
        ),
        (true, false) => TextBlock::new(without_bold.into_owned(), [Emphasis::Bold]),
        (false, true) => TextBlock::new(
            line.replace(EmphasisMarker::ITALIC, ""),
            [Emphasis::Italic],
        ),
        (false, false) => TextBlock::plain(line),
    }
}
