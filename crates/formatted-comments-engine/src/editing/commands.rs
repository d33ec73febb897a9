use serde::{Deserialize, Serialize};
use std::ops::Range;
use thiserror::Error;

use crate::editing::Patch;
use crate::parsing::blocks::kinds::ListMarker;
use crate::parsing::inline::EmphasisMarker;

/// A formatting command from the toolbar or a keyboard shortcut
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormatKind {
    Bold,
    Italic,
    List,
}

impl FormatKind {
    /// Toolbar order
    pub const ALL: [FormatKind; 3] = [FormatKind::Bold, FormatKind::Italic, FormatKind::List];

    pub fn label(self) -> &'static str {
        match self {
            FormatKind::Bold => "Bold",
            FormatKind::Italic => "Italic",
            FormatKind::List => "List",
        }
    }
}

/// A selection that cannot be sliced out of the text it refers to
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SelectionError {
    #[error("Selection {start}..{end} is inverted")]
    Inverted { start: usize, end: usize },

    #[error("Selection {start}..{end} is outside text of length {len}")]
    OutOfBounds { start: usize, end: usize, len: usize },

    #[error("Offset {offset} is not on a character boundary")]
    NotCharBoundary { offset: usize },
}

/// Check that `selection` is a valid byte range of `text`.
pub fn validate_selection(text: &str, selection: &Range<usize>) -> Result<(), SelectionError> {
    let Range { start, end } = *selection;
    if start > end {
        return Err(SelectionError::Inverted { start, end });
    }
    if end > text.len() {
        return Err(SelectionError::OutOfBounds {
            start,
            end,
            len: text.len(),
        });
    }
    for offset in [start, end] {
        if !text.is_char_boundary(offset) {
            return Err(SelectionError::NotCharBoundary { offset });
        }
    }
    Ok(())
}

/// Apply a format command to the selected byte range of `text`.
///
/// An empty selection is a no-op and returns `Ok(None)`. Otherwise the
/// selection is replaced by its formatted form and the caret lands just past
/// the inserted markers:
///
/// - bold wraps in `**`, caret at `end + 4`
/// - italic wraps in `*`, caret at `end + 2`
/// - list prefixes every selected line (empty ones too) with `- `, caret at
///   `end` plus the added marker bytes
pub fn apply_format(
    kind: FormatKind,
    text: &str,
    selection: Range<usize>,
) -> Result<Option<Patch>, SelectionError> {
    validate_selection(text, &selection)?;
    if selection.is_empty() {
        return Ok(None);
    }

    let selected = &text[selection.clone()];
    let replacement = compile_format(kind, selected);
    let new_cursor = selection.end + (replacement.len() - selected.len());

    let mut new_text = String::with_capacity(text.len() + replacement.len() - selected.len());
    new_text.push_str(&text[..selection.start]);
    new_text.push_str(&replacement);
    new_text.push_str(&text[selection.end..]);

    log::debug!(
        "{:?} applied to {}..{}, caret now at {}",
        kind,
        selection.start,
        selection.end,
        new_cursor
    );

    Ok(Some(Patch {
        new_text,
        new_cursor,
    }))
}

fn compile_format(kind: FormatKind, selected: &str) -> String {
    match kind {
        FormatKind::Bold => format!(
            "{marker}{selected}{marker}",
            marker = EmphasisMarker::BOLD
        ),
        FormatKind::Italic => format!(
            "{marker}{selected}{marker}",
            marker = EmphasisMarker::ITALIC
        ),
        FormatKind::List => selected
            .split('\n')
            .map(|line| format!("{}{line}", ListMarker::PREFIX))
            .collect::<Vec<_>>()
            .join("\n"),
    }
}
