use std::ops::Range;

use crate::editing::commands::{SelectionError, apply_format, validate_selection};
use crate::editing::{FormatKind, KeyOutcome, KeyPress, Keymap, Patch};
use crate::models::FormattedContent;
use crate::parsing::parse;

/// Editing state behind a formatted comment box.
///
/// Editor keeps the raw text and its parsed [`FormattedContent`] in lockstep:
/// every change replaces the text and immediately re-derives the content, so
/// no caller can observe one without the other.
///
/// ## Update paths
///
/// - **Free typing** (`input`): the surface hands over its new text verbatim
/// - **Format commands** (`apply`): toolbar buttons rewrite the selection
/// - **Shortcuts** (`handle_key`): bound key combinations dispatch to `apply`
///
/// ```rust
/// # use formatted_comments_engine::editing::{Editor, FormatKind};
/// let mut editor = Editor::new("hello world");
/// editor.select(0..5).unwrap();
///
/// let patch = editor.apply(FormatKind::Bold).unwrap().unwrap();
/// assert_eq!(editor.text(), "**hello** world");
/// assert_eq!(editor.selection(), patch.new_cursor..patch.new_cursor);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Editor {
    text: String,
    /// Byte range into `text`, always valid for the current text
    selection: Range<usize>,
    content: FormattedContent,
    keymap: Keymap,
    /// Incremented on every text change (enables change detection)
    version: u64,
}

impl Editor {
    /// Create an editor with the caret at the end of `text`.
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let len = text.len();
        let content = parse(&text);

        Self {
            text,
            selection: len..len,
            content,
            keymap: Keymap::default(),
            version: 0,
        }
    }

    pub fn with_keymap(mut self, keymap: Keymap) -> Self {
        self.keymap = keymap;
        self
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn content(&self) -> &FormattedContent {
        &self.content
    }

    pub fn selection(&self) -> Range<usize> {
        self.selection.clone()
    }

    pub fn version(&self) -> u64 {
        self.version
    }

    /// Free-typing path: take the surface's text as-is and re-parse.
    ///
    /// The selection is kept when it still fits the new text, otherwise the
    /// caret moves to the end.
    pub fn input(&mut self, text: impl Into<String>) {
        self.text = text.into();
        if validate_selection(&self.text, &self.selection).is_err() {
            let len = self.text.len();
            self.selection = len..len;
        }
        self.refresh();
    }

    /// Set the selection as a byte range of the current text.
    pub fn select(&mut self, selection: Range<usize>) -> Result<(), SelectionError> {
        validate_selection(&self.text, &selection)?;
        self.selection = selection;
        Ok(())
    }

    /// Collapse the selection to a caret at `offset`.
    pub fn set_cursor(&mut self, offset: usize) -> Result<(), SelectionError> {
        self.select(offset..offset)
    }

    /// Apply a format command to the current selection.
    ///
    /// Returns `Ok(None)` without touching anything when the selection is
    /// empty. On success the selection collapses to the patch's caret.
    pub fn apply(&mut self, kind: FormatKind) -> Result<Option<Patch>, SelectionError> {
        let patch = apply_format(kind, &self.text, self.selection())?;

        if let Some(patch) = &patch {
            self.text.clone_from(&patch.new_text);
            self.selection = patch.new_cursor..patch.new_cursor;
            self.refresh();
        }

        Ok(patch)
    }

    /// Shortcut dispatch: bound combinations apply their format command,
    /// anything else passes through for normal handling.
    pub fn handle_key(&mut self, key: &KeyPress) -> Result<KeyOutcome, SelectionError> {
        match self.keymap.resolve(key) {
            Some(kind) => Ok(KeyOutcome::Handled(self.apply(kind)?)),
            None => Ok(KeyOutcome::PassThrough),
        }
    }

    fn refresh(&mut self) {
        self.content = parse(&self.text);
        self.version += 1;
    }
}

impl Default for Editor {
    fn default() -> Self {
        Self::new(String::new())
    }
}
