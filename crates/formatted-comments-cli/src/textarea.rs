use std::ops::Range;

use formatted_comments_engine::editing::offsets::{char_to_byte, floor_boundary};
use formatted_comments_engine::{
    Editor, FormatKind, FormattedContent, KeyOutcome, KeyPress, Patch, SelectionError,
};
use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};

/// Terminal edit surface over an [`Editor`].
///
/// Tracks a caret and a selection anchor as byte offsets. Edits go through
/// [`Editor::input`] so the parsed content is refreshed on every keystroke.
pub struct TextArea {
    editor: Editor,
    /// Fixed end of a shift-selection; equals `caret` when nothing is selected
    anchor: usize,
    caret: usize,
}

impl TextArea {
    pub fn new(editor: Editor) -> Self {
        let caret = editor.text().len();
        Self {
            editor,
            anchor: caret,
            caret,
        }
    }

    pub fn text(&self) -> &str {
        self.editor.text()
    }

    pub fn content(&self) -> &FormattedContent {
        self.editor.content()
    }

    pub fn selection(&self) -> Range<usize> {
        self.anchor.min(self.caret)..self.anchor.max(self.caret)
    }

    pub fn insert_char(&mut self, c: char) {
        let mut buf = [0; 4];
        self.replace_selection(c.encode_utf8(&mut buf));
    }

    pub fn backspace(&mut self) {
        if self.anchor == self.caret {
            if self.caret == 0 {
                return;
            }
            self.anchor = floor_boundary(self.text(), self.caret - 1);
        }
        self.replace_selection("");
    }

    pub fn delete(&mut self) {
        if self.anchor == self.caret {
            match self.text()[self.caret..].chars().next() {
                Some(c) => self.anchor = self.caret + c.len_utf8(),
                None => return,
            }
        }
        self.replace_selection("");
    }

    pub fn move_left(&mut self, extend: bool) {
        let target = floor_boundary(self.text(), self.caret.saturating_sub(1));
        self.move_to(target, extend);
    }

    pub fn move_right(&mut self, extend: bool) {
        let target = match self.text()[self.caret..].chars().next() {
            Some(c) => self.caret + c.len_utf8(),
            None => self.caret,
        };
        self.move_to(target, extend);
    }

    pub fn move_home(&mut self, extend: bool) {
        self.move_to(self.line_start(self.caret), extend);
    }

    pub fn move_end(&mut self, extend: bool) {
        self.move_to(self.line_end(self.caret), extend);
    }

    pub fn move_up(&mut self, extend: bool) {
        let start = self.line_start(self.caret);
        if start == 0 {
            self.move_to(0, extend);
            return;
        }

        let column = self.text()[start..self.caret].chars().count();
        let prev_start = self.line_start(start - 1);
        let prev_line = &self.text()[prev_start..start - 1];
        let target = prev_start + char_to_byte(prev_line, column);
        self.move_to(target, extend);
    }

    pub fn move_down(&mut self, extend: bool) {
        let end = self.line_end(self.caret);
        if end == self.text().len() {
            self.move_to(end, extend);
            return;
        }

        let column = self.text()[self.line_start(self.caret)..self.caret]
            .chars()
            .count();
        let next_start = end + 1;
        let next_line = &self.text()[next_start..self.line_end(next_start)];
        let target = next_start + char_to_byte(next_line, column);
        self.move_to(target, extend);
    }

    /// Toolbar path: format the current selection.
    pub fn apply(&mut self, kind: FormatKind) -> Result<Option<Patch>, SelectionError> {
        let selection = self.selection();
        self.editor.select(selection)?;

        let patch = self.editor.apply(kind)?;
        if let Some(patch) = &patch {
            self.move_to(patch.new_cursor, false);
        }
        Ok(patch)
    }

    /// Shortcut path: let the editor's keymap decide.
    pub fn handle_shortcut(&mut self, key: &KeyPress) -> Result<KeyOutcome, SelectionError> {
        let selection = self.selection();
        self.editor.select(selection)?;

        let outcome = self.editor.handle_key(key)?;
        if let KeyOutcome::Handled(Some(patch)) = &outcome {
            self.move_to(patch.new_cursor, false);
        }
        Ok(outcome)
    }

    /// Caret as `(column, row)` in characters, for placing the terminal cursor.
    pub fn caret_position(&self) -> (usize, usize) {
        let before = &self.text()[..self.caret];
        let row = before.matches('\n').count();
        let column = before[self.line_start(self.caret)..].chars().count();
        (column, row)
    }

    /// Raw text lines with the selection highlighted.
    pub fn lines(&self) -> Vec<Line<'static>> {
        let text = self.text();
        let selection = self.selection();
        let highlight = Style::default().add_modifier(Modifier::REVERSED);

        let mut lines = Vec::new();
        let mut offset = 0;
        for raw in text.split('\n') {
            let (start, end) = (offset, offset + raw.len());
            let sel_start = selection.start.clamp(start, end);
            let sel_end = selection.end.clamp(start, end);

            let spans: Vec<Span<'static>> = [
                (&text[start..sel_start], Style::default()),
                (&text[sel_start..sel_end], highlight),
                (&text[sel_end..end], Style::default()),
            ]
            .into_iter()
            .filter(|(part, _)| !part.is_empty())
            .map(|(part, style)| Span::styled(part.to_string(), style))
            .collect();

            lines.push(Line::from(spans));
            offset = end + 1;
        }
        lines
    }

    fn replace_selection(&mut self, replacement: &str) {
        let range = self.selection();
        let mut text = self.text().to_string();
        text.replace_range(range.clone(), replacement);

        self.editor.input(text);
        self.move_to(range.start + replacement.len(), false);
    }

    fn move_to(&mut self, offset: usize, extend: bool) {
        self.caret = offset;
        if !extend {
            self.anchor = offset;
        }
    }

    fn line_start(&self, offset: usize) -> usize {
        self.text()[..offset].rfind('\n').map_or(0, |i| i + 1)
    }

    fn line_end(&self, offset: usize) -> usize {
        self.text()[offset..]
            .find('\n')
            .map_or(self.text().len(), |i| offset + i)
    }
}
