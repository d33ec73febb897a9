use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use formatted_comments_config::Config;
use formatted_comments_engine::{Editor, FormatKind, KeyOutcome, KeyPress, Keymap};

use crate::textarea::TextArea;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

pub struct App {
    pub textarea: TextArea,
    pub keymap: Keymap,
    pub rows: u16,
    pub placeholder: String,
    pub disabled: bool,
    /// Last format failure, shown in the help line until the next command
    pub status: Option<String>,
}

impl App {
    pub fn new(config: &Config, initial_text: String) -> Self {
        let keymap = Keymap::new(config.shortcuts.bold, config.shortcuts.italic);
        let editor = Editor::new(initial_text).with_keymap(keymap);

        Self {
            textarea: TextArea::new(editor),
            keymap,
            rows: config.editor.rows,
            placeholder: config.editor.placeholder.clone(),
            disabled: config.editor.disabled,
            status: None,
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> Flow {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        let shift = key.modifiers.contains(KeyModifiers::SHIFT);

        match key.code {
            KeyCode::Esc => return Flow::Quit,
            KeyCode::Char('q') if ctrl => return Flow::Quit,
            KeyCode::Left => self.textarea.move_left(shift),
            KeyCode::Right => self.textarea.move_right(shift),
            KeyCode::Up => self.textarea.move_up(shift),
            KeyCode::Down => self.textarea.move_down(shift),
            KeyCode::Home => self.textarea.move_home(shift),
            KeyCode::End => self.textarea.move_end(shift),
            _ if self.disabled => {}
            KeyCode::F(2) => self.format(FormatKind::Bold),
            KeyCode::F(3) => self.format(FormatKind::Italic),
            KeyCode::F(4) => self.format(FormatKind::List),
            KeyCode::Enter => self.textarea.insert_char('\n'),
            KeyCode::Backspace => self.textarea.backspace(),
            KeyCode::Delete => self.textarea.delete(),
            KeyCode::Char(c) => match shortcut_press(&key) {
                Some(press) => self.shortcut(&press),
                None => self.textarea.insert_char(c),
            },
            _ => {}
        }

        Flow::Continue
    }

    fn format(&mut self, kind: FormatKind) {
        self.status = match self.textarea.apply(kind) {
            Ok(_) => None,
            Err(e) => {
                log::warn!("{} failed: {e}", kind.label());
                Some(e.to_string())
            }
        };
    }

    fn shortcut(&mut self, press: &KeyPress) {
        match self.textarea.handle_shortcut(press) {
            Ok(KeyOutcome::Handled(_)) => self.status = None,
            // Unbound control chords never insert text
            Ok(KeyOutcome::PassThrough) => {}
            Err(e) => {
                log::warn!("shortcut {press:?} failed: {e}");
                self.status = Some(e.to_string());
            }
        }
    }
}

/// Ctrl/Cmd character chords in the engine's toolkit-neutral form.
fn shortcut_press(key: &KeyEvent) -> Option<KeyPress> {
    let KeyCode::Char(c) = key.code else {
        return None;
    };

    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    let meta = key
        .modifiers
        .intersects(KeyModifiers::SUPER | KeyModifiers::META);
    if !(ctrl || meta) {
        return None;
    }

    Some(KeyPress {
        key: c,
        ctrl,
        meta,
        alt: key.modifiers.contains(KeyModifiers::ALT),
        shift: key.modifiers.contains(KeyModifiers::SHIFT),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use formatted_comments_config::EditorConfig;
    use pretty_assertions::assert_eq;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            let code = if c == '\n' {
                KeyCode::Enter
            } else {
                KeyCode::Char(c)
            };
            assert_eq!(app.handle_key(key(code)), Flow::Continue);
        }
    }

    fn app() -> App {
        App::new(&Config::default(), String::new())
    }

    #[test]
    fn test_typing_updates_preview_content() {
        let mut app = app();
        type_text(&mut app, "- one\n- two");
        assert_eq!(app.textarea.text(), "- one\n- two");
        assert_eq!(app.textarea.content().blocks.len(), 1);
    }

    #[test]
    fn test_ctrl_b_bolds_shift_selection() {
        let mut app = app();
        type_text(&mut app, "hello");
        app.handle_key(KeyEvent::new(KeyCode::Home, KeyModifiers::SHIFT));
        app.handle_key(KeyEvent::new(KeyCode::Char('b'), KeyModifiers::CONTROL));

        assert_eq!(app.textarea.text(), "**hello**");
        assert_eq!(app.textarea.selection(), 9..9);
    }

    #[test]
    fn test_function_keys_act_as_toolbar() {
        let mut app = app();
        type_text(&mut app, "a\nb");
        app.handle_key(KeyEvent::new(KeyCode::Up, KeyModifiers::SHIFT));
        app.handle_key(KeyEvent::new(KeyCode::Home, KeyModifiers::SHIFT));
        app.handle_key(key(KeyCode::F(4)));

        assert_eq!(app.textarea.text(), "- a\n- b");
    }

    #[test]
    fn test_unbound_control_chord_inserts_nothing() {
        let mut app = app();
        type_text(&mut app, "x");
        app.handle_key(KeyEvent::new(KeyCode::Char('s'), KeyModifiers::CONTROL));
        assert_eq!(app.textarea.text(), "x");
    }

    #[test]
    fn test_configured_shortcut_keys() {
        let mut config = Config::default();
        config.shortcuts.italic = 'k';
        let mut app = App::new(&config, "note".to_string());

        app.handle_key(KeyEvent::new(KeyCode::Home, KeyModifiers::SHIFT));
        app.handle_key(KeyEvent::new(KeyCode::Char('k'), KeyModifiers::SUPER));
        assert_eq!(app.textarea.text(), "*note*");
    }

    #[test]
    fn test_disabled_editor_ignores_edits() {
        let config = Config {
            editor: EditorConfig {
                disabled: true,
                ..EditorConfig::default()
            },
            ..Config::default()
        };
        let mut app = App::new(&config, "fixed".to_string());

        type_text(&mut app, "abc");
        app.handle_key(KeyEvent::new(KeyCode::Home, KeyModifiers::SHIFT));
        app.handle_key(key(KeyCode::F(2)));
        assert_eq!(app.textarea.text(), "fixed");
    }

    #[test]
    fn test_quit_keys() {
        let mut app = app();
        assert_eq!(app.handle_key(key(KeyCode::Esc)), Flow::Quit);
        assert_eq!(
            app.handle_key(KeyEvent::new(KeyCode::Char('q'), KeyModifiers::CONTROL)),
            Flow::Quit
        );
    }
}
