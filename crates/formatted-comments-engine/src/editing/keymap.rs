use crate::editing::{FormatKind, Patch};

/// A character key press with its modifier state, independent of any UI toolkit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyPress {
    pub key: char,
    pub ctrl: bool,
    /// Cmd on macOS, Super/Windows elsewhere
    pub meta: bool,
    pub alt: bool,
    pub shift: bool,
}

impl KeyPress {
    pub fn char(key: char) -> Self {
        Self {
            key,
            ctrl: false,
            meta: false,
            alt: false,
            shift: false,
        }
    }

    pub fn with_ctrl(mut self) -> Self {
        self.ctrl = true;
        self
    }

    pub fn with_meta(mut self) -> Self {
        self.meta = true;
        self
    }

    pub fn with_alt(mut self) -> Self {
        self.alt = true;
        self
    }

    pub fn with_shift(mut self) -> Self {
        self.shift = true;
        self
    }
}

/// What the surface should do with a key press after dispatch
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyOutcome {
    /// A shortcut matched: suppress the platform's default action.
    /// The patch is `None` when the selection was empty.
    Handled(Option<Patch>),
    /// Not a shortcut; let the surface process the key normally
    PassThrough,
}

impl KeyOutcome {
    pub fn is_handled(&self) -> bool {
        matches!(self, KeyOutcome::Handled(_))
    }
}

/// Shortcut bindings for the emphasis commands.
///
/// A binding fires when Ctrl or Meta is held and the key equals the bound
/// character exactly. Lists have no shortcut; they are toolbar-only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Keymap {
    pub bold: char,
    pub italic: char,
}

impl Keymap {
    pub fn new(bold: char, italic: char) -> Self {
        Self { bold, italic }
    }

    pub fn resolve(&self, key: &KeyPress) -> Option<FormatKind> {
        if !(key.ctrl || key.meta) {
            return None;
        }

        let kind = if key.key == self.bold {
            Some(FormatKind::Bold)
        } else if key.key == self.italic {
            Some(FormatKind::Italic)
        } else {
            None
        };

        log::trace!("key {:?} resolved to {:?}", key, kind);
        kind
    }

    /// Human readable shortcut for tooltips, e.g. `"Ctrl+B"`
    pub fn describe(&self, kind: FormatKind) -> Option<String> {
        let key = match kind {
            FormatKind::Bold => self.bold,
            FormatKind::Italic => self.italic,
            FormatKind::List => return None,
        };
        Some(format!("Ctrl+{}", key.to_ascii_uppercase()))
    }
}

impl Default for Keymap {
    fn default() -> Self {
        Self::new('b', 'i')
    }
}
