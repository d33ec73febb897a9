/*!
 * # Editing Core Module
 *
 * Everything a comment box needs to turn key presses and toolbar clicks into
 * new text, independent of the UI toolkit rendering it.
 *
 * ## Architecture Overview
 *
 * ### 1. Raw text is the source of truth
 * - The user's text is stored verbatim; structured content is always
 *   re-derived from it with [`crate::parse`]
 * - Format commands rewrite text, they never edit the structured content
 *
 * ### 2. Command-based formatting
 * - Toolbar buttons and shortcuts become a [`FormatKind`]
 * - [`apply_format`] compiles a command against a byte selection into a
 *   [`Patch`] (new text plus collapsed caret)
 * - An empty selection is a no-op
 *
 * ### 3. Toolkit-neutral key handling
 * - Front-ends translate their key events into [`KeyPress`]
 * - [`Keymap`] resolves Ctrl/Meta combinations to commands
 * - [`KeyOutcome`] tells the surface whether to suppress the default action
 *
 * ## Module Structure
 *
 * - **`commands`**: `FormatKind`, selection validation and `apply_format`
 * - **`editor`**: `Editor` keeping text, selection and content in sync
 * - **`keymap`**: toolkit-neutral key presses and shortcut bindings
 * - **`offsets`**: byte/UTF-16/char offset conversion for edit surfaces
 * - **`patch`**: the result of a format command
 *
 * ## Usage Pattern
 *
 * ```rust
 * use formatted_comments_engine::editing::*;
 *
 * let mut editor = Editor::new("milk\neggs");
 * editor.select(0..9).unwrap();
 *
 * // Toolbar "List" button
 * editor.apply(FormatKind::List).unwrap();
 * assert_eq!(editor.text(), "- milk\n- eggs");
 *
 * // Ctrl+B with nothing selected is handled but changes nothing
 * let outcome = editor.handle_key(&KeyPress::char('b').with_ctrl()).unwrap();
 * assert_eq!(outcome, KeyOutcome::Handled(None));
 * ```
 */

pub mod commands;
pub mod editor;
pub mod keymap;
pub mod offsets;
pub mod patch;

pub use commands::{FormatKind, SelectionError, apply_format, validate_selection};
pub use editor::Editor;
pub use keymap::{KeyOutcome, KeyPress, Keymap};
pub use patch::Patch;
