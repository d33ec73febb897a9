pub mod editing;
pub mod models;
pub mod parsing;
pub mod render;

// Re-export key types for easier usage
pub use editing::{
    Editor, FormatKind, KeyOutcome, KeyPress, Keymap, Patch, SelectionError, apply_format,
};
pub use models::*;
pub use parsing::parse;
pub use render::to_html;

/// Usage hint shown below the comment box.
pub const FORMATTING_HINT: &str = "Tip: Use **bold**, *italic*, or select text and use toolbar buttons. Start lines with \"- \" for lists.";
