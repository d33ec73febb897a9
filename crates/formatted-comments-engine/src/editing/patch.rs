use crate::models::FormattedContent;
use crate::parsing::parse;

/// Result of applying a format command
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Patch {
    pub new_text: String,
    /// Byte offset for the collapsed caret once the new text is committed
    pub new_cursor: usize,
}

impl Patch {
    /// Re-derive the structured content for the patched text.
    pub fn content(&self) -> FormattedContent {
        parse(&self.new_text)
    }
}
