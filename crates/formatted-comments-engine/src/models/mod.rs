pub mod formatted_content;

pub use formatted_content::{Block, ContentError, Emphasis, FormattedContent, ListBlock, TextBlock};
