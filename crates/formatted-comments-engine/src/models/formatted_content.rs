use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use thiserror::Error;

/// Errors raised when decoding stored formatted content.
#[derive(Debug, Error)]
pub enum ContentError {
    #[error("Failed to decode formatted content: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unsupported formatted content version {found} (supported: {supported})")]
    UnsupportedVersion { found: u32, supported: u32 },

    #[error("List block at index {index} has no items")]
    EmptyList { index: usize },
}

/// Inline style applied to a whole text block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Emphasis {
    Bold,
    Italic,
}

/// One non-blank, non-list source line with its markers stripped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextBlock {
    pub content: String,
    /// Stored as `formatting` to stay compatible with existing comment payloads.
    #[serde(
        rename = "formatting",
        default,
        skip_serializing_if = "BTreeSet::is_empty"
    )]
    pub emphasis: BTreeSet<Emphasis>,
}

impl TextBlock {
    pub fn new(content: impl Into<String>, emphasis: impl IntoIterator<Item = Emphasis>) -> Self {
        Self {
            content: content.into(),
            emphasis: emphasis.into_iter().collect(),
        }
    }

    pub fn plain(content: impl Into<String>) -> Self {
        Self::new(content, [])
    }

    pub fn is_bold(&self) -> bool {
        self.emphasis.contains(&Emphasis::Bold)
    }

    pub fn is_italic(&self) -> bool {
        self.emphasis.contains(&Emphasis::Italic)
    }
}

/// A run of consecutive `- ` lines. Never empty when produced by the parser.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListBlock {
    pub items: Vec<String>,
}

impl ListBlock {
    pub fn new<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            items: items.into_iter().map(Into::into).collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Block {
    Text(TextBlock),
    List(ListBlock),
}

/// Structured projection of a comment's raw text.
///
/// Always derived from the raw text by [`crate::parse`] and rebuilt wholesale on
/// every change. An empty block list means "no formatting": renderers fall back
/// to the raw text with whitespace preserved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormattedContent {
    pub version: u32,
    pub blocks: Vec<Block>,
}

impl FormattedContent {
    pub const CURRENT_VERSION: u32 = 1;

    pub fn new(blocks: Vec<Block>) -> Self {
        Self {
            version: Self::CURRENT_VERSION,
            blocks,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    pub fn to_json(&self) -> Result<String, ContentError> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn to_json_pretty(&self) -> Result<String, ContentError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Decode stored content, rejecting versions this build cannot read.
    pub fn from_json(json: &str) -> Result<Self, ContentError> {
        let content: Self = serde_json::from_str(json)?;

        if content.version != Self::CURRENT_VERSION {
            return Err(ContentError::UnsupportedVersion {
                found: content.version,
                supported: Self::CURRENT_VERSION,
            });
        }

        if let Some(index) = content
            .blocks
            .iter()
            .position(|block| matches!(block, Block::List(list) if list.items.is_empty()))
        {
            return Err(ContentError::EmptyList { index });
        }

        Ok(content)
    }
}

impl Default for FormattedContent {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}
