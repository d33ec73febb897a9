//! # Inline Parsing
//!
//! Whole-line emphasis classification for text blocks.
//!
//! Emphasis is not span-based: a line is either bold, italic, both, or plain,
//! and the markers are stripped from the stored content. Matching is
//! stateless, each call builds its answer from the line alone.

pub mod emphasis;

pub use emphasis::{EmphasisMarker, classify_emphasis};
