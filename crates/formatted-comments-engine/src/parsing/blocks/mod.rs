//! # Block Parsing
//!
//! Two-phase, line-oriented block parsing.
//!
//! ## Parsing Phases
//!
//! 1. **Line Classification** (`classify`): each line becomes a `LineClass`
//!    (blank, list item, or text) using only facts local to that line
//!
//! 2. **Block Construction** (`builder`): a `BlockBuilder` groups consecutive
//!    list items and emits text blocks with their emphasis classified
//!
//! ## Key Invariants
//!
//! - Blank lines never produce blocks
//! - A list block is only emitted with at least one item
//! - Markers never interact across lines

pub mod builder;
pub mod classify;
pub mod kinds;

pub use builder::BlockBuilder;
pub use classify::{LineClass, LineClassifier};
