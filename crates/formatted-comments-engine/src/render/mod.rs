//! Stateless projections of parsed content for display.

pub mod html;

pub use html::to_html;
