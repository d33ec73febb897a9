//! Block-specific types with owned delimiters.

pub mod list_item;

pub use list_item::ListMarker;
