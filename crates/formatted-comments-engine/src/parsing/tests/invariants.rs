use crate::models::{Block, FormattedContent};

/// Structural invariants every parse result must satisfy.
pub fn check(content: &FormattedContent) {
    assert_eq!(content.version, FormattedContent::CURRENT_VERSION);

    for (i, block) in content.blocks.iter().enumerate() {
        match block {
            Block::List(list) => {
                assert!(!list.items.is_empty(), "list block {i} has no items");
                for item in &list.items {
                    assert!(!item.is_empty(), "list block {i} has an empty item");
                }
            }
            Block::Text(text) => {
                assert!(text.emphasis.len() <= 2, "text block {i} has duplicate emphasis");
            }
        }
    }
}
