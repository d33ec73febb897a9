use crate::models::{Block, ListBlock};
use crate::parsing::inline::classify_emphasis;

use super::classify::LineClass;

/// Phase 2 of block parsing: turns classified lines into blocks.
///
/// List items accumulate until a non-list line or end of input flushes them
/// as a single [`ListBlock`].
pub struct BlockBuilder {
    pending_items: Vec<String>,
    out: Vec<Block>,
}

impl BlockBuilder {
    pub fn new() -> Self {
        Self {
            pending_items: vec![],
            out: vec![],
        }
    }

    pub fn push(&mut self, c: LineClass<'_>) {
        match c {
            LineClass::ListItem(item) => self.pending_items.push(item.to_string()),
            LineClass::Blank => self.flush_list(),
            LineClass::Text(line) => {
                self.flush_list();
                self.out.push(Block::Text(classify_emphasis(line)));
            }
        }
    }

    pub fn finish(mut self) -> Vec<Block> {
        // EOF flush
        self.flush_list();
        self.out
    }

    fn flush_list(&mut self) {
        if self.pending_items.is_empty() {
            return;
        }
        let items = std::mem::take(&mut self.pending_items);
        self.out.push(Block::List(ListBlock { items }));
    }
}

impl Default for BlockBuilder {
    fn default() -> Self {
        Self::new()
    }
}
