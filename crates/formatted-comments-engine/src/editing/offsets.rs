//! Offset conversion between the engine's byte offsets and what edit
//! surfaces report: UTF-16 code units for web text areas, chars for terminals.
//!
//! All conversions clamp to the text and round down to the nearest character
//! boundary, so they never produce an offset that cannot be sliced.

/// Convert a UTF-16 code unit offset to a byte offset.
pub fn utf16_to_byte(text: &str, utf16_offset: usize) -> usize {
    let mut units = 0;
    for (idx, ch) in text.char_indices() {
        if units >= utf16_offset {
            return idx;
        }
        units += ch.len_utf16();
        if units > utf16_offset {
            // inside a surrogate pair
            return idx;
        }
    }
    text.len()
}

/// Convert a byte offset to a UTF-16 code unit offset.
pub fn byte_to_utf16(text: &str, byte_offset: usize) -> usize {
    text[..floor_boundary(text, byte_offset)].encode_utf16().count()
}

/// Convert a char index to a byte offset.
pub fn char_to_byte(text: &str, char_index: usize) -> usize {
    text.char_indices()
        .nth(char_index)
        .map(|(idx, _)| idx)
        .unwrap_or(text.len())
}

/// Convert a byte offset to a char index.
pub fn byte_to_char(text: &str, byte_offset: usize) -> usize {
    text[..floor_boundary(text, byte_offset)].chars().count()
}

/// Largest char boundary at or below `byte_offset`, clamped to the text.
pub fn floor_boundary(text: &str, byte_offset: usize) -> usize {
    let mut offset = byte_offset.min(text.len());
    while !text.is_char_boundary(offset) {
        offset -= 1;
    }
    offset
}
