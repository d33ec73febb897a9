use super::kinds::ListMarker;

/// Classification of a single line containing only local facts.
///
/// This is phase 1 of block parsing: each line is classified independently
/// without reference to surrounding lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineClass<'a> {
    /// Whitespace only. Separates blocks, never becomes one.
    Blank,
    /// A `- ` line; holds the item text with marker and outer whitespace removed.
    ListItem(&'a str),
    /// Any other line, untouched. Emphasis is classified later.
    Text(&'a str),
}

/// Classifies individual lines for the block parsing phase.
pub struct LineClassifier;

impl LineClassifier {
    /// List detection wins over everything else, so a list line is never
    /// checked for emphasis.
    pub fn classify<'a>(&self, line: &'a str) -> LineClass<'a> {
        if let Some(item) = ListMarker::strip(line) {
            LineClass::ListItem(item)
        } else if line.trim().is_empty() {
            LineClass::Blank
        } else {
            LineClass::Text(line)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classify_blank_lines() {
        assert_eq!(LineClassifier.classify(""), LineClass::Blank);
        assert_eq!(LineClassifier.classify("   \t"), LineClass::Blank);
    }

    #[test]
    fn classify_list_line() {
        assert_eq!(LineClassifier.classify("  - item"), LineClass::ListItem("item"));
    }

    #[test]
    fn classify_list_line_with_emphasis_markers() {
        assert_eq!(
            LineClassifier.classify("- **bold** item"),
            LineClass::ListItem("**bold** item")
        );
    }

    #[test]
    fn classify_text_keeps_whitespace() {
        assert_eq!(LineClassifier.classify("  hello "), LineClass::Text("  hello "));
    }
}
