/// List item marker with owned delimiter constant.
///
/// All list syntax knowledge lives here, not scattered in classifier code.
pub struct ListMarker;

impl ListMarker {
    /// The literal prefix that marks a line as a list item.
    pub const PREFIX: &'static str = "- ";

    /// Returns the item text if the trimmed line starts with the marker.
    ///
    /// Leading and trailing whitespace of the line is dropped before the marker
    /// check, so `"  - item  "` yields `"item"`. Whitespace after the marker is
    /// kept: `"-  item"` yields `" item"`.
    pub fn strip(line: &str) -> Option<&str> {
        line.trim().strip_prefix(Self::PREFIX)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strip_simple_item() {
        assert_eq!(ListMarker::strip("- milk"), Some("milk"));
    }

    #[test]
    fn strip_indented_item() {
        assert_eq!(ListMarker::strip("   - bread  "), Some("bread"));
    }

    #[test]
    fn strip_keeps_extra_space_after_marker() {
        assert_eq!(ListMarker::strip("-  eggs"), Some(" eggs"));
    }

    #[test]
    fn strip_requires_space_after_dash() {
        assert_eq!(ListMarker::strip("-dash"), None);
        assert_eq!(ListMarker::strip("--- rule"), None);
    }

    #[test]
    fn strip_bare_dash_is_not_an_item() {
        // trim removes the space, so "- " alone never matches
        assert_eq!(ListMarker::strip("- "), None);
        assert_eq!(ListMarker::strip("-"), None);
    }

    #[test]
    fn strip_empty_item_after_trim() {
        assert_eq!(ListMarker::strip("-  "), None);
        assert_eq!(ListMarker::strip("- x"), Some("x"));
    }
}
