//! Tests for the parsing module.
//!
//! Case tables for the line rules, plus an inline snapshot of a realistic
//! comment so the whole block sequence is visible at a glance.

mod invariants;

use pretty_assertions::assert_eq;
use rstest::rstest;

use crate::models::{Block, Emphasis, FormattedContent, ListBlock, TextBlock};
use crate::parsing::parse;

fn text(content: &str, emphasis: &[Emphasis]) -> Block {
    Block::Text(TextBlock::new(content, emphasis.iter().copied()))
}

fn list(items: &[&str]) -> Block {
    Block::List(ListBlock::new(items.iter().copied()))
}

#[rstest]
#[case("")]
#[case("\n\n\n")]
#[case("   \n\t\n")]
fn blank_input_produces_no_blocks(#[case] input: &str) {
    let doc = parse(input);
    invariants::check(&doc);
    assert_eq!(doc, FormattedContent::default());
}

#[test]
fn list_lines_group_and_flush_before_text() {
    let doc = parse("- a\n- b\nc");
    invariants::check(&doc);
    assert_eq!(doc.blocks, vec![list(&["a", "b"]), text("c", &[])]);
}

#[test]
fn blank_line_separates_text_blocks() {
    let doc = parse("a\n\nb");
    assert_eq!(doc.blocks, vec![text("a", &[]), text("b", &[])]);
}

#[test]
fn adjacent_text_lines_stay_separate_blocks() {
    let doc = parse("first line\nsecond line");
    assert_eq!(
        doc.blocks,
        vec![text("first line", &[]), text("second line", &[])]
    );
}

#[rstest]
#[case("**hi**", "hi", &[Emphasis::Bold])]
#[case("*hi*", "hi", &[Emphasis::Italic])]
// Current contract: mixed markup collapses to whole-line bold+italic with
// every asterisk stripped. Not ideal markup semantics, but what renderers
// expect today.
#[case("**a** and *b*", "a and b", &[Emphasis::Bold, Emphasis::Italic])]
fn single_line_emphasis(#[case] input: &str, #[case] content: &str, #[case] emphasis: &[Emphasis]) {
    let doc = parse(input);
    assert_eq!(doc.blocks, vec![text(content, emphasis)]);
}

#[test]
fn list_items_keep_emphasis_markers() {
    let doc = parse("- **bold** item\n- *lean*");
    assert_eq!(doc.blocks, vec![list(&["**bold** item", "*lean*"])]);
}

#[test]
fn list_items_trim_surrounding_whitespace() {
    let doc = parse("   - indented   \n\t- tabbed");
    assert_eq!(doc.blocks, vec![list(&["indented", "tabbed"])]);
}

#[test]
fn blank_line_splits_lists() {
    let doc = parse("- a\n\n- b");
    assert_eq!(doc.blocks, vec![list(&["a"]), list(&["b"])]);
}

#[test]
fn trailing_list_is_flushed_at_end() {
    let doc = parse("intro\n- one\n- two");
    invariants::check(&doc);
    assert_eq!(doc.blocks, vec![text("intro", &[]), list(&["one", "two"])]);
}

#[test]
fn markers_do_not_pair_across_lines() {
    let doc = parse("*start\nend*");
    assert_eq!(doc.blocks, vec![text("*start", &[]), text("end*", &[])]);
}

#[test]
fn crlf_line_endings() {
    let doc = parse("**hi**\r\n- a\r\n- b\r\n");
    assert_eq!(
        doc.blocks,
        vec![text("hi", &[Emphasis::Bold]), list(&["a", "b"])]
    );
}

#[test]
fn dash_without_space_is_text() {
    let doc = parse("-5 degrees\n- \n---");
    assert_eq!(
        doc.blocks,
        vec![text("-5 degrees", &[]), text("- ", &[]), text("---", &[])]
    );
}

#[test]
fn stripped_plain_content_reparses_unchanged() {
    let doc = parse("**hello there**");
    let Block::Text(block) = &doc.blocks[0] else {
        panic!("expected a text block");
    };

    let reparsed = parse(&block.content);
    assert_eq!(reparsed.blocks, vec![text("hello there", &[])]);
}

#[test]
fn mixed_comment_snapshot() {
    let doc = parse("Shopping:\n- milk\n- **eggs**\n\n*urgent*");
    invariants::check(&doc);
    insta::assert_debug_snapshot!(doc, @r#"
    FormattedContent {
        version: 1,
        blocks: [
            Text(
                TextBlock {
                    content: "Shopping:",
                    emphasis: {},
                },
            ),
            List(
                ListBlock {
                    items: [
                        "milk",
                        "**eggs**",
                    ],
                },
            ),
            Text(
                TextBlock {
                    content: "urgent",
                    emphasis: {
                        Italic,
                    },
                },
            ),
        ],
    }
    "#);
}
