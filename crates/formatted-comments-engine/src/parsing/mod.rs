pub mod blocks;
pub mod inline;

#[cfg(test)]
mod tests;

use crate::models::FormattedContent;

use blocks::{BlockBuilder, LineClassifier};

/// Parse raw comment text into its structured form.
///
/// Total over all input: the worst case is an empty block list. Lines split on
/// `\n`, and a `\r` left over from CRLF endings is dropped.
pub fn parse(text: &str) -> FormattedContent {
    let classifier = LineClassifier;
    let mut builder = BlockBuilder::new();

    for line in text.lines() {
        builder.push(classifier.classify(line));
    }

    let blocks = builder.finish();
    log::trace!("parsed {} bytes into {} blocks", text.len(), blocks.len());
    FormattedContent::new(blocks)
}
