// Word segmentation over a text snapshot.
//
// Word boundaries follow UAX #29 (Unicode text segmentation) as
// implemented by the unicode-segmentation crate. A boundary segment counts
// as a word iff it contains at least one alphanumeric character;
// whitespace and punctuation-only segments are dropped. All offsets are
// byte offsets into the snapshot.

use spellmark_core::WordSpan;
use unicode_segmentation::UnicodeSegmentation;

/// Split `text` into word spans, left to right.
///
/// The result is recomputed in full on every call and is deterministic for
/// a given input. Zero-length spans never appear.
pub fn tokenize(text: &str) -> Vec<WordSpan> {
    text.split_word_bound_indices()
        .filter(|(_, segment)| segment.chars().any(char::is_alphanumeric))
        .map(|(start, segment)| WordSpan::new(start, start + segment.len(), segment))
        .collect()
}

/// Find the word span containing the codepoint offset `position`.
///
/// The span's end offset counts as inside the word, so a position just
/// after the last character still resolves. Returns `None` on whitespace,
/// on punctuation, and when `position` lies past the end of `text`.
pub fn word_at<'a>(spans: &'a [WordSpan], text: &str, position: usize) -> Option<&'a WordSpan> {
    let byte_pos = byte_offset(text, position)?;
    spans.iter().find(|span| span.contains_byte(byte_pos))
}

/// Convert a codepoint offset to a byte offset.
///
/// The offset one past the last character maps to `text.len()`; anything
/// beyond that is out of range.
fn byte_offset(text: &str, position: usize) -> Option<usize> {
    text.char_indices()
        .map(|(idx, _)| idx)
        .chain([text.len()])
        .nth(position)
}
