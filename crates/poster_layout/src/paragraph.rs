//! Paragraph and word splitting
//!
//! Text is split into paragraphs on `\n`, and paragraphs into words on single
//! spaces. Consecutive spaces produce empty words so that joining a run of
//! words reproduces the original spacing exactly.

use std::ops::Range;

/// Prefix marking a paragraph as small text
pub const SMALL_TEXT_MARKER: &str = "@@";

/// A paragraph ready for packing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Paragraph<'a> {
    /// Position among the paragraphs kept from the source text
    pub index: usize,
    /// Paragraph text with any small-text marker removed
    pub text: &'a str,
    /// Whether the paragraph carried the small-text marker
    pub small_text: bool,
    /// Byte range of every word within `text`
    words: Vec<Range<usize>>,
}

impl<'a> Paragraph<'a> {
    /// Parse one source line. Returns `None` when nothing is left to lay out.
    pub fn parse(line: &'a str) -> Option<Self> {
        let line = line.strip_suffix('\r').unwrap_or(line);
        if line.is_empty() {
            return None;
        }

        let (text, small_text) = match line.trim().strip_prefix(SMALL_TEXT_MARKER) {
            Some(rest) => (rest.trim(), true),
            None => (line, false),
        };
        if text.is_empty() {
            return None;
        }

        Some(Self {
            index: 0,
            text,
            small_text,
            words: split_words(text),
        })
    }

    /// Number of words, counting empty ones between consecutive spaces
    pub fn word_count(&self) -> usize {
        self.words.len()
    }

    /// The word at `index`
    pub fn word(&self, index: usize) -> &'a str {
        &self.text[self.words[index].clone()]
    }

    /// Words `range` joined by single spaces.
    ///
    /// Words are contiguous in the source, so the join is a plain slice.
    pub fn join(&self, range: Range<usize>) -> &'a str {
        debug_assert!(range.start < range.end && range.end <= self.words.len());
        let start = self.words[range.start].start;
        let end = self.words[range.end - 1].end;
        &self.text[start..end]
    }
}

/// Split text into paragraphs, dropping empty ones
pub fn split_paragraphs(text: &str) -> Vec<Paragraph<'_>> {
    text.split('\n')
        .filter_map(Paragraph::parse)
        .enumerate()
        .map(|(index, paragraph)| Paragraph { index, ..paragraph })
        .collect()
}

fn split_words(text: &str) -> Vec<Range<usize>> {
    let mut words = Vec::new();
    let mut start = 0;
    for (offset, _) in text.match_indices(' ') {
        words.push(start..offset);
        start = offset + 1;
    }
    words.push(start..text.len());
    words
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drops_empty_paragraphs() {
        let paragraphs = split_paragraphs("one\n\n\ntwo\n");
        let texts: Vec<_> = paragraphs.iter().map(|p| p.text).collect();
        assert_eq!(texts, vec!["one", "two"]);
        assert_eq!(paragraphs[1].index, 1);
    }

    #[test]
    fn test_empty_text() {
        assert!(split_paragraphs("").is_empty());
        assert!(split_paragraphs("\n\n").is_empty());
    }

    #[test]
    fn test_small_text_marker() {
        let paragraph = Paragraph::parse("  @@  hello world ").unwrap();
        assert!(paragraph.small_text);
        assert_eq!(paragraph.text, "hello world");
        assert_eq!(paragraph.word_count(), 2);
    }

    #[test]
    fn test_marker_only_in_prefix() {
        let paragraph = Paragraph::parse("mail me @@ home").unwrap();
        assert!(!paragraph.small_text);
        assert_eq!(paragraph.text, "mail me @@ home");
    }

    #[test]
    fn test_marker_without_text_is_dropped() {
        assert!(Paragraph::parse("@@").is_none());
        assert!(Paragraph::parse("  @@   ").is_none());
    }

    #[test]
    fn test_crlf() {
        let paragraphs = split_paragraphs("first\r\nsecond\r\n");
        let texts: Vec<_> = paragraphs.iter().map(|p| p.text).collect();
        assert_eq!(texts, vec!["first", "second"]);
    }

    #[test]
    fn test_consecutive_spaces_keep_empty_words() {
        let paragraph = Paragraph::parse("a  b").unwrap();
        assert_eq!(paragraph.word_count(), 3);
        assert_eq!(paragraph.word(1), "");
        assert_eq!(paragraph.join(0..3), "a  b");
        assert_eq!(paragraph.join(0..2), "a ");
        assert_eq!(paragraph.join(2..3), "b");
    }

    #[test]
    fn test_join_matches_space_join() {
        let paragraph = Paragraph::parse("the quick brown fox").unwrap();
        let words: Vec<_> = (0..paragraph.word_count()).map(|i| paragraph.word(i)).collect();
        assert_eq!(paragraph.join(1..3), words[1..3].join(" "));
    }
}
