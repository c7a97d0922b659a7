//! Greedy line packing
//!
//! A line starts at `from` and grows one word at a time. After each word the
//! candidate is measured and scaled to the container width; growth continues
//! while words remain and the width-filled height is still at least the
//! minimum line height. A candidate that dropped below the minimum while
//! words remained gives back its last word, unless that would leave it empty.
//! The last word of a paragraph is never given back.

use crate::scaling::{height_ratio, width_fill_factor};
use crate::{Paragraph, PosterConfig};
use poster_text::{Extent, TextMeasurer};
use std::ops::Range;

/// Outcome of growing one candidate line
#[derive(Debug, Clone, PartialEq)]
pub struct PackedLine {
    /// Words committed to the line
    pub words: Range<usize>,
    /// Whether the last grown candidate had to give back a word
    pub backtracked: bool,
}

/// Packs the words of one paragraph into lines
pub struct LinePacker<'m, M: ?Sized> {
    measurer: &'m M,
    container: Extent,
    min_line_height: f32,
}

impl<'m, M: TextMeasurer + ?Sized> LinePacker<'m, M> {
    pub fn new(measurer: &'m M, container: Extent, config: &PosterConfig) -> Self {
        Self {
            measurer,
            container,
            min_line_height: config.min_line_height,
        }
    }

    /// Height ratio of `text` once scaled to fill the container width
    pub fn width_filled_ratio(&self, text: &str) -> f32 {
        let natural = self.measurer.measure(text);
        let fill = width_fill_factor(natural, self.container);
        height_ratio(natural, fill, self.container)
    }

    /// Grow the line starting at word `from`. Always commits at least one word.
    pub fn pack_line(&self, paragraph: &Paragraph<'_>, from: usize) -> PackedLine {
        let word_count = paragraph.word_count();
        debug_assert!(from < word_count);

        let mut to = from;
        let mut ratio;
        loop {
            to += 1;
            ratio = self.width_filled_ratio(paragraph.join(from..to));
            if to >= word_count || ratio < self.min_line_height {
                break;
            }
        }

        let backtracked = to < word_count && ratio < self.min_line_height && to - from > 1;
        if backtracked {
            to -= 1;
        }

        PackedLine {
            words: from..to,
            backtracked,
        }
    }

    /// Pack a whole paragraph into consecutive word ranges
    pub fn pack_paragraph(&self, paragraph: &Paragraph<'_>) -> Vec<Range<usize>> {
        let mut lines = Vec::new();
        let mut from = 0;
        while from < paragraph.word_count() {
            let packed = self.pack_line(paragraph, from);
            from = packed.words.end;
            lines.push(packed.words);
        }
        lines
    }
}
