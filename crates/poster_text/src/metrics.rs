//! Text metric estimation

use crate::{Extent, TextMeasurer};
use unicode_segmentation::UnicodeSegmentation;

/// Average advance of one grapheme as a fraction of the em size
pub const DEFAULT_ADVANCE_RATIO: f32 = 0.6;

/// Line box height as a multiple of the em size
pub const DEFAULT_LINE_HEIGHT_RATIO: f32 = 1.2;

/// Heuristic measurer for headless layout and tests
///
/// Treats every grapheme cluster as the same average advance. Good enough to
/// exercise packing and scaling without a font stack.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EstimatedMeasurer {
    /// Em size in the host's length unit
    pub font_size: f32,
    /// Advance per grapheme as a fraction of `font_size`
    pub advance_ratio: f32,
    /// Line height as a multiple of `font_size`
    pub line_height_ratio: f32,
}

impl Default for EstimatedMeasurer {
    fn default() -> Self {
        Self::new(16.0)
    }
}

impl EstimatedMeasurer {
    pub fn new(font_size: f32) -> Self {
        Self {
            font_size,
            advance_ratio: DEFAULT_ADVANCE_RATIO,
            line_height_ratio: DEFAULT_LINE_HEIGHT_RATIO,
        }
    }

    /// Override the per-grapheme advance ratio
    pub fn with_advance_ratio(mut self, ratio: f32) -> Self {
        self.advance_ratio = ratio;
        self
    }

    /// Override the line height ratio
    pub fn with_line_height_ratio(mut self, ratio: f32) -> Self {
        self.line_height_ratio = ratio;
        self
    }

    /// Line height for any text
    pub fn line_height(&self) -> f32 {
        self.font_size * self.line_height_ratio
    }
}

impl TextMeasurer for EstimatedMeasurer {
    fn measure(&self, text: &str) -> Extent {
        Extent::new(estimate_text_width(text, self.font_size, self.advance_ratio), self.line_height())
    }
}

/// Estimate text width from its grapheme count
pub fn estimate_text_width(text: &str, font_size: f32, advance_ratio: f32) -> f32 {
    text.graphemes(true).count() as f32 * font_size * advance_ratio
}
