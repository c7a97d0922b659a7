//! Layout result structure

use poster_text::Extent;
use serde::{Deserialize, Serialize};
use std::ops::Range;

/// A rectangle in container coordinates
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.width.is_finite() && self.height.is_finite()
    }
}

/// One scaled, positioned line box
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlacedLine {
    /// Text content (words joined by single spaces)
    pub text: String,
    /// Index of the source paragraph
    pub paragraph: usize,
    /// Word range within the paragraph
    pub words: Range<usize>,
    /// Whether the paragraph carried the small-text marker
    pub small_text: bool,
    /// Extent at scale 1
    pub natural: Extent,
    /// Uniform scale factor applied to the box
    pub scale: f32,
    /// Horizontal offset that centers the scaled box
    pub x: f32,
    /// Top of the box relative to the top of the line stack
    pub y: f32,
}

impl PlacedLine {
    /// Extent after scaling
    pub fn scaled(&self) -> Extent {
        self.natural.scaled(self.scale)
    }

    pub fn scaled_height(&self) -> f32 {
        self.natural.height * self.scale
    }

    pub fn scaled_width(&self) -> f32 {
        self.natural.width * self.scale
    }

    /// Scaled height as a fraction of the container height
    pub fn height_ratio(&self, container: Extent) -> f32 {
        if container.height > 0.0 {
            self.scaled_height() / container.height
        } else {
            0.0
        }
    }

    /// Scaled bounds relative to the top of the line stack
    pub fn bounds(&self) -> Rect {
        let scaled = self.scaled();
        Rect::new(self.x, self.y, scaled.width, scaled.height)
    }

    pub fn word_count(&self) -> usize {
        self.words.len()
    }
}

/// The complete poster layout
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PosterLayout {
    /// Container the layout was computed against
    pub container: Extent,
    /// Lines in emission order
    pub lines: Vec<PlacedLine>,
    /// Stacked height: scaled heights plus one line spacing per line
    pub total_height: f32,
    /// Top offset of the whole stack, centering it vertically
    pub block_top: f32,
}

impl PosterLayout {
    /// An empty layout centered in `container`
    pub fn empty(container: Extent) -> Self {
        Self {
            container,
            lines: Vec::new(),
            total_height: 0.0,
            block_top: container.height / 2.0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Line texts in order
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.lines.iter().map(|line| line.text.as_str())
    }

    /// Lines that came from paragraph `index`
    pub fn paragraph_lines(&self, index: usize) -> impl Iterator<Item = &PlacedLine> {
        self.lines.iter().filter(move |line| line.paragraph == index)
    }

    /// Bounds of `line` in container coordinates
    pub fn absolute_bounds(&self, line: &PlacedLine) -> Rect {
        let bounds = line.bounds();
        Rect::new(bounds.x, self.block_top + bounds.y, bounds.width, bounds.height)
    }

    /// Serialize the layout for snapshot comparison
    pub fn to_json(&self) -> crate::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
