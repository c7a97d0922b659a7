//! Target surfaces
//!
//! A surface is the host's rectangular drawing area. It hosts one line
//! container whose children are the line boxes, and it measures text at
//! natural size for the layout engine.

use poster_layout::PlacedLine;
use poster_text::{Extent, TextMeasurer};
use serde::{Deserialize, Serialize};

/// A host drawing surface that can measure text and host line boxes
pub trait Surface: TextMeasurer {
    /// Resolved size of the surface
    fn size(&self) -> Extent;

    /// Remove every child box left by a previous render
    fn clear(&mut self);

    /// Set the top offset of the line container
    fn set_block_top(&mut self, top: f32);

    /// Append a line box as the last child of the line container
    fn append_line(&mut self, line: &PlacedLine);
}

/// A line box as hosted by a [`RecordingSurface`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineElement {
    pub text: String,
    /// Left offset within the line container
    pub left: f32,
    /// Top offset within the line container
    pub top: f32,
    /// Uniform scale transform
    pub scale: f32,
    pub small_text: bool,
}

impl From<&PlacedLine> for LineElement {
    fn from(line: &PlacedLine) -> Self {
        Self {
            text: line.text.clone(),
            left: line.x,
            top: line.y,
            scale: line.scale,
            small_text: line.small_text,
        }
    }
}

/// In-memory surface that records what was rendered onto it
///
/// Useful for headless hosts and tests. Text is measured by the wrapped
/// measurer.
#[derive(Debug, Clone)]
pub struct RecordingSurface<M> {
    size: Extent,
    measurer: M,
    block_top: f32,
    lines: Vec<LineElement>,
    render_passes: usize,
}

impl<M: TextMeasurer> RecordingSurface<M> {
    pub fn new(size: Extent, measurer: M) -> Self {
        Self {
            size,
            measurer,
            block_top: 0.0,
            lines: Vec::new(),
            render_passes: 0,
        }
    }

    /// Resize the surface; takes effect on the next render
    pub fn resize(&mut self, size: Extent) {
        self.size = size;
    }

    pub fn block_top(&self) -> f32 {
        self.block_top
    }

    pub fn lines(&self) -> &[LineElement] {
        &self.lines
    }

    /// How many times the surface has been cleared for a render
    pub fn render_passes(&self) -> usize {
        self.render_passes
    }

    pub fn measurer(&self) -> &M {
        &self.measurer
    }
}

impl<M: TextMeasurer> TextMeasurer for RecordingSurface<M> {
    fn measure(&self, text: &str) -> Extent {
        self.measurer.measure(text)
    }
}

impl<M: TextMeasurer> Surface for RecordingSurface<M> {
    fn size(&self) -> Extent {
        self.size
    }

    fn clear(&mut self) {
        self.lines.clear();
        self.block_top = 0.0;
        self.render_passes += 1;
    }

    fn set_block_top(&mut self, top: f32) {
        self.block_top = top;
    }

    fn append_line(&mut self, line: &PlacedLine) {
        self.lines.push(LineElement::from(line));
    }
}
