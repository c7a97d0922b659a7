//! Render item types

use serde::{Deserialize, Serialize};

/// A rectangle in render coordinates
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }
}

impl From<poster_layout::Rect> for Rect {
    fn from(r: poster_layout::Rect) -> Self {
        Self {
            x: r.x as f64,
            y: r.y as f64,
            width: r.width as f64,
            height: r.height as f64,
        }
    }
}

/// A scaled line of poster text
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineRender {
    /// The text to draw
    pub text: String,
    /// Scaled bounds in surface coordinates
    pub bounds: Rect,
    /// Uniform scale applied to the natural-size text
    pub scale: f64,
    /// Whether the line is small text
    pub small_text: bool,
}

/// Render item types
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum RenderItem {
    /// The line container holding the stacked lines
    Container { bounds: Rect },
    /// A line of text
    Line(LineRender),
}

/// A rendered poster
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PosterRender {
    pub width: f64,
    pub height: f64,
    pub items: Vec<RenderItem>,
}

impl PosterRender {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            items: Vec::new(),
        }
    }

    pub fn add_item(&mut self, item: RenderItem) {
        self.items.push(item);
    }

    /// Line items in drawing order
    pub fn lines(&self) -> impl Iterator<Item = &LineRender> {
        self.items.iter().filter_map(|item| match item {
            RenderItem::Line(line) => Some(line),
            RenderItem::Container { .. } => None,
        })
    }

    pub fn to_json(&self) -> crate::Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn to_json_pretty(&self) -> crate::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(json: &str) -> crate::Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
