//! Poster Render - Surfaces and render items
//!
//! This crate exposes [`render`], which typesets text onto a host drawing
//! surface, and converts poster layouts into render items a frontend can
//! draw directly.
//!
//! ```
//! use poster_render::{render, RecordingSurface};
//! use poster_text::{EstimatedMeasurer, Extent};
//!
//! let mut surface = RecordingSurface::new(Extent::new(800.0, 400.0), EstimatedMeasurer::new(16.0));
//! let layout = render(&mut surface, "@@ small\nBIG HEADLINE", None);
//! assert_eq!(layout.line_count(), surface.lines().len());
//! ```

mod converter;
mod error;
mod render;
mod render_item;
mod surface;

pub use converter::*;
pub use error::*;
pub use render::*;
pub use render_item::*;
pub use surface::*;

pub use poster_layout::{PosterConfig, PosterLayout, PosterOptions};
