//! Poster Layout - Line packing, scaling, and stacking
//!
//! This crate implements the poster layout algorithm: words are packed
//! greedily onto lines, each line is scaled to fill the container width
//! within a height band, and the lines are stacked and vertically centered.
//!
//! Layout is pure. [`PosterLayoutEngine::layout`] returns a [`PosterLayout`]
//! describing every line box; applying it to a drawing surface is the
//! caller's job.

mod config;
mod engine;
mod error;
mod layout_tree;
mod packer;
mod paragraph;
mod scaling;

pub use config::*;
pub use engine::*;
pub use error::*;
pub use layout_tree::*;
pub use packer::*;
pub use paragraph::*;
pub use scaling::*;

pub use poster_text::{Extent, TextMeasurer};
