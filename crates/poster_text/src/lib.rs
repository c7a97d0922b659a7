//! Poster Text - Text measurement for poster layout
//!
//! This crate provides the measurement seam the layout engine grows and
//! shrinks candidate lines against. Hosts plug in their own box measurement;
//! the estimators here cover tests and headless use.
//!
//! # Modules
//!
//! - `extent`: Width/height pairs at natural size
//! - `measurer`: The `TextMeasurer` trait and closure adapter
//! - `metrics`: Heuristic text extent estimation
//! - `cache`: Memoizing measurer wrapper

mod cache;
mod extent;
mod measurer;
mod metrics;

pub use cache::*;
pub use extent::*;
pub use measurer::*;
pub use metrics::*;
