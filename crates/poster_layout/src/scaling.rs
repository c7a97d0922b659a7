//! Per-line scaling policy
//!
//! Every line is scaled uniformly. The factor is the smaller of the width-fill
//! factor and the factor that puts the line at its height bound, so a line
//! never overflows the container width and never exceeds its height target.

use crate::PosterConfig;
use poster_text::Extent;

/// Which height bound a line is scaled against
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScaleTarget {
    /// Normal lines: fill the width, capped at the maximum height ratio
    MaxHeight,
    /// Small-text lines: sit at the minimum height ratio unless too wide
    MinHeight,
}

impl ScaleTarget {
    pub fn for_paragraph(small_text: bool) -> Self {
        if small_text {
            Self::MinHeight
        } else {
            Self::MaxHeight
        }
    }

    /// The bounding height ratio for this target
    pub fn ratio(self, config: &PosterConfig) -> f32 {
        match self {
            Self::MaxHeight => config.max_line_height,
            Self::MinHeight => config.min_line_height,
        }
    }
}

/// Factor that scales `natural` to exactly the container width.
///
/// Infinite when the natural width is zero, leaving the height bound to decide.
pub fn width_fill_factor(natural: Extent, container: Extent) -> f32 {
    if natural.width > 0.0 {
        container.width / natural.width
    } else {
        f32::INFINITY
    }
}

/// Factor that scales `natural` to `ratio` of the container height
pub fn height_bound_factor(natural: Extent, container: Extent, ratio: f32) -> f32 {
    if natural.height > 0.0 {
        ratio * container.height / natural.height
    } else {
        f32::INFINITY
    }
}

/// Scaled height of a line as a fraction of the container height.
///
/// A zero-height container reports 0 so every candidate counts as too short.
pub fn height_ratio(natural: Extent, factor: f32, container: Extent) -> f32 {
    if container.height <= 0.0 {
        return 0.0;
    }
    let scaled = natural.height * factor;
    if scaled.is_finite() {
        scaled / container.height
    } else {
        // Zero-width text scaled by an infinite fill factor
        if natural.height > 0.0 {
            f32::INFINITY
        } else {
            0.0
        }
    }
}

/// The factor actually applied to a committed line
pub fn size_factor(natural: Extent, container: Extent, target: ScaleTarget, config: &PosterConfig) -> f32 {
    let fill = width_fill_factor(natural, container);
    let bound = height_bound_factor(natural, container, target.ratio(config));
    let factor = fill.min(bound);
    if factor.is_finite() {
        factor.max(0.0)
    } else {
        1.0
    }
}
