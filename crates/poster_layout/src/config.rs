//! Poster layout configuration
//!
//! Callers pass a partial [`PosterOptions`]; it is merged over the defaults
//! into a fresh [`PosterConfig`] for each layout pass.

use crate::{LayoutError, Result};
use serde::{Deserialize, Serialize};

/// Default maximum line height, as a fraction of the container height
pub const DEFAULT_MAX_LINE_HEIGHT: f32 = 0.2;

/// Default minimum line height, as a fraction of the container height
pub const DEFAULT_MIN_LINE_HEIGHT: f32 = 0.044;

/// Default space between lines
pub const DEFAULT_LINE_SPACING: f32 = 0.0;

/// Resolved layout configuration
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PosterConfig {
    /// Tallest a normal line may be scaled, as a fraction of container height
    pub max_line_height: f32,
    /// Shortest a packed line may be scaled, as a fraction of container height.
    /// Small-text lines are scaled to exactly this height when they fit.
    pub min_line_height: f32,
    /// Space placed after every line, in the container's length unit
    pub line_spacing: f32,
}

impl Default for PosterConfig {
    fn default() -> Self {
        Self {
            max_line_height: DEFAULT_MAX_LINE_HEIGHT,
            min_line_height: DEFAULT_MIN_LINE_HEIGHT,
            line_spacing: DEFAULT_LINE_SPACING,
        }
    }
}

impl PosterConfig {
    /// Merge caller options over the defaults
    pub fn from_options(options: &PosterOptions) -> Self {
        let defaults = Self::default();
        Self {
            max_line_height: options.max_line_height.unwrap_or(defaults.max_line_height),
            min_line_height: options.min_line_height.unwrap_or(defaults.min_line_height),
            line_spacing: options.line_spacing.unwrap_or(defaults.line_spacing),
        }
    }

    /// Merge and validate in one step, for options that came from user input
    pub fn try_from_options(options: &PosterOptions) -> Result<Self> {
        let config = Self::from_options(options);
        config.validate()?;
        Ok(config)
    }

    pub fn with_max_line_height(mut self, ratio: f32) -> Self {
        self.max_line_height = ratio;
        self
    }

    pub fn with_min_line_height(mut self, ratio: f32) -> Self {
        self.min_line_height = ratio;
        self
    }

    pub fn with_line_spacing(mut self, spacing: f32) -> Self {
        self.line_spacing = spacing;
        self
    }

    /// Check that both ratios lie in (0, 1] and spacing is non-negative.
    ///
    /// Layout never calls this and uses whatever values it is given; only a
    /// negative scale factor is clamped, to 0.
    pub fn validate(&self) -> Result<()> {
        check_ratio("maxLineHeight", self.max_line_height)?;
        check_ratio("minLineHeight", self.min_line_height)?;

        if !self.line_spacing.is_finite() || self.line_spacing < 0.0 {
            return Err(LayoutError::InvalidOption {
                name: "lineSpacing",
                value: self.line_spacing,
                reason: "must be a non-negative length",
            });
        }

        if self.min_line_height > self.max_line_height {
            tracing::warn!(
                min_line_height = self.min_line_height,
                max_line_height = self.max_line_height,
                "minimum line height exceeds maximum; normal lines will pack below their cap"
            );
        }

        Ok(())
    }
}

fn check_ratio(name: &'static str, value: f32) -> Result<()> {
    if value.is_finite() && value > 0.0 && value <= 1.0 {
        Ok(())
    } else {
        Err(LayoutError::InvalidOption {
            name,
            value,
            reason: "must be a fraction of the container height in (0, 1]",
        })
    }
}

/// Caller-supplied overrides; missing keys fall back to the defaults
///
/// Unknown keys are ignored when deserializing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PosterOptions {
    #[serde(default, alias = "max_line_height", skip_serializing_if = "Option::is_none")]
    pub max_line_height: Option<f32>,
    #[serde(default, alias = "min_line_height", skip_serializing_if = "Option::is_none")]
    pub min_line_height: Option<f32>,
    #[serde(default, alias = "line_spacing", skip_serializing_if = "Option::is_none")]
    pub line_spacing: Option<f32>,
}

impl PosterOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse options from a JSON object
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Parse options from JSON, falling back to defaults on malformed input
    pub fn from_json_or_default(json: &str) -> Self {
        match Self::from_json(json) {
            Ok(options) => options,
            Err(e) => {
                tracing::warn!("Failed to parse poster options, using defaults: {}", e);
                Self::default()
            }
        }
    }

    pub fn max_line_height(mut self, ratio: f32) -> Self {
        self.max_line_height = Some(ratio);
        self
    }

    pub fn min_line_height(mut self, ratio: f32) -> Self {
        self.min_line_height = Some(ratio);
        self
    }

    pub fn line_spacing(mut self, spacing: f32) -> Self {
        self.line_spacing = Some(spacing);
        self
    }
}

impl From<PosterOptions> for PosterConfig {
    fn from(options: PosterOptions) -> Self {
        Self::from_options(&options)
    }
}

impl From<Option<&PosterOptions>> for PosterConfig {
    fn from(options: Option<&PosterOptions>) -> Self {
        options.map(Self::from_options).unwrap_or_default()
    }
}
