//! Convert a poster layout to render items

use crate::{LineRender, PosterRender, Rect, RenderError, RenderItem, Result};
use poster_layout::PosterLayout;

/// Converts poster layouts into absolute-positioned render items
#[derive(Debug, Clone, Copy)]
pub struct RenderConverter {
    /// Emit a container item ahead of the lines
    pub include_container: bool,
}

impl RenderConverter {
    pub fn new() -> Self {
        Self {
            include_container: true,
        }
    }

    /// Convert without the container item
    pub fn lines_only() -> Self {
        Self {
            include_container: false,
        }
    }

    /// Convert a layout to a render model.
    ///
    /// Line tops are made absolute by adding the block offset. Layouts carrying
    /// non-finite geometry are rejected.
    pub fn convert(&self, layout: &PosterLayout) -> Result<PosterRender> {
        let mut render = PosterRender::new(layout.container.width as f64, layout.container.height as f64);

        if !layout.block_top.is_finite() || !layout.total_height.is_finite() {
            return Err(RenderError::InvalidLayout(format!(
                "block offset {} / height {} is not finite",
                layout.block_top, layout.total_height
            )));
        }

        if self.include_container {
            render.add_item(RenderItem::Container {
                bounds: Rect::new(
                    0.0,
                    layout.block_top as f64,
                    layout.container.width as f64,
                    layout.total_height as f64,
                ),
            });
        }

        for line in &layout.lines {
            let bounds = layout.absolute_bounds(line);
            if !bounds.is_finite() || !line.scale.is_finite() {
                return Err(RenderError::InvalidLayout(format!(
                    "line {:?} has non-finite geometry",
                    line.text
                )));
            }

            render.add_item(RenderItem::Line(LineRender {
                text: line.text.clone(),
                bounds: Rect::from(bounds),
                scale: line.scale as f64,
                small_text: line.small_text,
            }));
        }

        Ok(render)
    }
}

impl Default for RenderConverter {
    fn default() -> Self {
        Self::new()
    }
}
