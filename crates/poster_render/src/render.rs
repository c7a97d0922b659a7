//! The `render` entry point

use crate::Surface;
use poster_layout::{PosterConfig, PosterLayout, PosterLayoutEngine, PosterOptions};

/// Typeset `text` onto `target`, replacing whatever it showed before.
///
/// Missing options fall back to the defaults. The surface measures every
/// candidate line itself, then receives the block offset and every line box
/// in order. The computed layout is returned as well, so hosts can inspect or
/// snapshot it without querying the surface.
pub fn render<S: Surface>(target: &mut S, text: &str, options: Option<&PosterOptions>) -> PosterLayout {
    let config = PosterConfig::from(options);
    render_with_config(target, text, &config)
}

/// [`render`] with an already resolved configuration
pub fn render_with_config<S: Surface>(target: &mut S, text: &str, config: &PosterConfig) -> PosterLayout {
    target.clear();

    let size = target.size();
    let layout = PosterLayoutEngine::new(&*target).layout(size, text, config);

    target.set_block_top(layout.block_top);
    for line in &layout.lines {
        target.append_line(line);
    }

    tracing::debug!(lines = layout.lines.len(), "poster rendered");
    layout
}
