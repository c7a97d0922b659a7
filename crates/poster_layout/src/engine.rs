//! Poster layout engine
//!
//! Paragraphs are laid out in source order:
//! 1. Split the text into paragraphs and words
//! 2. Pack words greedily into lines against the minimum height ratio
//! 3. Scale each committed line (width fill, bounded by its height target)
//! 4. Center each line horizontally and stack it below the previous one
//! 5. Center the whole stack vertically

use crate::scaling::{size_factor, ScaleTarget};
use crate::{split_paragraphs, LinePacker, Paragraph, PlacedLine, PosterConfig, PosterLayout};
use poster_text::{Extent, TextMeasurer};

/// Lays out poster text against a measurement provider
///
/// The engine keeps no state between calls; every layout is rebuilt from
/// scratch.
pub struct PosterLayoutEngine<M> {
    measurer: M,
}

impl<M: TextMeasurer> PosterLayoutEngine<M> {
    pub fn new(measurer: M) -> Self {
        Self { measurer }
    }

    pub fn measurer(&self) -> &M {
        &self.measurer
    }

    pub fn into_measurer(self) -> M {
        self.measurer
    }

    /// Lay out `text` inside `container`
    pub fn layout(&self, container: Extent, text: &str, config: &PosterConfig) -> PosterLayout {
        let paragraphs = split_paragraphs(text);
        let _span = tracing::debug_span!(
            "poster_layout",
            width = container.width,
            height = container.height,
            paragraphs = paragraphs.len()
        )
        .entered();

        let mut stack = LineStack::new(container, config.line_spacing);
        for paragraph in &paragraphs {
            self.layout_paragraph(paragraph, container, config, &mut stack);
        }

        let layout = stack.finish();
        tracing::debug!(
            lines = layout.lines.len(),
            total_height = layout.total_height,
            block_top = layout.block_top,
            "poster layout complete"
        );
        layout
    }

    fn layout_paragraph(
        &self,
        paragraph: &Paragraph<'_>,
        container: Extent,
        config: &PosterConfig,
        stack: &mut LineStack,
    ) {
        let packer = LinePacker::new(&self.measurer, container, config);
        let target = ScaleTarget::for_paragraph(paragraph.small_text);

        let mut from = 0;
        while from < paragraph.word_count() {
            let packed = packer.pack_line(paragraph, from);
            let text = paragraph.join(packed.words.clone());
            let natural = self.measurer.measure(text);
            let scale = size_factor(natural, container, target, config);

            tracing::trace!(
                paragraph = paragraph.index,
                from = packed.words.start,
                to = packed.words.end,
                backtracked = packed.backtracked,
                scale,
                "line committed"
            );

            from = packed.words.end;
            stack.push(PlacedLine {
                text: text.to_string(),
                paragraph: paragraph.index,
                words: packed.words,
                small_text: paragraph.small_text,
                natural,
                scale,
                x: 0.0,
                y: 0.0,
            });
        }
    }
}

/// Running vertical stack of placed lines
struct LineStack {
    container: Extent,
    line_spacing: f32,
    last_height: f32,
    lines: Vec<PlacedLine>,
}

impl LineStack {
    fn new(container: Extent, line_spacing: f32) -> Self {
        Self {
            container,
            line_spacing,
            last_height: 0.0,
            lines: Vec::new(),
        }
    }

    /// Center the line horizontally and place it below the previous one
    fn push(&mut self, mut line: PlacedLine) {
        line.x = (self.container.width - line.scaled_width()) / 2.0;
        line.y = self.last_height;
        self.last_height += line.scaled_height() + self.line_spacing;
        self.lines.push(line);
    }

    fn finish(self) -> PosterLayout {
        PosterLayout {
            container: self.container,
            block_top: (self.container.height - self.last_height) / 2.0,
            total_height: self.last_height,
            lines: self.lines,
        }
    }
}
