//! Fancy range highlighter
//!
//! Paints a set of possibly nested or overlapping ranges with bordered
//! highlights, one paint handle per `(style, index)` batch.

use scope_decorations::{generate_batches, GeneralizedRange, LineLengths};
use scope_theme::RangeTypeColors;

use crate::render::{BorderAppearance, DecorationRenderOptions};
use crate::renderer::{DecorationRenderer, PaintRequest};

#[derive(Debug, Clone, PartialEq)]
pub struct FancyRangeHighlighter {
    layer: String,
    colors: RangeTypeColors,
    appearance: BorderAppearance,
}

impl FancyRangeHighlighter {
    pub fn new(layer: impl Into<String>, colors: RangeTypeColors, appearance: BorderAppearance) -> Self {
        Self {
            layer: layer.into(),
            colors,
            appearance,
        }
    }

    pub fn layer(&self) -> &str {
        &self.layer
    }

    pub fn colors(&self) -> &RangeTypeColors {
        &self.colors
    }

    /// Paint requests for `ranges`, lowest differentiation index first so
    /// nested ranges are painted on top of their containers
    pub fn paint_requests<L: LineLengths + ?Sized>(
        &self,
        lines: &L,
        ranges: &[GeneralizedRange],
    ) -> Vec<PaintRequest> {
        let mut batches = generate_batches(ranges, lines);
        batches.sort_by_key(|batch| batch.index);

        batches
            .into_iter()
            .map(|batch| PaintRequest {
                key: batch.differentiated_style().map_key(),
                index: batch.index,
                options: DecorationRenderOptions::new(&batch.style, &self.colors, &self.appearance),
                ranges: batch.segments.into_iter().map(|segment| segment.range).collect(),
            })
            .collect()
    }

    /// Replaces everything this highlighter painted with `ranges`
    pub fn set_ranges<R, L>(&self, renderer: &mut R, lines: &L, ranges: &[GeneralizedRange])
    where
        R: DecorationRenderer + ?Sized,
        L: LineLengths + ?Sized,
    {
        let requests = self.paint_requests(lines, ranges);

        tracing::debug!(
            layer = %self.layer,
            ranges = ranges.len(),
            requests = requests.len(),
            "set highlight ranges"
        );

        renderer.set_decorations(&self.layer, requests);
    }

    pub fn clear<R: DecorationRenderer + ?Sized>(&self, renderer: &mut R) {
        tracing::trace!(layer = %self.layer, "clear highlight ranges");
        renderer.set_decorations(&self.layer, Vec::new());
    }
}
