//! # Scope Decorations
//!
//! Bordered highlight geometry for scope ranges that may be nested,
//! adjacent, overlapping or span several lines.
//!
//! The pipeline is a pure recompute over a complete snapshot of ranges:
//!
//! 1. [`differentiate`] gives every range an index so touching ranges land
//!    in different paint slots;
//! 2. each range is cut into bordered [`Segment`]s, by
//!    [`segment_line_range`] or [`segment_character_range`];
//! 3. [`group_segments`] buckets segments into [`RenderBatch`]es, one per
//!    `(style, index)`, ready for a renderer.

pub mod character_range;
pub mod differentiate;
pub mod group;
pub mod line_range;
pub mod lines;
pub mod range;
pub mod style;

pub use character_range::{segment_character_range, segment_line_spans, split_into_lines};
pub use differentiate::{compare_by_start, differentiate};
pub use group::{group_segments, RenderBatch};
pub use line_range::segment_line_range;
pub use lines::{LineLengths, TextLineLengths};
pub use range::{CharacterRange, GeneralizedRange, LineRange, Position};
pub use style::{
    BorderStyle, DecorationStyle, DifferentiatedRange, DifferentiatedSegment, DifferentiatedStyle,
    DifferentiationIndex, Segment,
};

/// Cuts one range into bordered segments
pub fn segment_range<L: LineLengths + ?Sized>(range: GeneralizedRange, lines: &L) -> Vec<Segment> {
    match range {
        GeneralizedRange::Line(range) => segment_line_range(range),
        GeneralizedRange::Character(range) => segment_character_range(range, lines),
    }
}

/// Differentiates `ranges` and cuts each into segments tagged with its index
pub fn generate_decorations<L: LineLengths + ?Sized>(
    ranges: &[GeneralizedRange],
    lines: &L,
) -> Vec<DifferentiatedSegment> {
    differentiate(ranges)
        .into_iter()
        .flat_map(|DifferentiatedRange { range, index }| {
            segment_range(range, lines)
                .into_iter()
                .map(move |segment| DifferentiatedSegment { segment, index })
        })
        .collect()
}

/// Runs the whole pipeline, from raw ranges to paint batches
pub fn generate_batches<L: LineLengths + ?Sized>(
    ranges: &[GeneralizedRange],
    lines: &L,
) -> Vec<RenderBatch> {
    if ranges.is_empty() {
        return Vec::new();
    }

    let batches = group_segments(generate_decorations(ranges, lines));

    tracing::debug!(
        ranges = ranges.len(),
        batches = batches.len(),
        segments = batches.iter().map(|b| b.segments.len()).sum::<usize>(),
        "generated decoration batches"
    );

    batches
}
