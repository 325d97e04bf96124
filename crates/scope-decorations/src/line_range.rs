//! Segments for whole-line ranges

use crate::range::LineRange;
use crate::style::{BorderStyle, DecorationStyle, Segment};

/// Splits a line range into whole-line segments: the first line carries the
/// top border, the last line the bottom border, and anything in between is
/// a single borderless band.
pub fn segment_line_range(range: LineRange) -> Vec<Segment> {
    if range.start == range.end {
        let style = DecorationStyle::whole_line(BorderStyle::Solid, BorderStyle::Solid);
        return vec![Segment::new(range, style)];
    }

    let mut segments = Vec::with_capacity(3);
    segments.push(Segment::new(
        LineRange::single(range.start),
        DecorationStyle::whole_line(BorderStyle::Solid, BorderStyle::None),
    ));

    if range.line_count() > 2 {
        segments.push(Segment::new(
            LineRange::new(range.start + 1, range.end - 1),
            DecorationStyle::whole_line(BorderStyle::None, BorderStyle::None),
        ));
    }

    segments.push(Segment::new(
        LineRange::single(range.end),
        DecorationStyle::whole_line(BorderStyle::None, BorderStyle::Solid),
    ));

    segments
}
