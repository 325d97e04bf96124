//! Grouping segments into paint batches

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::style::{
    DecorationStyle, DifferentiatedSegment, DifferentiatedStyle, DifferentiationIndex, Segment,
};

/// All segments sharing one visual signature; painted with a single handle
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderBatch {
    pub style: DecorationStyle,
    pub index: DifferentiationIndex,
    pub segments: Vec<Segment>,
}

impl RenderBatch {
    pub fn differentiated_style(&self) -> DifferentiatedStyle {
        DifferentiatedStyle::new(self.style, self.index)
    }
}

/// Buckets segments by `(style, index)`.
///
/// Batches come out in the order their key is first seen, and segments keep
/// their relative order within a batch.
pub fn group_segments(
    segments: impl IntoIterator<Item = DifferentiatedSegment>,
) -> Vec<RenderBatch> {
    let mut batches: Vec<RenderBatch> = Vec::new();
    let mut positions: HashMap<DifferentiatedStyle, usize> = HashMap::new();

    for differentiated in segments {
        let key = differentiated.differentiated_style();
        let position = *positions.entry(key).or_insert_with(|| {
            batches.push(RenderBatch {
                style: key.style,
                index: key.index,
                segments: Vec::new(),
            });
            batches.len() - 1
        });
        batches[position].segments.push(differentiated.segment);
    }

    batches
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::range::GeneralizedRange;
    use crate::style::BorderStyle;

    fn segment(line: u32, style: DecorationStyle, index: DifferentiationIndex) -> DifferentiatedSegment {
        DifferentiatedSegment {
            segment: Segment::new(GeneralizedRange::character(line, 0, line, 1), style),
            index,
        }
    }

    #[test]
    fn test_empty() {
        assert!(group_segments(Vec::new()).is_empty());
    }

    #[test]
    fn test_groups_by_style_and_index() {
        let solid = DecorationStyle::uniform(BorderStyle::Solid);
        let porous = DecorationStyle::uniform(BorderStyle::Porous);

        let batches = group_segments(vec![
            segment(0, solid, 0),
            segment(1, porous, 0),
            segment(2, solid, 1),
            segment(3, solid, 0),
        ]);

        assert_eq!(batches.len(), 3);
        assert_eq!((batches[0].style, batches[0].index), (solid, 0));
        assert_eq!(batches[0].segments.len(), 2);
        assert_eq!(batches[0].segments[1].range, GeneralizedRange::character(3, 0, 3, 1));
        assert_eq!((batches[1].style, batches[1].index), (porous, 0));
        assert_eq!((batches[2].style, batches[2].index), (solid, 1));
    }

    #[test]
    fn test_whole_line_flag_is_part_of_key() {
        let band = DecorationStyle::whole_line(BorderStyle::None, BorderStyle::None);
        let boxed = DecorationStyle {
            is_whole_line: false,
            ..band
        };

        let batches = group_segments(vec![segment(0, band, 0), segment(1, boxed, 0)]);
        assert_eq!(batches.len(), 2);
    }
}
