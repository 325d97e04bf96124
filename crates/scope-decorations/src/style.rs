//! Border styles and styled segments

use serde::{Deserialize, Serialize};

use crate::range::GeneralizedRange;

/// Slot assigned to a range so that touching ranges never share a paint
/// handle. Only meaningful relative to the other ranges of the same pass.
pub type DifferentiationIndex = usize;

/// Rendering intent for one edge of a segment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BorderStyle {
    Solid,
    /// Dashed; the shape continues past this edge
    Porous,
    None,
}

impl BorderStyle {
    /// CSS `border-style` keyword
    pub fn as_css(&self) -> &'static str {
        match self {
            Self::Solid => "solid",
            Self::Porous => "dashed",
            Self::None => "none",
        }
    }

    pub fn is_solid(&self) -> bool {
        matches!(self, Self::Solid)
    }
}

/// Borders of a single segment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DecorationStyle {
    pub top: BorderStyle,
    pub right: BorderStyle,
    pub bottom: BorderStyle,
    pub left: BorderStyle,
    pub is_whole_line: bool,
}

impl DecorationStyle {
    /// Character style with the same border on every edge
    pub fn uniform(border: BorderStyle) -> Self {
        Self {
            top: border,
            right: border,
            bottom: border,
            left: border,
            is_whole_line: false,
        }
    }

    /// Whole-line band; whole-line decorations have no side borders
    pub fn whole_line(top: BorderStyle, bottom: BorderStyle) -> Self {
        Self {
            top,
            right: BorderStyle::None,
            bottom,
            left: BorderStyle::None,
            is_whole_line: true,
        }
    }

    /// Edges in CSS shorthand order: top, right, bottom, left
    pub fn edges(&self) -> [BorderStyle; 4] {
        [self.top, self.right, self.bottom, self.left]
    }
}

/// A style together with the differentiation slot it is painted in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DifferentiatedStyle {
    pub style: DecorationStyle,
    pub index: DifferentiationIndex,
}

impl DifferentiatedStyle {
    pub fn new(style: DecorationStyle, index: DifferentiationIndex) -> Self {
        Self { style, index }
    }

    /// Canonical string form, suitable for keying paint handles
    pub fn map_key(&self) -> String {
        let [top, right, bottom, left] = self.style.edges();
        format!(
            "{}:{}:{}:{}:{}:{}",
            top.as_css(),
            right.as_css(),
            bottom.as_css(),
            left.as_css(),
            self.style.is_whole_line,
            self.index,
        )
    }
}

/// A range that has been assigned a differentiation index
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DifferentiatedRange {
    pub range: GeneralizedRange,
    pub index: DifferentiationIndex,
}

/// One rectangle (or whole-line band) drawn with a single style.
///
/// Character segments always cover a single line; line segments may cover
/// several whole lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Segment {
    pub range: GeneralizedRange,
    pub style: DecorationStyle,
}

impl Segment {
    pub fn new(range: impl Into<GeneralizedRange>, style: DecorationStyle) -> Self {
        Self {
            range: range.into(),
            style,
        }
    }
}

/// A segment tagged with the index of the range it was cut from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DifferentiatedSegment {
    pub segment: Segment,
    pub index: DifferentiationIndex,
}

impl DifferentiatedSegment {
    pub fn differentiated_style(&self) -> DifferentiatedStyle {
        DifferentiatedStyle::new(self.segment.style, self.index)
    }
}
