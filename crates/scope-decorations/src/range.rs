//! Generalized ranges
//!
//! A range is either character-granular (line + column endpoints) or
//! line-granular (whole lines, extending to the edge of the editor).

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

/// A position in a document (line, character)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Position {
    pub line: u32,
    pub character: u32,
}

impl Position {
    pub fn new(line: u32, character: u32) -> Self {
        Self { line, character }
    }

    pub fn zero() -> Self {
        Self { line: 0, character: 0 }
    }
}

impl PartialOrd for Position {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Position {
    fn cmp(&self, other: &Self) -> Ordering {
        match self.line.cmp(&other.line) {
            Ordering::Equal => self.character.cmp(&other.character),
            ord => ord,
        }
    }
}

/// A range between characters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CharacterRange {
    pub start: Position,
    pub end: Position,
}

impl CharacterRange {
    pub fn new(start: Position, end: Position) -> Self {
        Self { start, end }
    }

    /// Shorthand for `(start_line, start_col)..(end_line, end_col)`
    pub fn from_coords(start_line: u32, start_col: u32, end_line: u32, end_col: u32) -> Self {
        Self {
            start: Position::new(start_line, start_col),
            end: Position::new(end_line, end_col),
        }
    }

    /// Range on a single line
    pub fn on_line(line: u32, start_col: u32, end_col: u32) -> Self {
        Self::from_coords(line, start_col, line, end_col)
    }

    pub fn is_single_line(&self) -> bool {
        self.start.line == self.end.line
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Number of lines covered
    pub fn line_count(&self) -> u32 {
        self.end.line - self.start.line + 1
    }
}

/// A range of whole lines
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LineRange {
    pub start: u32,
    /// Last line, inclusive
    pub end: u32,
}

impl LineRange {
    pub fn new(start: u32, end: u32) -> Self {
        Self { start, end }
    }

    pub fn single(line: u32) -> Self {
        Self { start: line, end: line }
    }

    /// Number of lines covered
    pub fn line_count(&self) -> u32 {
        self.end - self.start + 1
    }

    pub fn contains_line(&self, line: u32) -> bool {
        line >= self.start && line <= self.end
    }
}

/// A range of characters or of whole lines
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum GeneralizedRange {
    Character(CharacterRange),
    Line(LineRange),
}

impl GeneralizedRange {
    pub fn character(start_line: u32, start_col: u32, end_line: u32, end_col: u32) -> Self {
        Self::Character(CharacterRange::from_coords(start_line, start_col, end_line, end_col))
    }

    pub fn line(start: u32, end: u32) -> Self {
        Self::Line(LineRange::new(start, end))
    }

    pub fn is_line(&self) -> bool {
        matches!(self, Self::Line(_))
    }

    /// First and last line covered, inclusive
    pub fn line_span(&self) -> (u32, u32) {
        match self {
            Self::Character(range) => (range.start.line, range.end.line),
            Self::Line(range) => (range.start, range.end),
        }
    }

    pub fn is_single_line(&self) -> bool {
        let (start, end) = self.line_span();
        start == end
    }

    /// Whether the two ranges intersect, even if the intersection is empty.
    ///
    /// A character range and a line range touch when they share at least
    /// one line.
    pub fn touches(&self, other: &GeneralizedRange) -> bool {
        match (self, other) {
            (Self::Character(a), Self::Character(b)) => a.start <= b.end && a.end >= b.start,
            _ => {
                let (a_start, a_end) = self.line_span();
                let (b_start, b_end) = other.line_span();
                a_start <= b_end && a_end >= b_start
            }
        }
    }

    /// Whether `self` starts before or at `other` and ends after or at it.
    ///
    /// A character range only contains a line range that lies strictly
    /// between its first and last line; otherwise the line range would
    /// visibly stick out to the edge of the editor.
    pub fn contains(&self, other: &GeneralizedRange) -> bool {
        match (self, other) {
            (Self::Character(a), Self::Character(b)) => a.start <= b.start && a.end >= b.end,
            (Self::Character(a), Self::Line(b)) => a.start.line < b.start && a.end.line > b.end,
            (Self::Line(a), Self::Line(b)) => a.start <= b.start && a.end >= b.end,
            (Self::Line(a), Self::Character(b)) => a.start <= b.start.line && a.end >= b.end.line,
        }
    }

    /// Containment that excludes the range itself
    pub fn strictly_contains(&self, other: &GeneralizedRange) -> bool {
        self != other && self.contains(other)
    }
}

impl From<CharacterRange> for GeneralizedRange {
    fn from(range: CharacterRange) -> Self {
        Self::Character(range)
    }
}

impl From<LineRange> for GeneralizedRange {
    fn from(range: LineRange) -> Self {
        Self::Line(range)
    }
}
