//! Line lengths, the only thing the segmenters need from the text buffer

/// Source of line lengths, in characters
pub trait LineLengths {
    /// Length of `line`. Lines past the end of the document have length 0.
    fn line_length(&self, line: u32) -> u32;
}

impl LineLengths for [u32] {
    fn line_length(&self, line: u32) -> u32 {
        self.get(line as usize).copied().unwrap_or(0)
    }
}

impl LineLengths for Vec<u32> {
    fn line_length(&self, line: u32) -> u32 {
        self.as_slice().line_length(line)
    }
}

impl<T: LineLengths + ?Sized> LineLengths for &T {
    fn line_length(&self, line: u32) -> u32 {
        (**self).line_length(line)
    }
}

/// Line lengths measured from a text snapshot
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextLineLengths {
    lengths: Vec<u32>,
}

impl TextLineLengths {
    pub fn new(text: &str) -> Self {
        let lengths = text
            .split('\n')
            .map(|line| line.strip_suffix('\r').unwrap_or(line).chars().count() as u32)
            .collect();
        Self { lengths }
    }

    pub fn line_count(&self) -> usize {
        self.lengths.len()
    }
}

impl LineLengths for TextLineLengths {
    fn line_length(&self, line: u32) -> u32 {
        self.lengths.line_length(line)
    }
}
