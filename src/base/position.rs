//! Line ranges for scanned entities.

use std::fmt;

/// A 1-based, inclusive range of source lines.
///
/// `end == 0` marks a range whose closing line has not been seen yet; it only
/// exists while a unit is being scanned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct LineRange {
    pub start: u32,
    pub end: u32,
}

impl LineRange {
    pub fn new(start: u32, end: u32) -> Self {
        Self { start, end }
    }

    /// A range covering a single line.
    pub fn line(line: u32) -> Self {
        Self::new(line, line)
    }

    pub fn is_closed(&self) -> bool {
        self.end != 0
    }

    /// The closing line, falling back to the start for an unclosed range.
    pub fn end_or_start(&self) -> u32 {
        if self.end == 0 { self.start } else { self.end }
    }

    /// Check if a line falls within this range
    pub fn contains(&self, line: u32) -> bool {
        self.start <= line && line <= self.end_or_start()
    }

    /// Number of lines between start and end (0 for a single-line range).
    pub fn width(&self) -> u32 {
        self.end_or_start().saturating_sub(self.start)
    }
}

impl fmt::Display for LineRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..={}", self.start, self.end_or_start())
    }
}
