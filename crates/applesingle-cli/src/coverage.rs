//! Byte coverage tracking for `analyze`

use std::ops::Range;

/// Set of half-open byte ranges read from a file
#[derive(Debug, Clone, Default)]
pub struct Coverage {
    ranges: Vec<Range<usize>>,
}

impl Coverage {
    /// Empty coverage
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a read of `range`; empty ranges are ignored
    pub fn record(&mut self, range: Range<usize>) {
        if !range.is_empty() {
            self.ranges.push(range);
        }
    }

    /// Recorded ranges sorted and merged where they touch or overlap
    pub fn normalized(&self) -> Vec<Range<usize>> {
        normalize(&self.ranges)
    }

    /// Whether the recorded reads cover exactly `0..len`
    pub fn covers_all(&self, len: usize) -> bool {
        match self.normalized().as_slice() {
            [only] => *only == (0..len),
            [] => len == 0,
            _ => false,
        }
    }
}

/// Sort ranges and merge touching or overlapping neighbours
pub fn normalize(ranges: &[Range<usize>]) -> Vec<Range<usize>> {
    let mut sorted: Vec<Range<usize>> = ranges.iter().filter(|r| !r.is_empty()).cloned().collect();
    sorted.sort_by_key(|r| (r.start, r.end));

    let mut merged: Vec<Range<usize>> = Vec::with_capacity(sorted.len());
    for range in sorted {
        match merged.last_mut() {
            Some(last) if range.start <= last.end => last.end = last.end.max(range.end),
            _ => merged.push(range),
        }
    }
    merged
}

/// Render ranges as `[low..high)` lists
pub fn format_ranges(ranges: &[Range<usize>]) -> String {
    let parts: Vec<String> = ranges
        .iter()
        .map(|r| format!("[{}..{})", r.start, r.end))
        .collect();
    format!("[{}]", parts.join(", "))
}
