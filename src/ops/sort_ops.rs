use crate::model::range::{HasLineRange, LineRange, SortOrder, sort_ranges};
use crate::ops::compare::Comparator;

/// Splits lines into blocks that move as a unit. Concatenating the blocks
/// must give back the input.
pub type GroupFn = fn(Vec<String>) -> Vec<Vec<String>>;

/// Output of sorting one range: a permutation of its input lines
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortedResult {
    pub sorted_lines: Vec<String>,
    pub line_count: usize,
}

/// Lines read from one selection, tagged with where they came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RangeLines {
    pub range: LineRange,
    pub lines: Vec<String>,
}

impl HasLineRange for RangeLines {
    fn line_range(&self) -> LineRange {
        self.range
    }
}

/// Sort result for one range
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortedRange {
    pub range: LineRange,
    pub result: SortedResult,
}

/// Sort lines with `comparator`, optionally moving blocks from `group`
/// instead of single lines (blocks are ordered by their first line).
///
/// The sort is stable: lines or blocks that compare equal keep their input
/// order. `TasksByCompletion` and grouped sorting depend on this.
pub fn sort_lines(
    lines: Vec<String>,
    comparator: Comparator,
    group: Option<GroupFn>,
) -> SortedResult {
    let sorted_lines = match group {
        Some(group) => {
            let mut groups = group(lines);
            groups.sort_by(|a, b| comparator.compare(group_key(a), group_key(b)));
            groups.into_iter().flatten().collect::<Vec<_>>()
        }
        None => {
            let mut lines = lines;
            lines.sort_by(|a, b| comparator.compare(a, b));
            lines
        }
    };

    SortedResult {
        line_count: sorted_lines.len(),
        sorted_lines,
    }
}

fn group_key(group: &[String]) -> &str {
    group.first().map_or("", String::as_str)
}

/// Sort several independent ranges. Results come back bottom-to-top
/// (descending `from_line`), the order edits must be applied in.
pub fn sort_multiple_ranges(
    ranges: Vec<RangeLines>,
    comparator: Comparator,
    group: Option<GroupFn>,
) -> Vec<SortedRange> {
    sort_ranges(ranges, SortOrder::Descending)
        .into_iter()
        .map(|RangeLines { range, lines }| SortedRange {
            range,
            result: sort_lines(lines, comparator, group),
        })
        .collect()
}

/// A comparator bound to an optional grouping, usable as a line transformer
#[derive(Debug, Clone, Copy)]
pub struct Sorter {
    pub comparator: Comparator,
    pub group: Option<GroupFn>,
}

impl Sorter {
    pub fn new(comparator: Comparator, group: Option<GroupFn>) -> Self {
        Sorter { comparator, group }
    }

    /// Sort a copy of `lines`; the input is left untouched
    pub fn sort(&self, lines: &[String]) -> Vec<String> {
        sort_lines(lines.to_vec(), self.comparator, self.group).sorted_lines
    }
}
