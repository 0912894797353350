use serde::{Deserialize, Serialize};

/// A cursor position in a buffer (0-indexed line, 0-indexed character column)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Position {
    pub line: usize,
    pub ch: usize,
}

impl Position {
    pub fn new(line: usize, ch: usize) -> Self {
        Position { line, ch }
    }
}

/// One selection. `anchor` is where the user started, `head` is where the
/// cursor ended up; either may come first in the buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    pub anchor: Position,
    pub head: Position,
}

impl Selection {
    pub fn new(anchor: Position, head: Position) -> Self {
        Selection { anchor, head }
    }

    /// Whichever end comes first in the buffer
    pub fn start(&self) -> Position {
        self.anchor.min(self.head)
    }

    pub fn end(&self) -> Position {
        self.anchor.max(self.head)
    }

    /// The vertical span this selection covers
    pub fn line_range(&self) -> LineRange {
        LineRange::from_selection(self.anchor.line, self.head.line)
    }
}

/// Inclusive, zero-based span of whole lines covered by one selection.
///
/// Always normalized: `from_line <= to_line`, regardless of which end the
/// selection was dragged from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct LineRange {
    from_line: usize,
    to_line: usize,
}

impl LineRange {
    /// Normalize an anchor/head pair of line numbers into a range
    pub fn from_selection(anchor: usize, head: usize) -> Self {
        LineRange {
            from_line: anchor.min(head),
            to_line: anchor.max(head),
        }
    }

    pub fn from_line(&self) -> usize {
        self.from_line
    }

    pub fn to_line(&self) -> usize {
        self.to_line
    }

    /// Number of lines covered (never zero)
    pub fn len(&self) -> usize {
        self.to_line - self.from_line + 1
    }
}

/// Direction for ordering ranges by their first line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    Ascending,
    Descending,
}

/// Anything that is anchored at a line range
pub trait HasLineRange {
    fn line_range(&self) -> LineRange;
}

impl HasLineRange for LineRange {
    fn line_range(&self) -> LineRange {
        *self
    }
}

/// Order items by `from_line`. The sort is stable, so items sharing a first
/// line keep their relative input order in ascending mode and come out
/// reversed in descending mode.
pub fn sort_ranges<T: HasLineRange>(mut items: Vec<T>, order: SortOrder) -> Vec<T> {
    items.sort_by_key(|item| item.line_range().from_line());
    if order == SortOrder::Descending {
        items.reverse();
    }
    items
}

/// Sort selections top to bottom and merge any that share a line.
///
/// Merged selections run forward from the earliest start to the latest end.
/// Selections on adjacent lines stay separate.
pub fn merge_selections(mut selections: Vec<Selection>) -> Vec<Selection> {
    selections.sort_by_key(|sel| (sel.start(), sel.end()));

    let mut merged: Vec<Selection> = Vec::with_capacity(selections.len());
    for sel in selections {
        match merged.last_mut() {
            Some(last) if sel.start().line <= last.end().line => {
                *last = Selection::new(last.start(), last.end().max(sel.end()));
            }
            _ => merged.push(sel),
        }
    }
    merged
}
