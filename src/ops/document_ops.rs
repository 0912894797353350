use crate::io::buffer::TextBuffer;
use crate::model::command::SortCommand;
use crate::model::range::Selection;
use crate::ops::transform::{Editor, run_command};

/// Result of sorting a whole document through the selection pipeline
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortOutcome {
    pub text: String,
    /// New selections, top to bottom
    pub selections: Vec<Selection>,
    /// Selections that fell outside the document and were left alone
    pub skipped: usize,
}

/// Sort `text` with `command`. With no selections the whole document is
/// one selection.
pub fn sort_text(text: &str, command: &SortCommand, selections: &[Selection]) -> SortOutcome {
    let mut buffer = TextBuffer::from_text(text);
    if selections.is_empty() {
        buffer.select_all();
    } else {
        buffer.set_selections(selections.to_vec());
    }
    let requested = buffer.selections().len();

    let new_selections = run_command(&mut buffer, command);

    SortOutcome {
        text: buffer.to_text(),
        skipped: requested - new_selections.len(),
        selections: new_selections,
    }
}
