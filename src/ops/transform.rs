use crate::model::command::SortCommand;
use crate::model::range::{LineRange, Position, Selection, SortOrder, merge_selections, sort_ranges};
use crate::ops::sort_ops::{RangeLines, Sorter};

/// The host editor, as seen by the range pipeline.
///
/// Text passed to [`Editor::replace_range`] uses `\n` between lines; the
/// host is responsible for its own on-disk line endings.
pub trait Editor {
    /// Text of one line without its terminator, or `None` past the end
    fn get_line(&self, line: usize) -> Option<&str>;

    /// Replace everything between two positions with `text`
    fn replace_range(&mut self, text: &str, from: Position, to: Position);

    fn list_selections(&self) -> Vec<Selection>;

    /// Replace all selections at once
    fn set_selections(&mut self, selections: Vec<Selection>);
}

/// Read every line of `range`. Returns `None` if any line is missing, so a
/// range that no longer matches the buffer is never partially edited.
pub fn line_range_content<E: Editor + ?Sized>(
    editor: &E,
    range: LineRange,
) -> Option<RangeLines> {
    let lines = (range.from_line()..=range.to_line())
        .map(|i| editor.get_line(i).map(str::to_string))
        .collect::<Option<Vec<_>>>()?;
    Some(RangeLines { range, lines })
}

/// Replace the whole lines of `range` with `lines`.
/// Returns false (and touches nothing) if the range's last line is gone.
pub fn replace_line_range<E: Editor + ?Sized>(
    editor: &mut E,
    range: LineRange,
    lines: &[String],
) -> bool {
    let Some(last) = editor.get_line(range.to_line()) else {
        return false;
    };
    let from = Position::new(range.from_line(), 0);
    let to = Position::new(range.to_line(), last.chars().count());
    editor.replace_range(&lines.join("\n"), from, to);
    true
}

/// A selection covering whole lines `from_line..=to_line`
pub fn line_selection<E: Editor + ?Sized>(
    editor: &E,
    from_line: usize,
    to_line: usize,
) -> Selection {
    let end_ch = editor.get_line(to_line).map_or(0, |l| l.chars().count());
    Selection::new(Position::new(from_line, 0), Position::new(to_line, end_ch))
}

/// Run `transformer` over the lines of every selection and write the results
/// back.
///
/// Selections that share a line are merged first, so every line is read and
/// written by exactly one range. Edits are applied bottom-to-top so an edit
/// never shifts the line numbers of a range that is still pending. The new
/// selections come back top to bottom and are also returned. Ranges that no
/// longer fit the buffer are skipped without an edit or a selection.
pub fn transform_line_selections<E, F>(editor: &mut E, transformer: F) -> Vec<Selection>
where
    E: Editor + ?Sized,
    F: Fn(&[String]) -> Vec<String>,
{
    let selections = editor.list_selections();
    if selections.is_empty() {
        return Vec::new();
    }

    let mut pending = Vec::with_capacity(selections.len());
    for selection in merge_selections(selections) {
        let range = selection.line_range();
        match line_range_content(&*editor, range) {
            Some(content) => {
                let lines = transformer(&content.lines);
                log::debug!(
                    "range {}..={}: {} line(s) transformed",
                    range.from_line(),
                    range.to_line(),
                    range.len()
                );
                pending.push(RangeLines { range, lines });
            }
            None => log::debug!(
                "range {}..={} is outside the buffer, skipping",
                range.from_line(),
                range.to_line()
            ),
        }
    }

    let mut new_selections = Vec::with_capacity(pending.len());
    for edit in sort_ranges(pending, SortOrder::Descending) {
        if !replace_line_range(editor, edit.range, &edit.lines) {
            log::debug!("range starting at {} went stale, skipping", edit.range.from_line());
            continue;
        }
        let from_line = edit.range.from_line();
        let to_line = from_line + edit.lines.len().saturating_sub(1);
        new_selections.push(line_selection(&*editor, from_line, to_line));
    }
    // Applied bottom-to-top; hand them back top-to-bottom
    new_selections.reverse();

    if !new_selections.is_empty() {
        editor.set_selections(new_selections.clone());
    }
    new_selections
}

/// Run one of the built-in sort commands over the editor's selections
pub fn run_command<E: Editor + ?Sized>(editor: &mut E, command: &SortCommand) -> Vec<Selection> {
    let sorter = Sorter::new(command.comparator, command.group);
    log::debug!("running {} ({})", command.id, command.comparator.name());
    transform_line_selections(editor, |lines| sorter.sort(lines))
}
