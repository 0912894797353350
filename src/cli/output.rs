use serde::Serialize;

use crate::model::command::SortCommand;
use crate::model::config::Settings;
use crate::model::range::{Position, Selection};
use crate::ops::compare::Comparator;

// ---------------------------------------------------------------------------
// JSON output structs
// ---------------------------------------------------------------------------

#[derive(Serialize)]
pub struct CommandJson {
    pub id: String,
    pub short_id: String,
    pub name: String,
    pub comparator: Comparator,
    pub grouped: bool,
    pub enabled: bool,
}

/// A selection as the user sees it: 1-based lines, 0-based columns
#[derive(Serialize, Debug, PartialEq, Eq)]
pub struct SelectionJson {
    pub from_line: usize,
    pub to_line: usize,
    pub end_ch: usize,
}

#[derive(Serialize)]
pub struct SortReportJson {
    pub command: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
    pub selections: Vec<SelectionJson>,
    pub skipped: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

// ---------------------------------------------------------------------------
// Conversions
// ---------------------------------------------------------------------------

pub fn command_to_json(command: &SortCommand, settings: &Settings) -> CommandJson {
    CommandJson {
        id: command.id.to_string(),
        short_id: command.short_id().to_string(),
        name: command.name.to_string(),
        comparator: command.comparator,
        grouped: command.is_grouped(),
        enabled: settings.is_enabled(command),
    }
}

pub fn selection_to_json(selection: &Selection) -> SelectionJson {
    let range = selection.line_range();
    SelectionJson {
        from_line: range.from_line() + 1,
        to_line: range.to_line() + 1,
        end_ch: selection.head.ch,
    }
}

// ---------------------------------------------------------------------------
// Text formatting
// ---------------------------------------------------------------------------

/// One row of the `commands` listing
pub fn format_command_line(command: &SortCommand, enabled: bool) -> String {
    let mark = if enabled { 'x' } else { ' ' };
    format!("[{}] {:<24} {}", mark, command.short_id(), command.name)
}

/// Summary printed after sorting a file in place
pub fn format_sort_summary(
    command: &SortCommand,
    file: &str,
    applied: usize,
    skipped: usize,
) -> String {
    let mut summary = format!(
        "{}: sorted {} range{} in {}",
        command.name,
        applied,
        if applied == 1 { "" } else { "s" },
        file
    );
    if skipped > 0 {
        summary.push_str(&format!(" ({} outside the document, skipped)", skipped));
    }
    summary
}

/// Parse `ANCHOR[:HEAD]` with 1-based line numbers into a whole-line selection
pub fn parse_selection(s: &str) -> Result<Selection, String> {
    let parse_line = |part: &str| -> Result<usize, String> {
        match part.trim().parse::<usize>() {
            Ok(n) if n >= 1 => Ok(n - 1),
            _ => Err(format!(
                "invalid selection '{}' (expected ANCHOR[:HEAD] with lines starting at 1)",
                s
            )),
        }
    };

    let (anchor, head) = match s.split_once(':') {
        Some((a, h)) => (parse_line(a)?, parse_line(h)?),
        None => {
            let line = parse_line(s)?;
            (line, line)
        }
    };
    Ok(Selection::new(Position::new(anchor, 0), Position::new(head, 0)))
}
