use std::sync::LazyLock;

use regex::Regex;

/// `- [ ] label`, `- [x] label` or `- [X] label` at any indentation.
static TASK_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\s*)- \[([xX ])\] (.*)$").expect("task line regex is valid"));

/// Checkbox state of a task line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskMarker {
    Incomplete,
    Complete,
}

impl TaskMarker {
    /// Parse a checkbox character. Both `x` and `X` mean complete.
    pub fn from_checkbox_char(c: char) -> Option<TaskMarker> {
        match c {
            ' ' => Some(TaskMarker::Incomplete),
            'x' | 'X' => Some(TaskMarker::Complete),
            _ => None,
        }
    }
}

/// A line that matched the task grammar, borrowed from the source line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaskLine<'a> {
    /// Leading whitespace characters (tabs count as one)
    pub indent: usize,
    pub marker: TaskMarker,
    /// Everything after `- [?] `, possibly empty
    pub label: &'a str,
}

impl TaskLine<'_> {
    pub fn is_complete(&self) -> bool {
        self.marker == TaskMarker::Complete
    }
}

/// Parse a task line. Returns `None` for plain lines, including ones that
/// only partially look like a task (`- [ ]` with no trailing space,
/// `- [>] ...`, `* [ ] ...`).
pub fn parse_task_line(line: &str) -> Option<TaskLine<'_>> {
    let caps = TASK_LINE.captures(line)?;
    let indent = caps.get(1).map_or(0, |m| m.as_str().chars().count());
    let marker = caps
        .get(2)
        .and_then(|m| m.as_str().chars().next())
        .and_then(TaskMarker::from_checkbox_char)?;
    let label = caps.get(3).map_or("", |m| m.as_str());
    Some(TaskLine {
        indent,
        marker,
        label,
    })
}

/// Count leading whitespace characters. Tabs are not expanded.
pub fn indentation_level(line: &str) -> usize {
    line.chars().take_while(|c| c.is_whitespace()).count()
}

/// Check if a line is a task at any indentation
pub fn is_task(line: &str) -> bool {
    parse_task_line(line).is_some()
}

/// Check if a line is a task with no leading whitespace
pub fn is_top_level_task(line: &str) -> bool {
    parse_task_line(line).is_some_and(|t| t.indent == 0)
}

/// Check if a line is a checked task (`[x]` or `[X]`). Plain lines are
/// never complete.
pub fn is_completed_task(line: &str) -> bool {
    parse_task_line(line).is_some_and(|t| t.is_complete())
}

/// The text used to order a line as a task: the label for task lines,
/// the whole line otherwise.
pub fn task_label(line: &str) -> &str {
    match parse_task_line(line) {
        Some(task) => task.label,
        None => line,
    }
}
