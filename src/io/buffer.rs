use crate::model::range::{Position, Selection, merge_selections};
use crate::ops::transform::Editor;

/// Line terminator used when writing the buffer back out
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineEnding {
    #[default]
    Lf,
    CrLf,
}

impl LineEnding {
    pub fn as_str(self) -> &'static str {
        match self {
            LineEnding::Lf => "\n",
            LineEnding::CrLf => "\r\n",
        }
    }

    /// `\r\n` only if every terminator in `text` is `\r\n`. Mixed or
    /// unterminated text counts as `\n`, with any `\r` kept as line content.
    pub fn detect(text: &str) -> LineEnding {
        let mut terminators = text.match_indices('\n').peekable();
        let crlf = terminators.peek().is_some()
            && terminators.all(|(idx, _)| text[..idx].ends_with('\r'));
        if crlf { LineEnding::CrLf } else { LineEnding::Lf }
    }
}

/// In-memory document with multi-cursor selections.
///
/// Always holds at least one (possibly empty) line. A terminator at the very
/// end of the source is remembered separately, so it never shows up as an
/// extra empty line to sort.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextBuffer {
    lines: Vec<String>,
    line_ending: LineEnding,
    trailing_newline: bool,
    selections: Vec<Selection>,
}

impl TextBuffer {
    pub fn from_text(text: &str) -> Self {
        let line_ending = LineEnding::detect(text);
        let sep = line_ending.as_str();
        let (body, trailing_newline) = match text.strip_suffix(sep) {
            Some(body) => (body, true),
            None => (text, false),
        };
        let lines = body.split(sep).map(str::to_string).collect();

        TextBuffer {
            lines,
            line_ending,
            trailing_newline,
            selections: Vec::new(),
        }
    }

    /// Serialize back to text with the original line ending
    pub fn to_text(&self) -> String {
        let sep = self.line_ending.as_str();
        let mut out = self.lines.join(sep);
        if self.trailing_newline {
            out.push_str(sep);
        }
        out
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    pub fn line_ending(&self) -> LineEnding {
        self.line_ending
    }

    pub fn selections(&self) -> &[Selection] {
        &self.selections
    }

    /// A selection spanning every line
    pub fn select_all(&mut self) {
        let last = self.lines.len() - 1;
        let end = Position::new(last, self.lines[last].chars().count());
        self.selections = vec![Selection::new(Position::new(0, 0), end)];
    }

    /// Clamp a position to the buffer and convert it to a byte offset within its line
    fn clamp(&self, pos: Position) -> (usize, usize) {
        let line = pos.line.min(self.lines.len() - 1);
        let text = &self.lines[line];
        let byte = text
            .char_indices()
            .nth(pos.ch)
            .map_or(text.len(), |(idx, _)| idx);
        (line, byte)
    }
}

impl Default for TextBuffer {
    fn default() -> Self {
        TextBuffer::from_text("")
    }
}

impl Editor for TextBuffer {
    fn get_line(&self, line: usize) -> Option<&str> {
        self.lines.get(line).map(String::as_str)
    }

    fn replace_range(&mut self, text: &str, from: Position, to: Position) {
        let (from, to) = if (to.line, to.ch) < (from.line, from.ch) {
            (to, from)
        } else {
            (from, to)
        };
        let (from_line, from_byte) = self.clamp(from);
        let (to_line, to_byte) = self.clamp(to);

        let prefix = &self.lines[from_line][..from_byte];
        let suffix = &self.lines[to_line][to_byte..];
        let joined = format!("{}{}{}", prefix, text, suffix);
        let crlf = self.line_ending == LineEnding::CrLf;
        let replacement: Vec<String> = joined
            .split('\n')
            .map(|l| match l.strip_suffix('\r') {
                Some(stripped) if crlf => stripped.to_string(),
                _ => l.to_string(),
            })
            .collect();

        self.lines.splice(from_line..=to_line, replacement);
    }

    fn list_selections(&self) -> Vec<Selection> {
        self.selections.clone()
    }

    fn set_selections(&mut self, selections: Vec<Selection>) {
        self.selections = merge_selections(selections);
    }
}
