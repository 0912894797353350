use crate::ops::compare::Comparator;
use crate::ops::sort_ops::GroupFn;
use crate::parse::group_task_lines;

/// Prefix shared by every command ID
const ID_PREFIX: &str = "sorty-sort-";

/// A named binding of a comparator (and optionally the task grouper) to
/// the selection pipeline
#[derive(Debug, Clone, Copy)]
pub struct SortCommand {
    pub id: &'static str,
    pub name: &'static str,
    pub comparator: Comparator,
    /// Move task blocks instead of single lines
    pub group: Option<GroupFn>,
    pub enabled_by_default: bool,
}

impl SortCommand {
    /// ID without the common prefix (`lines-numeric`, `tasks`, ...)
    pub fn short_id(&self) -> &'static str {
        self.id.strip_prefix(ID_PREFIX).unwrap_or(self.id)
    }

    pub fn is_grouped(&self) -> bool {
        self.group.is_some()
    }
}

pub static SORT_COMMANDS: [SortCommand; 6] = [
    SortCommand {
        id: "sorty-sort-lines",
        name: "Sort Lines",
        comparator: Comparator::Alpha,
        group: None,
        enabled_by_default: true,
    },
    SortCommand {
        id: "sorty-sort-lines-reverse",
        name: "Sort Lines (Reverse)",
        comparator: Comparator::ReverseAlpha,
        group: None,
        enabled_by_default: true,
    },
    SortCommand {
        id: "sorty-sort-lines-numeric",
        name: "Sort Lines (Numeric)",
        comparator: Comparator::Numeric,
        group: None,
        enabled_by_default: true,
    },
    SortCommand {
        id: "sorty-sort-lines-numeric-reverse",
        name: "Sort Lines (Numeric Reverse)",
        comparator: Comparator::ReverseNumeric,
        group: None,
        enabled_by_default: true,
    },
    SortCommand {
        id: "sorty-sort-tasks",
        name: "Sort Tasks",
        comparator: Comparator::Tasks,
        group: Some(group_task_lines),
        enabled_by_default: true,
    },
    SortCommand {
        id: "sorty-sort-tasks-by-completion",
        name: "Sort Tasks (By Completion)",
        comparator: Comparator::TasksByCompletion,
        group: Some(group_task_lines),
        enabled_by_default: true,
    },
];

/// Look up a command by full ID (`sorty-sort-tasks`) or short ID (`tasks`)
pub fn find_command(id: &str) -> Option<&'static SortCommand> {
    SORT_COMMANDS
        .iter()
        .find(|cmd| cmd.id == id || cmd.short_id() == id)
}
