pub mod task_grouper;
pub mod task_parser;

pub use task_grouper::group_task_lines;
pub use task_parser::{
    TaskLine, TaskMarker, indentation_level, is_completed_task, is_task, is_top_level_task,
    parse_task_line, task_label,
};
