use crate::parse::task_parser::parse_task_line;

/// Partition lines into task blocks (a task plus everything nested under it).
///
/// The first task seen sets the baseline indentation. A task at or below the
/// baseline opens a new block and becomes the new baseline; a deeper task or
/// any plain line joins the open block. Plain lines before the first task
/// form their own leading block.
///
/// A task indented less than the baseline is treated like a sibling: it
/// opens a new block and resets the baseline rather than popping back to an
/// enclosing level.
///
/// Concatenating the returned blocks gives back `lines` unchanged.
pub fn group_task_lines(lines: Vec<String>) -> Vec<Vec<String>> {
    let mut groups = Vec::new();
    let mut current: Vec<String> = Vec::new();
    let mut base_indent: Option<usize> = None;

    for line in lines {
        if let Some(task) = parse_task_line(&line)
            && base_indent.is_none_or(|base| task.indent <= base)
        {
            base_indent = Some(task.indent);
            if !current.is_empty() {
                groups.push(std::mem::take(&mut current));
            }
        }
        current.push(line);
    }

    if !current.is_empty() {
        groups.push(current);
    }

    groups
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn lines(src: &[&str]) -> Vec<String> {
        src.iter().map(|s| s.to_string()).collect()
    }

    fn groups(src: &[&[&str]]) -> Vec<Vec<String>> {
        src.iter().map(|g| lines(g)).collect()
    }

    #[test]
    fn groups_tasks_with_nested_children() {
        let input = lines(&[
            "- [ ] Parent 1",
            "  - [ ] Child 1.1",
            "  - [ ] Child 1.2",
            "- [ ] Parent 2",
            "  - [ ] Child 2.1",
        ]);
        assert_eq!(
            group_task_lines(input),
            groups(&[
                &["- [ ] Parent 1", "  - [ ] Child 1.1", "  - [ ] Child 1.2"],
                &["- [ ] Parent 2", "  - [ ] Child 2.1"],
            ])
        );
    }

    #[test]
    fn description_lines_stay_with_their_task() {
        let input = lines(&[
            "- [ ] Task B",
            "  Description for B",
            "  More details",
            "- [ ] Task A",
            "  Description for A",
        ]);
        assert_eq!(
            group_task_lines(input),
            groups(&[
                &["- [ ] Task B", "  Description for B", "  More details"],
                &["- [ ] Task A", "  Description for A"],
            ])
        );
    }

    #[test]
    fn leading_plain_lines_form_their_own_group() {
        let input = lines(&["Some heading", "", "- [ ] First", "- [x] Second"]);
        assert_eq!(
            group_task_lines(input),
            groups(&[&["Some heading", ""], &["- [ ] First"], &["- [x] Second"]])
        );
    }

    #[test]
    fn plain_lines_only_make_one_group() {
        let input = lines(&["alpha", "beta", "gamma"]);
        assert_eq!(group_task_lines(input), groups(&[&["alpha", "beta", "gamma"]]));
    }

    #[test]
    fn empty_input_has_no_groups() {
        assert!(group_task_lines(Vec::new()).is_empty());
    }

    #[test]
    fn baseline_comes_from_first_task_not_zero() {
        let input = lines(&[
            "    - [ ] AlphaB",
            "        - [ ] BetaB",
            "        - [ ] BetaA",
            "    - [ ] AlphaA",
        ]);
        assert_eq!(
            group_task_lines(input),
            groups(&[
                &["    - [ ] AlphaB", "        - [ ] BetaB", "        - [ ] BetaA"],
                &["    - [ ] AlphaA"],
            ])
        );
    }

    #[test]
    fn shallower_task_resets_baseline() {
        let input = lines(&[
            "  - [ ] Indented first",
            "- [ ] Shallower",
            "  - [ ] Now a child",
            "- [ ] Sibling",
        ]);
        assert_eq!(
            group_task_lines(input),
            groups(&[
                &["  - [ ] Indented first"],
                &["- [ ] Shallower", "  - [ ] Now a child"],
                &["- [ ] Sibling"],
            ])
        );
    }

    #[test]
    fn deeply_nested_children_stay_in_order() {
        let input = lines(&[
            "- [ ] Root",
            "  - [ ] Child",
            "    - [x] Grandchild",
            "  - [ ] Second child",
            "- [ ] Next root",
        ]);
        let result = group_task_lines(input);
        assert_eq!(result.len(), 2);
        assert_eq!(result[0].len(), 4);
        assert_eq!(result[0][2], "    - [x] Grandchild");
    }
}
