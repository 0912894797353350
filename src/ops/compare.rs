use std::cmp::Ordering;

use serde::Serialize;
use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

use crate::parse::task_parser::{is_completed_task, task_label};

/// The fixed set of line orderings.
///
/// Every comparator is a pure function of its two arguments. Comparators
/// that report ties (`TasksByCompletion`, and any comparator applied to
/// groups) rely on the caller sorting stably.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Comparator {
    /// Dictionary order: case-insensitive first, lowercase before uppercase on ties
    Alpha,
    ReverseAlpha,
    /// Dictionary order with digit runs compared by value (`file2` < `file10`)
    Numeric,
    ReverseNumeric,
    /// Dictionary order of task labels, ignoring indentation and checkbox
    Tasks,
    /// Open tasks before checked tasks; everything else is a tie
    TasksByCompletion,
}

impl Comparator {
    pub const ALL: [Comparator; 6] = [
        Comparator::Alpha,
        Comparator::ReverseAlpha,
        Comparator::Numeric,
        Comparator::ReverseNumeric,
        Comparator::Tasks,
        Comparator::TasksByCompletion,
    ];

    pub fn compare(self, a: &str, b: &str) -> Ordering {
        match self {
            Comparator::Alpha => collate(a, b),
            Comparator::ReverseAlpha => collate(b, a),
            Comparator::Numeric => collate_numeric(a, b),
            Comparator::ReverseNumeric => collate_numeric(b, a),
            Comparator::Tasks => collate(task_label(a), task_label(b)),
            Comparator::TasksByCompletion => is_completed_task(a).cmp(&is_completed_task(b)),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Comparator::Alpha => "alpha",
            Comparator::ReverseAlpha => "reverseAlpha",
            Comparator::Numeric => "numeric",
            Comparator::ReverseNumeric => "reverseNumeric",
            Comparator::Tasks => "tasks",
            Comparator::TasksByCompletion => "tasksByCompletion",
        }
    }
}

// ---------------------------------------------------------------------------
// Collation
// ---------------------------------------------------------------------------

/// Compare two strings the way a reader expects a sorted list to look:
/// whitespace, then punctuation and symbols, then digits, then letters.
/// Letters compare by base letter first (`é` sorts with `e`), then by
/// accents, then by case with lowercase first.
pub fn collate(a: &str, b: &str) -> Ordering {
    compare_levels(a, b, false)
}

/// Like [`collate`], but runs of ASCII digits compare by numeric value.
pub fn collate_numeric(a: &str, b: &str) -> Ordering {
    compare_levels(a, b, true)
}

fn compare_levels(a: &str, b: &str, numeric: bool) -> Ordering {
    let (ka, kb) = (CollationKeys::new(a, numeric), CollationKeys::new(b, numeric));
    ka.primary
        .cmp(&kb.primary)
        .then_with(|| ka.accents.cmp(&kb.accents))
        .then_with(|| ka.case.cmp(&kb.case))
        .then_with(|| a.cmp(b))
}

/// Character class rank: whitespace, punctuation and symbols, digits, letters
fn class_rank(c: char) -> u8 {
    if c.is_whitespace() {
        0
    } else if c.is_ascii_digit() {
        2
    } else if c.is_alphanumeric() {
        3
    } else {
        1
    }
}

#[derive(Debug, PartialEq, Eq, PartialOrd, Ord)]
enum Unit {
    /// A case-folded base character
    Char(char),
    /// A digit run without leading zeros, ordered by length then digits
    Number(usize, String),
}

/// Sort keys of one string, compared level by level
struct CollationKeys {
    /// Collation units tagged with their class rank
    primary: Vec<(u8, Unit)>,
    /// Combining marks attached to each primary unit
    accents: Vec<Vec<char>>,
    /// Case of every cased base character
    case: Vec<bool>,
}

impl CollationKeys {
    /// Build keys from the canonical decomposition of `s`. In numeric mode
    /// every ASCII digit run becomes a single `Number` unit.
    fn new(s: &str, numeric: bool) -> Self {
        let mut keys = CollationKeys {
            primary: Vec::with_capacity(s.len()),
            accents: Vec::with_capacity(s.len()),
            case: Vec::new(),
        };

        let mut chars = s.nfd().peekable();
        while let Some(c) = chars.next() {
            if is_combining_mark(c)
                && let Some(marks) = keys.accents.last_mut()
            {
                marks.push(c);
                continue;
            }

            if numeric && c.is_ascii_digit() {
                let mut run = String::from(c);
                while let Some(&next) = chars.peek() {
                    if !next.is_ascii_digit() {
                        break;
                    }
                    run.push(next);
                    chars.next();
                }
                let digits = run.trim_start_matches('0').to_string();
                keys.primary.push((2, Unit::Number(digits.len(), digits)));
            } else {
                if c.is_lowercase() || c.is_uppercase() {
                    keys.case.push(c.is_uppercase());
                }
                let folded = c.to_lowercase().next().unwrap_or(c);
                keys.primary.push((class_rank(c), Unit::Char(folded)));
            }
            keys.accents.push(Vec::new());
        }
        keys
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sorted(input: &[&str], cmp: Comparator) -> Vec<String> {
        let mut v: Vec<String> = input.iter().map(|s| s.to_string()).collect();
        v.sort_by(|a, b| cmp.compare(a, b));
        v
    }

    #[test]
    fn alpha_sorts_alphabetically() {
        assert_eq!(
            sorted(&["zebra", "apple", "mango", "banana"], Comparator::Alpha),
            vec!["apple", "banana", "mango", "zebra"]
        );
    }

    #[test]
    fn alpha_empty_string_first() {
        assert_eq!(sorted(&["", "a", "b"], Comparator::Alpha), vec!["", "a", "b"]);
        assert_eq!(sorted(&["a", "b", ""], Comparator::ReverseAlpha), vec!["b", "a", ""]);
    }

    #[test]
    fn alpha_is_case_sensitive_lowercase_first() {
        assert_eq!(
            sorted(&["Zebra", "apple", "Apple", "zebra"], Comparator::Alpha),
            vec!["apple", "Apple", "zebra", "Zebra"]
        );
        assert_eq!(
            sorted(&["apple", "Apple", "zebra", "Zebra"], Comparator::ReverseAlpha),
            vec!["Zebra", "zebra", "Apple", "apple"]
        );
    }

    #[test]
    fn alpha_leading_spaces_sort_first() {
        assert_eq!(
            sorted(&["  indented", "apple", " single space", "zebra"], Comparator::Alpha),
            vec!["  indented", " single space", "apple", "zebra"]
        );
    }

    #[test]
    fn equal_inputs_compare_equal() {
        for cmp in Comparator::ALL {
            assert_eq!(cmp.compare("test", "test"), Ordering::Equal, "{}", cmp.name());
        }
    }

    #[test]
    fn reverse_variants_flip_sign() {
        let pairs = [("apple", "Apple"), ("file2", "file10"), ("", "x"), ("b", "a")];
        for (a, b) in pairs {
            assert_eq!(Comparator::ReverseAlpha.compare(a, b), Comparator::Alpha.compare(b, a));
            assert_eq!(
                Comparator::ReverseNumeric.compare(a, b),
                Comparator::Numeric.compare(b, a)
            );
        }
    }

    #[test]
    fn numeric_orders_digit_runs_by_value() {
        assert_eq!(
            sorted(&["file10.txt", "file2.txt", "file1.txt", "file20.txt"], Comparator::Numeric),
            vec!["file1.txt", "file2.txt", "file10.txt", "file20.txt"]
        );
        assert_eq!(
            sorted(&["item 10", "item 2", "item 1", "item 20"], Comparator::Numeric),
            vec!["item 1", "item 2", "item 10", "item 20"]
        );
        assert_eq!(
            sorted(&["100", "20", "3", "1"], Comparator::Numeric),
            vec!["1", "3", "20", "100"]
        );
    }

    #[test]
    fn numeric_without_digits_matches_alpha() {
        assert_eq!(
            sorted(&["zebra", "apple", "mango", "banana"], Comparator::Numeric),
            vec!["apple", "banana", "mango", "zebra"]
        );
    }

    #[test]
    fn reverse_numeric() {
        assert_eq!(
            sorted(
                &["file1.txt", "file2.txt", "file10.txt", "file20.txt"],
                Comparator::ReverseNumeric
            ),
            vec!["file20.txt", "file10.txt", "file2.txt", "file1.txt"]
        );
        assert_eq!(
            sorted(&["1", "3", "20", "100"], Comparator::ReverseNumeric),
            vec!["100", "20", "3", "1"]
        );
    }

    #[test]
    fn numeric_handles_huge_digit_runs() {
        let big = "n99999999999999999999999999999";
        let bigger = "n100000000000000000000000000000";
        assert_eq!(collate_numeric(big, bigger), Ordering::Less);
    }

    #[test]
    fn numeric_leading_zeros_still_total() {
        assert_eq!(collate_numeric("v007", "v7").reverse(), collate_numeric("v7", "v007"));
        assert_ne!(collate_numeric("v007", "v7"), Ordering::Equal);
        assert_eq!(collate_numeric("v007", "v8"), Ordering::Less);
    }

    #[test]
    fn tasks_compare_labels_only() {
        assert_eq!(
            sorted(&["- [x] Zebra", "- [ ] Mango", "  - [X] Apple"], Comparator::Tasks),
            vec!["  - [X] Apple", "- [ ] Mango", "- [x] Zebra"]
        );
    }

    #[test]
    fn tasks_fall_back_to_whole_line() {
        assert_eq!(Comparator::Tasks.compare("- [ ] beta", "alpha"), Ordering::Greater);
        assert_eq!(Comparator::Tasks.compare("- [ ] alpha", "beta"), Ordering::Less);
    }

    #[test]
    fn tasks_by_completion_puts_open_first() {
        let c = Comparator::TasksByCompletion;
        assert_eq!(c.compare("- [ ] open", "- [x] done"), Ordering::Less);
        assert_eq!(c.compare("- [X] done", "- [ ] open"), Ordering::Greater);
        assert_eq!(c.compare("- [x] a", "- [X] b"), Ordering::Equal);
        assert_eq!(c.compare("plain", "- [ ] open"), Ordering::Equal);
        assert_eq!(c.compare("plain", "- [x] done"), Ordering::Less);
    }

    #[test]
    fn tasks_by_completion_is_stable_under_std_sort() {
        assert_eq!(
            sorted(
                &["- [x] done 1", "- [ ] open 1", "- [X] done 2", "- [ ] open 2"],
                Comparator::TasksByCompletion
            ),
            vec!["- [ ] open 1", "- [ ] open 2", "- [x] done 1", "- [X] done 2"]
        );
    }

    #[test]
    fn class_ranks_order_space_punct_digit_letter() {
        assert_eq!(collate(" ", "-"), Ordering::Less);
        assert_eq!(collate("-", "1"), Ordering::Less);
        assert_eq!(collate("1", "a"), Ordering::Less);
        assert_eq!(collate("{", "a"), Ordering::Less);
    }

    #[test]
    fn accented_letters_sort_with_their_base_letter() {
        assert_eq!(
            sorted(&["zebra", "éclair", "eagle", "fig"], Comparator::Alpha),
            vec!["eagle", "éclair", "fig", "zebra"]
        );
        assert_eq!(
            sorted(&["Ökonom", "zebra", "apple", "olive"], Comparator::Numeric),
            vec!["apple", "Ökonom", "olive", "zebra"]
        );
    }

    #[test]
    fn accents_break_ties_before_case() {
        assert_eq!(
            sorted(&["éclair", "Eclair", "eclair"], Comparator::Alpha),
            vec!["eclair", "Eclair", "éclair"]
        );
    }

    #[test]
    fn precomposed_and_decomposed_accents_tie_on_all_levels_but_raw() {
        let precomposed = "caf\u{e9}";
        let decomposed = "cafe\u{301}";
        assert_ne!(collate(precomposed, decomposed), Ordering::Equal);
        assert_eq!(collate(precomposed, "cafe"), Ordering::Greater);
        assert_eq!(collate(decomposed, "cafe"), Ordering::Greater);
        assert_eq!(collate(precomposed, "cafz"), Ordering::Less);
    }

    #[test]
    fn tasks_order_accented_labels() {
        assert_eq!(
            sorted(&["- [ ] Zèbre", "- [x] Échelle", "- [ ] abricot"], Comparator::Tasks),
            vec!["- [ ] abricot", "- [x] Échelle", "- [ ] Zèbre"]
        );
    }
}
